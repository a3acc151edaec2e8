// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use futures::Stream;
use sensorium_core::{Reading, Result, StreamItem};
use std::pin::Pin;
use std::time::Duration;

/// A listener on a capability's event-emission channel.
///
/// Items arrive in native emission order. The stream yields
/// [`StreamItem::Error`] when the native channel reports a failure, and ends
/// when the channel is torn down.
pub type EventStream = Pin<Box<dyn Stream<Item = StreamItem<Reading>> + Send + 'static>>;

/// Native log verbosity. Numeric on the platform side; `Off` is the
/// platform default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LogLevel {
    #[default]
    Off,
    Info,
    Verbose,
}

impl LogLevel {
    /// The numeric level passed across the native bridge.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            LogLevel::Off => 0,
            LogLevel::Info => 1,
            LogLevel::Verbose => 2,
        }
    }
}

/// The platform-specific control surface for one sensor type.
///
/// Implementations exist for the process lifetime and are registered as
/// `Arc<dyn NativeSensor>` in the [`SensorRegistry`](crate::SensorRegistry).
/// All failures are reported through [`Result`]; the core propagates them
/// unchanged and never retries.
#[async_trait]
pub trait NativeSensor: Send + Sync + std::fmt::Debug {
    /// Begin hardware sampling. Readings flow on the event channel until
    /// [`stop_updates`](NativeSensor::stop_updates).
    fn start_updates(&self) -> Result<()>;

    /// Stop hardware sampling.
    fn stop_updates(&self) -> Result<()>;

    /// Set the sampling interval.
    ///
    /// Reliably effective only before the next [`start_updates`]; platforms
    /// typically capture the interval when the hardware stream starts, so a
    /// change while sampling is best-effort.
    ///
    /// [`start_updates`]: NativeSensor::start_updates
    fn set_update_interval(&self, interval: Duration) -> Result<()>;

    /// Query whether the sensor hardware exists on this device.
    ///
    /// May be slow on first use; callers share the result through the
    /// availability cache rather than re-querying.
    async fn is_available(&self) -> Result<bool>;

    /// Set the native driver's log verbosity.
    fn set_log_level(&self, level: LogLevel) -> Result<()>;

    /// Open a new listener on the event-emission channel.
    ///
    /// The listener observes every payload emitted after this call returns,
    /// buffering until it is polled.
    fn events(&self) -> EventStream;
}
