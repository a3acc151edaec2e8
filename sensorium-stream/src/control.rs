// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Thin imperative facade over the native capabilities.

use sensorium_core::{Result, SensorType};
use sensorium_native::{LogLevel, SensorRegistry};
use std::sync::Arc;
use std::time::Duration;

/// Imperative sensor control: resolves a sensor type to its native
/// capability and forwards the operation.
///
/// Resolution of an unregistered type fails with `UnknownSensorType`; every
/// other native failure propagates unchanged — no retry, no suppression.
/// Side effects land purely on the native sensor subsystem.
pub struct SensorControl {
    registry: Arc<SensorRegistry>,
}

impl SensorControl {
    /// Create a control facade over `registry`.
    #[must_use]
    pub fn new(registry: Arc<SensorRegistry>) -> Self {
        Self { registry }
    }

    /// Start hardware sampling for `sensor_type`.
    pub fn start(&self, sensor_type: SensorType) -> Result<()> {
        self.registry.get(sensor_type)?.start_updates()
    }

    /// Stop hardware sampling for `sensor_type`.
    pub fn stop(&self, sensor_type: SensorType) -> Result<()> {
        self.registry.get(sensor_type)?.stop_updates()
    }

    /// Set the sampling interval for `sensor_type`.
    ///
    /// Caveat: platforms typically capture the interval when the hardware
    /// stream starts, so this reliably affects the sampling rate only when
    /// called before the stream's next activation. Changing it while the
    /// stream is active is forwarded, but honoring it live is
    /// platform-defined best-effort.
    pub fn set_update_interval(&self, sensor_type: SensorType, interval: Duration) -> Result<()> {
        self.registry.get(sensor_type)?.set_update_interval(interval)
    }

    /// Set the native driver's log verbosity for `sensor_type`.
    pub fn set_log_level(&self, sensor_type: SensorType, level: LogLevel) -> Result<()> {
        self.registry.get(sensor_type)?.set_log_level(level)
    }
}
