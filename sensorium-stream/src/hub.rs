// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The public surface: one place to reach every sensor stream and control.

use crate::availability::{AvailabilityCache, AvailabilityPolicy};
use crate::broadcast::SensorStream;
use crate::control::SensorControl;
use crate::typed::{MotionStream, PressureStream, TypedStream};
use parking_lot::Mutex;
use sensorium_core::{FromReading, Result, SensorType};
use sensorium_native::{LogLevel, SensorRegistry};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// The aggregate surface bundling all five sensor streams, availability
/// queries and imperative control.
///
/// Streams are constructed lazily, one per sensor type, and cached: every
/// handle returned for a type shares the same subscriber list and
/// activation state, so the single-activation invariant holds however the
/// stream is reached.
pub struct SensorHub {
    registry: Arc<SensorRegistry>,
    control: SensorControl,
    availability: AvailabilityCache,
    streams: Mutex<HashMap<SensorType, SensorStream>>,
}

impl SensorHub {
    /// Create a hub over `registry` with the default availability policy.
    #[must_use]
    pub fn new(registry: SensorRegistry) -> Self {
        Self::with_policy(registry, AvailabilityPolicy::default())
    }

    /// Create a hub with an explicit availability failure policy.
    #[must_use]
    pub fn with_policy(registry: SensorRegistry, policy: AvailabilityPolicy) -> Self {
        let registry = Arc::new(registry);
        Self {
            control: SensorControl::new(registry.clone()),
            availability: AvailabilityCache::new(policy),
            streams: Mutex::new(HashMap::new()),
            registry,
        }
    }

    /// Uniform lookup: the raw `Reading` stream for `sensor_type`.
    pub fn stream(&self, sensor_type: SensorType) -> Result<SensorStream> {
        let mut streams = self.streams.lock();
        if let Some(stream) = streams.get(&sensor_type) {
            return Ok(stream.clone());
        }

        let native = self.registry.get(sensor_type)?;
        let stream = SensorStream::new(sensor_type, native);
        streams.insert(sensor_type, stream.clone());
        Ok(stream)
    }

    fn typed<T: FromReading>(&self, sensor_type: SensorType) -> Result<TypedStream<T>> {
        Ok(TypedStream::new(self.stream(sensor_type)?))
    }

    /// The accelerometer stream.
    pub fn accelerometer(&self) -> Result<MotionStream> {
        self.typed(SensorType::Accelerometer)
    }

    /// The gyroscope stream.
    pub fn gyroscope(&self) -> Result<MotionStream> {
        self.typed(SensorType::Gyroscope)
    }

    /// The magnetometer stream.
    pub fn magnetometer(&self) -> Result<MotionStream> {
        self.typed(SensorType::Magnetometer)
    }

    /// The barometer stream.
    pub fn barometer(&self) -> Result<PressureStream> {
        self.typed(SensorType::Barometer)
    }

    /// The absolute rotation vector stream.
    pub fn absolute_rotation_vector(&self) -> Result<MotionStream> {
        self.typed(SensorType::AbsoluteRotationVector)
    }

    /// Whether the hardware for `sensor_type` exists on this device.
    ///
    /// Memoized: at most one native query per type for the process
    /// lifetime; concurrent callers share the in-flight query.
    pub async fn is_available(&self, sensor_type: SensorType) -> Result<bool> {
        self.availability.query(&self.registry, sensor_type)?.await
    }

    /// Set the sampling interval for `sensor_type`.
    ///
    /// See [`SensorControl::set_update_interval`] for the live-change
    /// caveat.
    pub fn set_update_interval_for_type(
        &self,
        sensor_type: SensorType,
        interval: Duration,
    ) -> Result<()> {
        self.control.set_update_interval(sensor_type, interval)
    }

    /// Set the native log verbosity for `sensor_type`.
    pub fn set_log_level_for_type(&self, sensor_type: SensorType, level: LogLevel) -> Result<()> {
        self.control.set_log_level(sensor_type, level)
    }

    /// The imperative control facade.
    #[must_use]
    pub fn control(&self) -> &SensorControl {
        &self.control
    }

    /// The capability table this hub was built over.
    #[must_use]
    pub fn registry(&self) -> &SensorRegistry {
        &self.registry
    }
}
