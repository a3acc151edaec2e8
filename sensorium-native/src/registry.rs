// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The native capability table.

use crate::capability::NativeSensor;
use sensorium_core::{Result, SensorError, SensorType};
use std::collections::HashMap;
use std::sync::Arc;

/// Maps each sensor type to its native control surface.
///
/// Built once at startup and injected into the components that need it, so
/// tests can substitute a table of fakes. Construction fails with
/// [`SensorError::NoSensorsAvailable`] when the platform exposes no
/// capabilities at all; lookups of an unregistered type fail with
/// [`SensorError::UnknownSensorType`].
pub struct SensorRegistry {
    sensors: HashMap<SensorType, Arc<dyn NativeSensor>>,
}

impl std::fmt::Debug for SensorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SensorRegistry")
            .field("registered", &self.sensors.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl SensorRegistry {
    /// Start building a registry.
    #[must_use]
    pub fn builder() -> SensorRegistryBuilder {
        SensorRegistryBuilder {
            sensors: HashMap::new(),
        }
    }

    /// Resolve the capability registered for `sensor_type`.
    pub fn get(&self, sensor_type: SensorType) -> Result<Arc<dyn NativeSensor>> {
        self.sensors
            .get(&sensor_type)
            .cloned()
            .ok_or_else(|| SensorError::unknown_sensor_type(sensor_type.as_str()))
    }

    /// `true` if a capability is registered for `sensor_type`.
    #[must_use]
    pub fn contains(&self, sensor_type: SensorType) -> bool {
        self.sensors.contains_key(&sensor_type)
    }

    /// The sensor types with a registered capability.
    pub fn registered(&self) -> impl Iterator<Item = SensorType> + '_ {
        self.sensors.keys().copied()
    }

    /// Number of registered capabilities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }
}

/// Builder for [`SensorRegistry`].
pub struct SensorRegistryBuilder {
    sensors: HashMap<SensorType, Arc<dyn NativeSensor>>,
}

impl SensorRegistryBuilder {
    /// Register the capability for `sensor_type`, replacing any previous
    /// registration for that type.
    #[must_use]
    pub fn register(
        mut self,
        sensor_type: SensorType,
        capability: impl NativeSensor + 'static,
    ) -> Self {
        self.sensors.insert(sensor_type, Arc::new(capability));
        self
    }

    /// Register an already-shared capability for `sensor_type`.
    #[must_use]
    pub fn register_arc(mut self, sensor_type: SensorType, capability: Arc<dyn NativeSensor>) -> Self {
        self.sensors.insert(sensor_type, capability);
        self
    }

    /// Validate and build the registry.
    ///
    /// Fails with [`SensorError::NoSensorsAvailable`] when nothing was
    /// registered: a platform without any sensor capability cannot use this
    /// module at all.
    pub fn build(self) -> Result<SensorRegistry> {
        if self.sensors.is_empty() {
            return Err(SensorError::NoSensorsAvailable);
        }
        Ok(SensorRegistry {
            sensors: self.sensors,
        })
    }
}
