// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Canned readings and registry builders.

use crate::fake_sensor::FakeSensor;
use sensorium_core::{MotionReading, PressureReading, SensorType};
use sensorium_native::SensorRegistry;
use std::collections::HashMap;

pub fn motion_alpha() -> MotionReading {
    MotionReading {
        x: 1.0,
        y: 2.0,
        z: 3.0,
        timestamp: "t1".into(),
    }
}

pub fn motion_beta() -> MotionReading {
    MotionReading {
        x: 4.0,
        y: 5.0,
        z: 6.0,
        timestamp: "t2".into(),
    }
}

pub fn motion_gamma() -> MotionReading {
    MotionReading {
        x: 7.0,
        y: 8.0,
        z: 9.0,
        timestamp: "t3".into(),
    }
}

pub fn sea_level_pressure() -> PressureReading {
    PressureReading { pressure: 1013.25 }
}

/// A registry with one available fake registered for `sensor_type`, plus a
/// handle to the fake for assertions.
pub fn single_fake_registry(sensor_type: SensorType) -> (SensorRegistry, FakeSensor) {
    let fake = FakeSensor::available();
    let registry = SensorRegistry::builder()
        .register(sensor_type, fake.clone())
        .build()
        .expect("registry with one capability");
    (registry, fake)
}

/// A registry with an available fake for every sensor type, plus handles to
/// the fakes for assertions.
pub fn full_fake_registry() -> (SensorRegistry, HashMap<SensorType, FakeSensor>) {
    let mut fakes = HashMap::new();
    let mut builder = SensorRegistry::builder();
    for sensor_type in SensorType::ALL {
        let fake = FakeSensor::available();
        builder = builder.register(sensor_type, fake.clone());
        fakes.insert(sensor_type, fake);
    }
    let registry = builder.build().expect("registry with all capabilities");
    (registry, fakes)
}
