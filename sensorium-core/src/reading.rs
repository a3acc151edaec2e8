// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Reading payloads emitted by the native sensor channels.
//!
//! Payload shapes mirror the native bridge exactly: motion sensors emit an
//! axis triple plus a platform-supplied timestamp string, the barometer emits
//! a single pressure value and nothing else. The core never synthesizes or
//! injects fields into a reading.

use crate::error::{Result, SensorError};
use serde::{Deserialize, Serialize};

/// One data point from a motion sensor (accelerometer, gyroscope,
/// magnetometer, absolute rotation vector).
///
/// `timestamp` is an opaque native-supplied string; the core neither parses
/// nor generates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionReading {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub timestamp: String,
}

/// One data point from the barometer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressureReading {
    pub pressure: f64,
}

/// A reading from any sensor channel.
///
/// Untagged on the wire: the two payload shapes are disjoint, so a native
/// payload deserializes to the variant whose fields it carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reading {
    Motion(MotionReading),
    Pressure(PressureReading),
}

impl Reading {
    /// Build a motion reading.
    pub fn motion(x: f64, y: f64, z: f64, timestamp: impl Into<String>) -> Self {
        Self::Motion(MotionReading {
            x,
            y,
            z,
            timestamp: timestamp.into(),
        })
    }

    /// Build a pressure reading.
    #[must_use]
    pub fn pressure(pressure: f64) -> Self {
        Self::Pressure(PressureReading { pressure })
    }
}

impl From<MotionReading> for Reading {
    fn from(reading: MotionReading) -> Self {
        Self::Motion(reading)
    }
}

impl From<PressureReading> for Reading {
    fn from(reading: PressureReading) -> Self {
        Self::Pressure(reading)
    }
}

/// Conversion seam used by typed stream adapters to recover the concrete
/// payload shape of a channel.
///
/// A payload of the wrong shape for the channel is a native-layer defect and
/// converts to a [`SensorError::Delivery`] rather than being dropped
/// silently.
pub trait FromReading: Sized + Clone + Send + Sync + 'static {
    fn from_reading(reading: Reading) -> Result<Self>;
}

impl FromReading for MotionReading {
    fn from_reading(reading: Reading) -> Result<Self> {
        match reading {
            Reading::Motion(motion) => Ok(motion),
            Reading::Pressure(_) => Err(SensorError::delivery(
                "expected a motion payload, received a pressure payload",
            )),
        }
    }
}

impl FromReading for PressureReading {
    fn from_reading(reading: Reading) -> Result<Self> {
        match reading {
            Reading::Pressure(pressure) => Ok(pressure),
            Reading::Motion(_) => Err(SensorError::delivery(
                "expected a pressure payload, received a motion payload",
            )),
        }
    }
}

impl FromReading for Reading {
    fn from_reading(reading: Reading) -> Result<Self> {
        Ok(reading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressure_payload_carries_exactly_one_field() {
        let reading = Reading::pressure(1013.25);
        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(json, serde_json::json!({ "pressure": 1013.25 }));
    }

    #[test]
    fn motion_payload_round_trips_the_native_shape() {
        let json = serde_json::json!({ "x": 1.0, "y": 2.0, "z": 3.0, "timestamp": "t1" });
        let reading: Reading = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(reading, Reading::motion(1.0, 2.0, 3.0, "t1"));
        assert_eq!(serde_json::to_value(&reading).unwrap(), json);
    }

    #[test]
    fn typed_conversion_rejects_the_wrong_shape() {
        let err = MotionReading::from_reading(Reading::pressure(900.0)).unwrap_err();
        assert!(matches!(err, SensorError::Delivery { .. }));

        let motion = Reading::motion(0.1, 0.2, 0.3, "t2");
        assert!(PressureReading::from_reading(motion).is_err());
    }
}
