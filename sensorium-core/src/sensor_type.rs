// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The closed set of supported sensor type identifiers.

use crate::error::SensorError;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// One of the five supported physical sensor categories.
///
/// The string form matches the native capability keys and parses
/// case-insensitively: `"Accelerometer"` and `"ACCELEROMETER"` name the same
/// sensor as `"accelerometer"`. An identifier outside this set is a
/// programming error and fails with [`SensorError::UnknownSensorType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensorType {
    #[serde(rename = "accelerometer")]
    Accelerometer,
    #[serde(rename = "gyroscope")]
    Gyroscope,
    #[serde(rename = "magnetometer")]
    Magnetometer,
    #[serde(rename = "barometer")]
    Barometer,
    #[serde(rename = "absoluteRotationVector")]
    AbsoluteRotationVector,
}

impl SensorType {
    /// The enumerated set of valid sensor type identifiers.
    pub const ALL: [SensorType; 5] = [
        SensorType::Accelerometer,
        SensorType::Gyroscope,
        SensorType::Magnetometer,
        SensorType::Barometer,
        SensorType::AbsoluteRotationVector,
    ];

    /// Canonical key for this sensor type in the native capability table.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SensorType::Accelerometer => "accelerometer",
            SensorType::Gyroscope => "gyroscope",
            SensorType::Magnetometer => "magnetometer",
            SensorType::Barometer => "barometer",
            SensorType::AbsoluteRotationVector => "absoluteRotationVector",
        }
    }
}

impl fmt::Display for SensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SensorType {
    type Err = SensorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|sensor_type| sensor_type.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| SensorError::unknown_sensor_type(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_variants_parse_to_the_same_type() {
        for variant in ["accelerometer", "Accelerometer", "ACCELEROMETER"] {
            assert_eq!(
                variant.parse::<SensorType>().unwrap(),
                SensorType::Accelerometer
            );
        }
        assert_eq!(
            "absoluterotationvector".parse::<SensorType>().unwrap(),
            SensorType::AbsoluteRotationVector
        );
    }

    #[test]
    fn unrecognized_identifier_is_rejected() {
        let err = "altimeter".parse::<SensorType>().unwrap_err();
        assert_eq!(
            err,
            SensorError::UnknownSensorType {
                requested: "altimeter".into()
            }
        );
    }

    #[test]
    fn all_contains_each_type_exactly_once() {
        assert_eq!(SensorType::ALL.len(), 5);
        for sensor_type in SensorType::ALL {
            assert_eq!(
                sensor_type.as_str().parse::<SensorType>().unwrap(),
                sensor_type
            );
        }
    }
}
