// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the sensorium workspace.
//!
//! This module defines the root [`SensorError`] type shared by every crate in
//! the workspace, together with the [`Result`] alias used throughout.
//!
//! Two propagation channels exist:
//!
//! - Configuration and lookup failures (`UnknownSensorType`,
//!   `NoSensorsAvailable`, `Native`) are returned synchronously from the call
//!   that caused them.
//! - Runtime stream failures (`Delivery`) travel in-band as
//!   [`StreamItem::Error`](crate::StreamItem::Error) and are never thrown on
//!   the caller's stack.

/// Root error type for all sensorium operations.
///
/// Every variant carries its context as a plain string so the error stays
/// `Clone`: errors must flow through shared availability futures and be
/// broadcast to every subscriber of a failed stream.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SensorError {
    /// The caller named a sensor type with no registered native capability.
    ///
    /// This is a caller bug, never a transient condition; it is not retried.
    #[error("unknown sensor type: {requested}")]
    UnknownSensorType {
        /// The identifier the caller passed.
        requested: String,
    },

    /// The native layer exposed zero sensor capabilities at registry
    /// construction. The module is unusable on this platform.
    #[error("no native sensor capabilities available on this platform")]
    NoSensorsAvailable,

    /// The native event channel failed while a stream was active.
    ///
    /// Delivered to all current subscribers through their stream; the stream
    /// transitions back to idle and is not retried automatically.
    #[error("sensor stream delivery failed: {context}")]
    Delivery {
        /// Description of the channel failure.
        context: String,
    },

    /// A native control operation (start, stop, interval, log level,
    /// availability) failed. Propagated unchanged, no retry.
    #[error("native sensor operation failed: {context}")]
    Native {
        /// Description of the failed native call.
        context: String,
    },
}

impl SensorError {
    /// Create an `UnknownSensorType` error for the given identifier.
    pub fn unknown_sensor_type(requested: impl Into<String>) -> Self {
        Self::UnknownSensorType {
            requested: requested.into(),
        }
    }

    /// Create a `Delivery` error with the given context.
    pub fn delivery(context: impl Into<String>) -> Self {
        Self::Delivery {
            context: context.into(),
        }
    }

    /// Create a `Native` error with the given context.
    pub fn native(context: impl Into<String>) -> Self {
        Self::Native {
            context: context.into(),
        }
    }

    /// `true` for errors raised synchronously by lookups and configuration.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::UnknownSensorType { .. } | Self::NoSensorsAvailable
        )
    }
}

/// Specialized `Result` for sensorium operations.
pub type Result<T> = std::result::Result<T, SensorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_sensor_type_formats_requested_identifier() {
        let err = SensorError::unknown_sensor_type("altimeter");
        assert_eq!(err.to_string(), "unknown sensor type: altimeter");
        assert!(err.is_configuration());
    }

    #[test]
    fn delivery_errors_are_cloneable_and_comparable() {
        let err = SensorError::delivery("channel closed");
        assert_eq!(err.clone(), err);
        assert!(!err.is_configuration());
    }
}
