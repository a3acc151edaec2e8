// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Sensorium
//!
//! Reactive observable streams over native motion and environment sensors:
//! accelerometer, gyroscope, magnetometer, barometer and absolute rotation
//! vector, behind one uniform API.
//!
//! ## Overview
//!
//! The host platform supplies one [`NativeSensor`] capability per sensor
//! type, registered in a [`SensorRegistry`]. A [`SensorHub`] built over that
//! registry exposes each sensor as a cold, multicast stream: the hardware
//! starts when the first subscriber attaches and stops when the last one
//! detaches, and every subscriber observes the identical reading sequence
//! in native emission order.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use futures::StreamExt;
//! use sensorium_rx::{SensorHub, SensorRegistry, SensorType, StreamItem};
//! // Tests register fakes; a real host registers its platform capabilities.
//! use sensorium_test_utils::FakeSensor;
//!
//! #[tokio::main]
//! async fn main() -> sensorium_rx::Result<()> {
//!     let registry = SensorRegistry::builder()
//!         .register(SensorType::Gyroscope, FakeSensor::available())
//!         .build()?;
//!     let hub = SensorHub::new(registry);
//!
//!     let mut subscription = hub.gyroscope()?.subscribe()?;
//!     while let Some(item) = subscription.next().await {
//!         match item {
//!             StreamItem::Value(reading) => println!("{reading:?}"),
//!             StreamItem::Error(err) => eprintln!("stream failed: {err}"),
//!         }
//!     }
//!     Ok(())
//! }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

// Re-export core types
pub use sensorium_core::{
    FromReading, MotionReading, PressureReading, Reading, Result, SensorError, SensorType,
    StreamItem,
};

// Re-export the native seam
pub use sensorium_native::{EventStream, LogLevel, NativeSensor, SensorRegistry,
    SensorRegistryBuilder};

// Re-export the stream layer
pub use sensorium_stream::{
    AvailabilityCache, AvailabilityPolicy, MotionStream, PressureStream, SensorControl,
    SensorHub, SensorStream, SensorSubscription, SubscribeExt, TypedStream, TypedSubscription,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        LogLevel, MotionReading, PressureReading, Reading, SensorError, SensorHub,
        SensorRegistry, SensorType, StreamItem, SubscribeExt,
    };
}
