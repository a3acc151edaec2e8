// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod error;
pub mod reading;
pub mod sensor_type;
pub mod stream_item;
pub mod subject;
pub mod task;

pub use self::error::{Result, SensorError};
pub use self::reading::{FromReading, MotionReading, PressureReading, Reading};
pub use self::sensor_type::SensorType;
pub use self::stream_item::StreamItem;
pub use self::subject::{SensorSubject, SubjectStream, SubscriberId};
pub use self::task::SensorTask;
