// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The seam between the reactive core and the platform sensor drivers.
//!
//! Each sensor type is backed by one [`NativeSensor`] capability owned by
//! the host platform. The core never constructs or destroys a capability; it
//! only invokes it through the [`SensorRegistry`], which is built once at
//! startup and injected into every component that needs it.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod capability;
pub mod registry;

pub use self::capability::{EventStream, LogLevel, NativeSensor};
pub use self::registry::{SensorRegistry, SensorRegistryBuilder};
