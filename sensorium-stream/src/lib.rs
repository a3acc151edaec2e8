// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Reactive sensor streams over native capabilities.
//!
//! This crate is the bridging layer: it turns the imperative, lifecycle-based
//! native sensor control surface (start, stop, set-interval,
//! availability-check) into cold, lazily-activated, multicast reactive
//! streams with a reference-counted subscription lifecycle.
//!
//! The pieces:
//!
//! - [`SensorStream`] — per-type multicast stream; hardware runs iff the
//!   subscriber count is above zero.
//! - [`AvailabilityCache`] — memoized, shared availability queries.
//! - [`SensorControl`] — thin imperative facade over the registry.
//! - [`SensorHub`] — the public surface bundling all of the above.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod availability;
pub mod broadcast;
pub mod control;
pub mod hub;
pub mod subscribe;
pub mod typed;

pub use self::availability::{AvailabilityCache, AvailabilityPolicy, SharedAvailability};
pub use self::broadcast::{SensorStream, SensorSubscription};
pub use self::control::SensorControl;
pub use self::hub::SensorHub;
pub use self::subscribe::SubscribeExt;
pub use self::typed::{MotionStream, PressureStream, TypedStream, TypedSubscription};
