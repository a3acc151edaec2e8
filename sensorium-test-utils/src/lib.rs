// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for the sensorium workspace.
//!
//! [`FakeSensor`] is a scriptable [`NativeSensor`](sensorium_native::NativeSensor):
//! tests push readings and failures through it, script its availability and
//! control outcomes, and assert on the exact sequence of native operations
//! it recorded.

pub mod fake_sensor;
pub mod helpers;
pub mod test_data;

pub use self::fake_sensor::{AvailabilityGate, FakeOp, FakeSensor};
pub use self::helpers::{assert_no_emission, expect_end, expect_error, expect_value};
pub use self::test_data::{
    full_fake_registry, motion_alpha, motion_beta, motion_gamma, sea_level_pressure,
    single_fake_registry,
};
