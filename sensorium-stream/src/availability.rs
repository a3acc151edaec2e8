// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Memoized sensor availability queries.

use futures::future::{BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;
use sensorium_core::{Result, SensorType};
use sensorium_native::SensorRegistry;
use std::collections::HashMap;

/// The deferred availability result for one sensor type.
///
/// Clone and await from as many callers as needed; the underlying native
/// query runs at most once and the result is memoized.
pub type SharedAvailability = Shared<BoxFuture<'static, Result<bool>>>;

/// What to do when the native availability query itself fails.
///
/// The original platform behavior is ambiguous, so this is a policy rather
/// than a guess. Either way the outcome is cached: availability is assumed
/// stable for the process lifetime and the hardware is never re-queried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AvailabilityPolicy {
    /// Resolve to `false`: a sensor whose driver cannot answer is treated as
    /// absent, and the native failure stays out of application logic.
    #[default]
    ResolveUnavailable,
    /// Propagate the native error through the shared result.
    Propagate,
}

/// Memoizes the availability result per sensor type.
///
/// Guarantee: at most one native `is_available` query per type for the
/// process lifetime, regardless of call concurrency — concurrent callers
/// before resolution share the same in-flight query. Entries are never
/// invalidated; hardware hot-plug is out of scope.
pub struct AvailabilityCache {
    policy: AvailabilityPolicy,
    entries: Mutex<HashMap<SensorType, SharedAvailability>>,
}

impl AvailabilityCache {
    /// Create an empty cache with the given failure policy.
    #[must_use]
    pub fn new(policy: AvailabilityPolicy) -> Self {
        Self {
            policy,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// The deferred availability of `sensor_type`.
    ///
    /// The first call per type resolves the capability and caches one shared
    /// query; later calls return the same deferred value. Fails
    /// synchronously with `UnknownSensorType` when no capability is
    /// registered — nothing is cached in that case.
    pub fn query(
        &self,
        registry: &SensorRegistry,
        sensor_type: SensorType,
    ) -> Result<SharedAvailability> {
        let mut entries = self.entries.lock();
        if let Some(pending) = entries.get(&sensor_type) {
            return Ok(pending.clone());
        }

        let native = registry.get(sensor_type)?;
        let policy = self.policy;
        let pending: SharedAvailability = async move {
            match native.is_available().await {
                Ok(available) => Ok(available),
                Err(err) => match policy {
                    AvailabilityPolicy::ResolveUnavailable => {
                        tracing::warn!(
                            sensor = %sensor_type,
                            error = %err,
                            "availability query failed; reporting sensor as unavailable"
                        );
                        Ok(false)
                    }
                    AvailabilityPolicy::Propagate => Err(err),
                },
            }
        }
        .boxed()
        .shared();

        entries.insert(sensor_type, pending.clone());
        Ok(pending)
    }

    /// The configured failure policy.
    #[must_use]
    pub fn policy(&self) -> AvailabilityPolicy {
        self.policy
    }
}

impl Default for AvailabilityCache {
    fn default() -> Self {
        Self::new(AvailabilityPolicy::default())
    }
}
