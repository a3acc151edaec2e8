// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The core: lazily-activated multicast streams with reference-counted
//! native lifecycle.
//!
//! One [`SensorStream`] exists per sensor type. It is cold: the native
//! hardware stream runs only while at least one subscriber is attached.
//!
//! State machine per stream:
//!
//! - **Idle** (subscriber count 0): hardware stopped, no pump task.
//! - **Active** (count ≥ 1): hardware sampling; a single pump task drains
//!   the native event channel and fans each reading out to every subscriber
//!   in emission order.
//!
//! Transitions:
//!
//! - 0→1: attach the event listener and spawn the pump, then call
//!   `start_updates` — the listener must be draining before the hardware may
//!   emit, so the first reading is never lost.
//! - 1→0: call `stop_updates`, then cancel the pump. Detaching a subscriber
//!   that is already gone never issues a second stop.
//! - Failure on the native channel: broadcast the error to every subscriber,
//!   end their streams, stop the hardware — equivalent to
//!   last-subscriber-detached. A later subscribe reactivates from idle.
//!
//! Idle is re-enterable for the whole process lifetime; a stream is never
//! terminally closed.

use futures::{Stream, StreamExt};
use parking_lot::Mutex;
use sensorium_core::{
    Reading, Result, SensorError, SensorSubject, SensorTask, SensorType, StreamItem,
    SubjectStream, SubscriberId,
};
use sensorium_native::{EventStream, NativeSensor};
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

/// A lazily-activated, multicast stream over one sensor type.
///
/// Cheap to clone; every clone shares the same subscriber list and
/// activation state, so the single-activation invariant holds across all
/// handles to a type.
pub struct SensorStream {
    shared: Arc<StreamShared>,
}

struct StreamShared {
    sensor_type: SensorType,
    native: Arc<dyn NativeSensor>,
    subject: SensorSubject<Reading>,
    lifecycle: Mutex<Lifecycle>,
}

impl std::fmt::Debug for SensorStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SensorStream")
            .field("sensor_type", &self.shared.sensor_type)
            .finish_non_exhaustive()
    }
}

// Invariant: `pump` is present iff the native hardware stream is running.
struct Lifecycle {
    pump: Option<SensorTask>,
}

impl SensorStream {
    /// Create the stream for `sensor_type` over its native capability.
    ///
    /// The stream starts idle; nothing happens on the native side until the
    /// first subscriber attaches.
    #[must_use]
    pub fn new(sensor_type: SensorType, native: Arc<dyn NativeSensor>) -> Self {
        Self {
            shared: Arc::new(StreamShared {
                sensor_type,
                native,
                subject: SensorSubject::new(),
                lifecycle: Mutex::new(Lifecycle { pump: None }),
            }),
        }
    }

    /// Attach a subscriber.
    ///
    /// The first subscriber triggers exactly one `start_updates` on the
    /// native capability, with the event listener attached beforehand.
    /// Additional subscribers have no native side effect. The subscriber
    /// only observes readings emitted after it attaches.
    ///
    /// Fails when the 0→1 activation's `start_updates` fails; the
    /// subscription is rolled back and the stream stays idle.
    pub fn subscribe(&self) -> Result<SensorSubscription> {
        let mut lifecycle = self.shared.lifecycle.lock();
        let (id, stream) = self.shared.subject.attach();

        if lifecycle.pump.is_none() {
            // Listener first: the pump must be draining the event channel
            // before the hardware may emit.
            let events = self.shared.native.events();
            let pump = spawn_pump(self.shared.clone(), events);

            if let Err(err) = self.shared.native.start_updates() {
                self.shared.subject.detach(id);
                drop(pump);
                return Err(err);
            }

            lifecycle.pump = Some(pump);
            tracing::debug!(sensor = %self.shared.sensor_type, "sensor stream activated");
        }

        Ok(SensorSubscription {
            id: Some(id),
            stream,
            shared: self.shared.clone(),
        })
    }

    /// The sensor type this stream delivers.
    #[must_use]
    pub fn sensor_type(&self) -> SensorType {
        self.shared.sensor_type
    }

    /// Number of currently attached subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.shared.subject.subscriber_count()
    }

    /// `true` while the native hardware stream is running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.shared.lifecycle.lock().pump.is_some()
    }
}

impl Clone for SensorStream {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

// The single upstream listener: drains the native event channel and fans
// out into the subject until cancelled or the channel fails.
fn spawn_pump(shared: Arc<StreamShared>, mut events: EventStream) -> SensorTask {
    SensorTask::spawn(move |cancel| async move {
        loop {
            tokio::select! {
                () = cancel.cancelled() => break,
                item = events.next() => match item {
                    Some(StreamItem::Value(reading)) => shared.subject.next(reading),
                    Some(StreamItem::Error(err)) => {
                        fail(&shared, err);
                        break;
                    }
                    None => {
                        fail(
                            &shared,
                            SensorError::delivery(
                                "native event channel closed while the stream was active",
                            ),
                        );
                        break;
                    }
                },
            }
        }
    })
}

// A broken native channel cannot be trusted to keep emitting: propagate the
// failure to every subscriber, end their streams and go idle, as if the last
// subscriber had detached.
fn fail(shared: &Arc<StreamShared>, err: SensorError) {
    let mut lifecycle = shared.lifecycle.lock();
    let Some(pump) = lifecycle.pump.take() else {
        return; // already idle, a detach won the race
    };

    tracing::warn!(
        sensor = %shared.sensor_type,
        error = %err,
        "native event channel failed; ending subscriber streams"
    );
    shared.subject.error(err);

    // Same order as the 1→0 transition: stop first, then detach.
    if let Err(stop_err) = shared.native.stop_updates() {
        tracing::warn!(
            sensor = %shared.sensor_type,
            error = %stop_err,
            "stop_updates failed while handling a channel failure"
        );
    }
    shared.subject.clear_subscribers();
    drop(pump);
}

fn detach(shared: &Arc<StreamShared>, id: SubscriberId) {
    let mut lifecycle = shared.lifecycle.lock();
    if !shared.subject.detach(id) {
        return; // already removed, e.g. by the failure path
    }

    if shared.subject.subscriber_count() == 0 {
        if let Some(pump) = lifecycle.pump.take() {
            if let Err(err) = shared.native.stop_updates() {
                tracing::warn!(
                    sensor = %shared.sensor_type,
                    error = %err,
                    "stop_updates failed during deactivation"
                );
            }
            drop(pump);
            tracing::debug!(sensor = %shared.sensor_type, "sensor stream deactivated");
        }
    }
}

/// One subscriber's view of a [`SensorStream`].
///
/// Implements `Stream`; each item is a reading or an in-band failure.
/// Dropping the subscription detaches it synchronously — when it is the last
/// one, native `stop_updates` is invoked within that same call.
pub struct SensorSubscription {
    id: Option<SubscriberId>,
    stream: SubjectStream<Reading>,
    shared: Arc<StreamShared>,
}

impl std::fmt::Debug for SensorSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SensorSubscription")
            .field("id", &self.id)
            .field("sensor_type", &self.shared.sensor_type)
            .finish_non_exhaustive()
    }
}

impl SensorSubscription {
    /// Detach explicitly. Equivalent to dropping the subscription.
    pub fn unsubscribe(self) {
        // Drop impl performs the detach.
    }

    /// The sensor type this subscription delivers.
    #[must_use]
    pub fn sensor_type(&self) -> SensorType {
        self.shared.sensor_type
    }

    fn release(&mut self) {
        if let Some(id) = self.id.take() {
            detach(&self.shared, id);
        }
    }
}

impl Stream for SensorSubscription {
    type Item = StreamItem<Reading>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.stream).poll_next(cx)
    }
}

impl Drop for SensorSubscription {
    fn drop(&mut self) {
        self.release();
    }
}
