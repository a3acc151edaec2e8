// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A scriptable native sensor capability.

use async_trait::async_trait;
use parking_lot::Mutex;
use sensorium_core::{Reading, Result, SensorError, StreamItem};
use sensorium_native::{EventStream, LogLevel, NativeSensor};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio_stream::wrappers::UnboundedReceiverStream;

/// One native operation recorded by [`FakeSensor`], in invocation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FakeOp {
    EventsAttached,
    Start,
    Stop,
    SetUpdateInterval(Duration),
    SetLogLevel(LogLevel),
    AvailabilityQueried,
}

enum AvailabilityScript {
    Immediate(Result<bool>),
    Deferred(Mutex<Option<oneshot::Receiver<Result<bool>>>>),
}

struct FakeInner {
    ops: Mutex<Vec<FakeOp>>,
    event_txs: Mutex<Vec<mpsc::UnboundedSender<StreamItem<Reading>>>>,
    availability: AvailabilityScript,
    fail_next_start: Mutex<Option<SensorError>>,
}

/// A scriptable [`NativeSensor`] for tests.
///
/// Cheap to clone; all clones share state, so a test can keep a handle
/// after registering the fake. Push readings with
/// [`emit`](FakeSensor::emit), fail the channel with
/// [`emit_error`](FakeSensor::emit_error), and assert on the recorded
/// operation sequence with [`ops`](FakeSensor::ops).
#[derive(Clone)]
pub struct FakeSensor {
    inner: Arc<FakeInner>,
}

impl std::fmt::Debug for FakeSensor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FakeSensor").finish_non_exhaustive()
    }
}

impl FakeSensor {
    fn with_script(availability: AvailabilityScript) -> Self {
        Self {
            inner: Arc::new(FakeInner {
                ops: Mutex::new(Vec::new()),
                event_txs: Mutex::new(Vec::new()),
                availability,
                fail_next_start: Mutex::new(None),
            }),
        }
    }

    /// A fake whose hardware reports as present.
    #[must_use]
    pub fn available() -> Self {
        Self::with_script(AvailabilityScript::Immediate(Ok(true)))
    }

    /// A fake whose hardware reports as absent.
    #[must_use]
    pub fn unavailable() -> Self {
        Self::with_script(AvailabilityScript::Immediate(Ok(false)))
    }

    /// A fake whose availability query fails with `err`.
    #[must_use]
    pub fn with_failing_availability(err: SensorError) -> Self {
        Self::with_script(AvailabilityScript::Immediate(Err(err)))
    }

    /// A fake whose availability query stays pending until the returned
    /// gate resolves it. Lets tests observe callers sharing one in-flight
    /// query.
    #[must_use]
    pub fn with_deferred_availability() -> (Self, AvailabilityGate) {
        let (tx, rx) = oneshot::channel();
        let fake = Self::with_script(AvailabilityScript::Deferred(Mutex::new(Some(rx))));
        (fake, AvailabilityGate { tx })
    }

    /// Make the next `start_updates` call fail with `err`.
    pub fn fail_next_start(&self, err: SensorError) {
        *self.inner.fail_next_start.lock() = Some(err);
    }

    /// Emit a reading on every live event listener.
    pub fn emit(&self, reading: impl Into<Reading>) {
        let item = StreamItem::Value(reading.into());
        self.inner
            .event_txs
            .lock()
            .retain(|tx| tx.send(item.clone()).is_ok());
    }

    /// Report a failure on every live event listener.
    pub fn emit_error(&self, err: SensorError) {
        let item = StreamItem::Error(err);
        self.inner
            .event_txs
            .lock()
            .retain(|tx| tx.send(item.clone()).is_ok());
    }

    /// Tear the event channel down: every live listener ends.
    pub fn close_events(&self) {
        self.inner.event_txs.lock().clear();
    }

    /// Snapshot of the recorded operations, in invocation order.
    #[must_use]
    pub fn ops(&self) -> Vec<FakeOp> {
        self.inner.ops.lock().clone()
    }

    /// Number of `start_updates` calls recorded so far.
    #[must_use]
    pub fn start_count(&self) -> usize {
        self.count(&FakeOp::Start)
    }

    /// Number of `stop_updates` calls recorded so far.
    #[must_use]
    pub fn stop_count(&self) -> usize {
        self.count(&FakeOp::Stop)
    }

    /// Number of `is_available` queries recorded so far.
    #[must_use]
    pub fn availability_query_count(&self) -> usize {
        self.count(&FakeOp::AvailabilityQueried)
    }

    /// Number of event listeners whose receiving side is still alive.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        let mut txs = self.inner.event_txs.lock();
        txs.retain(|tx| !tx.is_closed());
        txs.len()
    }

    fn count(&self, op: &FakeOp) -> usize {
        self.inner.ops.lock().iter().filter(|o| *o == op).count()
    }

    fn record(&self, op: FakeOp) {
        self.inner.ops.lock().push(op);
    }
}

#[async_trait]
impl NativeSensor for FakeSensor {
    fn start_updates(&self) -> Result<()> {
        self.record(FakeOp::Start);
        match self.inner.fail_next_start.lock().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn stop_updates(&self) -> Result<()> {
        self.record(FakeOp::Stop);
        Ok(())
    }

    fn set_update_interval(&self, interval: Duration) -> Result<()> {
        self.record(FakeOp::SetUpdateInterval(interval));
        Ok(())
    }

    async fn is_available(&self) -> Result<bool> {
        self.record(FakeOp::AvailabilityQueried);
        match &self.inner.availability {
            AvailabilityScript::Immediate(result) => result.clone(),
            AvailabilityScript::Deferred(rx) => {
                let rx = rx
                    .lock()
                    .take()
                    .expect("deferred availability queried more than once");
                rx.await
                    .unwrap_or_else(|_| Err(SensorError::native("availability gate dropped")))
            }
        }
    }

    fn set_log_level(&self, level: LogLevel) -> Result<()> {
        self.record(FakeOp::SetLogLevel(level));
        Ok(())
    }

    fn events(&self) -> EventStream {
        self.record(FakeOp::EventsAttached);
        let (tx, rx) = mpsc::unbounded_channel();
        self.inner.event_txs.lock().push(tx);
        Box::pin(UnboundedReceiverStream::new(rx))
    }
}

/// Resolves a [`FakeSensor`]'s deferred availability query.
pub struct AvailabilityGate {
    tx: oneshot::Sender<Result<bool>>,
}

impl AvailabilityGate {
    /// Resolve the pending query with `result`.
    pub fn resolve(self, result: Result<bool>) {
        let _ = self.tx.send(result);
    }
}
