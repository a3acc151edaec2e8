// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Hot, multi-subscriber fan-out primitive.
//!
//! A [`SensorSubject`] broadcasts each [`StreamItem<T>`] to all attached
//! subscribers: one upstream source, many downstream subscriber channels.
//!
//! ## Characteristics
//!
//! - **Hot**: Late subscribers do not receive past items, only items sent
//!   after they attach.
//! - **Unbounded**: Per-subscriber unbounded mpsc channels; a slow subscriber
//!   never blocks delivery to the others.
//! - **Keyed**: [`attach`](SensorSubject::attach) returns a [`SubscriberId`]
//!   so a specific subscriber can be detached synchronously. The subscriber
//!   count is maintained eagerly; lifecycle decisions (the 0→1 and 1→0
//!   hardware transitions) read it directly.
//! - **Never closed**: unlike a terminating Rx subject, a sensor fan-out
//!   cycles between idle and active for the whole process lifetime. Clearing
//!   subscribers ends their streams without sealing the subject.

use crate::error::SensorError;
use crate::stream_item::StreamItem;
use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures::Stream;
use parking_lot::Mutex;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

/// Identifies one subscriber of a [`SensorSubject`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

struct SubjectState<T> {
    next_id: u64,
    senders: Vec<(SubscriberId, UnboundedSender<StreamItem<T>>)>,
}

/// A hot fan-out that broadcasts items to all current subscribers.
///
/// Cheap to clone; all clones share the same subscriber list.
pub struct SensorSubject<T: Clone + Send + Sync + 'static> {
    state: Arc<Mutex<SubjectState<T>>>,
}

impl<T: Clone + Send + Sync + 'static> SensorSubject<T> {
    /// Creates a new subject with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SubjectState {
                next_id: 0,
                senders: Vec::new(),
            })),
        }
    }

    /// Attach a new subscriber and return its id together with its stream.
    ///
    /// The subscriber only observes items sent after this call returns.
    pub fn attach(&self) -> (SubscriberId, SubjectStream<T>) {
        let mut state = self.state.lock();
        let id = SubscriberId(state.next_id);
        state.next_id += 1;

        let (tx, rx) = mpsc::unbounded();
        state.senders.push((id, tx));
        (id, SubjectStream::new(rx))
    }

    /// Detach the subscriber with the given id.
    ///
    /// Returns `true` if the subscriber was present. Detaching an id that was
    /// already removed (for example by [`clear_subscribers`]) is a no-op and
    /// returns `false`.
    ///
    /// [`clear_subscribers`]: SensorSubject::clear_subscribers
    pub fn detach(&self, id: SubscriberId) -> bool {
        let mut state = self.state.lock();
        let before = state.senders.len();
        state.senders.retain(|(subscriber, _)| *subscriber != id);
        state.senders.len() != before
    }

    /// Send an item to all current subscribers, in attach order.
    ///
    /// Subscribers whose receiving side has gone away are pruned.
    pub fn send(&self, item: StreamItem<T>) {
        let mut state = self.state.lock();
        state
            .senders
            .retain(|(_, tx)| tx.unbounded_send(item.clone()).is_ok());
    }

    /// Send a value to all current subscribers.
    pub fn next(&self, value: T) {
        self.send(StreamItem::Value(value));
    }

    /// Broadcast a failure to all current subscribers.
    ///
    /// The subject itself stays usable; pair with
    /// [`clear_subscribers`](SensorSubject::clear_subscribers) to end the
    /// subscriber streams after the error item.
    pub fn error(&self, err: SensorError) {
        self.send(StreamItem::Error(err));
    }

    /// Drop every subscriber channel, ending each subscriber stream after
    /// the items it has already received.
    pub fn clear_subscribers(&self) {
        let mut state = self.state.lock();
        state.senders.clear();
    }

    /// Number of currently attached subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().senders.len()
    }
}

impl<T: Clone + Send + Sync + 'static> Default for SensorSubject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + Sync + 'static> Clone for SensorSubject<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

// A Sync-capable wrapper around the unbounded receiver handed to subscribers.
pub struct SubjectStream<T> {
    inner: Arc<Mutex<UnboundedReceiver<StreamItem<T>>>>,
}

impl<T> SubjectStream<T> {
    fn new(rx: UnboundedReceiver<StreamItem<T>>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(rx)),
        }
    }
}

impl<T> Stream for SubjectStream<T> {
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut guard = self.inner.lock();
        Pin::new(&mut *guard).poll_next(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[tokio::test]
    async fn broadcasts_to_all_subscribers_in_send_order() {
        let subject = SensorSubject::<i32>::new();
        let (_a, mut first) = subject.attach();
        let (_b, mut second) = subject.attach();

        subject.next(1);
        subject.next(2);
        subject.clear_subscribers();

        assert_eq!(first.next().await, Some(StreamItem::Value(1)));
        assert_eq!(first.next().await, Some(StreamItem::Value(2)));
        assert_eq!(first.next().await, None);
        assert_eq!(second.next().await, Some(StreamItem::Value(1)));
        assert_eq!(second.next().await, Some(StreamItem::Value(2)));
        assert_eq!(second.next().await, None);
    }

    #[tokio::test]
    async fn late_subscribers_miss_earlier_items() {
        let subject = SensorSubject::<i32>::new();
        let (_a, _first) = subject.attach();

        subject.next(1);
        let (_b, mut late) = subject.attach();
        subject.next(2);
        subject.clear_subscribers();

        assert_eq!(late.next().await, Some(StreamItem::Value(2)));
        assert_eq!(late.next().await, None);
    }

    #[tokio::test]
    async fn detach_is_eager_and_idempotent() {
        let subject = SensorSubject::<i32>::new();
        let (id, _stream) = subject.attach();
        assert_eq!(subject.subscriber_count(), 1);

        assert!(subject.detach(id));
        assert_eq!(subject.subscriber_count(), 0);
        assert!(!subject.detach(id));
    }

    #[tokio::test]
    async fn error_then_clear_ends_subscriber_streams() {
        let subject = SensorSubject::<i32>::new();
        let (_id, mut stream) = subject.attach();

        subject.error(SensorError::delivery("channel broke"));
        subject.clear_subscribers();

        assert!(matches!(
            stream.next().await,
            Some(StreamItem::Error(SensorError::Delivery { .. }))
        ));
        assert_eq!(stream.next().await, None);
        assert_eq!(subject.subscriber_count(), 0);
    }
}
