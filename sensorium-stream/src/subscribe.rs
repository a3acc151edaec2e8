// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Callback-style subscription driver.

use async_trait::async_trait;
use futures::stream::{Stream, StreamExt};
use sensorium_core::{SensorError, StreamItem};

/// Extension trait binding the callback form of subscription —
/// `subscribe(onNext, onError)` — onto any sensor stream.
///
/// The `Stream` implementations on the subscription types are the primary
/// interface; this driver covers callers that want handler callbacks
/// instead of polling.
#[async_trait]
pub trait SubscribeExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Drive the stream to completion, routing readings to `on_next` and a
    /// stream failure to `on_error`.
    ///
    /// Returns when the stream ends: after the subscription is detached
    /// elsewhere, or right after `on_error` when the stream fails (an error
    /// is the last item a subscriber observes).
    async fn subscribe_with<F, OnError>(self, on_next: F, on_error: OnError)
    where
        F: FnMut(T) + Send + 'static,
        OnError: FnMut(SensorError) + Send + 'static;
}

#[async_trait]
impl<S, T> SubscribeExt<T> for S
where
    S: Stream<Item = StreamItem<T>> + Unpin + Send + 'static,
    T: Send + 'static,
{
    async fn subscribe_with<F, OnError>(mut self, mut on_next: F, mut on_error: OnError)
    where
        F: FnMut(T) + Send + 'static,
        OnError: FnMut(SensorError) + Send + 'static,
    {
        while let Some(item) = self.next().await {
            match item {
                StreamItem::Value(value) => on_next(value),
                StreamItem::Error(err) => {
                    on_error(err);
                    break;
                }
            }
        }
    }
}
