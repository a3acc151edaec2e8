// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Assertion helpers for sensor streams.

use futures::stream::{Stream, StreamExt};
use sensorium_core::{SensorError, StreamItem};
use std::time::Duration;
use tokio::time::{sleep, timeout};

const WAIT: Duration = Duration::from_millis(500);

/// Await the next item and unwrap it as a value, panicking on a stream
/// failure, a stream end, or a timeout.
pub async fn expect_value<S, T>(stream: &mut S) -> T
where
    S: Stream<Item = StreamItem<T>> + Unpin,
{
    match timeout(WAIT, stream.next())
        .await
        .expect("timed out waiting for a reading")
    {
        Some(StreamItem::Value(value)) => value,
        Some(StreamItem::Error(err)) => panic!("expected a reading, stream failed: {err}"),
        None => panic!("expected a reading, stream ended"),
    }
}

/// Await the next item and unwrap it as a stream failure.
pub async fn expect_error<S, T>(stream: &mut S) -> SensorError
where
    S: Stream<Item = StreamItem<T>> + Unpin,
{
    match timeout(WAIT, stream.next())
        .await
        .expect("timed out waiting for a stream failure")
    {
        Some(StreamItem::Error(err)) => err,
        Some(StreamItem::Value(_)) => panic!("expected a stream failure, received a reading"),
        None => panic!("expected a stream failure, stream ended"),
    }
}

/// Assert the stream ends (yields `None`).
pub async fn expect_end<S, T>(stream: &mut S)
where
    S: Stream<Item = StreamItem<T>> + Unpin,
{
    let ended = timeout(WAIT, stream.next())
        .await
        .expect("timed out waiting for the stream to end");
    assert!(ended.is_none(), "expected the stream to end");
}

/// Assert nothing is emitted within `timeout_ms` milliseconds.
pub async fn assert_no_emission<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        _item = stream.next() => {
            panic!("unexpected emission, expected no output");
        }
        () = sleep(Duration::from_millis(timeout_ms)) => {}
    }
}
