// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Typed views over the per-type `Reading` channels.

use crate::broadcast::{SensorStream, SensorSubscription};
use futures::Stream;
use sensorium_core::{FromReading, MotionReading, PressureReading, Result, SensorType, StreamItem};
use std::marker::PhantomData;
use std::pin::Pin;
use std::task::{Context, Poll};

/// A [`SensorStream`] whose subscriptions deliver a concrete payload shape.
///
/// A payload of the wrong shape for the channel surfaces as an in-band
/// [`StreamItem::Error`] rather than being dropped.
pub struct TypedStream<T: FromReading> {
    inner: SensorStream,
    _marker: PhantomData<fn() -> T>,
}

/// Stream of motion readings (accelerometer, gyroscope, magnetometer,
/// absolute rotation vector).
pub type MotionStream = TypedStream<MotionReading>;

/// Stream of barometer pressure readings.
pub type PressureStream = TypedStream<PressureReading>;

impl<T: FromReading> TypedStream<T> {
    /// Wrap a raw stream in a typed view.
    #[must_use]
    pub fn new(inner: SensorStream) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }

    /// Attach a subscriber; same lifecycle semantics as
    /// [`SensorStream::subscribe`].
    pub fn subscribe(&self) -> Result<TypedSubscription<T>> {
        Ok(TypedSubscription {
            inner: self.inner.subscribe()?,
            _marker: PhantomData,
        })
    }

    /// The sensor type this stream delivers.
    #[must_use]
    pub fn sensor_type(&self) -> SensorType {
        self.inner.sensor_type()
    }

    /// Number of currently attached subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscriber_count()
    }

    /// `true` while the native hardware stream is running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.inner.is_active()
    }
}

impl<T: FromReading> Clone for TypedStream<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _marker: PhantomData,
        }
    }
}

/// A typed subscription; detaches on drop like [`SensorSubscription`].
pub struct TypedSubscription<T: FromReading> {
    inner: SensorSubscription,
    _marker: PhantomData<fn() -> T>,
}

impl<T: FromReading> TypedSubscription<T> {
    /// Detach explicitly. Equivalent to dropping the subscription.
    pub fn unsubscribe(self) {
        self.inner.unsubscribe();
    }

    /// The sensor type this subscription delivers.
    #[must_use]
    pub fn sensor_type(&self) -> SensorType {
        self.inner.sensor_type()
    }
}

impl<T: FromReading> Stream for TypedSubscription<T> {
    type Item = StreamItem<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        match Pin::new(&mut self.inner).poll_next(cx) {
            Poll::Ready(Some(item)) => Poll::Ready(Some(item.and_then(T::from_reading))),
            Poll::Ready(None) => Poll::Ready(None),
            Poll::Pending => Poll::Pending,
        }
    }
}
