// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::SensorError;

/// A stream element that is either a reading or an in-band failure.
///
/// Runtime stream errors are delivered to subscribers through their stream
/// rather than thrown on the calling stack, following Rx-style error
/// semantics: an error is the last element a subscriber observes before its
/// stream ends.
#[derive(Debug, Clone)]
pub enum StreamItem<T> {
    /// A successfully delivered reading.
    Value(T),
    /// A failure that terminates delivery to this subscriber.
    Error(SensorError),
}

impl<T: PartialEq> PartialEq for StreamItem<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (StreamItem::Value(a), StreamItem::Value(b)) => a == b,
            _ => false, // Errors are never equal
        }
    }
}

impl<T> StreamItem<T> {
    /// Returns `true` if this is a `Value`.
    pub const fn is_value(&self) -> bool {
        matches!(self, StreamItem::Value(_))
    }

    /// Returns `true` if this is an `Error`.
    pub const fn is_error(&self) -> bool {
        matches!(self, StreamItem::Error(_))
    }

    /// Converts to `Option<T>`, discarding errors.
    pub fn ok(self) -> Option<T> {
        match self {
            StreamItem::Value(value) => Some(value),
            StreamItem::Error(_) => None,
        }
    }

    /// Converts to `Option<SensorError>`, discarding values.
    pub fn err(self) -> Option<SensorError> {
        match self {
            StreamItem::Value(_) => None,
            StreamItem::Error(err) => Some(err),
        }
    }

    /// Maps the contained value, propagating errors unchanged.
    pub fn map<U, F>(self, f: F) -> StreamItem<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            StreamItem::Value(value) => StreamItem::Value(f(value)),
            StreamItem::Error(err) => StreamItem::Error(err),
        }
    }

    /// Maps the contained value through a fallible conversion; a conversion
    /// failure becomes an in-band error.
    pub fn and_then<U, F>(self, f: F) -> StreamItem<U>
    where
        F: FnOnce(T) -> crate::Result<U>,
    {
        match self {
            StreamItem::Value(value) => match f(value) {
                Ok(converted) => StreamItem::Value(converted),
                Err(err) => StreamItem::Error(err),
            },
            StreamItem::Error(err) => StreamItem::Error(err),
        }
    }
}

impl<T> From<crate::Result<T>> for StreamItem<T> {
    fn from(result: crate::Result<T>) -> Self {
        match result {
            Ok(value) => StreamItem::Value(value),
            Err(err) => StreamItem::Error(err),
        }
    }
}

impl<T> From<StreamItem<T>> for crate::Result<T> {
    fn from(item: StreamItem<T>) -> Self {
        match item {
            StreamItem::Value(value) => Ok(value),
            StreamItem::Error(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_never_compare_equal() {
        let a: StreamItem<i32> = StreamItem::Error(SensorError::delivery("x"));
        let b: StreamItem<i32> = StreamItem::Error(SensorError::delivery("x"));
        assert_ne!(a, b);
        assert_eq!(StreamItem::Value(1), StreamItem::Value(1));
    }

    #[test]
    fn and_then_turns_conversion_failures_into_errors() {
        let item = StreamItem::Value(2);
        let converted = item.and_then(|_| Err::<i32, _>(SensorError::delivery("bad shape")));
        assert!(converted.is_error());
    }
}
