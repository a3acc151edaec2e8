// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Background task handle with cancel-on-drop semantics.

use core::future::Future;
use tokio_util::sync::CancellationToken;

/// Handle to a spawned background task.
///
/// The spawned future receives a [`CancellationToken`] it should monitor to
/// exit gracefully. Dropping the handle signals the token, so holding a
/// `SensorTask` inside a state object ties the task's lifetime to that
/// state: take the handle out and drop it, and the task winds down at its
/// next cancellation checkpoint.
#[derive(Debug)]
pub struct SensorTask {
    cancel: CancellationToken,
}

impl SensorTask {
    /// Spawn a background task on the tokio runtime.
    ///
    /// ```
    /// use sensorium_core::SensorTask;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let task = SensorTask::spawn(|cancel| async move {
    ///     cancel.cancelled().await;
    /// });
    /// drop(task); // signals cancellation
    /// # }
    /// ```
    pub fn spawn<F, Fut>(f: F) -> Self
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let cancel = CancellationToken::new();
        tokio::spawn(f(cancel.clone()));
        Self { cancel }
    }

    /// Signal the task to stop without waiting for it to finish.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// `true` once cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for SensorTask {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn drop_signals_cancellation() {
        let stopped = Arc::new(AtomicBool::new(false));
        let stopped_clone = stopped.clone();

        let task = SensorTask::spawn(|cancel| async move {
            cancel.cancelled().await;
            stopped_clone.store(true, Ordering::SeqCst);
        });

        drop(task);
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(stopped.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn cancel_is_observable_on_the_handle() {
        let task = SensorTask::spawn(|cancel| async move {
            cancel.cancelled().await;
        });

        assert!(!task.is_cancelled());
        task.cancel();
        assert!(task.is_cancelled());
    }
}
