//! Trailing-edge debounce for search input.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Holds back values until input has been quiet for `delay`, then emits the
/// most recent one.
///
/// Must be created inside a tokio runtime.
#[derive(Debug)]
pub struct Debouncer<T> {
    input: mpsc::UnboundedSender<T>,
    output: mpsc::UnboundedReceiver<T>,
    task: JoinHandle<()>,
}

impl<T: Send + 'static> Debouncer<T> {
    #[must_use]
    pub fn spawn(delay: Duration) -> Self {
        let (input, mut pending) = mpsc::unbounded_channel::<T>();
        let (emit, output) = mpsc::unbounded_channel();

        let task = tokio::spawn(async move {
            while let Some(mut latest) = pending.recv().await {
                loop {
                    tokio::select! {
                        next = pending.recv() => match next {
                            Some(value) => latest = value,
                            None => {
                                let _ = emit.send(latest);
                                return;
                            }
                        },
                        () = tokio::time::sleep(delay) => {
                            if emit.send(latest).is_err() {
                                return;
                            }
                            break;
                        }
                    }
                }
            }
        });

        Self { input, output, task }
    }

    /// Feeds a new value, restarting the quiet period.
    pub fn push(&self, value: T) {
        if self.input.send(value).is_err() {
            tracing::debug!("debounce task stopped, dropping value");
        }
    }

    /// Waits for the next settled value.
    pub async fn next(&mut self) -> Option<T> {
        self.output.recv().await
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}
