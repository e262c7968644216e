use tokio::task::JoinHandle;
use tracing::debug;

/// Handle on a fetch running in the background.
#[derive(Debug)]
pub struct FetchHandle {
    task: JoinHandle<()>,
}

impl FetchHandle {
    pub(crate) fn new(task: JoinHandle<()>) -> Self {
        Self { task }
    }

    /// Aborts the request. Does nothing when the fetch already completed.
    ///
    /// The request may still have reached the routing service. The callback is not
    /// invoked once the abort takes effect.
    pub fn cancel(&self) {
        if !self.task.is_finished() {
            debug!("Cancelling route fetch");
        }
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Waits for the callback to have been invoked, or for the fetch to be cancelled.
    ///
    /// Returns `false` when the fetch was cancelled or panicked.
    pub async fn join(self) -> bool {
        match self.task.await {
            Ok(()) => true,
            Err(err) => {
                debug!("Route fetch did not complete: {}", err);
                false
            }
        }
    }
}
