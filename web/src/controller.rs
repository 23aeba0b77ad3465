//! Owns the page for its lifetime and runs its one fetch.
//!
//! # Design
//! `mount` spawns the fetch as a tokio task that is the only writer of the
//! page state, published through a `watch` channel. Disposing the controller
//! aborts the task, and a task that finishes after the receiver is gone drops
//! its result, so a disposed page is never written to.

use std::future::Future;

use gglib_core::{ApiError, Model, ModelClient, PageState, View};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::fetch;

pub struct PageController {
    rx: watch::Receiver<PageState>,
    task: JoinHandle<()>,
}

impl PageController {
    /// Start in `Loading` and resolve the page with whatever `fetch` returns.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount<F>(fetch: F) -> Self
    where
        F: Future<Output = Result<Vec<Model>, ApiError>> + Send + 'static,
    {
        let (tx, rx) = watch::channel(PageState::Loading);
        let task = tokio::spawn(async move {
            let result = fetch.await;
            if let Err(err) = &result {
                tracing::error!(kind = ?err.kind(), error = %err, "page failed to load");
            }
            publish(&tx, result);
        });
        Self { rx, task }
    }

    /// Mount a page that loads from the models API at `client`'s base URL.
    pub fn mount_with(client: ModelClient, http: reqwest::Client) -> Self {
        Self::mount(async move { fetch::get_models(&client, &http).await })
    }

    pub fn state(&self) -> PageState {
        self.rx.borrow().clone()
    }

    pub fn render(&self) -> View {
        self.rx.borrow().render()
    }

    /// Wait for the page to leave `Loading` and return where it landed.
    ///
    /// If the fetch task died without settling the page, the current state
    /// is returned as is.
    pub async fn settled(&mut self) -> PageState {
        let settled = self
            .rx
            .wait_for(|state| !state.is_loading())
            .await
            .map(|state| state.clone());
        settled.unwrap_or_else(|_| self.state())
    }

    /// Tear the page down. A fetch still in flight is cancelled.
    pub fn dispose(self) {}
}

/// Apply `result` to the page unless the page is already gone.
///
/// Returns whether the state was written.
fn publish(tx: &watch::Sender<PageState>, result: Result<Vec<Model>, ApiError>) -> bool {
    if tx.is_closed() {
        tracing::debug!("page disposed before models arrived; dropping result");
        return false;
    }
    tx.send_modify(|state| *state = std::mem::take(state).resolve(result));
    tracing::debug!("page settled");
    true
}

impl Drop for PageController {
    fn drop(&mut self) {
        self.task.abort();
    }
}
