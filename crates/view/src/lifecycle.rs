//! Fetch-on-mount lifecycle for [`CharacterView`].
//!
//! Mounting starts an activation span: the state is reset to loading and
//! one task is spawned that fetches the character list and writes the
//! outcome into the view's state. Unmounting (or dropping the view) ends
//! the span by cancelling the span's [`CancellationToken`].
//!
//! The network call itself is never aborted. Instead every state
//! mutation made by the task runs inside the state channel's write lock
//! and first checks the token, and teardown takes that same lock right
//! after cancelling. Once [`CharacterView::unmount`] returns, the task
//! can no longer change the state.

use std::sync::Arc;

use rickdex_client::source::CharacterSource;
use rickdex_core::locale::Locale;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::state::ViewState;

/// The character grid view and its state.
pub struct CharacterView {
    source: Arc<dyn CharacterSource>,
    locale: Locale,
    state: Arc<watch::Sender<ViewState>>,
    activation: Option<Activation>,
    /// Number of activation spans started so far.
    mounts: u64,
}

/// Bookkeeping for the current activation span.
struct Activation {
    id: u64,
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl CharacterView {
    /// Create an unmounted view reading from `source`.
    pub fn new(source: Arc<dyn CharacterSource>, locale: Locale) -> Self {
        let (state, _) = watch::channel(ViewState::default());
        Self {
            source,
            locale,
            state: Arc::new(state),
            activation: None,
            mounts: 0,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn is_mounted(&self) -> bool {
        self.activation.is_some()
    }

    /// Number of times the view has been mounted.
    pub fn mount_count(&self) -> u64 {
        self.mounts
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Receive every state change.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    /// Present the view: reset to the initial loading state and start the
    /// fetch. Does nothing if the view is already mounted.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn mount(&mut self) {
        if let Some(activation) = &self.activation {
            tracing::debug!(activation = activation.id, "View already mounted");
            return;
        }

        self.mounts += 1;
        let id = self.mounts;
        self.state.send_replace(ViewState::default());

        let cancel = CancellationToken::new();
        let task = tokio::spawn(run_fetch(
            Arc::clone(&self.source),
            Arc::clone(&self.state),
            cancel.clone(),
            self.locale,
            id,
        ));

        tracing::info!(activation = id, "View mounted");
        self.activation = Some(Activation { id, cancel, task });
    }

    /// Tear the view down, ending the activation span.
    ///
    /// Returns the handle of the fetch task, which may still be waiting
    /// on the network. Awaiting it is optional; whatever it resolves to
    /// no longer reaches the state. Returns `None` if the view was not
    /// mounted.
    pub fn unmount(&mut self) -> Option<JoinHandle<()>> {
        let activation = self.activation.take()?;
        activation.cancel.cancel();
        // Wait out a guarded update that may be holding the write lock.
        self.state.send_if_modified(|_| false);

        tracing::info!(
            activation = activation.id,
            settled = activation.task.is_finished(),
            "View unmounted",
        );
        Some(activation.task)
    }

    /// Wait until the current activation's fetch has settled.
    ///
    /// Returns the settled state, or `None` if the view is not mounted or
    /// is torn down first.
    pub async fn settled(&self) -> Option<ViewState> {
        let cancel = self.activation.as_ref()?.cancel.clone();
        let mut rx = self.state.subscribe();

        tokio::select! {
            _ = cancel.cancelled() => None,
            result = rx.wait_for(|state| !state.loading) => result.ok().map(|state| state.clone()),
        }
    }
}

impl Drop for CharacterView {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Apply `update` unless the activation has been cancelled. The check and
/// the write happen under the same lock.
fn guarded_update(
    state: &watch::Sender<ViewState>,
    cancel: &CancellationToken,
    update: impl FnOnce(&mut ViewState),
) -> bool {
    state.send_if_modified(|current| {
        if cancel.is_cancelled() {
            return false;
        }
        update(current);
        true
    })
}

/// Body of the per-activation fetch task.
async fn run_fetch(
    source: Arc<dyn CharacterSource>,
    state: Arc<watch::Sender<ViewState>>,
    cancel: CancellationToken,
    locale: Locale,
    activation: u64,
) {
    guarded_update(&state, &cancel, ViewState::begin_fetch);

    let outcome = source.fetch_characters().await;

    if cancel.is_cancelled() {
        tracing::debug!(activation, "View torn down before fetch settled, discarding result");
        return;
    }

    match outcome {
        Ok(characters) => {
            tracing::info!(activation, count = characters.len(), "Characters loaded");
            guarded_update(&state, &cancel, |s| s.apply_success(characters));
        }
        Err(e) => {
            tracing::warn!(activation, kind = e.kind(), error = %e, "Failed to load characters");
            let message = locale.message_or_unknown(&e.to_string()).to_string();
            guarded_update(&state, &cancel, |s| s.apply_failure(message));
        }
    }

    guarded_update(&state, &cancel, ViewState::finish);
}
