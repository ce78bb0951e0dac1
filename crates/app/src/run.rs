//! One presentation of the view: mount, wait for the fetch to settle (or
//! for shutdown), render, tear down.

use std::future::Future;
use std::sync::Arc;

use rickdex_client::source::CharacterSource;
use rickdex_view::lifecycle::CharacterView;
use rickdex_view::render::render_page;

use crate::config::AppConfig;

/// How a presentation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The fetch settled and the page was rendered.
    Rendered {
        page: String,
        /// Whether the page shows the error state.
        failed: bool,
    },
    /// `shutdown` resolved before the fetch settled.
    Interrupted,
}

/// Present the view once against `source`.
///
/// Resolving `shutdown` first tears the view down; the in-flight request
/// is left to finish on its own and its result is ignored.
pub async fn present_once(
    source: Arc<dyn CharacterSource>,
    config: &AppConfig,
    shutdown: impl Future<Output = ()>,
) -> RunOutcome {
    let mut view = CharacterView::new(source, config.locale);
    view.mount();

    let settled = tokio::select! {
        state = view.settled() => state,
        _ = shutdown => {
            tracing::info!("Shutdown requested before the character list settled");
            None
        }
    };

    let outcome = match settled {
        Some(state) => {
            let failed = !state.loading && !state.error_msg.is_empty();
            tracing::info!(
                characters = state.characters.len(),
                failed,
                output = config.output.as_str(),
                "Rendering view",
            );
            RunOutcome::Rendered {
                page: render_page(&state, config.locale, config.output, config.grid_columns),
                failed,
            }
        }
        None => RunOutcome::Interrupted,
    };

    view.unmount();
    outcome
}
