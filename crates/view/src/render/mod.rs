//! Rendering of a [`ViewState`] into a page.
//!
//! Both surfaces go through [`ViewState::select`] and the shared
//! [`card::Card`] model; they differ only in markup.

pub mod card;
pub mod html;
pub mod text;

use rickdex_core::error::CoreError;
use rickdex_core::locale::Locale;

use crate::state::ViewState;

pub const OUTPUT_TEXT: &str = "text";
pub const OUTPUT_HTML: &str = "html";

/// All accepted output format names.
pub const VALID_OUTPUT_FORMATS: &[&str] = &[OUTPUT_TEXT, OUTPUT_HTML];

/// Default number of cards per row in the text grid.
pub const DEFAULT_GRID_COLUMNS: usize = 3;

/// Which surface to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Boxed cards for a terminal.
    #[default]
    Text,
    /// A standalone HTML document.
    Html,
}

impl OutputFormat {
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s.trim().to_ascii_lowercase().as_str() {
            OUTPUT_TEXT => Ok(Self::Text),
            OUTPUT_HTML => Ok(Self::Html),
            _ => Err(CoreError::InvalidValue {
                field: "output format",
                value: s.to_string(),
                expected: VALID_OUTPUT_FORMATS.join(", "),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => OUTPUT_TEXT,
            Self::Html => OUTPUT_HTML,
        }
    }
}

/// Render `state` as a full page in the requested format.
///
/// `columns` only affects the text grid.
pub fn render_page(
    state: &ViewState,
    locale: Locale,
    format: OutputFormat,
    columns: usize,
) -> String {
    match format {
        OutputFormat::Text => text::render_page(state, locale, columns),
        OutputFormat::Html => html::render_page(state, locale),
    }
}
