//! View state and the render selector.

use rickdex_core::character::Character;

/// The three values the view renders from.
///
/// Written only by the fetch lifecycle; read by [`ViewState::select`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub loading: bool,
    /// Empty means "no error".
    pub error_msg: String,
    /// Records from the most recent successful fetch.
    pub characters: Vec<Character>,
}

impl Default for ViewState {
    /// The state of a freshly presented view: loading, no error, no
    /// records.
    fn default() -> Self {
        Self {
            loading: true,
            error_msg: String::new(),
            characters: Vec::new(),
        }
    }
}

/// Exactly one of the visual states the view can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState<'a> {
    Loading,
    Error(&'a str),
    /// The card grid. An empty slice is an empty grid, not an error.
    Populated(&'a [Character]),
}

impl ViewState {
    /// Choose what to show. Loading wins over everything; an error hides
    /// any retained records.
    pub fn select(&self) -> RenderState<'_> {
        if self.loading {
            RenderState::Loading
        } else if !self.error_msg.is_empty() {
            RenderState::Error(&self.error_msg)
        } else {
            RenderState::Populated(&self.characters)
        }
    }

    pub(crate) fn begin_fetch(&mut self) {
        self.loading = true;
        self.error_msg.clear();
    }

    pub(crate) fn apply_success(&mut self, characters: Vec<Character>) {
        self.characters = characters;
    }

    /// Record a failure. Held records stay as they are.
    pub(crate) fn apply_failure(&mut self, message: String) {
        self.error_msg = message;
    }

    pub(crate) fn finish(&mut self) {
        self.loading = false;
    }
}
