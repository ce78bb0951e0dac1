//! The character grid view.
//!
//! [`lifecycle::CharacterView`] owns the view's state and runs one fetch
//! per activation span. [`state::ViewState::select`] picks which of the
//! three mutually exclusive states to show, and the [`render`] module
//! turns that into a terminal page or an HTML document.

pub mod lifecycle;
pub mod render;
pub mod state;
