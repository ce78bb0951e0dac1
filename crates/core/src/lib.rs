//! Domain types for the rickdex character grid.
//!
//! Holds the character record as received from the remote API, the
//! status and optional-field helpers the renderers depend on, and the
//! locale tables for every user-facing string. No I/O happens here.

pub mod character;
pub mod error;
pub mod locale;
pub mod types;
