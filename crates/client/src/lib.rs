//! HTTP client for the public character-list endpoint.
//!
//! [`api::CharacterApi`] performs the GET and JSON decoding;
//! [`source::CharacterSource`] is the seam the view depends on, so the
//! fetch lifecycle can be driven by any implementation.

pub mod api;
pub mod error;
pub mod source;
