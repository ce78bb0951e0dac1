//! The data-source seam between the view and the network.

use async_trait::async_trait;
use rickdex_core::character::Character;

use crate::api::CharacterApi;
use crate::error::FetchError;

/// Anything that can produce the character list.
///
/// The view's fetch lifecycle calls [`fetch_characters`] once per
/// activation span.
///
/// [`fetch_characters`]: CharacterSource::fetch_characters
#[async_trait]
pub trait CharacterSource: Send + Sync {
    async fn fetch_characters(&self) -> Result<Vec<Character>, FetchError>;
}

#[async_trait]
impl CharacterSource for CharacterApi {
    async fn fetch_characters(&self) -> Result<Vec<Character>, FetchError> {
        CharacterApi::fetch_characters(self).await
    }
}
