//! Per-record card model shared by the renderers.

use rickdex_core::character::{Character, StatusStyle};
use rickdex_core::locale::Locale;
use rickdex_core::types::CharacterId;

/// Everything a renderer needs to draw one card, with placeholders
/// already substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card<'a> {
    /// Rendering key (the record id).
    pub key: CharacterId,
    pub name: &'a str,
    /// Avatar URL.
    pub image: &'a str,
    pub status_label: &'a str,
    pub status_style: StatusStyle,
    pub species: &'a str,
    pub origin: &'a str,
    pub location: &'a str,
}

impl<'a> Card<'a> {
    pub fn from_character(character: &'a Character, locale: Locale) -> Self {
        let placeholder = locale.strings().unknown_place;
        Self {
            key: character.id,
            name: &character.name,
            image: &character.image,
            status_label: character.status.label(),
            status_style: character.status.style(),
            species: &character.species,
            origin: character.origin_name().or(placeholder),
            location: character.location_name().or(placeholder),
        }
    }
}

/// Cards for `characters`, in the order received.
pub fn cards(characters: &[Character], locale: Locale) -> Vec<Card<'_>> {
    characters
        .iter()
        .map(|c| Card::from_character(c, locale))
        .collect()
}
