//! Character records and the display helpers derived from them.
//!
//! Records are deserialized wholesale from the API and never mutated.
//! Status strings are parsed into [`CharacterStatus`], which maps
//! totally onto a [`StatusStyle`], and the optional origin/location
//! names are read through [`FieldValue`] so callers can tell "absent"
//! from "present but empty" before falling back to a placeholder.

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::CharacterId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Status labels as the API spells them.
pub const STATUS_ALIVE: &str = "Alive";
pub const STATUS_DEAD: &str = "Dead";
pub const STATUS_UNKNOWN: &str = "unknown";

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Life status of a character.
///
/// Parsing is case-insensitive. Anything outside the three known values
/// is kept verbatim in [`CharacterStatus::Unrecognized`] so its label can
/// still be shown.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CharacterStatus {
    Alive,
    Dead,
    #[default]
    Unknown,
    Unrecognized(String),
}

/// Visual style bucket for a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusStyle {
    Alive,
    Dead,
    Unknown,
}

impl StatusStyle {
    /// Lower-case tag used to build style class names (`pill-alive`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alive => "alive",
            Self::Dead => "dead",
            Self::Unknown => "unknown",
        }
    }
}

impl CharacterStatus {
    /// Parse a raw status string as received from the API.
    pub fn from_str_value(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "alive" => Self::Alive,
            "dead" => Self::Dead,
            "unknown" => Self::Unknown,
            _ => Self::Unrecognized(s.to_string()),
        }
    }

    /// Label shown on the status badge.
    pub fn label(&self) -> &str {
        match self {
            Self::Alive => STATUS_ALIVE,
            Self::Dead => STATUS_DEAD,
            Self::Unknown => STATUS_UNKNOWN,
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Style bucket for the badge. Unrecognized values share the
    /// `unknown` style.
    pub fn style(&self) -> StatusStyle {
        match self {
            Self::Alive => StatusStyle::Alive,
            Self::Dead => StatusStyle::Dead,
            Self::Unknown | Self::Unrecognized(_) => StatusStyle::Unknown,
        }
    }
}

impl From<String> for CharacterStatus {
    fn from(value: String) -> Self {
        Self::from_str_value(&value)
    }
}

impl From<CharacterStatus> for String {
    fn from(value: CharacterStatus) -> Self {
        value.label().to_string()
    }
}

// ---------------------------------------------------------------------------
// Optional display fields
// ---------------------------------------------------------------------------

/// A named place reference (`origin`, `location`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Place {
    #[serde(default)]
    pub name: Option<String>,
}

/// An optional display string, read without collapsing "absent" into
/// "empty".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// The field exists and has a non-empty value.
    Present(&'a str),
    /// The field exists but its value is the empty string.
    Empty,
    /// The field (or its parent object) is missing or `null`.
    Absent,
}

impl<'a> FieldValue<'a> {
    pub fn from_option(value: Option<&'a str>) -> Self {
        match value {
            None => Self::Absent,
            Some("") => Self::Empty,
            Some(s) => Self::Present(s),
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// The value when present, otherwise `default`.
    pub fn or<'b>(self, default: &'b str) -> &'b str
    where
        'a: 'b,
    {
        match self {
            Self::Present(s) => s,
            Self::Empty | Self::Absent => default,
        }
    }
}

// ---------------------------------------------------------------------------
// Character
// ---------------------------------------------------------------------------

/// One character entry as returned by the API.
///
/// Only `id` is required. The display strings default to empty when
/// missing or `null` so a sparse record still renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: CharacterStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub species: String,
    /// Avatar URL.
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default)]
    pub origin: Option<Place>,
    #[serde(default)]
    pub location: Option<Place>,
}

impl Character {
    pub fn origin_name(&self) -> FieldValue<'_> {
        place_name(self.origin.as_ref())
    }

    pub fn location_name(&self) -> FieldValue<'_> {
        place_name(self.location.as_ref())
    }
}

fn place_name(place: Option<&Place>) -> FieldValue<'_> {
    FieldValue::from_option(place.and_then(|p| p.name.as_deref()))
}

/// Deserialize `T`, reading an explicit `null` as `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn deserializes_full_record() {
        let json = r#"{
            "id": 1,
            "name": "Rick Sanchez",
            "status": "Alive",
            "species": "Human",
            "type": "",
            "gender": "Male",
            "image": "https://rickandmortyapi.com/api/character/avatar/1.jpeg",
            "origin": { "name": "Earth (C-137)", "url": "https://rickandmortyapi.com/api/location/1" },
            "location": { "name": "Citadel of Ricks", "url": "" },
            "episode": []
        }"#;

        let c: Character = serde_json::from_str(json).unwrap();

        assert_eq!(c.id, 1);
        assert_eq!(c.name, "Rick Sanchez");
        assert_eq!(c.status, CharacterStatus::Alive);
        assert_eq!(c.species, "Human");
        assert_eq!(c.origin_name(), FieldValue::Present("Earth (C-137)"));
        assert_eq!(c.location_name(), FieldValue::Present("Citadel of Ricks"));
    }

    #[test]
    fn missing_places_are_absent() {
        let c: Character =
            serde_json::from_str(r#"{"id": 7, "name": "X", "status": "Dead"}"#).unwrap();

        assert_eq!(c.origin_name(), FieldValue::Absent);
        assert_eq!(c.location_name(), FieldValue::Absent);
        assert_eq!(c.origin_name().or("Unknown"), "Unknown");
    }

    #[test]
    fn null_place_and_null_name_are_absent() {
        let c: Character =
            serde_json::from_str(r#"{"id": 7, "origin": null, "location": {"name": null}}"#)
                .unwrap();

        assert_eq!(c.origin_name(), FieldValue::Absent);
        assert_eq!(c.location_name(), FieldValue::Absent);
    }

    #[test]
    fn empty_place_name_is_empty_but_falls_back() {
        let c: Character =
            serde_json::from_str(r#"{"id": 7, "origin": {"name": ""}}"#).unwrap();

        assert_eq!(c.origin_name(), FieldValue::Empty);
        assert!(!c.origin_name().is_present());
        assert_eq!(c.origin_name().or("Desconocido"), "Desconocido");
    }

    #[test]
    fn null_display_fields_default() {
        let c: Character = serde_json::from_str(
            r#"{"id": 3, "name": null, "status": null, "species": null, "image": null}"#,
        )
        .unwrap();

        assert_eq!(c.name, "");
        assert_eq!(c.status, CharacterStatus::Unknown);
        assert_eq!(c.species, "");
        assert_eq!(c.image, "");
    }

    #[test]
    fn missing_id_is_an_error() {
        let result = serde_json::from_str::<Character>(r#"{"name": "No id"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn status_parsing_is_case_insensitive() {
        assert_eq!(CharacterStatus::from_str_value("ALIVE"), CharacterStatus::Alive);
        assert_eq!(CharacterStatus::from_str_value("dead"), CharacterStatus::Dead);
        assert_eq!(CharacterStatus::from_str_value("Unknown"), CharacterStatus::Unknown);
    }

    #[test]
    fn unrecognized_status_keeps_label_and_degrades_style() {
        let status = CharacterStatus::from_str_value("Cronenberged");

        assert_matches!(&status, CharacterStatus::Unrecognized(raw) if raw == "Cronenberged");
        assert_eq!(status.label(), "Cronenberged");
        assert_eq!(status.style(), StatusStyle::Unknown);
    }

    #[test]
    fn status_styles_are_lower_case_tags() {
        assert_eq!(CharacterStatus::Alive.style().as_str(), "alive");
        assert_eq!(CharacterStatus::Dead.style().as_str(), "dead");
        assert_eq!(CharacterStatus::Unknown.style().as_str(), "unknown");
    }

    #[test]
    fn status_serializes_as_label() {
        let json = serde_json::to_string(&CharacterStatus::Unknown).unwrap();
        assert_eq!(json, r#""unknown""#);
    }
}
