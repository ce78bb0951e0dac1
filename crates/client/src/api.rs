//! REST client for the character-list endpoint.
//!
//! Wraps a single `GET` against a fixed URL using [`reqwest`] and
//! decodes the `results` field of the JSON envelope.

use rickdex_core::character::Character;
use serde::de::Error as _;

use crate::error::FetchError;

/// The public Rick & Morty character-list endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://rickandmortyapi.com/api/character";

/// HTTP client for one character-list endpoint.
#[derive(Debug, Clone)]
pub struct CharacterApi {
    client: reqwest::Client,
    endpoint: String,
}

impl CharacterApi {
    /// Create a client for `endpoint` (a full URL, no query string).
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    /// Fetch the character list.
    ///
    /// Sends a bare `GET` (no headers, query or body). A missing or
    /// `null` `results` field yields an empty list.
    pub async fn fetch_characters(&self) -> Result<Vec<Character>, FetchError> {
        tracing::debug!(endpoint = %self.endpoint, "Requesting character list");

        let response = self.client.get(&self.endpoint).send().await?;
        let response = Self::ensure_success(response)?;
        let body = response.bytes().await?;

        let characters = parse_results(&body)?;
        tracing::debug!(count = characters.len(), "Character list decoded");
        Ok(characters)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code.
    fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, FetchError> {
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Character list request failed");
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}

/// Decode the `results` array out of a response body.
///
/// The body must be valid JSON other than `null`. Only the `results`
/// field is inspected: when it is missing or `null`, or the body is not an
/// object, the list is empty. A present `results` that is not a list of
/// records is a parse error.
pub fn parse_results(body: &[u8]) -> Result<Vec<Character>, FetchError> {
    let mut envelope: serde_json::Value = serde_json::from_slice(body)?;
    if envelope.is_null() {
        return Err(serde_json::Error::custom("response body is null").into());
    }

    match envelope.get_mut("results").map(serde_json::Value::take) {
        None | Some(serde_json::Value::Null) => Ok(Vec::new()),
        Some(results) => Ok(serde_json::from_value(results)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn parses_results_in_order() {
        let body = br#"{
            "info": { "count": 2, "pages": 1, "next": null, "prev": null },
            "results": [
                { "id": 2, "name": "Morty Smith", "status": "Alive", "species": "Human" },
                { "id": 1, "name": "Rick Sanchez", "status": "Alive", "species": "Human" }
            ]
        }"#;

        let characters = parse_results(body).unwrap();

        let ids: Vec<_> = characters.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn missing_results_is_empty() {
        assert!(parse_results(br#"{"info": {}}"#).unwrap().is_empty());
    }

    #[test]
    fn null_results_is_empty() {
        assert!(parse_results(br#"{"results": null}"#).unwrap().is_empty());
    }

    #[test]
    fn non_object_body_is_empty() {
        assert!(parse_results(b"[1, 2, 3]").unwrap().is_empty());
    }

    #[test]
    fn null_body_is_parse_error() {
        let err = parse_results(b"null").unwrap_err();

        assert_matches!(&err, FetchError::Parse(_));
        assert_eq!(err.to_string(), "response body is null");
    }

    #[test]
    fn null_species_still_renders_record() {
        let body = br#"{"results": [
            { "id": 1, "name": "Rick", "status": "Alive", "species": null, "image": "u" }
        ]}"#;

        let characters = parse_results(body).unwrap();

        assert_eq!(characters.len(), 1);
        assert_eq!(characters[0].name, "Rick");
        assert_eq!(characters[0].species, "");
    }

    #[test]
    fn null_name_still_renders_record() {
        let characters = parse_results(br#"{"results": [{ "id": 1, "name": null }]}"#).unwrap();

        assert_eq!(characters[0].id, 1);
        assert_eq!(characters[0].name, "");
    }

    #[test]
    fn invalid_json_is_parse_error() {
        assert_matches!(parse_results(b"<!doctype html>"), Err(FetchError::Parse(_)));
    }

    #[test]
    fn malformed_results_is_parse_error() {
        assert_matches!(
            parse_results(br#"{"results": [{"name": "no id"}]}"#),
            Err(FetchError::Parse(_))
        );
    }
}
