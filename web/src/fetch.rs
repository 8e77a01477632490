use gloo::net::http::Request;
use lettergrid_core::GridPuzzle;
use lettergrid_core::protocol::PuzzleResponse;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::puzzle::PuzzleWidget;

/// Why a puzzle could not be loaded. Both are shown to the player, who can retry.
#[derive(Error, Debug, Clone, PartialEq)]
pub(crate) enum LoadError {
    #[error("Could not fetch the puzzle: {0}")]
    FetchFailed(String),
    #[error("The puzzle data is malformed: {0}")]
    MalformedPayload(String),
}

pub(crate) async fn fetch_puzzle<P: PuzzleWidget>(url: &str) -> Result<P, LoadError> {
    let response = Request::get(url)
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|err| LoadError::FetchFailed(err.to_string()))?;

    if !response.ok() {
        return Err(LoadError::FetchFailed(format!(
            "HTTP {} {}",
            response.status(),
            response.status_text()
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|err| LoadError::FetchFailed(err.to_string()))?;
    log::trace!("puzzle response from {}: {}", url, body);

    P::decode(&body)
}

/// Parses a `{"puzzleData": ...}` response body and loads the puzzle from it.
pub(crate) fn decode_puzzle<P>(body: &str) -> Result<P, LoadError>
where
    P: GridPuzzle,
    P::Payload: DeserializeOwned,
{
    let response: PuzzleResponse<P::Payload> =
        serde_json::from_str(body).map_err(|err| LoadError::MalformedPayload(err.to_string()))?;

    P::initialize(response.puzzle_data).map_err(|err| LoadError::MalformedPayload(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lettergrid_core::{ImageReveal, WordSquare};

    #[test]
    fn decodes_image_puzzle() {
        let body = r#"{"puzzleData": {"data": "/9j/4AAQ", "solution": "CAT"}}"#;

        let puzzle: ImageReveal = decode_puzzle(body).unwrap();

        assert!(!puzzle.is_solved());
        assert!(puzzle.data_uri().starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn missing_fields_are_malformed() {
        let body = r#"{"puzzleData": {"data": [["A"]]}}"#;

        let result = decode_puzzle::<WordSquare>(body);

        assert!(matches!(result, Err(LoadError::MalformedPayload(_))));
    }

    #[test]
    fn rejected_payload_is_malformed() {
        let body = r#"{"puzzleData": {"data": "%%%", "solution": "CAT"}}"#;

        assert_eq!(
            decode_puzzle::<ImageReveal>(body).err(),
            Some(LoadError::MalformedPayload(
                "Malformed puzzle data: image data is not valid base64".to_string()
            ))
        );
    }
}
