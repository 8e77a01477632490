#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Letter rows as sent by the backend, one string per cell.
pub type Letters = Vec<Vec<String>>;

/// `(row, column)` pair as sent by the backend.
pub type WireCoords = (usize, usize);

/// Puzzle categories served by the backend, named after their API path segment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PuzzleKind {
    KnightMove,
    PieSlice,
    WordFinder,
    WordLadder,
    WordSquare,
}

impl PuzzleKind {
    pub const ALL: [Self; 5] = [
        Self::KnightMove,
        Self::PieSlice,
        Self::WordFinder,
        Self::WordLadder,
        Self::WordSquare,
    ];

    pub const fn slug(self) -> &'static str {
        use PuzzleKind::*;
        match self {
            KnightMove => "knight_move",
            PieSlice => "pie_slice",
            WordFinder => "word_finder",
            WordLadder => "word_ladder",
            WordSquare => "word_square",
        }
    }

    /// Both image kinds are played the same way: look at a picture, type the word.
    pub const fn is_image(self) -> bool {
        matches!(self, Self::KnightMove | Self::PieSlice)
    }

    /// Path of the random-puzzle endpoint for this kind, relative to the API root.
    pub fn endpoint(self, api_base: &str) -> String {
        let base = api_base.trim_end_matches('/');
        format!("{}/puzzles/{}/", base, self.slug())
    }
}

impl fmt::Display for PuzzleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("unknown puzzle kind {0:?}")]
pub struct UnknownPuzzleKind(pub String);

impl FromStr for PuzzleKind {
    type Err = UnknownPuzzleKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.slug().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| UnknownPuzzleKind(s.into()))
    }
}

/// Envelope around every puzzle response: `{"puzzleData": {...}}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleResponse<T> {
    pub puzzle_data: T,
}

/// Knight-move and pie-slice puzzles: a rendered picture and the word hidden in it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImagePayload {
    /// Base64 image bytes.
    pub data: String,
    pub solution: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WordFinderPayload {
    pub data: Letters,
    /// One cell path per findable word, in the same order as `hints`.
    pub words: Vec<Vec<WireCoords>>,
    pub hints: Vec<String>,
    pub solution: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WordLadderPayload {
    pub data: Letters,
    pub solution: Letters,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WordSquarePayload {
    pub data: Letters,
    /// Letters missing from `data`, one hint token each.
    pub hints: Vec<String>,
    pub solution: Letters,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn image_envelope_uses_camel_case_key() {
        let json = r#"{"puzzleData": {"data": "aGVsbG8=", "solution": "PASSWORD"}}"#;

        let response: PuzzleResponse<ImagePayload> = serde_json::from_str(json).unwrap();

        assert_eq!(response.puzzle_data.solution, "PASSWORD");
        assert_eq!(response.puzzle_data.data, "aGVsbG8=");
    }

    #[test]
    fn word_finder_payload_decodes_coordinate_pairs() {
        let json = r#"{"puzzleData": {
            "data": [["C", "A", "T"], ["X", "O", "X"]],
            "hints": ["CAT"],
            "words": [[[0, 0], [0, 1], [0, 2]]],
            "solution": "OX"
        }}"#;

        let response: PuzzleResponse<WordFinderPayload> = serde_json::from_str(json).unwrap();

        assert_eq!(response.puzzle_data.words, vec![vec![(0, 0), (0, 1), (0, 2)]]);
        assert_eq!(response.puzzle_data.data[1][1], "O");
    }

    #[test]
    fn missing_fields_are_rejected() {
        let json = r#"{"puzzleData": {"data": [["A"]]}}"#;

        let result = serde_json::from_str::<PuzzleResponse<WordSquarePayload>>(json);

        assert!(result.is_err());
    }

    #[test]
    fn endpoint_joins_base_with_and_without_trailing_slash() {
        assert_eq!(
            PuzzleKind::WordSquare.endpoint("/api/"),
            "/api/puzzles/word_square/"
        );
        assert_eq!(
            PuzzleKind::KnightMove.endpoint("https://example.com/api"),
            "https://example.com/api/puzzles/knight_move/"
        );
    }

    #[test]
    fn kind_parses_from_slug_and_dashed_form() {
        assert_eq!("word_ladder".parse(), Ok(PuzzleKind::WordLadder));
        assert_eq!("Pie-Slice".parse(), Ok(PuzzleKind::PieSlice));
        assert!("sudoku".parse::<PuzzleKind>().is_err());
        assert!(PuzzleKind::PieSlice.is_image());
        assert!(!PuzzleKind::WordFinder.is_image());
    }

    #[test]
    fn unknown_kind_reports_the_input() {
        let err = "sudoku".parse::<PuzzleKind>().unwrap_err();

        assert_eq!(err, UnknownPuzzleKind("sudoku".into()));
        assert_eq!(err.to_string(), "unknown puzzle kind \"sudoku\"");
        let source: &dyn core::error::Error = &err;
        assert!(source.source().is_none());
    }
}
