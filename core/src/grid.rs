use alloc::vec::Vec;
use bitflags::bitflags;
use lettergrid_protocol::Letters;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

bitflags! {
    /// Player-visible cell traits, used by frontends to pick styling.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct CellFlags: u8 {
        /// Slot the player is expected to fill.
        const GUESS       = 1;
        /// Guess slot that currently accepts a letter.
        const OPEN        = 1 << 1;
        /// Holds a letter, either given or earned.
        const FILLED      = 1 << 2;
        /// Picked by the player (word-finder).
        const USED        = 1 << 3;
        /// Would receive the armed hint if clicked (word-square).
        const DROP_TARGET = 1 << 4;
    }
}

/// What a frontend needs to draw a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub letter: char,
    pub flags: CellFlags,
}

impl GridCell {
    pub const fn new(letter: char, flags: CellFlags) -> Self {
        Self { letter, flags }
    }

    pub const fn plain(letter: char) -> Self {
        Self::new(letter, CellFlags::empty())
    }

    pub const fn is_blank(self) -> bool {
        self.letter == BLANK
    }
}

/// Read-only projection of a puzzle onto a letter grid.
pub trait BoardView {
    fn size(&self) -> Coord2;

    fn cell_at(&self, coords: Coord2) -> GridCell;

    fn cells(&self) -> Array2<GridCell> {
        let (rows, cols) = self.size();
        Array2::from_shape_fn((rows.into(), cols.into()), |(row, col)| {
            // bounded by `size`, which is at most `Coord::MAX` on both axes
            self.cell_at((row as Coord, col as Coord))
        })
    }
}

/// Upper-cases a letter when that yields a single character.
pub(crate) fn normalize_letter(letter: char) -> char {
    let mut upper = letter.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => letter,
    }
}

fn parse_cell(cell: &str) -> Result<char> {
    let mut chars = cell.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Ok(BLANK),
        (Some(letter), None) => Ok(normalize_letter(letter)),
        (Some(_), Some(_)) => Err(PuzzleError::MalformedPayload(
            "grid cell must hold a single letter",
        )),
    }
}

/// Builds a rectangular letter grid from backend rows.
pub fn parse_letters(rows: &Letters) -> Result<Array2<char>> {
    let height = rows.len();
    let width = rows.first().map_or(0, Vec::len);

    if height == 0 || width == 0 {
        return Err(PuzzleError::MalformedPayload("grid is empty"));
    }
    if height > Coord::MAX.into() || width > Coord::MAX.into() {
        return Err(PuzzleError::MalformedPayload("grid is too large"));
    }
    if rows.iter().any(|row| row.len() != width) {
        return Err(PuzzleError::MalformedPayload("grid rows differ in length"));
    }

    let letters = rows
        .iter()
        .flatten()
        .map(|cell| parse_cell(cell))
        .collect::<Result<Vec<_>>>()?;

    Array2::from_shape_vec((height, width), letters)
        .map_err(|_| PuzzleError::MalformedPayload("grid rows differ in length"))
}

/// Parses a puzzle grid together with its solution, which must share its shape.
pub fn parse_with_solution(
    data: &Letters,
    solution: &Letters,
) -> Result<(Array2<char>, Array2<char>)> {
    let data = parse_letters(data)?;
    let solution = parse_letters(solution)?;
    if data.dim() != solution.dim() {
        log::warn!(
            "puzzle grid {:?} and solution {:?} differ in shape",
            data.dim(),
            solution.dim()
        );
        return Err(PuzzleError::ShapeMismatch);
    }
    Ok((data, solution))
}

/// Upper-cases a free-text guess the way the solutions are stored.
pub(crate) fn normalize_word(word: &str) -> alloc::string::String {
    word.chars().map(normalize_letter).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec;

    fn letters(rows: &[&str]) -> Letters {
        rows.iter()
            .map(|row| row.chars().map(String::from).collect())
            .collect()
    }

    #[test]
    fn parse_letters_uppercases_and_keeps_blanks() {
        let grid = parse_letters(&letters(&["ab", " c"])).unwrap();

        assert_eq!(grid[(0, 0)], 'A');
        assert_eq!(grid[(1, 0)], BLANK);
        assert_eq!(grid.size(), (2, 2));
    }

    #[test]
    fn parse_letters_rejects_ragged_rows() {
        let rows = letters(&["abc", "ab"]);

        assert_eq!(
            parse_letters(&rows),
            Err(PuzzleError::MalformedPayload("grid rows differ in length"))
        );
    }

    #[test]
    fn parse_letters_rejects_multi_letter_cells() {
        let rows = vec![vec![String::from("AB")]];

        assert!(matches!(
            parse_letters(&rows),
            Err(PuzzleError::MalformedPayload(_))
        ));
    }

    #[test]
    fn parse_letters_rejects_empty_grid() {
        assert!(parse_letters(&Vec::new()).is_err());
        assert!(parse_letters(&vec![Vec::new()]).is_err());
    }

    #[test]
    fn solution_shape_must_match() {
        let result = parse_with_solution(&letters(&["a ", "  "]), &letters(&["abc", "def"]));

        assert_eq!(result, Err(PuzzleError::ShapeMismatch));
    }

    #[test]
    fn normalize_word_uppercases() {
        assert_eq!(normalize_word("caT"), "CAT");
    }
}
