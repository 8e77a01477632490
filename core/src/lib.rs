#![no_std]

extern crate alloc;

pub use error::*;
pub use grid::*;
pub use image::*;
pub use types::*;
pub use word_finder::*;
pub use word_ladder::*;
pub use word_square::*;

pub use lettergrid_protocol as protocol;

mod error;
mod grid;
mod image;
mod types;
mod word_finder;
mod word_ladder;
mod word_square;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PuzzleState {
    #[default]
    Active,
    Solved,
}

impl PuzzleState {
    pub const fn is_solved(self) -> bool {
        matches!(self, Self::Solved)
    }
}

/// Result of feeding one player interaction into a puzzle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    NoChange,
    Changed,
    /// The interaction completed the puzzle. Reported once per puzzle.
    Solved,
}

impl Outcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
            Self::Solved => true,
        }
    }

    pub const fn is_solved(self) -> bool {
        matches!(self, Self::Solved)
    }
}

/// Common lifecycle of every puzzle: load from the backend payload, then react to
/// clicks and typed guesses until solved.
///
/// Interactions never fail. Coordinates outside the grid, clicks on puzzles without
/// a clickable grid, or anything after the puzzle is solved yield [`Outcome::NoChange`].
pub trait GridPuzzle: Sized {
    type Payload;

    fn initialize(payload: Self::Payload) -> Result<Self>;

    fn handle_cell_click(&mut self, coords: Coord2) -> Outcome;

    fn handle_submit(&mut self, input: &str) -> Outcome;

    fn is_solved(&self) -> bool;
}

/// Marks `state` solved when `solved` holds, reporting the transition.
pub(crate) fn settle(state: &mut PuzzleState, solved: bool) -> Outcome {
    if state.is_solved() {
        return Outcome::NoChange;
    }
    if solved {
        log::info!("puzzle solved");
        *state = PuzzleState::Solved;
        Outcome::Solved
    } else {
        Outcome::Changed
    }
}
