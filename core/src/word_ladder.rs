use alloc::vec::Vec;
use lettergrid_protocol::WordLadderPayload;
use ndarray::Array2;

use crate::*;

/// Row of the first guess; row 0 is the given starting word.
const FIRST_GUESS_ROW: Coord = 1;

/// Word ladder: climb from the first word to the last one row at a time.
///
/// Letters guessed at the right position stick, even when the rest of the word is
/// wrong, and are never taken back. Only a fully correct word moves the ladder on.
#[derive(Clone, Debug, PartialEq)]
pub struct WordLadder {
    data: Array2<char>,
    guesses: Array2<char>,
    solution: Array2<char>,
    active_guess: Coord,
    state: PuzzleState,
}

impl WordLadder {
    pub fn state(&self) -> PuzzleState {
        self.state
    }

    /// Row currently being guessed, past the last row once the ladder is climbed.
    pub fn active_guess(&self) -> Coord {
        self.active_guess
    }

    /// Row to highlight. The final row is the given target word and never highlighted.
    pub fn highlighted_row(&self) -> Option<Coord> {
        let (rows, _) = self.guesses.size();
        (self.active_guess < rows.saturating_sub(1)).then_some(self.active_guess)
    }

    /// Longest guess worth typing.
    pub fn word_len(&self) -> usize {
        self.guesses.ncols()
    }

    pub fn guess_at(&self, coords: Coord2) -> char {
        self.guesses[coords.to_nd_index()]
    }

    /// Whether the letter at `coords` came from the puzzle rather than the player.
    pub fn is_given(&self, coords: Coord2) -> bool {
        self.data[coords.to_nd_index()] != BLANK
    }

    fn target_row(&self) -> Option<Vec<char>> {
        let rows = self.solution.nrows();
        let active = usize::from(self.active_guess);
        (active < rows).then(|| self.solution.row(active).iter().copied().collect())
    }

    /// Commits every letter of `word` that sits at its correct position in the
    /// active row and advances when the whole row matches.
    pub fn guess(&mut self, word: &str) -> Outcome {
        if self.state.is_solved() {
            return Outcome::NoChange;
        }
        let Some(target) = self.target_row() else {
            return Outcome::NoChange;
        };

        let word: Vec<char> = normalize_word(word).chars().collect();
        let active = usize::from(self.active_guess);
        let mut committed = 0usize;

        for (col, (&guessed, &expected)) in word.iter().zip(target.iter()).enumerate() {
            if guessed == expected {
                let slot = &mut self.guesses[[active, col]];
                if *slot != expected {
                    *slot = expected;
                    committed += 1;
                }
            }
        }

        let advanced = word == target;
        if advanced {
            self.active_guess = self.active_guess.saturating_add(1);
        }
        log::debug!(
            "word-ladder row {}: {} new letters, advanced: {}",
            active,
            committed,
            advanced
        );

        if self.solution_ok() {
            settle(&mut self.state, true)
        } else if committed > 0 || advanced {
            Outcome::Changed
        } else {
            Outcome::NoChange
        }
    }

    fn solution_ok(&self) -> bool {
        self.guesses == self.solution
    }
}

impl BoardView for WordLadder {
    fn size(&self) -> Coord2 {
        self.guesses.size()
    }

    fn cell_at(&self, coords: Coord2) -> GridCell {
        let letter = self.guess_at(coords);
        let mut flags = CellFlags::empty();
        if letter != BLANK {
            flags |= CellFlags::FILLED;
        }
        if !self.is_given(coords) {
            flags |= CellFlags::GUESS;
        }
        GridCell::new(letter, flags)
    }
}

impl GridPuzzle for WordLadder {
    type Payload = WordLadderPayload;

    fn initialize(payload: Self::Payload) -> Result<Self> {
        let (data, solution) = parse_with_solution(&payload.data, &payload.solution)?;
        if data.nrows() < 2 {
            return Err(PuzzleError::MalformedPayload(
                "word ladder needs a start and a target word",
            ));
        }

        let guesses = data.clone();
        let state = if guesses == solution {
            PuzzleState::Solved
        } else {
            PuzzleState::Active
        };

        Ok(Self {
            data,
            guesses,
            solution,
            active_guess: FIRST_GUESS_ROW,
            state,
        })
    }

    fn handle_cell_click(&mut self, _coords: Coord2) -> Outcome {
        Outcome::NoChange
    }

    fn handle_submit(&mut self, input: &str) -> Outcome {
        self.guess(input)
    }

    fn is_solved(&self) -> bool {
        self.state.is_solved()
    }
}
