use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use lettergrid_protocol::WordSquarePayload;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotType {
    /// Letter given by the puzzle.
    Fixed,
    /// Blank to be filled in by the player.
    Guess,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub letter: char,
    pub is_open: bool,
    pub slot_type: SlotType,
}

impl Slot {
    fn new(letter: char) -> Self {
        let is_guess = letter == BLANK;
        Self {
            letter,
            is_open: is_guess,
            slot_type: if is_guess {
                SlotType::Guess
            } else {
                SlotType::Fixed
            },
        }
    }
}

/// Letter token from the tray. `is_open` means it is not placed on the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    pub index: usize,
    pub letter: char,
    pub is_open: bool,
    pub is_selected: bool,
}

impl Hint {
    pub fn dom_id(&self) -> String {
        format!("hint-{}", self.index)
    }
}

/// Player state of one cell: the shown letter and the hint it came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    pub letter: char,
    pub is_open: bool,
    pub hint: Option<usize>,
}

/// Word square: drop letter tokens from a tray into the blanks until every row and
/// column reads as a word.
///
/// Interaction is two-step. Clicking a tray hint arms it, clicking an open blank then
/// places it. Clicking a placed letter sends its hint back to the tray.
#[derive(Clone, Debug, PartialEq)]
pub struct WordSquare {
    data: Array2<Slot>,
    guesses: Array2<Guess>,
    hints: Vec<Hint>,
    solution: Array2<char>,
    selected_hint: Option<usize>,
    state: PuzzleState,
}

impl WordSquare {
    pub fn state(&self) -> PuzzleState {
        self.state
    }

    pub fn hints(&self) -> &[Hint] {
        &self.hints
    }

    pub fn selected_hint(&self) -> Option<&Hint> {
        self.selected_hint.and_then(|index| self.hints.get(index))
    }

    pub fn slot_at(&self, coords: Coord2) -> Slot {
        self.data[coords.to_nd_index()]
    }

    pub fn guess_at(&self, coords: Coord2) -> Guess {
        self.guesses[coords.to_nd_index()]
    }

    /// Whether clicking `coords` would place the armed hint.
    pub fn is_drop_target(&self, coords: Coord2) -> bool {
        if self.selected_hint.is_none() || !self.guesses.contains(coords) {
            return false;
        }
        let guess = self.guess_at(coords);
        self.slot_at(coords).slot_type == SlotType::Guess && guess.is_open && guess.hint.is_none()
    }

    /// Arms or disarms a tray hint. Placed hints can't be armed.
    pub fn handle_hint_click(&mut self, index: usize) -> Outcome {
        if self.state.is_solved() {
            return Outcome::NoChange;
        }
        let Some(hint) = self.hints.get(index) else {
            return Outcome::NoChange;
        };
        if !hint.is_open {
            return Outcome::NoChange;
        }

        let was_selected = self.selected_hint == Some(index);
        self.disarm();
        if !was_selected {
            self.hints[index].is_selected = true;
            self.selected_hint = Some(index);
        }
        log::debug!("word-square armed hint: {:?}", self.selected_hint);
        Outcome::Changed
    }

    fn disarm(&mut self) {
        if let Some(previous) = self.selected_hint.take() {
            if let Some(hint) = self.hints.get_mut(previous) {
                hint.is_selected = false;
            }
        }
    }

    /// Places the armed hint on an open blank, or sends a placed hint back to the tray.
    pub fn place_or_release(&mut self, coords: Coord2) -> Result<Outcome> {
        let coords = self.data.validate_coords(coords)?;
        if self.state.is_solved() || self.slot_at(coords).slot_type != SlotType::Guess {
            return Ok(Outcome::NoChange);
        }

        let index = coords.to_nd_index();
        let guess = self.guesses[index];

        if let Some(placed) = guess.hint {
            if let Some(hint) = self.hints.get_mut(placed) {
                hint.is_open = true;
                hint.is_selected = false;
            }
            self.guesses[index] = Guess {
                letter: BLANK,
                is_open: true,
                hint: None,
            };
            log::debug!("word-square released hint {} from {:?}", placed, coords);
        } else if let (true, Some(selected)) = (guess.is_open, self.selected_hint) {
            self.selected_hint = None;
            let hint = &mut self.hints[selected];
            hint.is_open = false;
            hint.is_selected = false;
            self.guesses[index] = Guess {
                letter: hint.letter,
                is_open: false,
                hint: Some(selected),
            };
            log::debug!("word-square placed hint {} at {:?}", selected, coords);
        } else {
            return Ok(Outcome::NoChange);
        }

        let solved = self.solution_ok();
        Ok(settle(&mut self.state, solved))
    }

    fn solution_ok(&self) -> bool {
        self.guesses
            .iter()
            .zip(self.solution.iter())
            .all(|(guess, &letter)| guess.letter == letter)
    }
}

impl BoardView for WordSquare {
    fn size(&self) -> Coord2 {
        self.data.size()
    }

    /// Once solved the solution is shown in place of the player's grid.
    fn cell_at(&self, coords: Coord2) -> GridCell {
        if self.state.is_solved() {
            return GridCell::plain(self.solution[coords.to_nd_index()]);
        }

        let guess = self.guess_at(coords);
        let mut flags = CellFlags::empty();
        if self.slot_at(coords).slot_type == SlotType::Guess {
            flags |= CellFlags::GUESS;
        }
        if guess.is_open {
            flags |= CellFlags::OPEN;
        }
        if guess.letter != BLANK {
            flags |= CellFlags::FILLED;
        }
        if self.is_drop_target(coords) {
            flags |= CellFlags::DROP_TARGET;
        }
        GridCell::new(guess.letter, flags)
    }
}

impl GridPuzzle for WordSquare {
    type Payload = WordSquarePayload;

    fn initialize(payload: Self::Payload) -> Result<Self> {
        let (letters, solution) = parse_with_solution(&payload.data, &payload.solution)?;

        let data = letters.mapv(Slot::new);
        let guesses = data.mapv(|slot| Guess {
            letter: slot.letter,
            is_open: slot.is_open,
            hint: None,
        });

        let hints = payload
            .hints
            .iter()
            .enumerate()
            .map(|(index, letter)| {
                let mut chars = letter.chars();
                match (chars.next(), chars.next()) {
                    (Some(letter), None) => Ok(Hint {
                        index,
                        letter: normalize_letter(letter),
                        is_open: true,
                        is_selected: false,
                    }),
                    _ => Err(PuzzleError::MalformedPayload("hint must be a single letter")),
                }
            })
            .collect::<Result<Vec<_>>>()?;

        let blanks = data
            .iter()
            .filter(|slot| slot.slot_type == SlotType::Guess)
            .count();
        if blanks != hints.len() {
            log::warn!("word-square has {} blanks for {} hints", blanks, hints.len());
        }

        let mut puzzle = Self {
            data,
            guesses,
            hints,
            solution,
            selected_hint: None,
            state: PuzzleState::Active,
        };
        if puzzle.solution_ok() {
            puzzle.state = PuzzleState::Solved;
        }
        Ok(puzzle)
    }

    fn handle_cell_click(&mut self, coords: Coord2) -> Outcome {
        self.place_or_release(coords).unwrap_or(Outcome::NoChange)
    }

    fn handle_submit(&mut self, _input: &str) -> Outcome {
        Outcome::NoChange
    }

    fn is_solved(&self) -> bool {
        self.state.is_solved()
    }
}
