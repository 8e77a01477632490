use alloc::string::String;
use alloc::vec::Vec;
use lettergrid_protocol::WordFinderPayload;
use ndarray::Array2;
use smallvec::SmallVec;

use crate::*;

/// Cell path spelling one findable word.
pub type WordPath = SmallVec<[Coord2; 12]>;

/// Word search: pick letters on the grid to spell the listed words, then name the
/// word formed by the letters nobody uses.
#[derive(Clone, Debug, PartialEq)]
pub struct WordFinder {
    data: Array2<char>,
    used: Array2<bool>,
    words: Vec<WordPath>,
    hints: Vec<String>,
    found: Vec<bool>,
    solution: String,
    state: PuzzleState,
}

impl WordFinder {
    pub fn state(&self) -> PuzzleState {
        self.state
    }

    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    pub fn is_hint_found(&self, index: usize) -> bool {
        self.found.get(index).copied().unwrap_or(false)
    }

    pub fn found_count(&self) -> usize {
        self.found.iter().filter(|&&found| found).count()
    }

    pub fn is_used(&self, coords: Coord2) -> bool {
        self.data.contains(coords) && self.used[coords.to_nd_index()]
    }

    /// Letter picked at `coords`, blank when unused.
    pub fn picked_letter(&self, coords: Coord2) -> char {
        if self.is_used(coords) {
            self.data[coords.to_nd_index()]
        } else {
            BLANK
        }
    }

    pub fn words(&self) -> &[WordPath] {
        &self.words
    }

    /// Flips a cell between picked and unpicked.
    pub fn toggle(&mut self, coords: Coord2) -> Result<Outcome> {
        let coords = self.data.validate_coords(coords)?;
        if self.state.is_solved() {
            return Ok(Outcome::NoChange);
        }

        let used = &mut self.used[coords.to_nd_index()];
        *used = !*used;
        log::trace!("word-finder toggle {:?} -> {}", coords, *used);

        self.check_words();
        Ok(Outcome::Changed)
    }

    fn spell(&self, path: &WordPath) -> String {
        path.iter().map(|&coords| self.picked_letter(coords)).collect()
    }

    /// Recomputes which hints are spelled out by the picked letters along any word path.
    pub fn check_words(&mut self) {
        let spelled: Vec<String> = self.words.iter().map(|path| self.spell(path)).collect();

        for (hint, found) in self.hints.iter().zip(self.found.iter_mut()) {
            *found = spelled.iter().any(|word| word == hint);
        }
    }
}

impl BoardView for WordFinder {
    fn size(&self) -> Coord2 {
        self.data.size()
    }

    fn cell_at(&self, coords: Coord2) -> GridCell {
        let letter = self.data[coords.to_nd_index()];
        let flags = if self.is_used(coords) {
            CellFlags::USED
        } else {
            CellFlags::empty()
        };
        GridCell::new(letter, flags)
    }
}

impl GridPuzzle for WordFinder {
    type Payload = WordFinderPayload;

    fn initialize(payload: Self::Payload) -> Result<Self> {
        let data = parse_letters(&payload.data)?;

        let words = payload
            .words
            .iter()
            .map(|path| {
                path.iter()
                    .map(|&wire| {
                        coords_from_wire(wire)
                            .filter(|&coords| data.contains(coords))
                            .ok_or(PuzzleError::MalformedPayload("word path leaves the grid"))
                    })
                    .collect::<Result<WordPath>>()
            })
            .collect::<Result<Vec<_>>>()?;

        let hints: Vec<String> = payload.hints.iter().map(|hint| normalize_word(hint)).collect();
        let found = alloc::vec![false; hints.len()];
        if words.len() != hints.len() {
            log::warn!(
                "word-finder has {} word paths for {} hints",
                words.len(),
                hints.len()
            );
        }

        Ok(Self {
            used: Array2::from_elem(data.dim(), false),
            data,
            words,
            hints,
            found,
            solution: normalize_word(&payload.solution),
            state: PuzzleState::Active,
        })
    }

    fn handle_cell_click(&mut self, coords: Coord2) -> Outcome {
        self.toggle(coords).unwrap_or(Outcome::NoChange)
    }

    fn handle_submit(&mut self, input: &str) -> Outcome {
        if self.state.is_solved() || normalize_word(input) != self.solution {
            return Outcome::NoChange;
        }
        settle(&mut self.state, true)
    }

    fn is_solved(&self) -> bool {
        self.state.is_solved()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn row(letters: &str) -> Vec<String> {
        letters.chars().map(String::from).collect()
    }

    // C A T
    // . R .
    // . T .
    //
    // CAT runs along the top row and ART runs down the middle column; they share (0, 1).
    fn overlapping() -> WordFinder {
        WordFinder::initialize(WordFinderPayload {
            data: vec![row("CAT"), row("XRX"), row("XTX")],
            words: vec![vec![(0, 0), (0, 1), (0, 2)], vec![(0, 1), (1, 1), (2, 1)]],
            hints: vec!["ART".into(), "CAT".into()],
            solution: "XXXX".into(),
        })
        .unwrap()
    }

    #[test]
    fn overlapping_words_share_a_cell() {
        let mut puzzle = overlapping();

        for coords in [(0, 0), (0, 1), (0, 2)] {
            assert_eq!(puzzle.handle_cell_click(coords), Outcome::Changed);
        }
        assert!(puzzle.is_hint_found(1));
        assert!(!puzzle.is_hint_found(0));

        puzzle.handle_cell_click((1, 1));
        puzzle.handle_cell_click((2, 1));
        assert!(puzzle.is_hint_found(0));
        assert!(puzzle.is_hint_found(1));
        assert_eq!(puzzle.found_count(), 2);

        // dropping the shared cell breaks both words
        puzzle.handle_cell_click((0, 1));
        assert_eq!(puzzle.found_count(), 0);
        assert_eq!(puzzle.picked_letter((0, 1)), BLANK);
    }

    #[test]
    fn found_iff_path_spells_a_hint() {
        let mut puzzle = overlapping();
        let toggles = [(0, 1), (1, 1), (0, 0), (2, 1), (0, 2), (1, 1), (1, 1), (0, 0)];

        for coords in toggles {
            puzzle.handle_cell_click(coords);
            let spelled: Vec<String> = puzzle.words().iter().map(|p| puzzle.spell(p)).collect();
            for (index, hint) in puzzle.hints().iter().enumerate() {
                assert_eq!(
                    puzzle.is_hint_found(index),
                    spelled.iter().any(|word| word == hint)
                );
            }
        }
    }

    #[test]
    fn out_of_range_clicks_are_ignored() {
        let mut puzzle = overlapping();

        assert_eq!(puzzle.handle_cell_click((3, 0)), Outcome::NoChange);
        assert_eq!(puzzle.toggle((0, 9)), Err(PuzzleError::InvalidCoords));
    }

    #[test]
    fn solution_guess_is_independent_of_grid() {
        let mut puzzle = overlapping();

        assert_eq!(puzzle.handle_submit("xxx"), Outcome::NoChange);
        assert_eq!(puzzle.handle_submit("xxxx"), Outcome::Solved);
        assert_eq!(puzzle.handle_cell_click((0, 0)), Outcome::NoChange);
        assert!(puzzle.is_solved());
    }

    #[test]
    fn rejects_paths_outside_the_grid() {
        let result = WordFinder::initialize(WordFinderPayload {
            data: vec![row("AB")],
            words: vec![vec![(0, 0), (0, 2)]],
            hints: vec!["AB".into()],
            solution: "B".into(),
        });

        assert_eq!(
            result,
            Err(PuzzleError::MalformedPayload("word path leaves the grid"))
        );
    }

    #[test]
    fn cell_view_marks_used_letters() {
        let mut puzzle = overlapping();
        puzzle.handle_cell_click((2, 1));

        assert_eq!(puzzle.cell_at((2, 1)), GridCell::new('T', CellFlags::USED));
        assert_eq!(puzzle.cell_at((2, 0)), GridCell::plain('X'));
        assert_eq!(puzzle.cells().dim(), (3, 3));
    }
}
