use lettergrid_core::{BoardView, WordFinder};
use yew::prelude::*;

use crate::config::WidgetConfig;
use crate::fetch::{self, LoadError};
use crate::grid::LetterGrid;
use crate::hints::{HintChip, HintTray};
use crate::puzzle::{BoardActions, PuzzleWidget};

fn hint_chips(puzzle: &WordFinder) -> Vec<HintChip> {
    puzzle
        .hints()
        .iter()
        .enumerate()
        .map(|(index, hint)| HintChip {
            id: format!("hint-{}", index),
            label: hint.clone(),
            used: puzzle.is_hint_found(index),
            selected: false,
        })
        .collect()
}

impl PuzzleWidget for WordFinder {
    const INPUT_ID: Option<&'static str> = Some("solution");

    fn decode(body: &str) -> Result<Self, LoadError> {
        fetch::decode_puzzle(body)
    }

    fn render_board(&self, _config: &WidgetConfig, actions: &BoardActions) -> Html {
        html! {
            <>
                <LetterGrid cells={self.cells()} onclick={actions.on_cell.clone()}/>
                <HintTray chips={hint_chips(self)}/>
            </>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lettergrid_core::GridPuzzle;
    use lettergrid_core::protocol::WordFinderPayload;

    #[test]
    fn found_words_are_marked_used() {
        let mut puzzle = WordFinder::initialize(WordFinderPayload {
            data: vec![vec!["O".into(), "X".into()]],
            words: vec![vec![(0, 0)]],
            hints: vec!["O".into()],
            solution: "X".into(),
        })
        .unwrap();
        assert!(!hint_chips(&puzzle)[0].used);

        puzzle.handle_cell_click((0, 0));

        let chips = hint_chips(&puzzle);
        assert!(chips[0].used);
        assert_eq!(chips[0].id, "hint-0");
        assert_eq!(chips[0].label, "O");
    }
}
