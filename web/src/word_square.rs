use lettergrid_core::{BoardView, Outcome, WordSquare};
use yew::prelude::*;

use crate::config::WidgetConfig;
use crate::fetch::{self, LoadError};
use crate::grid::LetterGrid;
use crate::hints::{HintChip, HintTray};
use crate::puzzle::{BoardActions, PuzzleWidget};

fn hint_chips(puzzle: &WordSquare) -> Vec<HintChip> {
    puzzle
        .hints()
        .iter()
        .map(|hint| HintChip {
            id: hint.dom_id(),
            label: hint.letter.to_string(),
            used: !hint.is_open,
            selected: hint.is_selected,
        })
        .collect()
}

impl PuzzleWidget for WordSquare {
    const INPUT_ID: Option<&'static str> = None;

    fn decode(body: &str) -> Result<Self, LoadError> {
        fetch::decode_puzzle(body)
    }

    fn render_board(&self, _config: &WidgetConfig, actions: &BoardActions) -> Html {
        html! {
            <>
                <LetterGrid cells={self.cells()} onclick={actions.on_cell.clone()}/>
                <HintTray chips={hint_chips(self)} onclick={actions.on_hint.clone()}/>
            </>
        }
    }

    fn handle_hint_click(&mut self, index: usize) -> Outcome {
        WordSquare::handle_hint_click(self, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lettergrid_core::GridPuzzle;
    use lettergrid_core::protocol::WordSquarePayload;

    fn row(letters: &str) -> Vec<String> {
        letters.chars().map(String::from).collect()
    }

    #[test]
    fn chips_track_selection_and_placement() {
        let mut puzzle = WordSquare::initialize(WordSquarePayload {
            data: vec![row("A "), row("  ")],
            hints: row("BCD"),
            solution: vec![row("AB"), row("CD")],
        })
        .unwrap();

        PuzzleWidget::handle_hint_click(&mut puzzle, 1);
        let chips = hint_chips(&puzzle);
        assert!(chips[1].selected);
        assert!(!chips[1].used);
        assert_eq!(chips[1].id, "hint-1");

        puzzle.handle_cell_click((1, 0));
        let chips = hint_chips(&puzzle);
        assert!(!chips[1].selected);
        assert!(chips[1].used);
    }
}
