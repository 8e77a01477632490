use lettergrid_core::{BoardView, WordLadder};
use yew::prelude::*;

use crate::config::WidgetConfig;
use crate::fetch::{self, LoadError};
use crate::grid::LetterGrid;
use crate::puzzle::{BoardActions, PuzzleWidget};

impl PuzzleWidget for WordLadder {
    const INPUT_ID: Option<&'static str> = Some("word");

    fn decode(body: &str) -> Result<Self, LoadError> {
        fetch::decode_puzzle(body)
    }

    /// The active row is highlighted as part of the render, so it is in place as soon
    /// as the grid is.
    fn render_board(&self, _config: &WidgetConfig, _actions: &BoardActions) -> Html {
        html! {
            <LetterGrid cells={self.cells()} active_row={self.highlighted_row()}/>
        }
    }

    fn input_max_len(&self) -> Option<usize> {
        Some(self.word_len())
    }
}
