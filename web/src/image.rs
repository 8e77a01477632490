use lettergrid_core::ImageReveal;
use yew::prelude::*;

use crate::config::WidgetConfig;
use crate::fetch::{self, LoadError};
use crate::puzzle::{BoardActions, PuzzleWidget};

impl PuzzleWidget for ImageReveal {
    const INPUT_ID: Option<&'static str> = Some("solution");

    fn decode(body: &str) -> Result<Self, LoadError> {
        fetch::decode_puzzle(body)
    }

    fn render_board(&self, config: &WidgetConfig, _actions: &BoardActions) -> Html {
        html! {
            <img src={self.data_uri()} alt="puzzle" width={config.image_width.to_string()}/>
        }
    }

    fn input_max_len(&self) -> Option<usize> {
        Some(self.solution_len())
    }
}
