use lettergrid_core::protocol::PuzzleKind;
use lettergrid_core::{ImageReveal, WordFinder, WordLadder, WordSquare};
use yew::prelude::*;

use crate::config::WidgetConfig;
use crate::puzzle::PuzzleView;

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct AppProps {
    pub config: WidgetConfig,
}

#[function_component]
pub(crate) fn App(props: &AppProps) -> Html {
    let config = props.config.clone();
    let on_solved = Callback::from(|kind: PuzzleKind| log::info!("{} puzzle solved", kind));

    match config.kind {
        PuzzleKind::KnightMove | PuzzleKind::PieSlice => html! {
            <PuzzleView<ImageReveal> {config} {on_solved}/>
        },
        PuzzleKind::WordFinder => html! {
            <PuzzleView<WordFinder> {config} {on_solved}/>
        },
        PuzzleKind::WordLadder => html! {
            <PuzzleView<WordLadder> {config} {on_solved}/>
        },
        PuzzleKind::WordSquare => html! {
            <PuzzleView<WordSquare> {config} {on_solved}/>
        },
    }
}
