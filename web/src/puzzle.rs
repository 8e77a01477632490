use lettergrid_core::protocol::PuzzleKind;
use lettergrid_core::{Coord2, GridPuzzle, Outcome};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::WidgetConfig;
use crate::fetch::{self, LoadError};

/// Callbacks a puzzle board uses to report player input back to its [`PuzzleView`].
#[derive(Clone, PartialEq)]
pub(crate) struct BoardActions {
    pub on_cell: Callback<Coord2>,
    pub on_hint: Callback<usize>,
}

/// Frontend side of a puzzle: how it is decoded, drawn and which extra inputs it takes.
pub(crate) trait PuzzleWidget: GridPuzzle + 'static {
    /// Element id of the free-text guess field, if the puzzle takes typed guesses.
    const INPUT_ID: Option<&'static str>;

    fn decode(body: &str) -> Result<Self, LoadError>;

    fn render_board(&self, config: &WidgetConfig, actions: &BoardActions) -> Html;

    fn input_max_len(&self) -> Option<usize> {
        None
    }

    fn handle_hint_click(&mut self, _index: usize) -> Outcome {
        Outcome::NoChange
    }
}

enum LoadState<P> {
    Loading,
    Ready(P),
    Failed(LoadError),
}

impl<P: GridPuzzle> LoadState<P> {
    fn is_solved(&self) -> bool {
        matches!(self, LoadState::Ready(puzzle) if puzzle.is_solved())
    }

    fn can_guess(&self) -> bool {
        matches!(self, LoadState::Ready(puzzle) if !puzzle.is_solved())
    }

    fn status(&self, kind: PuzzleKind) -> String {
        match self {
            LoadState::Loading => "Loading puzzle…".to_string(),
            LoadState::Failed(err) => err.to_string(),
            LoadState::Ready(puzzle) if puzzle.is_solved() => solved_message(kind).to_string(),
            LoadState::Ready(_) => String::new(),
        }
    }
}

fn solved_message(kind: PuzzleKind) -> &'static str {
    if kind.is_image() {
        "You guessed the word!"
    } else {
        "You solved the puzzle!"
    }
}

/// Tracks the latest puzzle request; answers to earlier requests are dropped.
struct Loader<P> {
    generation: u32,
    state: LoadState<P>,
}

impl<P: GridPuzzle> Loader<P> {
    fn new() -> Self {
        Self {
            generation: 0,
            state: LoadState::Loading,
        }
    }

    /// Starts a new request and returns its generation.
    fn restart(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.state = LoadState::Loading;
        self.generation
    }

    /// Stores the result of request `generation`. Returns false if a newer request superseded it.
    fn accept(&mut self, generation: u32, result: Result<P, LoadError>) -> bool {
        if generation != self.generation {
            log::debug!("dropping stale puzzle response #{}", generation);
            return false;
        }
        self.state = match result {
            Ok(puzzle) => LoadState::Ready(puzzle),
            Err(err) => {
                log::error!("{}", err);
                LoadState::Failed(err)
            }
        };
        true
    }
}

pub(crate) enum Msg<P> {
    Start,
    /// Fetch result tagged with the request generation it answers.
    Loaded(u32, Result<P, LoadError>),
    CellClick(Coord2),
    HintClick(usize),
    Input(String),
    Submit,
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct PuzzleProps {
    pub config: WidgetConfig,
    #[prop_or_default]
    pub on_solved: Callback<PuzzleKind>,
}

/// Loads one puzzle from the API and feeds player input into it.
pub(crate) struct PuzzleView<P: PuzzleWidget> {
    loader: Loader<P>,
    input: String,
    actions: BoardActions,
}

impl<P: PuzzleWidget> PuzzleView<P> {
    fn start(&mut self, ctx: &Context<Self>) {
        let generation = self.loader.restart();
        self.input.clear();

        let url = ctx.props().config.endpoint();
        let link = ctx.link().clone();
        log::debug!("fetching puzzle #{} from {}", generation, url);

        spawn_local(async move {
            let result = fetch::fetch_puzzle::<P>(&url).await;
            link.send_message(Msg::Loaded(generation, result));
        });
    }

    fn interact(&mut self, ctx: &Context<Self>, action: impl FnOnce(&mut P) -> Outcome) -> bool {
        let LoadState::Ready(puzzle) = &mut self.loader.state else {
            return false;
        };

        let outcome = action(puzzle);
        if outcome.is_solved() {
            let props = ctx.props();
            props.on_solved.emit(props.config.kind);
        }
        outcome.has_update()
    }

    fn guess_form(&self, ctx: &Context<Self>) -> Html {
        let Some(input_id) = P::INPUT_ID else {
            return html! {};
        };

        let max_len = match &self.loader.state {
            LoadState::Ready(puzzle) => puzzle.input_max_len().map(|len| len.to_string()),
            _ => None,
        };
        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::Input(input.value())
        });
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });
        let can_guess = self.loader.state.can_guess();

        html! {
            <form class="guess" {onsubmit}>
                <input
                    id={input_id}
                    type="text"
                    autocomplete="off"
                    value={self.input.clone()}
                    maxlength={max_len}
                    disabled={!can_guess}
                    {oninput}
                />
                <button id="guess" type="submit" disabled={!can_guess}>{"Guess"}</button>
            </form>
        }
    }
}

impl<P: PuzzleWidget> Component for PuzzleView<P> {
    type Message = Msg<P>;
    type Properties = PuzzleProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Start);
        Self {
            loader: Loader::new(),
            input: String::new(),
            actions: BoardActions {
                on_cell: ctx.link().callback(Msg::CellClick),
                on_hint: ctx.link().callback(Msg::HintClick),
            },
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Start => {
                self.start(ctx);
                true
            }
            Loaded(generation, result) => {
                let accepted = self.loader.accept(generation, result);
                if accepted && matches!(self.loader.state, LoadState::Ready(_)) {
                    log::info!("{} puzzle #{} loaded", ctx.props().config.kind, generation);
                }
                accepted
            }
            CellClick(coords) => self.interact(ctx, |puzzle| puzzle.handle_cell_click(coords)),
            HintClick(index) => self.interact(ctx, |puzzle| puzzle.handle_hint_click(index)),
            Input(value) => {
                self.input = value;
                false
            }
            Submit => {
                let input = self.input.clone();
                log::debug!("guess: {:?}", input);
                self.interact(ctx, |puzzle| puzzle.handle_submit(&input))
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let config = &ctx.props().config;
        let on_start = ctx.link().callback(|_: MouseEvent| Msg::Start);
        let state = &self.loader.state;
        let board = match state {
            LoadState::Ready(puzzle) => puzzle.render_board(config, &self.actions),
            _ => html! {},
        };
        let solved = state.is_solved();

        html! {
            <div class={classes!("puzzle", config.kind.slug(), solved.then_some("solved"))}>
                <button id="start" type="button" onclick={on_start}>{"New puzzle"}</button>
                <p class="status">{state.status(config.kind)}</p>
                <div id="wrapper">{board}</div>
                {self.guess_form(ctx)}
            </div>
        }
    }
}
