use yew::prelude::*;

/// One entry of the hint list next to the grid.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct HintChip {
    pub id: String,
    pub label: String,
    /// Found (word-finder) or placed on the grid (word-square).
    pub used: bool,
    pub selected: bool,
}

impl HintChip {
    pub(crate) fn classes(&self) -> Classes {
        classes!(
            "hint",
            self.used.then_some("letter-used"),
            self.selected.then_some("letter-selected")
        )
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct HintTrayProps {
    pub chips: Vec<HintChip>,
    #[prop_or_default]
    pub onclick: Option<Callback<usize>>,
}

#[function_component]
pub(crate) fn HintTray(props: &HintTrayProps) -> Html {
    html! {
        <div id="hints">
            {
                for props.chips.iter().enumerate().map(|(index, chip)| {
                    let onclick = props
                        .onclick
                        .clone()
                        .map(|callback| Callback::from(move |_: MouseEvent| callback.emit(index)));
                    html! {
                        <div
                            class={chip.classes()}
                            data-hint-id={chip.id.clone()}
                            data-hint={chip.label.clone()}
                            {onclick}
                        >
                            {chip.label.clone()}
                        </div>
                    }
                })
            }
        </div>
    }
}
