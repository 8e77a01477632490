use lettergrid_core::{CellFlags, Coord, Coord2, GridCell};
use ndarray::Array2;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LetterGridProps {
    pub cells: Array2<GridCell>,
    #[prop_or_default]
    pub active_row: Option<Coord>,
    #[prop_or_default]
    pub onclick: Option<Callback<Coord2>>,
}

/// Classes for the `<td>` and the inner letter `<div>` of a cell.
pub(crate) fn cell_classes(flags: CellFlags) -> (Classes, Classes) {
    let mut td = classes!();
    if flags.contains(CellFlags::USED) {
        td.push("letter-used");
    }
    if flags.contains(CellFlags::DROP_TARGET) {
        td.push("letter-add");
    }

    let mut letter = classes!("letter");
    if flags.contains(CellFlags::GUESS) {
        letter.push("letter-guess");
    }
    if flags.contains(CellFlags::OPEN) {
        letter.push("letter-open");
    }
    if flags.contains(CellFlags::FILLED) {
        letter.push("letter-added");
    }

    (td, letter)
}

/// Reads the cell position stored on the letter element, `None` unless both parse.
pub(crate) fn coords_from_data(row: Option<&str>, column: Option<&str>) -> Option<Coord2> {
    Some((row?.trim().parse().ok()?, column?.trim().parse().ok()?))
}

fn clicked_coords(event: &MouseEvent) -> Option<Coord2> {
    let target: Element = event.target()?.dyn_into().ok()?;
    let cell = target.closest("td").ok()??;
    let letter = cell.query_selector("[data-row]").ok()??;
    coords_from_data(
        letter.get_attribute("data-row").as_deref(),
        letter.get_attribute("data-column").as_deref(),
    )
}

fn cell_html(row: usize, column: usize, cell: GridCell) -> Html {
    let (td_class, letter_class) = cell_classes(cell.flags);
    let letter = cell.letter.to_string();

    html! {
        <td class={td_class}>
            <div
                class={letter_class}
                data-row={row.to_string()}
                data-column={column.to_string()}
                data-letter={letter.clone()}
            >
                {letter}
            </div>
        </td>
    }
}

/// Letter table shared by the grid puzzles. Clicks are resolved through the cell's
/// `data-row`/`data-column` attributes, anything else is ignored.
#[function_component]
pub(crate) fn LetterGrid(props: &LetterGridProps) -> Html {
    let onclick = props.onclick.clone().map(|callback| {
        Callback::from(move |e: MouseEvent| match clicked_coords(&e) {
            Some(coords) => {
                log::trace!("cell click {:?}", coords);
                callback.emit(coords);
            }
            None => log::trace!("click outside of a cell ignored"),
        })
    });
    let active_row = props.active_row.map(usize::from);

    html! {
        <table class="letter-grid" {onclick}>
            {
                for props.cells.outer_iter().enumerate().map(|(row, cells)| {
                    let class = classes!((active_row == Some(row)).then_some("letter-active"));
                    html! {
                        <tr {class}>
                            {
                                for cells
                                    .iter()
                                    .enumerate()
                                    .map(|(column, &cell)| cell_html(row, column, cell))
                            }
                        </tr>
                    }
                })
            }
        </table>
    }
}
