use wasm_bindgen::prelude::*;

mod app;
mod config;
mod fetch;
mod grid;
mod hints;
mod image;
mod puzzle;
mod word_finder;
mod word_ladder;
mod word_square;

use config::{Args, HostAttributes, WidgetConfig};

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let parsed = Args::from_location_hash(&location_hash);
    let log_level = match &parsed {
        Ok(args) => args.verbose.log_level(),
        Err(_) => Some(log::Level::Warn),
    };
    if let Some(log_level) = log_level {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    let args = parsed.unwrap_or_else(|err| {
        log::warn!("ignoring location hash: {}", err);
        Args::fallback()
    });

    let Some(root) = document().get_element_by_id("puzzle") else {
        log::error!("Could not find id=\"puzzle\" element");
        return;
    };

    let config = match WidgetConfig::resolve(&args, &HostAttributes::from_element(&root)) {
        Ok(config) => config,
        Err(err) => {
            log::error!("{}", err);
            return;
        }
    };

    log::debug!("App started: {:?}", config);
    yew::Renderer::<app::App>::with_root_and_props(root, app::AppProps { config }).render();
}
