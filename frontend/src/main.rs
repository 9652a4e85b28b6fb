use yew::prelude::*;
use log::{debug, error, info};
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

mod config;
mod dom;
mod language;
/// Decorative behaviours. Each `install` attaches its listeners to the
/// pre-rendered markup and hands them back as [`Bindings`].
mod effects {
    pub mod hover;
    pub mod loading;
    pub mod nav_highlight;
    pub mod parallax;
    pub mod reveal;
    pub mod ripple;
    pub mod smooth_scroll;
    pub mod styles;
    pub mod typing;
}

use dom::Bindings;

type Installer = fn(&Window, &Document) -> Result<Bindings, JsValue>;

const BEHAVIOURS: [(&str, Installer); 9] = [
    ("scroll reveal", effects::reveal::install),
    ("smooth scrolling", effects::smooth_scroll::install),
    ("hover interactions", effects::hover::install),
    ("button ripple", effects::ripple::install),
    ("navigation highlight", effects::nav_highlight::install),
    ("language toggle", language::browser::install),
    ("parallax", effects::parallax::install),
    ("cover typing", effects::typing::install),
    ("loading state", effects::loading::install),
];

/// Attaches every behaviour to the pre-rendered page. A behaviour that fails
/// to install is logged and skipped.
fn install_behaviours() -> Bindings {
    let mut bindings = Bindings::default();
    let (window, document) = match dom::window().and_then(|w| dom::document(&w).map(|d| (w, d))) {
        Ok(globals) => globals,
        Err(err) => {
            error!("Cannot attach page behaviours: {:?}", err);
            return bindings;
        }
    };

    for (name, install) in BEHAVIOURS {
        match install(&window, &document) {
            Ok(installed) if installed.is_empty() => debug!("Nothing to attach for {}", name),
            Ok(installed) => {
                debug!("Installed {} ({} bindings)", name, installed.len());
                bindings.extend(installed);
            }
            Err(err) => error!("Failed to install {}: {:?}", name, err),
        }
    }
    bindings
}

#[function_component]
fn App() -> Html {
    use_effect_with_deps(
        move |_| {
            let bindings = install_behaviours();
            move || drop(bindings)
        },
        (), // Install once on mount
    );

    html! {
        <style>{effects::styles::RUNTIME_STYLES}</style>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting presentation page");
    let root = match dom::window().and_then(|w| dom::document(&w)).and_then(|d| dom::mount_root(&d)) {
        Ok(root) => root,
        Err(err) => {
            error!("Cannot create app root: {:?}", err);
            return;
        }
    };
    yew::Renderer::<App>::with_root(root).render();
}
