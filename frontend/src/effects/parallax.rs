use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

use crate::config;
use crate::dom::{self, Bindings};

pub fn parallax_transform(scrolled: f64) -> String {
    format!("translateY({}px)", scrolled * config::PARALLAX_RATE)
}

pub fn install(window: &Window, document: &Document) -> Result<Bindings, JsValue> {
    let shapes = dom::query_all(document, config::PARALLAX_SELECTOR)?;
    let mut bindings = Bindings::default();
    if shapes.is_empty() {
        return Ok(bindings);
    }

    let scroll_source = window.clone();
    bindings.listen(window, "scroll", move |_| {
        let transform = parallax_transform(scroll_source.scroll_y().unwrap_or(0.0));
        for shape in &shapes {
            dom::set_style(shape, "transform", &transform);
        }
    })?;

    Ok(bindings)
}
