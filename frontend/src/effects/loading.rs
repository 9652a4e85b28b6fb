use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

use crate::dom::{self, Bindings};

/// Adds `loaded` to `<body>` once the window has finished loading. The wasm
/// module can start after `load` already fired, in which case the class is
/// added straight away.
pub fn install(window: &Window, document: &Document) -> Result<Bindings, JsValue> {
    let body = document.body().ok_or_else(|| dom::missing("document body"))?;
    let mut bindings = Bindings::default();

    if document.ready_state() == "complete" {
        dom::add_class(&body, "loaded");
        return Ok(bindings);
    }

    bindings.listen(window, "load", move |_| dom::add_class(&body, "loaded"))?;
    Ok(bindings)
}
