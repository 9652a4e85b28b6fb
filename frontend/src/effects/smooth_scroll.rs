use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::config;
use crate::dom::{self, Bindings};

/// Scroll position that puts a section's top edge just below the fixed nav.
pub fn scroll_target(offset_top: f64, nav_height: f64) -> f64 {
    offset_top - nav_height
}

pub fn install(window: &Window, document: &Document) -> Result<Bindings, JsValue> {
    let mut bindings = Bindings::default();

    for link in dom::query_all(document, config::NAV_ANCHOR_SELECTOR)? {
        let source = link.clone();
        let window = window.clone();
        let document = document.clone();
        bindings.listen(&link, "click", move |event| {
            event.prevent_default();

            let Some(target_id) = source.get_attribute("href") else {
                return;
            };
            // A bare "#" is not a valid selector; treat it like a missing target.
            let target = document
                .query_selector(&target_id)
                .ok()
                .flatten()
                .and_then(|element| element.dyn_into::<HtmlElement>().ok());

            if let Some(target) = target {
                let options = ScrollToOptions::new();
                options.set_top(scroll_target(target.offset_top() as f64, dom::nav_height(&document)));
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
        })?;
    }

    Ok(bindings)
}
