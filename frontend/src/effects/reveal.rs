use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

use crate::config;
use crate::dom::{self, Bindings, ObserverBinding};

/// Stagger applied to the `index`-th match of a selector.
pub fn transition_delay(index: usize) -> String {
    format!("{}ms", index as u32 * config::REVEAL_STAGGER_MS)
}

pub fn install(_window: &Window, document: &Document) -> Result<Bindings, JsValue> {
    let observer = ObserverBinding::new(
        config::REVEAL_THRESHOLD,
        Some(config::REVEAL_ROOT_MARGIN),
        |entries, _| {
            for entry in entries.into_iter().filter(|entry| entry.is_intersecting()) {
                dom::add_class(&entry.target(), "visible");
            }
        },
    )?;

    for selector in config::REVEAL_SELECTORS {
        for (index, element) in dom::query_all(document, selector)?.iter().enumerate() {
            dom::add_class(element, "fade-in");
            dom::set_style(element, "transition-delay", &transition_delay(index));
            observer.observe(element);
        }
    }

    let mut bindings = Bindings::default();
    bindings.keep(observer);
    Ok(bindings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_step_by_a_tenth_of_a_second() {
        assert_eq!(transition_delay(0), "0ms");
        assert_eq!(transition_delay(1), "100ms");
        assert_eq!(transition_delay(3), "300ms");
    }
}
