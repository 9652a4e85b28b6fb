use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Window};

use crate::config::{LEMON_ACCENT, SIGNATURE_BLUE};
use crate::dom::{self, Bindings};

pub fn install(_window: &Window, document: &Document) -> Result<Bindings, JsValue> {
    let mut bindings = Bindings::default();
    lift_agent_cards(document, &mut bindings)?;
    feature_pricing_cards(document, &mut bindings)?;
    highlight_arch_arrows(document, &mut bindings)?;
    highlight_timeline_markers(document, &mut bindings)?;
    Ok(bindings)
}

/// Binds `mouseenter`/`mouseleave` on every match of `selector` to `apply(element, hovered)`.
fn on_hover(
    document: &Document,
    bindings: &mut Bindings,
    selector: &str,
    apply: fn(&Element, bool),
) -> Result<(), JsValue> {
    for element in dom::query_all(document, selector)? {
        for (event, hovered) in [("mouseenter", true), ("mouseleave", false)] {
            let source = element.clone();
            bindings.listen(&element, event, move |_| apply(&source, hovered))?;
        }
    }
    Ok(())
}

fn lift_agent_cards(document: &Document, bindings: &mut Bindings) -> Result<(), JsValue> {
    on_hover(document, bindings, ".agent-card", |card, hovered| {
        let transform = if hovered {
            "translateY(-10px) scale(1.02)"
        } else {
            "translateY(0) scale(1)"
        };
        dom::set_style(card, "transform", transform);
    })
}

fn highlight_arch_arrows(document: &Document, bindings: &mut Bindings) -> Result<(), JsValue> {
    on_hover(document, bindings, ".arch-box", |arch_box, hovered| {
        let arrow = arch_box
            .parent_element()
            .and_then(|parent| parent.query_selector(".arch-arrow").ok().flatten());
        if let Some(arrow) = arrow {
            let (scale, color) = if hovered {
                ("scale(1.2)", LEMON_ACCENT)
            } else {
                ("scale(1)", SIGNATURE_BLUE)
            };
            dom::set_style(&arrow, "transform", scale);
            dom::set_style(&arrow, "color", color);
        }
    })
}

fn highlight_timeline_markers(document: &Document, bindings: &mut Bindings) -> Result<(), JsValue> {
    on_hover(document, bindings, ".timeline-marker", |marker, hovered| {
        let (scale, background) = if hovered {
            ("scale(1.1)", LEMON_ACCENT)
        } else {
            ("scale(1)", SIGNATURE_BLUE)
        };
        dom::set_style(marker, "transform", scale);
        dom::set_style(marker, "background", background);
    })
}

/// Clicking a regular pricing card moves the `featured` highlight onto it.
fn feature_pricing_cards(document: &Document, bindings: &mut Bindings) -> Result<(), JsValue> {
    for card in dom::query_all(document, ".pricing-card:not(.featured)")? {
        let source = card.clone();
        let document = document.clone();
        bindings.listen(&card, "click", move |_| {
            if let Ok(cards) = dom::query_all(&document, ".pricing-card") {
                for other in &cards {
                    dom::remove_class(other, "featured");
                }
            }
            dom::add_class(&source, "featured");
        })?;
    }
    Ok(())
}
