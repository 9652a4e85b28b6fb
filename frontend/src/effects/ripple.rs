use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, MouseEvent, Window};

use crate::config;
use crate::dom::{self, Bindings};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    /// Square ripple covering the button, centred on the click point. All
    /// coordinates are viewport-relative; the result is relative to the button.
    pub fn centred_on(
        (rect_left, rect_top): (f64, f64),
        (width, height): (f64, f64),
        (client_x, client_y): (f64, f64),
    ) -> Self {
        let size = width.max(height);
        Self {
            size,
            left: client_x - rect_left - size / 2.0,
            top: client_y - rect_top - size / 2.0,
        }
    }
}

pub fn install(_window: &Window, document: &Document) -> Result<Bindings, JsValue> {
    let mut bindings = Bindings::default();

    for button in dom::query_all(document, config::RIPPLE_BUTTON_SELECTOR)? {
        let source = button.clone();
        let document = document.clone();
        bindings.listen(&button, "click", move |event| {
            let Some(click) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            if let Err(err) = spawn_ripple(&document, &source, click) {
                warn!("Ripple failed: {:?}", err);
            }
        })?;
    }

    Ok(bindings)
}

fn spawn_ripple(document: &Document, button: &Element, click: &MouseEvent) -> Result<(), JsValue> {
    let rect = button.get_bounding_client_rect();
    let geometry = RippleGeometry::centred_on(
        (rect.left(), rect.top()),
        (rect.width(), rect.height()),
        (click.client_x() as f64, click.client_y() as f64),
    );

    let ripple = document.create_element("span")?;
    let size = format!("{}px", geometry.size);
    dom::set_style(&ripple, "width", &size);
    dom::set_style(&ripple, "height", &size);
    dom::set_style(&ripple, "left", &format!("{}px", geometry.left));
    dom::set_style(&ripple, "top", &format!("{}px", geometry.top));
    dom::add_class(&ripple, "ripple");
    button.append_child(&ripple)?;

    Timeout::new(config::RIPPLE_LIFETIME_MS, move || ripple.remove()).forget();
    Ok(())
}
