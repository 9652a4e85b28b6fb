use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, SvgElement, Window,
};

use crate::config;

pub fn missing(what: &str) -> JsValue {
    JsValue::from_str(&format!("{} is not available", what))
}

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| missing("window"))
}

pub fn document(window: &Window) -> Result<Document, JsValue> {
    window.document().ok_or_else(|| missing("document"))
}

/// Static snapshot of every element matching `selector`.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn query_html(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

/// Height of the fixed navigation bar, or zero when the page has none.
pub fn nav_height(document: &Document) -> f64 {
    query_html(document, config::NAV_SELECTOR)
        .map(|nav| nav.offset_height() as f64)
        .unwrap_or(0.0)
}

/// Sets an inline style property on HTML and SVG elements alike.
pub fn set_style(element: &Element, property: &str, value: &str) {
    let style = if let Some(html) = element.dyn_ref::<HtmlElement>() {
        html.style()
    } else if let Some(svg) = element.dyn_ref::<SvgElement>() {
        svg.style()
    } else {
        return;
    };
    if let Err(err) = style.set_property(property, value) {
        debug!("Failed to set {}: {}: {:?}", property, value, err);
    }
}

pub fn add_class(element: &Element, class: &str) {
    if let Err(err) = element.class_list().add_1(class) {
        debug!("Failed to add class {}: {:?}", class, err);
    }
}

pub fn remove_class(element: &Element, class: &str) {
    if let Err(err) = element.class_list().remove_1(class) {
        debug!("Failed to remove class {}: {:?}", class, err);
    }
}

/// Element the Yew app renders into. Yew empties its host on mount, so the
/// app gets its own `<div>` at the end of `<body>` and the page markup is
/// left alone.
pub fn mount_root(document: &Document) -> Result<Element, JsValue> {
    if let Some(existing) = document.get_element_by_id(config::MOUNT_ROOT_ID) {
        return Ok(existing);
    }
    let body = document.body().ok_or_else(|| missing("document body"))?;
    let root = document.create_element("div")?;
    root.set_id(config::MOUNT_ROOT_ID);
    body.append_child(&root)?;
    Ok(root)
}

struct EventBinding {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Drop for EventBinding {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

pub struct ObserverBinding {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ObserverBinding {
    pub fn new<F>(threshold: f64, root_margin: Option<&str>, mut handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Vec<IntersectionObserverEntry>, &IntersectionObserver) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let entries = entries
                .iter()
                .map(|entry| entry.unchecked_into::<IntersectionObserverEntry>())
                .collect();
            handler(entries, &observer);
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            options.set_root_margin(margin);
        }
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for ObserverBinding {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Listeners and observers installed on the page. Dropping the set detaches them.
#[derive(Default)]
pub struct Bindings {
    events: Vec<EventBinding>,
    observers: Vec<ObserverBinding>,
}

impl Bindings {
    pub fn listen<F>(&mut self, target: &EventTarget, event: &'static str, handler: F) -> Result<(), JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        self.events.push(EventBinding {
            target: target.clone(),
            event,
            callback,
        });
        Ok(())
    }

    pub fn keep(&mut self, observer: ObserverBinding) {
        self.observers.push(observer);
    }

    pub fn extend(&mut self, other: Bindings) {
        let Bindings { events, observers } = other;
        self.events.extend(events);
        self.observers.extend(observers);
    }

    pub fn len(&self) -> usize {
        self.events.len() + self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.observers.is_empty()
    }
}
