use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Window};

use crate::config;
use crate::dom::{self, Bindings, ObserverBinding};

/// Reveals a piece of text one character at a time.
#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
        }
    }

    /// Next visible prefix, or `None` once the full text is shown.
    pub fn advance(&mut self) -> Option<String> {
        if self.shown >= self.chars.len() {
            return None;
        }
        self.shown += 1;
        Some(self.chars[..self.shown].iter().collect())
    }
}

/// Types out the cover title the first time the cover scrolls into view.
pub fn install(_window: &Window, document: &Document) -> Result<Bindings, JsValue> {
    let mut bindings = Bindings::default();
    let Some(cover) = document.query_selector(config::COVER_SELECTOR)? else {
        return Ok(bindings);
    };

    let source = document.clone();
    let observer = ObserverBinding::new(config::COVER_VISIBLE_THRESHOLD, None, move |entries, observer| {
        for entry in entries.into_iter().filter(|entry| entry.is_intersecting()) {
            observer.unobserve(&entry.target());
            start(&source);
        }
    })?;
    observer.observe(&cover);
    bindings.keep(observer);
    Ok(bindings)
}

fn start(document: &Document) {
    let Some(title) = dom::query_html(document, config::COVER_TITLE_SELECTOR) else {
        return;
    };

    let writer = Typewriter::new(&title.text_content().unwrap_or_default());
    title.set_text_content(Some(""));
    dom::set_style(&title, "opacity", "1");

    let title: Element = title.into();
    Timeout::new(config::TYPING_START_DELAY_MS, move || type_next(title, writer)).forget();
}

fn type_next(title: Element, mut writer: Typewriter) {
    if let Some(text) = writer.advance() {
        title.set_text_content(Some(&text));
        Timeout::new(config::TYPING_STEP_MS, move || type_next(title, writer)).forget();
    }
}
