use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Storage, Window};

use super::{LanguageCode, LanguagePage, LanguageToggle, PreferenceStore};
use crate::config;
use crate::dom::{self, Bindings};

/// `window.localStorage`. Reads fall back to "absent" and writes are dropped
/// with a warning when storage is blocked.
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    pub fn new(window: &Window) -> Self {
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            warn!("localStorage unavailable, language preference will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(err) = storage.set_item(key, value) {
                warn!("Failed to persist {}={}: {:?}", key, value, err);
            }
        }
    }
}

/// Attribute holding the markup for `code`, e.g. `data-ru`.
pub fn translation_attribute(code: &LanguageCode) -> String {
    format!("data-{}", code)
}

pub struct DomLanguagePage {
    elements: Vec<Element>,
    controls: Vec<Element>,
    root: Option<Element>,
}

impl DomLanguagePage {
    pub fn capture(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            elements: dom::query_all(document, config::TRANSLATABLE_SELECTOR)?,
            controls: dom::query_all(document, config::LANGUAGE_CONTROL_SELECTOR)?,
            root: document.document_element(),
        })
    }

    pub fn controls(&self) -> &[Element] {
        &self.controls
    }
}

impl LanguagePage for DomLanguagePage {
    fn translatable_count(&self) -> usize {
        self.elements.len()
    }

    fn translation(&self, element: usize, code: &LanguageCode) -> Option<String> {
        self.elements[element].get_attribute(&translation_attribute(code))
    }

    fn set_markup(&mut self, element: usize, markup: &str) {
        self.elements[element].set_inner_html(markup);
    }

    fn control_count(&self) -> usize {
        self.controls.len()
    }

    fn control_code(&self, control: usize) -> Option<LanguageCode> {
        self.controls[control].get_attribute("data-lang").map(LanguageCode::new)
    }

    fn set_control_active(&mut self, control: usize, active: bool) {
        let control = &self.controls[control];
        if active {
            dom::add_class(control, "active");
        } else {
            dom::remove_class(control, "active");
        }
    }

    fn set_document_lang(&mut self, tag: &str) {
        if let Some(root) = &self.root {
            if let Err(err) = root.set_attribute("lang", tag) {
                debug!("Failed to set document lang {}: {:?}", tag, err);
            }
        }
    }
}

/// Applies the stored language and routes every control click through one
/// shared toggle.
pub fn install(window: &Window, document: &Document) -> Result<Bindings, JsValue> {
    let page = DomLanguagePage::capture(document)?;
    let controls = page.controls().to_vec();
    debug!(
        "Language toggle: {} translatable elements, {} controls",
        page.translatable_count(),
        controls.len()
    );

    let toggle = Rc::new(RefCell::new(LanguageToggle::new(LocalStorageStore::new(window), page)));
    toggle.borrow_mut().initialize();
    debug!("Language toggle ready: {}", toggle.borrow().current());

    let mut bindings = Bindings::default();
    for control in controls {
        let toggle = toggle.clone();
        let source = control.clone();
        bindings.listen(&control, "click", move |_| {
            if let Some(code) = source.get_attribute("data-lang") {
                toggle.borrow_mut().on_control_activated(&code);
            }
        })?;
    }
    Ok(bindings)
}
