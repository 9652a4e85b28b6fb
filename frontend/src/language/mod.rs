//! Bilingual text toggle.
//!
//! The page ships every translatable node pre-rendered with one markup payload
//! per language (`data-en`, `data-ru`). [`LanguageToggle`] keeps the visible
//! markup, the highlighted language control and the document `lang` tag in
//! step with a single current language, persisted across page loads through a
//! [`PreferenceStore`].

pub mod browser;

use std::fmt;

use log::info;

use crate::config;

/// A language code as written in the page markup (`en`, `ru`, ...).
///
/// Codes are not validated: an unknown code is still looked up, it just
/// matches no translations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the document-wide `lang` attribute.
    ///
    /// Only `ru` is kept as-is; every other code, known or not, maps to `en`.
    pub fn document_lang(&self) -> &'static str {
        match self.0.as_str() {
            "ru" => "ru",
            _ => "en",
        }
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self::new(config::DEFAULT_LANGUAGE)
    }
}

impl From<&str> for LanguageCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Key-value store that survives page loads.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// The parts of the page the toggle reads and mutates.
///
/// Elements and controls are addressed by their position in the snapshot the
/// page took when it was created.
pub trait LanguagePage {
    fn translatable_count(&self) -> usize;
    fn translation(&self, element: usize, code: &LanguageCode) -> Option<String>;
    fn set_markup(&mut self, element: usize, markup: &str);

    fn control_count(&self) -> usize;
    fn control_code(&self, control: usize) -> Option<LanguageCode>;
    fn set_control_active(&mut self, control: usize, active: bool);

    fn set_document_lang(&mut self, tag: &str);
}

pub struct LanguageToggle<S, P> {
    store: S,
    page: P,
    current: LanguageCode,
}

impl<S: PreferenceStore, P: LanguagePage> LanguageToggle<S, P> {
    pub fn new(store: S, page: P) -> Self {
        Self {
            store,
            page,
            current: LanguageCode::default(),
        }
    }

    /// Applies the stored preference (or the default language) to the page.
    /// Reads the store but never writes it.
    pub fn initialize(&mut self) {
        let code = self
            .store
            .get(config::PREFERENCE_KEY)
            .filter(|stored| !stored.is_empty())
            .map(LanguageCode::new)
            .unwrap_or_default();

        info!("Initializing page language: {}", code);
        self.switch_language(&code);
        self.current = code;
    }

    /// Handles a click on the language control tagged `code`.
    ///
    /// Returns `false` without touching the page or the store when `code` is
    /// already the current language.
    pub fn on_control_activated(&mut self, code: &str) -> bool {
        if code == self.current.as_str() {
            return false;
        }

        let code = LanguageCode::new(code);
        info!("Switching page language: {} -> {}", self.current, code);
        self.switch_language(&code);
        self.store.set(config::PREFERENCE_KEY, code.as_str());
        self.current = code;
        true
    }

    pub fn switch_language(&mut self, code: &LanguageCode) {
        for element in 0..self.page.translatable_count() {
            // Elements without a payload for `code` keep whatever they show now.
            if let Some(markup) = self.page.translation(element, code).filter(|m| !m.is_empty()) {
                self.page.set_markup(element, &markup);
            }
        }

        for control in 0..self.page.control_count() {
            let active = self.page.control_code(control).as_ref() == Some(code);
            self.page.set_control_active(control, active);
        }

        self.page.set_document_lang(code.document_lang());
    }

    pub fn current(&self) -> &LanguageCode {
        &self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        values: HashMap<String, String>,
        writes: usize,
    }

    impl MemoryStore {
        fn with(key: &str, value: &str) -> Self {
            let mut store = Self::default();
            store.values.insert(key.to_string(), value.to_string());
            store
        }
    }

    impl PreferenceStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.values.get(key).cloned()
        }

        fn set(&mut self, key: &str, value: &str) {
            self.writes += 1;
            self.values.insert(key.to_string(), value.to_string());
        }
    }

    struct FakeElement {
        content_by_lang: HashMap<String, String>,
        rendered: String,
    }

    struct FakeControl {
        code: Option<String>,
        active: bool,
    }

    #[derive(Default)]
    struct FakePage {
        elements: Vec<FakeElement>,
        controls: Vec<FakeControl>,
        document_lang: Option<String>,
    }

    impl FakePage {
        fn element(mut self, rendered: &str, translations: &[(&str, &str)]) -> Self {
            self.elements.push(FakeElement {
                content_by_lang: translations
                    .iter()
                    .map(|(code, markup)| (code.to_string(), markup.to_string()))
                    .collect(),
                rendered: rendered.to_string(),
            });
            self
        }

        fn control(mut self, code: &str) -> Self {
            self.controls.push(FakeControl {
                code: Some(code.to_string()),
                active: false,
            });
            self
        }

        fn rendered(&self) -> Vec<&str> {
            self.elements.iter().map(|e| e.rendered.as_str()).collect()
        }

        fn active_controls(&self) -> Vec<&str> {
            self.controls
                .iter()
                .filter(|c| c.active)
                .filter_map(|c| c.code.as_deref())
                .collect()
        }
    }

    impl LanguagePage for FakePage {
        fn translatable_count(&self) -> usize {
            self.elements.len()
        }

        fn translation(&self, element: usize, code: &LanguageCode) -> Option<String> {
            self.elements[element].content_by_lang.get(code.as_str()).cloned()
        }

        fn set_markup(&mut self, element: usize, markup: &str) {
            self.elements[element].rendered = markup.to_string();
        }

        fn control_count(&self) -> usize {
            self.controls.len()
        }

        fn control_code(&self, control: usize) -> Option<LanguageCode> {
            self.controls[control].code.as_deref().map(LanguageCode::from)
        }

        fn set_control_active(&mut self, control: usize, active: bool) {
            self.controls[control].active = active;
        }

        fn set_document_lang(&mut self, tag: &str) {
            self.document_lang = Some(tag.to_string());
        }
    }

    fn bilingual_page() -> FakePage {
        FakePage::default()
            .element("Hello", &[("en", "Hello"), ("ru", "Привет")])
            .element("<b>Pricing</b>", &[("en", "<b>Pricing</b>"), ("ru", "<b>Цены</b>")])
            .control("en")
            .control("ru")
    }

    #[test]
    fn switch_replaces_markup_with_translation() {
        let mut toggle = LanguageToggle::new(MemoryStore::default(), bilingual_page());
        toggle.switch_language(&LanguageCode::from("ru"));

        assert_eq!(toggle.page.rendered(), vec!["Привет", "<b>Цены</b>"]);
    }

    #[test]
    fn switch_keeps_content_without_translation() {
        let page = bilingual_page().element("Only English", &[("en", "Only English")]);
        let mut toggle = LanguageToggle::new(MemoryStore::default(), page);
        toggle.switch_language(&LanguageCode::from("ru"));

        assert_eq!(toggle.page.rendered(), vec!["Привет", "<b>Цены</b>", "Only English"]);
    }

    #[test]
    fn empty_translation_is_treated_as_missing() {
        let page = FakePage::default()
            .element("Hello", &[("en", "Hello"), ("ru", "")])
            .control("en");
        let mut toggle = LanguageToggle::new(MemoryStore::default(), page);
        toggle.switch_language(&LanguageCode::from("ru"));

        assert_eq!(toggle.page.rendered(), vec!["Hello"]);
    }

    #[test]
    fn switch_marks_only_matching_controls_active() {
        let mut toggle = LanguageToggle::new(MemoryStore::default(), bilingual_page());
        toggle.switch_language(&LanguageCode::from("ru"));
        assert_eq!(toggle.page.active_controls(), vec!["ru"]);

        toggle.switch_language(&LanguageCode::from("en"));
        assert_eq!(toggle.page.active_controls(), vec!["en"]);

        toggle.switch_language(&LanguageCode::from("de"));
        assert!(toggle.page.active_controls().is_empty());
    }

    #[test]
    fn duplicated_controls_are_all_highlighted() {
        let page = bilingual_page().control("ru");
        let mut toggle = LanguageToggle::new(MemoryStore::default(), page);
        toggle.switch_language(&LanguageCode::from("ru"));

        assert_eq!(toggle.page.active_controls(), vec!["ru", "ru"]);
    }

    #[test]
    fn control_without_code_is_never_active() {
        let mut page = bilingual_page();
        page.controls.push(FakeControl { code: None, active: true });
        let mut toggle = LanguageToggle::new(MemoryStore::default(), page);
        toggle.switch_language(&LanguageCode::from("en"));

        assert!(!toggle.page.controls[2].active);
    }

    #[test]
    fn switch_is_idempotent() {
        let mut toggle = LanguageToggle::new(MemoryStore::default(), bilingual_page());
        toggle.switch_language(&LanguageCode::from("ru"));
        let rendered: Vec<String> = toggle.page.rendered().iter().map(|s| s.to_string()).collect();
        let active: Vec<String> = toggle.page.active_controls().iter().map(|s| s.to_string()).collect();

        toggle.switch_language(&LanguageCode::from("ru"));

        assert_eq!(toggle.page.rendered(), rendered);
        assert_eq!(toggle.page.active_controls(), active);
        assert_eq!(toggle.page.document_lang.as_deref(), Some("ru"));
    }

    #[test]
    fn document_lang_keeps_only_russian() {
        assert_eq!(LanguageCode::from("ru").document_lang(), "ru");
        assert_eq!(LanguageCode::from("en").document_lang(), "en");
        assert_eq!(LanguageCode::from("fr").document_lang(), "en");
        assert_eq!(LanguageCode::from("RU").document_lang(), "en");
        assert_eq!(LanguageCode::from("").document_lang(), "en");
    }

    #[test]
    fn unknown_code_sets_english_document_tag() {
        let mut toggle = LanguageToggle::new(MemoryStore::default(), bilingual_page());
        toggle.switch_language(&LanguageCode::from("ru"));
        toggle.switch_language(&LanguageCode::from("fr"));

        assert_eq!(toggle.page.document_lang.as_deref(), Some("en"));
        assert_eq!(toggle.page.rendered(), vec!["Привет", "<b>Цены</b>"]);
    }

    #[test]
    fn initialize_without_preference_uses_english() {
        let page = FakePage::default()
            .element("placeholder", &[("en", "Hello"), ("ru", "Привет")])
            .control("en")
            .control("ru");
        let mut toggle = LanguageToggle::new(MemoryStore::default(), page);
        toggle.initialize();

        assert_eq!(toggle.current().as_str(), "en");
        assert_eq!(toggle.page.rendered(), vec!["Hello"]);
        assert_eq!(toggle.page.active_controls(), vec!["en"]);
        assert_eq!(toggle.page.document_lang.as_deref(), Some("en"));
        assert_eq!(toggle.store.writes, 0);
    }

    #[test]
    fn initialize_with_empty_preference_uses_english() {
        let store = MemoryStore::with(config::PREFERENCE_KEY, "");
        let mut toggle = LanguageToggle::new(store, bilingual_page());
        toggle.initialize();

        assert_eq!(toggle.current().as_str(), "en");
        assert_eq!(toggle.page.active_controls(), vec!["en"]);
    }

    #[test]
    fn initialize_with_russian_preference() {
        let store = MemoryStore::with(config::PREFERENCE_KEY, "ru");
        let mut toggle = LanguageToggle::new(store, bilingual_page());
        toggle.initialize();

        assert_eq!(toggle.current().as_str(), "ru");
        assert_eq!(toggle.page.rendered(), vec!["Привет", "<b>Цены</b>"]);
        assert_eq!(toggle.page.active_controls(), vec!["ru"]);
        assert_eq!(toggle.page.document_lang.as_deref(), Some("ru"));
        assert_eq!(toggle.store.writes, 0);
    }

    #[test]
    fn initialize_with_unknown_preference_keeps_text() {
        let store = MemoryStore::with(config::PREFERENCE_KEY, "de");
        let mut toggle = LanguageToggle::new(store, bilingual_page());
        toggle.initialize();

        assert_eq!(toggle.current().as_str(), "de");
        assert_eq!(toggle.page.rendered(), vec!["Hello", "<b>Pricing</b>"]);
        assert!(toggle.page.active_controls().is_empty());
        assert_eq!(toggle.page.document_lang.as_deref(), Some("en"));
    }

    #[test]
    fn activating_current_language_writes_nothing() {
        let mut toggle = LanguageToggle::new(MemoryStore::default(), bilingual_page());
        toggle.initialize();
        toggle.page.set_markup(0, "edited");

        assert!(!toggle.on_control_activated("en"));
        assert_eq!(toggle.store.writes, 0);
        assert_eq!(toggle.page.rendered()[0], "edited");
    }

    #[test]
    fn activating_other_language_switches_and_persists() {
        let mut toggle = LanguageToggle::new(MemoryStore::default(), bilingual_page());
        toggle.initialize();

        assert!(toggle.on_control_activated("ru"));
        assert_eq!(toggle.current().as_str(), "ru");
        assert_eq!(toggle.page.rendered(), vec!["Привет", "<b>Цены</b>"]);
        assert_eq!(toggle.page.active_controls(), vec!["ru"]);
        assert_eq!(toggle.page.document_lang.as_deref(), Some("ru"));
        assert_eq!(toggle.store.writes, 1);
        assert_eq!(toggle.store.get(config::PREFERENCE_KEY).as_deref(), Some("ru"));

        assert!(toggle.on_control_activated("en"));
        assert_eq!(toggle.page.rendered(), vec!["Hello", "<b>Pricing</b>"]);
        assert_eq!(toggle.page.document_lang.as_deref(), Some("en"));
        assert_eq!(toggle.store.writes, 2);
    }

    #[test]
    fn activating_unsupported_language_still_persists_it() {
        let mut toggle = LanguageToggle::new(MemoryStore::default(), bilingual_page());
        toggle.initialize();

        assert!(toggle.on_control_activated("fr"));
        assert_eq!(toggle.store.get(config::PREFERENCE_KEY).as_deref(), Some("fr"));
        assert_eq!(toggle.page.document_lang.as_deref(), Some("en"));
        assert_eq!(toggle.page.rendered(), vec!["Hello", "<b>Pricing</b>"]);
    }
}
