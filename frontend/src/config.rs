use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Host element for the Yew app, appended to <body> when the page has none
pub const MOUNT_ROOT_ID: &str = "page-runtime";

// Language toggle
pub const PREFERENCE_KEY: &str = "preferredLanguage";
pub const DEFAULT_LANGUAGE: &str = "en";
pub const TRANSLATABLE_SELECTOR: &str = "[data-en][data-ru]";
pub const LANGUAGE_CONTROL_SELECTOR: &str = ".lang-btn";

// Navigation
pub const NAV_SELECTOR: &str = ".nav";
pub const NAV_ANCHOR_SELECTOR: &str = ".nav-item[href^=\"#\"]";
pub const SECTION_SELECTOR: &str = ".section[id]";
pub const SECTION_LEAD_IN: f64 = 100.0;

// Scroll reveal
pub const REVEAL_SELECTORS: [&str; 11] = [
    ".section-header",
    ".problem-item",
    ".solution-item",
    ".agent-card",
    ".dashboard-mockup",
    ".dashboard-features",
    ".arch-box",
    ".pricing-card",
    ".table-row",
    ".timeline-item",
    ".benefit-item",
];
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_STAGGER_MS: u32 = 100;

// Parallax
pub const PARALLAX_SELECTOR: &str = ".geo-line, .geo-circle";
pub const PARALLAX_RATE: f64 = -0.5;

// Ripple
pub const RIPPLE_BUTTON_SELECTOR: &str = ".btn-primary, .btn-secondary";
pub const RIPPLE_LIFETIME_MS: u32 = 600;

// Cover typing animation
pub const COVER_SELECTOR: &str = ".cover";
pub const COVER_TITLE_SELECTOR: &str = ".cover-title";
pub const COVER_VISIBLE_THRESHOLD: f64 = 0.5;
pub const TYPING_START_DELAY_MS: u32 = 1000;
pub const TYPING_STEP_MS: u32 = 50;

// Brand colours
pub const LEMON_ACCENT: &str = "#F4E146";
pub const SIGNATURE_BLUE: &str = "#1464F4";
