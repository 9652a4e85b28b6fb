use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, Window};

use crate::config;
use crate::dom::{self, Bindings};

pub struct SectionBounds<'a> {
    pub id: &'a str,
    pub top: f64,
    pub height: f64,
}

/// Id of the section the reader is in. When several ranges overlap the last
/// section in document order wins.
pub fn current_section<'a>(
    sections: &[SectionBounds<'a>],
    scroll_y: f64,
    nav_height: f64,
) -> Option<&'a str> {
    sections
        .iter()
        .filter(|section| {
            let start = section.top - nav_height - config::SECTION_LEAD_IN;
            scroll_y >= start && scroll_y < start + section.height
        })
        .last()
        .map(|section| section.id)
}

/// `href` of the nav item to highlight. Outside every section this is a bare
/// `#`, so only a link pointing at the page top lights up.
pub fn active_href(current: Option<&str>) -> String {
    format!("#{}", current.unwrap_or(""))
}

pub fn install(window: &Window, document: &Document) -> Result<Bindings, JsValue> {
    let nav_items = dom::query_all(document, config::NAV_ANCHOR_SELECTOR)?;
    let sections: Vec<(String, HtmlElement)> = dom::query_all(document, config::SECTION_SELECTOR)?
        .into_iter()
        .filter_map(|section| {
            let id = section.get_attribute("id")?;
            Some((id, section.dyn_into::<HtmlElement>().ok()?))
        })
        .collect();

    let mut bindings = Bindings::default();
    let scroll_source = window.clone();
    let document = document.clone();
    bindings.listen(window, "scroll", move |_| {
        let scroll_y = scroll_source.scroll_y().unwrap_or(0.0);
        let bounds: Vec<SectionBounds> = sections
            .iter()
            .map(|(id, section)| SectionBounds {
                id: id.as_str(),
                top: section.offset_top() as f64,
                height: section.client_height() as f64,
            })
            .collect();
        let active = active_href(current_section(&bounds, scroll_y, dom::nav_height(&document)));

        for item in &nav_items {
            dom::remove_class(item, "active");
            if item.get_attribute("href").as_deref() == Some(active.as_str()) {
                dom::add_class(item, "active");
            }
        }
    })?;

    Ok(bindings)
}
