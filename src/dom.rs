//! Thin helpers over `web_sys` shared by the page effects.
//!
//! Lookups return `Option`/`Vec` so a missing element is just "nothing to do";
//! failing JS calls are logged through [`JsResultExt`].

use wasm_bindgen::JsCast;
use web_sys::{
    window, Document, Element, HtmlElement, NodeList, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

use crate::error::JsResultExt;

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

pub fn query(selector: &str) -> Option<HtmlElement> {
    document()?
        .query_selector(selector)
        .or_log("querySelector")
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn query_all(selector: &str) -> Vec<HtmlElement> {
    document()
        .and_then(|doc| doc.query_selector_all(selector).or_log("querySelectorAll"))
        .map(collect_elements)
        .unwrap_or_default()
}

pub fn query_all_in(parent: &Element, selector: &str) -> Vec<HtmlElement> {
    parent
        .query_selector_all(selector)
        .or_log("querySelectorAll")
        .map(collect_elements)
        .unwrap_or_default()
}

pub fn by_id(id: &str) -> Option<HtmlElement> {
    document()?
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn collect_elements(list: NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0)
}

pub fn scroll_y() -> f64 {
    if let Some(y) = window().and_then(|w| w.scroll_y().ok()) {
        return y;
    }
    document()
        .and_then(|doc| doc.document_element())
        .map(|root| root.scroll_top() as f64)
        .unwrap_or(0.0)
}

pub fn scroll_height() -> f64 {
    document()
        .and_then(|doc| doc.document_element())
        .map(|root| root.scroll_height() as f64)
        .unwrap_or(0.0)
}

/// Smoothly scrolls `el` so its top edge lines up with the viewport top.
pub fn smooth_scroll_to(el: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    let classes = el.class_list();
    let result = if on {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    result.or_log("classList update");
}

pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

pub fn toggle_class(el: &Element, class: &str) -> Option<bool> {
    el.class_list().toggle(class).or_log("classList.toggle")
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    el.style()
        .set_property(property, value)
        .or_log("style.setProperty");
}
