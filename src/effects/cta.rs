use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::HtmlElement;

use crate::dom;
use crate::error::JsResultExt;

pub const RIPPLE_CLASS: &str = "ripple";

/// Ripple on the call-to-action button, then scroll down to the gallery.
pub struct CtaButton {
    _listener: EventListener,
}

impl CtaButton {
    pub fn install(button_selector: &str, section_id: &str, ripple_ms: u32) -> Option<Self> {
        let button = dom::query(button_selector)?;
        let section_id = section_id.to_string();

        let target = button.clone();
        let listener = EventListener::new(&button, "click", move |_| {
            spawn_ripple(&target, ripple_ms);

            match dom::by_id(&section_id) {
                Some(section) => dom::smooth_scroll_to(&section),
                None => debug!("CTA target #{} not on page", section_id),
            }
        });

        Some(Self { _listener: listener })
    }
}

fn spawn_ripple(button: &HtmlElement, ripple_ms: u32) {
    let Some(document) = dom::document() else {
        return;
    };
    let Some(ripple) = document.create_element("span").or_log("createElement") else {
        return;
    };
    ripple.set_class_name(RIPPLE_CLASS);
    if button.append_child(&ripple).or_log("appendChild").is_none() {
        return;
    }

    // Fire and forget, independent of the CSS animation
    Timeout::new(ripple_ms, move || ripple.remove()).forget();
}
