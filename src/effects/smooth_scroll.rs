use gloo_events::{EventListener, EventListenerOptions};
use log::debug;
use web_sys::Event;

use crate::dom;

/// Turns in-page nav links into smooth scrolls.
pub struct SmoothScroll {
    _listeners: Vec<EventListener>,
}

impl SmoothScroll {
    pub fn install(selector: &str) -> Option<Self> {
        let links = dom::query_all(selector);
        if links.is_empty() {
            return None;
        }

        let listeners: Vec<_> = links
            .iter()
            .map(|link| {
                let anchor = link.clone();
                // Not passive: fragment clicks cancel the browser's jump
                let options = EventListenerOptions::enable_prevent_default();
                EventListener::new_with_options(link, "click", options, move |e: &Event| {
                    let Some(href) = anchor.get_attribute("href") else {
                        return;
                    };
                    // Links to other pages navigate normally
                    let Some(fragment) = href.strip_prefix('#') else {
                        return;
                    };
                    e.prevent_default();

                    match decode_fragment(fragment).and_then(|id| dom::by_id(&id)) {
                        Some(target) => dom::smooth_scroll_to(&target),
                        None => debug!("No scroll target for {}", href),
                    }
                })
            })
            .collect();

        debug!("Smooth scrolling attached to {} links", listeners.len());
        Some(Self { _listeners: listeners })
    }
}

/// Element id named by a URL fragment (without the leading `#`).
pub fn decode_fragment(fragment: &str) -> Option<String> {
    if fragment.is_empty() {
        return None;
    }
    urlencoding::decode(fragment).ok().map(|id| id.into_owned())
}
