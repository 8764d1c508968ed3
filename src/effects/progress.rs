use std::rc::Rc;

use gloo_events::EventListener;
use log::debug;
use web_sys::{window, HtmlElement};

use crate::debounce::{debounce, Debounced};
use crate::dom;

/// How far down the page we are, 0.0 to 1.0. A page that cannot scroll is at 0.
pub fn scroll_fraction(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    let fraction = scroll_top / scrollable;
    if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

pub fn bar_width(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

fn update(bar: &HtmlElement) {
    let fraction = scroll_fraction(dom::scroll_y(), dom::scroll_height(), dom::viewport_height());
    dom::set_style(bar, "width", &bar_width(fraction));
}

pub struct ScrollProgress {
    _scroll: EventListener,
    _resize: EventListener,
}

impl ScrollProgress {
    pub fn install(selector: &str, resize_debounce_ms: u32) -> Option<Self> {
        let bar = Rc::new(dom::query(selector)?);
        let win = window()?;

        update(&bar);

        let scroll_bar = bar.clone();
        // gloo registers passive listeners by default
        let scroll = EventListener::new(&win, "scroll", move |_| update(&scroll_bar));

        let on_resize: Debounced<()> = debounce(resize_debounce_ms, move |()| update(&bar));
        let resize = EventListener::new(&win, "resize", move |_| on_resize.call(()));

        debug!("Scroll progress bound to {}", selector);
        Some(Self {
            _scroll: scroll,
            _resize: resize,
        })
    }
}
