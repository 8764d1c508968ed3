use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use log::debug;
use web_sys::{window, HtmlElement};

use crate::config::NavbarThresholds;
use crate::debounce::{debounce, Debounced};
use crate::dom;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderFlags {
    pub scrolled: bool,
    pub hidden: bool,
}

/// Tracks scroll direction for the header.
#[derive(Debug, Clone)]
pub struct NavbarState {
    last_scroll_y: f64,
    thresholds: NavbarThresholds,
}

impl NavbarState {
    pub fn new(initial_scroll_y: f64, thresholds: NavbarThresholds) -> Self {
        Self {
            last_scroll_y: initial_scroll_y,
            thresholds,
        }
    }

    pub fn update(&mut self, scroll_y: f64) -> HeaderFlags {
        let flags = HeaderFlags {
            scrolled: scroll_y > self.thresholds.compact_after,
            hidden: scroll_y > self.last_scroll_y && scroll_y > self.thresholds.hide_after,
        };
        // Overscroll bounce reports negative offsets
        self.last_scroll_y = scroll_y.max(0.0);
        flags
    }
}

pub struct NavbarEffects {
    _listener: EventListener,
}

impl NavbarEffects {
    pub fn install(selector: &str, thresholds: &NavbarThresholds, debounce_ms: u32) -> Option<Self> {
        let header = dom::query(selector)?;
        let state = Rc::new(RefCell::new(NavbarState::new(dom::scroll_y(), thresholds.clone())));

        let on_scroll: Debounced<()> = debounce(debounce_ms, move |()| {
            let flags = state.borrow_mut().update(dom::scroll_y());
            apply(&header, flags);
        });

        let win = window()?;
        let listener = EventListener::new(&win, "scroll", move |_| on_scroll.call(()));
        debug!("Navbar effects attached to {}", selector);
        Some(Self { _listener: listener })
    }
}

fn apply(header: &HtmlElement, flags: HeaderFlags) {
    dom::set_class(header, "scrolled", flags.scrolled);
    dom::set_class(header, "hidden", flags.hidden);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_at(y: f64) -> NavbarState {
        NavbarState::new(y, NavbarThresholds::default())
    }

    #[test]
    fn test_compact_after_fifty() {
        let mut state = state_at(0.0);
        assert!(!state.update(50.0).scrolled);
        assert!(state.update(51.0).scrolled);
        assert!(!state.update(10.0).scrolled);
    }

    #[test]
    fn test_hidden_only_when_scrolling_down_past_200() {
        let mut state = state_at(0.0);
        assert!(!state.update(150.0).hidden);
        assert!(!state.update(200.0).hidden);
        assert!(state.update(260.0).hidden);
        assert!(state.update(900.0).hidden);
    }

    #[test]
    fn test_scrolling_up_reveals_at_any_offset() {
        let mut state = state_at(0.0);
        assert!(state.update(5_000.0).hidden);
        let flags = state.update(4_990.0);
        assert!(!flags.hidden);
        assert!(flags.scrolled);
    }

    #[test]
    fn test_same_offset_is_not_downward() {
        let mut state = state_at(400.0);
        assert!(!state.update(400.0).hidden);
    }

    #[test]
    fn test_negative_offset_clamped() {
        let mut state = state_at(0.0);
        let flags = state.update(-30.0);
        assert_eq!(flags, HeaderFlags { scrolled: false, hidden: false });
        // Stored as zero, so any positive move past 200 counts as downward
        assert!(state.update(201.0).hidden);
    }
}
