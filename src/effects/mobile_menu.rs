use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, KeyboardEvent};

use crate::dom;
use crate::error::JsResultExt;

/// Open/closed state of the mobile navigation panel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Returns false when the menu was already closed.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }
}

#[derive(Clone)]
struct MenuDom {
    toggle: HtmlElement,
    panel: HtmlElement,
    state: Rc<RefCell<MenuState>>,
}

impl MenuDom {
    fn sync(&self) {
        let state = *self.state.borrow();
        dom::set_class(&self.panel, "open", state.is_open());
        self.toggle
            .set_attribute("aria-expanded", state.aria_expanded())
            .or_log("setAttribute aria-expanded");
    }

    fn close(&self) {
        if self.state.borrow_mut().close() {
            self.sync();
        }
    }
}

pub struct MobileMenu {
    _listeners: Vec<EventListener>,
}

impl MobileMenu {
    pub fn install(toggle_selector: &str, panel_id: &str) -> Option<Self> {
        let toggle = dom::query(toggle_selector)?;
        let panel = dom::by_id(panel_id)?;
        let document = dom::document()?;

        let initially_open = dom::has_class(&panel, "open");
        let menu = MenuDom {
            toggle: toggle.clone(),
            panel: panel.clone(),
            state: Rc::new(RefCell::new(MenuState { open: initially_open })),
        };

        let mut listeners = Vec::new();

        let on_toggle = menu.clone();
        listeners.push(EventListener::new(&toggle, "click", move |_| {
            on_toggle.state.borrow_mut().toggle();
            on_toggle.sync();
        }));

        for link in dom::query_all_in(&panel, "a") {
            let on_link = menu.clone();
            listeners.push(EventListener::new(&link, "click", move |_| on_link.close()));
        }

        let on_key = menu;
        listeners.push(EventListener::new(&document, "keydown", move |event: &Event| {
            let escape = event
                .dyn_ref::<KeyboardEvent>()
                .map_or(false, |key| key.key() == "Escape");
            if escape {
                on_key.close();
            }
        }));

        debug!("Mobile menu attached to #{}", panel_id);
        Some(Self { _listeners: listeners })
    }
}
