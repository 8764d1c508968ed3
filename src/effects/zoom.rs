use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_events::EventListener;
use log::debug;

use crate::dom;
use crate::timer::{BrowserScheduler, Scheduler};

pub const ZOOMED_CLASS: &str = "zoomed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomState {
    Resting,
    Zoomed,
}

/// Click-to-zoom for one gallery item. A click zooms it; it always falls back
/// to resting `hold_ms` later. Clicks while zoomed are ignored.
pub struct ZoomItem<S: Scheduler> {
    state: Rc<Cell<ZoomState>>,
    on_change: Rc<dyn Fn(ZoomState)>,
    revert: RefCell<Option<S::Handle>>,
    hold_ms: u32,
    scheduler: S,
}

impl<S: Scheduler> ZoomItem<S> {
    pub fn new<F>(scheduler: S, hold_ms: u32, on_change: F) -> Self
    where
        F: Fn(ZoomState) + 'static,
    {
        Self {
            state: Rc::new(Cell::new(ZoomState::Resting)),
            on_change: Rc::new(on_change),
            revert: RefCell::new(None),
            hold_ms,
            scheduler,
        }
    }

    pub fn state(&self) -> ZoomState {
        self.state.get()
    }

    /// Returns whether the click started a zoom.
    pub fn click(&self) -> bool {
        if self.state.get() == ZoomState::Zoomed {
            return false;
        }
        self.state.set(ZoomState::Zoomed);
        (self.on_change)(ZoomState::Zoomed);

        let state = self.state.clone();
        let on_change = self.on_change.clone();
        let handle = self.scheduler.schedule(
            self.hold_ms,
            Box::new(move || {
                state.set(ZoomState::Resting);
                on_change(ZoomState::Resting);
            }),
        );
        self.revert.replace(Some(handle));
        true
    }
}

pub struct ZoomEffects {
    _listeners: Vec<EventListener>,
}

impl ZoomEffects {
    pub fn install(selector: &str, hold_ms: u32) -> Option<Self> {
        let items = dom::query_all(selector);
        if items.is_empty() {
            return None;
        }

        let listeners: Vec<_> = items
            .iter()
            .map(|item| {
                let target = item.clone();
                let zoom = ZoomItem::new(BrowserScheduler, hold_ms, move |state| {
                    dom::set_class(&target, ZOOMED_CLASS, state == ZoomState::Zoomed);
                });
                EventListener::new(item, "click", move |_| {
                    if !zoom.click() {
                        debug!("Click ignored, item is {:?}", zoom.state());
                    }
                })
            })
            .collect();

        debug!("Zoom attached to {} gallery items", listeners.len());
        Some(Self { _listeners: listeners })
    }
}
