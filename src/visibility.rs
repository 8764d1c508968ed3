//! Viewport visibility via `IntersectionObserver`.

use serde::{Deserialize, Serialize};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::JsResultExt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisibilityOptions {
    /// Fraction of the element that must be visible, 0.0 to 1.0.
    pub threshold: f64,
    /// CSS margin applied to the viewport box, e.g. `"0px 0px -50px 0px"`.
    pub root_margin: String,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            root_margin: "0px".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// Report an element the first time it becomes visible, then stop watching it.
    Once,
    /// Report an element every time it becomes visible.
    Every,
}

/// Lets each item through at most once.
#[derive(Debug)]
pub struct OnceGate<T> {
    seen: Vec<T>,
}

impl<T: PartialEq + Clone> OnceGate<T> {
    pub fn new() -> Self {
        Self { seen: Vec::new() }
    }

    pub fn admit(&mut self, item: &T) -> bool {
        if self.seen.contains(item) {
            return false;
        }
        self.seen.push(item.clone());
        true
    }
}

/// Calls `on_visible` for each watched element that becomes visible, in the
/// order the browser reports them. Disconnects when dropped.
pub struct VisibilityWatcher {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityWatcher {
    pub fn new<F>(options: &VisibilityOptions, trigger: Trigger, mut on_visible: F) -> Option<Self>
    where
        F: FnMut(Element) + 'static,
    {
        let mut gate = OnceGate::new();
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let visible = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .filter(|entry| entry.is_intersecting())
                .map(|entry| entry.target());

            for target in visible {
                if trigger == Trigger::Once {
                    observer.unobserve(&target);
                    // A batch can report the same target twice before unobserve lands.
                    if !gate.admit(&target) {
                        continue;
                    }
                }
                on_visible(target);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .or_log("IntersectionObserver")?;

        Some(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, el: &Element) {
        self.observer.observe(el);
    }
}

impl Drop for VisibilityWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
