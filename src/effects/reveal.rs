use log::debug;

use crate::dom;
use crate::visibility::{Trigger, VisibilityOptions, VisibilityWatcher};

pub const REVEALED_CLASS: &str = "animate-in";

/// Adds `animate-in` to cards as they scroll into view. Cards stay watched;
/// re-adding the class is harmless.
pub struct RevealOnScroll {
    _watcher: VisibilityWatcher,
}

impl RevealOnScroll {
    pub fn install(selector: &str, options: &VisibilityOptions) -> Option<Self> {
        let cards = dom::query_all(selector);
        if cards.is_empty() {
            return None;
        }

        let watcher = VisibilityWatcher::new(options, Trigger::Every, |card| {
            dom::set_class(&card, REVEALED_CLASS, true);
        })?;
        for card in &cards {
            watcher.observe(card);
        }

        debug!("Watching {} cards for reveal", cards.len());
        Some(Self { _watcher: watcher })
    }
}
