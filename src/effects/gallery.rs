//! Layout for the curved 3D gallery.
//!
//! Five items sit on an arc; how wide the arc is depends on which viewport
//! bucket we are in. Items fade up into place one after another on install
//! and snap to the new arc on resize.

use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::{window, HtmlElement};

use crate::config::Timing;
use crate::debounce::{debounce, Debounced};
use crate::dom;
use crate::timer::{BrowserScheduler, Scheduler};

/// Extra downward offset items start from during the entrance.
pub const ENTRY_OFFSET_PX: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Compact,
    Medium,
    Wide,
}

impl Bucket {
    pub fn for_width(width: f64) -> Self {
        if width <= 480.0 {
            Bucket::Compact
        } else if width <= 768.0 {
            Bucket::Medium
        } else {
            Bucket::Wide
        }
    }

    pub fn presets(self) -> &'static [Preset] {
        match self {
            Bucket::Compact => &COMPACT,
            Bucket::Medium => &MEDIUM,
            Bucket::Wide => &WIDE,
        }
    }

    /// Preset for the item at `index`; items past the table reuse the first.
    pub fn preset(self, index: usize) -> Preset {
        let presets = self.presets();
        presets.get(index).copied().unwrap_or(presets[0])
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub translate_x: f64,
    pub translate_z: f64,
    pub rotate_y: f64,
    pub scale: f64,
}

const fn preset(translate_x: f64, translate_z: f64, rotate_y: f64, scale: f64) -> Preset {
    Preset {
        translate_x,
        translate_z,
        rotate_y,
        scale,
    }
}

const COMPACT: [Preset; 5] = [
    preset(-200.0, -150.0, 50.0, 0.8),
    preset(-100.0, -75.0, 25.0, 0.9),
    preset(0.0, 0.0, 0.0, 0.7),
    preset(100.0, -75.0, -25.0, 0.9),
    preset(200.0, -150.0, -50.0, 0.8),
];

const MEDIUM: [Preset; 5] = [
    preset(-400.0, -250.0, 50.0, 1.0),
    preset(-200.0, -125.0, 25.0, 0.9),
    preset(0.0, 0.0, 0.0, 0.8),
    preset(200.0, -125.0, -25.0, 0.9),
    preset(400.0, -250.0, -50.0, 1.0),
];

const WIDE: [Preset; 5] = [
    preset(-600.0, -400.0, 50.0, 1.1),
    preset(-300.0, -200.0, 25.0, 0.95),
    preset(0.0, 0.0, 0.0, 0.8),
    preset(300.0, -200.0, -25.0, 0.95),
    preset(600.0, -400.0, -50.0, 1.1),
];

impl Preset {
    pub fn transform(&self) -> String {
        format!(
            "translateX({}px) translateZ({}px) rotateY({}deg) scale({})",
            self.translate_x, self.translate_z, self.rotate_y, self.scale
        )
    }

    /// Resting transform pushed down by [`ENTRY_OFFSET_PX`].
    pub fn entering_transform(&self) -> String {
        format!("{} translateY({}px)", self.transform(), ENTRY_OFFSET_PX)
    }
}

pub fn stagger_delay(index: usize, stagger_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(stagger_ms)
}

fn place(items: &[HtmlElement], bucket: Bucket) {
    for (index, item) in items.iter().enumerate() {
        dom::set_style(item, "transform", &bucket.preset(index).transform());
    }
}

/// Opacity and transform written to one item during the entrance.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemStyle {
    pub opacity: &'static str,
    pub transform: String,
}

impl ItemStyle {
    pub fn entering(bucket: Bucket, index: usize) -> Self {
        Self {
            opacity: "0",
            transform: bucket.preset(index).entering_transform(),
        }
    }

    pub fn settled(bucket: Bucket, index: usize) -> Self {
        Self {
            opacity: "1",
            transform: bucket.preset(index).transform(),
        }
    }
}

fn apply_style(item: &HtmlElement, style: &ItemStyle) {
    dom::set_style(item, "opacity", style.opacity);
    dom::set_style(item, "transform", &style.transform);
}

/// Hides every item below its slot, then schedules one reveal per item,
/// `stagger_ms` apart in document order. Dropping the handles cancels any
/// reveal that has not fired.
pub fn play_entrance<T, S, W, A>(
    items: &[T],
    stagger_ms: u32,
    scheduler: &S,
    width: W,
    apply: A,
) -> Vec<S::Handle>
where
    T: Clone + 'static,
    S: Scheduler,
    W: Fn() -> f64 + 'static,
    A: Fn(&T, &ItemStyle) + 'static,
{
    let width = Rc::new(width);
    let apply = Rc::new(apply);
    let bucket = Bucket::for_width(width());

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            apply(item, &ItemStyle::entering(bucket, index));

            let item = item.clone();
            let width = width.clone();
            let apply = apply.clone();
            scheduler.schedule(
                stagger_delay(index, stagger_ms),
                Box::new(move || {
                    // Width may have changed while this item was waiting
                    let bucket = Bucket::for_width(width());
                    apply(&item, &ItemStyle::settled(bucket, index));
                }),
            )
        })
        .collect()
}

pub struct CurvedGallery {
    _resize: EventListener,
    _entrance: Vec<Timeout>,
}

impl CurvedGallery {
    pub fn install(container_selector: &str, item_selector: &str, timing: &Timing) -> Option<Self> {
        let container = dom::query(container_selector)?;
        let items = Rc::new(dom::query_all_in(&container, item_selector));
        if items.is_empty() {
            return None;
        }
        let win = window()?;

        let resized_items = items.clone();
        let on_resize: Debounced<()> = debounce(timing.gallery_resize_debounce_ms, move |()| {
            let bucket = Bucket::for_width(dom::viewport_width());
            debug!("Gallery re-laid out for {:?}", bucket);
            place(&resized_items, bucket);
        });
        let resize = EventListener::new(&win, "resize", move |_| on_resize.call(()));

        // Keep after every `?`: dropping the handles cancels the reveals
        let entrance = play_entrance(
            items.as_slice(),
            timing.gallery_stagger_ms,
            &BrowserScheduler,
            dom::viewport_width,
            apply_style,
        );

        debug!("Curved gallery installed with {} items", items.len());
        Some(Self {
            _resize: resize,
            _entrance: entrance,
        })
    }
}
