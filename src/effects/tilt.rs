use std::rc::Rc;

use gloo_events::EventListener;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, MouseEvent, TouchEvent};

use crate::dom;

pub const FLIPPED_CLASS: &str = "is-flipped";
pub const REST_TRANSFORM: &str = "rotateX(0) rotateY(0)";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// `x`/`y` are relative to the card's top-left corner. Pointer below the
    /// centre tips the top edge away; pointer to the right turns the card right.
    pub fn from_pointer(x: f64, y: f64, width: f64, height: f64, strength: f64) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self { rotate_x: 0.0, rotate_y: 0.0 };
        }
        Self {
            rotate_x: (y / height - 0.5) * -strength,
            rotate_y: (x / width - 0.5) * strength,
        }
    }

    pub fn transform(&self) -> String {
        format!("rotateX({}deg) rotateY({}deg)", self.rotate_x, self.rotate_y)
    }
}

struct Card {
    container: HtmlElement,
    inner: HtmlElement,
    strength: f64,
}

impl Card {
    fn tilt_towards(&self, client_x: f64, client_y: f64) {
        let rect = self.container.get_bounding_client_rect();
        let tilt = Tilt::from_pointer(
            client_x - rect.left(),
            client_y - rect.top(),
            rect.width(),
            rect.height(),
            self.strength,
        );
        dom::set_style(&self.inner, "transform", &tilt.transform());
    }

    fn reset(&self) {
        dom::set_style(&self.inner, "transform", REST_TRANSFORM);
    }
}

/// Pointer tilt plus click-to-flip on the hero card.
pub struct HeroTilt {
    _listeners: Vec<EventListener>,
}

impl HeroTilt {
    pub fn install(container_selector: &str, card_selector: &str, strength: f64) -> Option<Self> {
        let inner = dom::query(card_selector)?;
        let container = dom::query(container_selector)?;
        let card = Rc::new(Card {
            container: container.clone(),
            inner,
            strength,
        });

        let mut listeners = Vec::new();

        let on_move = card.clone();
        listeners.push(EventListener::new(&container, "mousemove", move |event: &Event| {
            if let Some(e) = event.dyn_ref::<MouseEvent>() {
                on_move.tilt_towards(e.client_x() as f64, e.client_y() as f64);
            }
        }));

        let on_touch = card.clone();
        listeners.push(EventListener::new(&container, "touchmove", move |event: &Event| {
            let touch = event
                .dyn_ref::<TouchEvent>()
                .and_then(|e| e.touches().get(0));
            if let Some(touch) = touch {
                on_touch.tilt_towards(touch.client_x() as f64, touch.client_y() as f64);
            }
        }));

        for event in ["mouseleave", "touchend"] {
            let on_leave = card.clone();
            listeners.push(EventListener::new(&container, event, move |_| on_leave.reset()));
        }

        // Flip is independent of tilt and survives pointer leave
        let flip_target = container.clone();
        listeners.push(EventListener::new(&container, "click", move |_| {
            dom::toggle_class(&flip_target, FLIPPED_CLASS);
        }));

        debug!("Hero tilt attached to {}", container_selector);
        Some(Self { _listeners: listeners })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centre_is_flat() {
        let tilt = Tilt::from_pointer(150.0, 100.0, 300.0, 200.0, 12.0);
        assert_eq!(tilt, Tilt { rotate_x: 0.0, rotate_y: 0.0 });
    }

    #[test]
    fn test_corners_reach_half_strength() {
        let top_left = Tilt::from_pointer(0.0, 0.0, 300.0, 200.0, 12.0);
        assert_eq!(top_left, Tilt { rotate_x: 6.0, rotate_y: -6.0 });

        let bottom_right = Tilt::from_pointer(300.0, 200.0, 300.0, 200.0, 12.0);
        assert_eq!(bottom_right, Tilt { rotate_x: -6.0, rotate_y: 6.0 });
    }

    #[test]
    fn test_zero_sized_box_does_not_tilt() {
        let tilt = Tilt::from_pointer(10.0, 10.0, 0.0, 0.0, 12.0);
        assert_eq!(tilt, Tilt { rotate_x: 0.0, rotate_y: 0.0 });
    }

    #[test]
    fn test_transform_string() {
        let tilt = Tilt { rotate_x: 3.0, rotate_y: -1.5 };
        assert_eq!(tilt.transform(), "rotateX(3deg) rotateY(-1.5deg)");
    }
}
