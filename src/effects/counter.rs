//! Count-up animation for stat figures such as `$1M+`, `20K+` or `99.9%`.
//!
//! The figure is parsed once from the element's own text, animated from zero
//! on the animation-frame clock, and finally restored to the literal text.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element};

use crate::dom;
use crate::error::JsResultExt;
use crate::visibility::{Trigger, VisibilityOptions, VisibilityWatcher};

static FIGURE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\$?)([0-9,.]+)([A-Za-z]?[%+]?)").expect("figure pattern compiles")
});

/// Prefix, numeric target and suffix of a stat figure.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub prefix: String,
    pub target: f64,
    pub suffix: String,
}

impl Figure {
    pub fn parse(text: &str) -> Option<Self> {
        let caps = FIGURE.captures(text)?;
        let target = caps[2]
            .replace(',', "")
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())?;

        Some(Self {
            prefix: caps[1].to_string(),
            target,
            suffix: caps[3].to_string(),
        })
    }

    pub fn is_fractional(&self) -> bool {
        self.target.fract() != 0.0
    }

    pub fn render(&self, value: f64) -> String {
        let number = if self.is_fractional() {
            one_decimal(value)
        } else {
            group_thousands(value.max(0.0).floor() as u64)
        };
        format!("{}{}{}", self.prefix, number, self.suffix)
    }
}

/// One decimal place with exact halves rounded away from zero, as in JS
/// `toFixed(1)`. `format!` alone would round `0.25` down to `"0.2"`.
pub fn one_decimal(value: f64) -> String {
    let quarters = value * 4.0;
    // x.25 and x.75 are the only halves a double holds exactly
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        let tenths = (value.abs() * 10.0).ceil();
        return format!("{:.1}", tenths / 10.0 * value.signum());
    }
    format!("{:.1}", value)
}

pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub text: String,
    pub done: bool,
}

/// Per-element animation state; the clock starts at the first frame.
#[derive(Debug, Clone)]
pub struct CountUp {
    original: String,
    figure: Figure,
    duration_ms: f64,
    started_at: Option<f64>,
}

impl CountUp {
    pub fn new(original: String, duration_ms: f64) -> Option<Self> {
        let figure = Figure::parse(&original)?;
        Some(Self {
            original,
            figure,
            duration_ms,
            started_at: None,
        })
    }

    pub fn frame(&mut self, now: f64) -> Frame {
        let start = *self.started_at.get_or_insert(now);
        let progress = if self.duration_ms > 0.0 {
            ((now - start) / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };

        if progress >= 1.0 {
            // Exact literal, no rounding drift
            return Frame {
                text: self.original.clone(),
                done: true,
            };
        }
        Frame {
            text: self.figure.render(progress * self.figure.target),
            done: false,
        }
    }
}

pub struct CounterEffects {
    _watcher: VisibilityWatcher,
}

impl CounterEffects {
    pub fn install(selector: &str, options: &VisibilityOptions, duration_ms: f64) -> Option<Self> {
        let figures = dom::query_all(selector);
        if figures.is_empty() {
            return None;
        }

        let watcher = VisibilityWatcher::new(options, Trigger::Once, move |el| {
            animate(el, duration_ms);
        })?;
        for figure in &figures {
            watcher.observe(figure);
        }

        debug!("Watching {} counters", figures.len());
        Some(Self { _watcher: watcher })
    }
}

fn animate(el: Element, duration_ms: f64) {
    let Some(text) = el.text_content() else {
        return;
    };
    let Some(mut count_up) = CountUp::new(text.clone(), duration_ms) else {
        debug!("Not a countable figure: {:?}", text);
        return;
    };
    let Some(win) = window() else {
        return;
    };

    // The frame callback re-requests itself, so it has to reach its own
    // `Closure`. It clears the slot on the last frame, freeing itself.
    let slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next = slot.clone();
    let frame_win = win.clone();

    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        let frame = count_up.frame(now);
        el.set_text_content(Some(&frame.text));
        if frame.done {
            let _ = next.borrow_mut().take();
            return;
        }
        let requested = next.borrow().as_ref().and_then(|cb| {
            frame_win
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .or_log("requestAnimationFrame")
        });
        if requested.is_none() {
            let _ = next.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>));

    let requested = slot.borrow().as_ref().and_then(|cb| {
        win.request_animation_frame(cb.as_ref().unchecked_ref())
            .or_log("requestAnimationFrame")
    });
    if requested.is_none() {
        let _ = slot.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plus_suffix() {
        let figure = Figure::parse("20K+").unwrap();
        assert_eq!(figure.prefix, "");
        assert_eq!(figure.target, 20.0);
        assert_eq!(figure.suffix, "K+");
        assert!(!figure.is_fractional());
    }

    #[test]
    fn test_parse_dollar_prefix() {
        let figure = Figure::parse("$1M+").unwrap();
        assert_eq!(figure.prefix, "$");
        assert_eq!(figure.target, 1.0);
        assert_eq!(figure.suffix, "M+");
    }

    #[test]
    fn test_parse_percent() {
        let figure = Figure::parse("99.9%").unwrap();
        assert_eq!(figure.target, 99.9);
        assert_eq!(figure.suffix, "%");
        assert!(figure.is_fractional());
    }

    #[test]
    fn test_parse_commas() {
        let figure = Figure::parse("12,500").unwrap();
        assert_eq!(figure.target, 12_500.0);
        assert_eq!(figure.suffix, "");
    }

    #[test]
    fn test_parse_rejects() {
        assert_eq!(Figure::parse("Coming soon"), None);
        assert_eq!(Figure::parse(",,"), None);
        assert_eq!(Figure::parse("1.2.3"), None);
        assert_eq!(Figure::parse(""), None);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_fractional_frames_keep_one_decimal() {
        let mut count_up = CountUp::new("99.9%".to_string(), 2000.0).unwrap();
        assert_eq!(count_up.frame(100.0).text, "0.0%");
        assert_eq!(count_up.frame(300.0).text, "10.0%");
        assert_eq!(count_up.frame(900.0).text, "40.0%");
        let last = count_up.frame(2100.0);
        assert_eq!(last, Frame { text: "99.9%".to_string(), done: true });
    }

    #[test]
    fn test_one_decimal_rounds_halves_up() {
        assert_eq!(one_decimal(0.25), "0.3");
        assert_eq!(one_decimal(1.75), "1.8");
        assert_eq!(one_decimal(-0.25), "-0.3");
        // Stored just below the half, so it stays down
        assert_eq!(one_decimal(0.35), "0.3");
        assert_eq!(one_decimal(2.5), "2.5");
        assert_eq!(one_decimal(0.0), "0.0");

        let figure = Figure::parse("99.9%").unwrap();
        assert_eq!(figure.render(0.25), "0.3%");
    }

    #[test]
    fn test_integer_frames_floor_and_group() {
        let mut count_up = CountUp::new("$12,000+".to_string(), 2000.0).unwrap();
        assert_eq!(count_up.frame(0.0).text, "$0+");
        // 0.3333 * 12000 = 3999.6, floored
        assert_eq!(count_up.frame(666.6).text, "$3,999+");
        let mid = count_up.frame(1000.0);
        assert_eq!(mid.text, "$6,000+");
        assert!(!mid.done);
    }

    #[test]
    fn test_final_frame_restores_literal() {
        let mut count_up = CountUp::new("Over 20K+ users".to_string(), 2000.0).unwrap();
        assert_eq!(count_up.frame(5.0).text, "0K+");
        let last = count_up.frame(5_000.0);
        assert!(last.done);
        assert_eq!(last.text, "Over 20K+ users");
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut count_up = CountUp::new("42".to_string(), 0.0).unwrap();
        assert_eq!(count_up.frame(10.0), Frame { text: "42".to_string(), done: true });
    }
}
