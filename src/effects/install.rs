use log::{debug, info};

use super::counter::CounterEffects;
use super::cta::CtaButton;
use super::gallery::CurvedGallery;
use super::mobile_menu::MobileMenu;
use super::navbar::NavbarEffects;
use super::progress::ScrollProgress;
use super::reveal::RevealOnScroll;
use super::smooth_scroll::SmoothScroll;
use super::tilt::HeroTilt;
use super::zoom::ZoomEffects;
use crate::config::LandingConfig;

/// Every installed page effect. Dropping this detaches all listeners,
/// disconnects observers and cancels pending timers.
pub struct Effects {
    smooth_scroll: Option<SmoothScroll>,
    navbar: Option<NavbarEffects>,
    mobile_menu: Option<MobileMenu>,
    reveal: Option<RevealOnScroll>,
    gallery: Option<CurvedGallery>,
    zoom: Option<ZoomEffects>,
    counters: Option<CounterEffects>,
    cta: Option<CtaButton>,
    progress: Option<ScrollProgress>,
    tilt: Option<HeroTilt>,
}

fn report<T>(name: &str, effect: Option<T>) -> Option<T> {
    if effect.is_none() {
        debug!("Skipping {}: elements not on page", name);
    }
    effect
}

pub fn install(config: &LandingConfig) -> Effects {
    let selectors = &config.selectors;
    let timing = &config.timing;

    let effects = Effects {
        smooth_scroll: report("smooth scrolling", SmoothScroll::install(&selectors.nav_links)),
        navbar: report(
            "navbar effects",
            NavbarEffects::install(&selectors.header, &config.navbar, timing.navbar_debounce_ms),
        ),
        mobile_menu: report(
            "mobile menu",
            MobileMenu::install(&selectors.menu_toggle, &selectors.primary_nav_id),
        ),
        reveal: report(
            "scroll animations",
            RevealOnScroll::install(&selectors.animated_cards, &config.reveal),
        ),
        gallery: report(
            "curved gallery",
            CurvedGallery::install(&selectors.gallery_container, &selectors.gallery_item, timing),
        ),
        zoom: report("gallery zoom", ZoomEffects::install(&selectors.gallery_item, timing.zoom_ms)),
        counters: report(
            "number counters",
            CounterEffects::install(&selectors.stat_number, &config.counters, timing.counter_duration_ms),
        ),
        cta: report(
            "cta button",
            CtaButton::install(&selectors.cta_button, &selectors.gallery_section_id, timing.ripple_ms),
        ),
        progress: report(
            "scroll progress",
            ScrollProgress::install(&selectors.progress_bar, timing.progress_resize_debounce_ms),
        ),
        tilt: report(
            "hero tilt",
            HeroTilt::install(&selectors.hero_container, &selectors.hero_card, config.tilt_strength),
        ),
    };

    info!("Landing effects installed ({} active)", effects.active());
    effects
}

impl Effects {
    pub fn active(&self) -> usize {
        [
            self.smooth_scroll.is_some(),
            self.navbar.is_some(),
            self.mobile_menu.is_some(),
            self.reveal.is_some(),
            self.gallery.is_some(),
            self.zoom.is_some(),
            self.counters.is_some(),
            self.cta.is_some(),
            self.progress.is_some(),
            self.tilt.is_some(),
        ]
        .into_iter()
        .filter(|on| *on)
        .count()
    }
}
