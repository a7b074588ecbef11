//! The per-page context handed to every feature.
//!
//! Built once at bootstrap and shared by `Rc`; it replaces page-wide
//! singletons for config, runtime flags, and the element cache.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Window};

use super::clock::FrameClock;
use super::dom::Elements;
use crate::config::Config;
use crate::state::PageState;

pub struct App {
    pub config: Config,
    pub window: Window,
    pub document: Document,
    pub elements: Elements,
    pub state: RefCell<PageState>,
    pub clock: FrameClock,
}

impl App {
    #[must_use]
    pub fn new(config: Config, window: Window, document: Document) -> Rc<Self> {
        let elements = Elements::query(&document);
        let particles_enabled = matches_media(&window, &config.particle_media_query());
        let clock = FrameClock::new(window.clone());
        Rc::new(Self { config, window, document, elements, state: RefCell::new(PageState::new(particles_enabled)), clock })
    }

    /// Milliseconds on the same clock as frame timestamps.
    #[must_use]
    pub fn now_ms(&self) -> f64 {
        self.window.performance().map_or_else(js_sys::Date::now, |perf| perf.now())
    }

    #[must_use]
    pub fn scroll_y(&self) -> f64 {
        match self.window.scroll_y() {
            Ok(y) => y,
            Err(thrown) => {
                log::warn!("scrollY unavailable, assuming top of page: {thrown:?}");
                0.0
            }
        }
    }

    #[must_use]
    pub fn matches_media(&self, query: &str) -> bool {
        matches_media(&self.window, query)
    }
}

fn matches_media(window: &Window, query: &str) -> bool {
    match window.match_media(query) {
        Ok(Some(list)) => list.matches(),
        Ok(None) => false,
        Err(thrown) => {
            log::warn!("matchMedia({query}) failed: {thrown:?}");
            false
        }
    }
}

/// Timer delay in whole milliseconds.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn timer_ms(ms: f64) -> u32 {
    ms.clamp(0.0, f64::from(u32::MAX)).round() as u32
}
