//! Page-lifetime runtime flags.
//!
//! DESIGN
//! ======
//! The DOM class list is what the page renders from. These flags only record
//! which one-shot actions have already happened (preloader hidden, nav menu
//! opened) and which particle task is live, so repeated events stay
//! idempotent. One `PageState` exists per page, owned by the bootstrap
//! context and handed to each feature.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::frame::TaskId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub preloader_visible: bool,
    pub mobile_menu_open: bool,
    /// Whether the viewport is currently wide enough for particles.
    pub particles_enabled: bool,
    /// Live particle task, if the loop is running.
    pub particle_task: Option<TaskId>,
}

impl Default for PageState {
    fn default() -> Self {
        Self { preloader_visible: true, mobile_menu_open: false, particles_enabled: false, particle_task: None }
    }
}

impl PageState {
    #[must_use]
    pub fn new(particles_enabled: bool) -> Self {
        Self { particles_enabled, ..Self::default() }
    }

    /// Flip the preloader to hidden. Returns `false` if it already was, in
    /// which case the caller must not repeat the hide side effects.
    pub fn hide_preloader(&mut self) -> bool {
        if !self.preloader_visible {
            return false;
        }
        self.preloader_visible = false;
        log::debug!("preloader hidden");
        true
    }
}
