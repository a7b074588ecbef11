//! One-shot fade-in reveals for `.fade-in` sections.
//!
//! With reduced motion requested, every section is shown at once and nothing
//! is observed. Otherwise each section is watched until it first intersects
//! the viewport, then shown and never watched again; scrolling away does not
//! hide it.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::consts::REVEAL_ROOT_MARGIN;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealMode {
    /// Show everything now; install no observer.
    Immediate,
    /// Observe intersections with these options.
    Observe { threshold: f64, root_margin: &'static str },
}

#[must_use]
pub fn reveal_mode(reduced_motion: bool, threshold: f64) -> RevealMode {
    if reduced_motion {
        RevealMode::Immediate
    } else {
        RevealMode::Observe { threshold, root_margin: REVEAL_ROOT_MARGIN }
    }
}

/// Per-section reveal state, indexed in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealSet {
    visible: Vec<bool>,
    observed: Vec<bool>,
}

impl RevealSet {
    #[must_use]
    pub fn new(count: usize, mode: RevealMode) -> Self {
        match mode {
            RevealMode::Immediate => Self { visible: vec![true; count], observed: vec![false; count] },
            RevealMode::Observe { .. } => Self { visible: vec![false; count], observed: vec![true; count] },
        }
    }

    /// Record an intersection report for section `index`.
    ///
    /// Returns `true` exactly once per section: on its first intersecting
    /// report. The caller then adds `visible` and stops observing it.
    pub fn on_intersection(&mut self, index: usize, intersecting: bool) -> bool {
        if !intersecting {
            return false;
        }
        match (self.visible.get_mut(index), self.observed.get_mut(index)) {
            (Some(visible), Some(observed)) if !*visible => {
                *visible = true;
                *observed = false;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }

    /// Sections still waiting for their first intersection.
    #[must_use]
    pub fn observed_count(&self) -> usize {
        self.observed.iter().filter(|o| **o).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}
