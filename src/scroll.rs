//! Scroll-driven behavior: eased anchor scrolling, the header's scrolled
//! style, and picking the section the reader is currently in.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::consts::{HEADER_SCROLLED_PX, SECTION_LOOKAHEAD_PX};
use crate::frame::Progress;

/// Cubic ease-in-out over normalized time `t` in `[0, 1]`.
#[must_use]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 { 4.0 * t * t * t } else { 1.0 - (-2.0 * t + 2.0).powi(3) / 2.0 }
}

/// Absolute scroll position that puts an element just below the header.
///
/// `rect_top` is the element's viewport-relative top edge.
#[must_use]
pub fn target_scroll_y(current_scroll_y: f64, rect_top: f64, header_offset: f64) -> f64 {
    current_scroll_y + rect_top - header_offset
}

/// An eased scroll from one position to another over a fixed duration.
///
/// The clock starts on the first step, so the first frame always lands on
/// the start position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    from: f64,
    distance: f64,
    duration_ms: f64,
    started_at: Option<f64>,
}

impl ScrollAnimation {
    #[must_use]
    pub fn new(from: f64, to: f64, duration_ms: f64) -> Self {
        Self { from, distance: to - from, duration_ms, started_at: None }
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.from + self.distance
    }

    /// Scroll position after `elapsed_ms`.
    #[must_use]
    pub fn position_at(&self, elapsed_ms: f64) -> f64 {
        let t = if self.duration_ms > 0.0 { (elapsed_ms / self.duration_ms).clamp(0.0, 1.0) } else { 1.0 };
        self.from + self.distance * ease_in_out_cubic(t)
    }

    /// Position for the frame at `now_ms`, and whether another frame is due.
    pub fn step(&mut self, now_ms: f64) -> (f64, Progress) {
        let started_at = *self.started_at.get_or_insert(now_ms);
        let elapsed = now_ms - started_at;
        let progress = if elapsed < self.duration_ms { Progress::Continue } else { Progress::Done };
        (self.position_at(elapsed), progress)
    }
}

/// Whether the header should carry its `scrolled` style.
#[must_use]
pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLLED_PX
}

/// Vertical extent of a `section[id]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }

    #[must_use]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// The document position used to decide which section is current.
#[must_use]
pub fn reference_position(scroll_y: f64, header_offset: f64) -> f64 {
    scroll_y + header_offset + SECTION_LOOKAHEAD_PX
}

/// Id of the section containing `reference`. If spans overlap, the last one
/// in document order wins.
#[must_use]
pub fn section_at(spans: &[SectionSpan], reference: f64) -> Option<&str> {
    spans.iter().rev().find(|span| span.contains(reference)).map(|span| span.id.as_str())
}

/// Id of the section the reader is in at `scroll_y`.
#[must_use]
pub fn active_section(spans: &[SectionSpan], scroll_y: f64, header_offset: f64) -> Option<&str> {
    section_at(spans, reference_position(scroll_y, header_offset))
}

/// The fragment id an in-page link points at. A bare `#` has no target.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[must_use]
pub fn href_for(section_id: &str) -> String {
    format!("#{section_id}")
}

/// Whether a nav link with `href` should be marked active for `section_id`.
#[must_use]
pub fn link_is_active(href: Option<&str>, section_id: &str) -> bool {
    href.and_then(anchor_target) == Some(section_id)
}
