//! Minimum-display gate for the loading splash.
//!
//! The splash hides once the document has finished loading and it has been on
//! screen for at least the configured minimum. If the document is already
//! complete when the page boots, hiding is a single timer; otherwise the gate
//! is polled every frame from the window `load` event onward.

#[cfg(test)]
#[path = "preloader_test.rs"]
mod preloader_test;

/// `document.readyState`, parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

impl ReadyState {
    /// Parse a `readyState` string. Unrecognized values count as
    /// `Interactive`: the DOM is usable but `load` has not been seen.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "loading" => Self::Loading,
            "complete" => Self::Complete,
            _ => Self::Interactive,
        }
    }
}

/// How the splash should be scheduled at boot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Startup {
    /// Document already complete: hide after this many milliseconds.
    HideAfter(f64),
    /// Wait for the window `load` event, then poll the gate per frame.
    AwaitLoad,
}

#[must_use]
pub fn startup(document_complete: bool, min_display_ms: f64) -> Startup {
    if document_complete { Startup::HideAfter(min_display_ms) } else { Startup::AwaitLoad }
}

/// Next step once the document has loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnLoad {
    /// The minimum has already passed; hide in the `load` handler itself.
    HideNow,
    /// Check the gate once per frame until it opens.
    PollFrames,
}

/// Tracks how long the splash has been on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreloaderGate {
    started_at_ms: f64,
    min_display_ms: f64,
}

impl PreloaderGate {
    #[must_use]
    pub fn new(started_at_ms: f64, min_display_ms: f64) -> Self {
        Self { started_at_ms, min_display_ms }
    }

    #[must_use]
    pub fn elapsed(&self, now_ms: f64) -> f64 {
        (now_ms - self.started_at_ms).max(0.0)
    }

    /// Whether the splash may hide at `now_ms`.
    ///
    /// Only polled once the document has loaded, so the minimum display time
    /// is the only remaining condition.
    #[must_use]
    pub fn ready(&self, now_ms: f64) -> bool {
        self.elapsed(now_ms) >= self.min_display_ms
    }

    /// What to do when the window `load` event fires at `now_ms`.
    #[must_use]
    pub fn on_load(&self, now_ms: f64) -> OnLoad {
        if self.ready(now_ms) { OnLoad::HideNow } else { OnLoad::PollFrames }
    }
}
