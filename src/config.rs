//! Page tunables with defaults and an optional JSON override.
//!
//! The page may embed a `<script type="application/json" id="site-config">`
//! block; any field it names overrides the default below. Fields it omits keep
//! their defaults.

use std::str::FromStr;

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_PRELOADER_MIN_MS: f64 = 1200.0;
pub const DEFAULT_PRELOADER_FADE_MS: u32 = 800;
pub const DEFAULT_SCROLL_OFFSET_PX: f64 = 70.0;
pub const DEFAULT_SCROLL_DURATION_MS: f64 = 800.0;
pub const DEFAULT_PARTICLE_INTERVAL_MS: f64 = 800.0;
pub const DEFAULT_ANIMATION_THRESHOLD: f64 = 0.1;
pub const DEFAULT_DEBOUNCE_MS: u32 = 10;
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u32 = 300;
pub const DEFAULT_PARTICLE_BREAKPOINT_PX: u32 = 768;
pub const DEFAULT_MAX_PARTICLES: usize = 50;
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Shortest time the preloader stays on screen.
    pub preloader_min_ms: f64,
    /// Delay between starting the preloader fade and removing it from layout.
    pub preloader_fade_ms: u32,
    /// Header clearance subtracted from every anchor scroll target.
    pub scroll_offset: f64,
    pub scroll_duration_ms: f64,
    /// Nominal spawn cadence. Spawning is probabilistic per frame; this value
    /// is carried for page authors and not read by the particle loop.
    pub particle_interval_ms: f64,
    /// Fraction of a section that must be visible before it fades in.
    pub animation_threshold: f64,
    pub debounce_ms: u32,
    pub resize_debounce_ms: u32,
    /// Minimum viewport width for the particle background.
    pub particle_breakpoint_px: u32,
    pub max_particles: usize,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preloader_min_ms: DEFAULT_PRELOADER_MIN_MS,
            preloader_fade_ms: DEFAULT_PRELOADER_FADE_MS,
            scroll_offset: DEFAULT_SCROLL_OFFSET_PX,
            scroll_duration_ms: DEFAULT_SCROLL_DURATION_MS,
            particle_interval_ms: DEFAULT_PARTICLE_INTERVAL_MS,
            animation_threshold: DEFAULT_ANIMATION_THRESHOLD,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            particle_breakpoint_px: DEFAULT_PARTICLE_BREAKPOINT_PX,
            max_particles: DEFAULT_MAX_PARTICLES,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl Config {
    /// Parse and validate a JSON override.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields, and
    /// a range/level error when a value is unusable.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field for a usable value.
    ///
    /// # Errors
    ///
    /// Returns the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("preloaderMinMs", self.preloader_min_ms)?;
        non_negative("scrollOffset", self.scroll_offset)?;
        non_negative("particleIntervalMs", self.particle_interval_ms)?;
        if !self.scroll_duration_ms.is_finite() || self.scroll_duration_ms <= 0.0 {
            return Err(ConfigError::OutOfRange { field: "scrollDurationMs", value: self.scroll_duration_ms });
        }
        if !(0.0..=1.0).contains(&self.animation_threshold) {
            return Err(ConfigError::OutOfRange { field: "animationThreshold", value: self.animation_threshold });
        }
        if self.max_particles == 0 {
            return Err(ConfigError::OutOfRange { field: "maxParticles", value: 0.0 });
        }
        self.log_level()?;
        Ok(())
    }

    /// The configured log level.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownLogLevel`] for names `log` does not know.
    pub fn log_level(&self) -> Result<log::Level, ConfigError> {
        log::Level::from_str(self.log_level.trim()).map_err(|_| ConfigError::UnknownLogLevel(self.log_level.clone()))
    }

    /// Media query that matches viewports wide enough for particles.
    #[must_use]
    pub fn particle_media_query(&self) -> String {
        format!("(min-width: {}px)", self.particle_breakpoint_px)
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, value })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
