//! Rendering: draws the particle field onto a 2D surface.
//!
//! This module is the only place that issues drawing calls. It reads the
//! field and produces pixels; it never mutates particle state. The browser
//! implementation of [`Surface`] is the canvas `CanvasRenderingContext2d`;
//! tests use a recording surface.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::particles::ParticleField;

/// The drawing calls particle rendering needs.
pub trait Surface {
    type Error;

    fn clear(&mut self, width: f64, height: f64);

    fn set_alpha(&mut self, alpha: f64);

    fn set_fill(&mut self, css_color: &str);

    /// Fill a full circle.
    ///
    /// # Errors
    ///
    /// Returns the surface's error if the arc cannot be built.
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) -> Result<(), Self::Error>;
}

/// Clear the surface and draw every particle at its own opacity.
///
/// Alpha is reset to 1 afterwards, even when a draw call fails, so nothing
/// else drawn on the same context inherits a particle's opacity.
///
/// # Errors
///
/// Returns the first failing draw call.
pub fn draw<S: Surface>(surface: &mut S, field: &ParticleField) -> Result<(), S::Error> {
    surface.clear(field.width(), field.height());

    let result = field.particles().iter().try_for_each(|p| {
        surface.set_alpha(p.opacity);
        surface.set_fill(p.color.css());
        surface.fill_circle(p.x, p.y, p.radius)
    });

    surface.set_alpha(1.0);
    result
}

/// Wipe the surface, used when the particle loop stops.
pub fn clear<S: Surface>(surface: &mut S, field: &ParticleField) {
    surface.clear(field.width(), field.height());
}

#[cfg(feature = "hydrate")]
impl Surface for web_sys::CanvasRenderingContext2d {
    type Error = wasm_bindgen::JsValue;

    fn clear(&mut self, width: f64, height: f64) {
        self.clear_rect(0.0, 0.0, width, height);
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.set_global_alpha(alpha);
    }

    fn set_fill(&mut self, css_color: &str) {
        self.set_fill_style_str(css_color);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) -> Result<(), Self::Error> {
        self.begin_path();
        self.arc(x, y, radius, 0.0, std::f64::consts::TAU)?;
        self.fill();
        Ok(())
    }
}
