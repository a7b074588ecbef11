#![allow(clippy::float_cmp)]

use super::*;
use crate::particles::{Particle, ParticleColor};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Clear(f64, f64),
    Alpha(f64),
    Fill(String),
    Circle(f64, f64, f64),
}

#[derive(Default)]
struct Recorder {
    calls: Vec<Call>,
    fail_circles: bool,
}

impl Surface for Recorder {
    type Error = &'static str;

    fn clear(&mut self, width: f64, height: f64) {
        self.calls.push(Call::Clear(width, height));
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.calls.push(Call::Alpha(alpha));
    }

    fn set_fill(&mut self, css_color: &str) {
        self.calls.push(Call::Fill(css_color.to_owned()));
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) -> Result<(), Self::Error> {
        if self.fail_circles {
            return Err("arc failed");
        }
        self.calls.push(Call::Circle(x, y, radius));
        Ok(())
    }
}

fn field_with(particles: &[Particle]) -> ParticleField {
    let mut field = ParticleField::new(50);
    field.resize(320.0, 200.0);
    for p in particles {
        field.try_spawn(*p);
    }
    field
}

fn particle(x: f64, opacity: f64, color: ParticleColor) -> Particle {
    Particle { x, y: 5.0, vx: 0.0, vy: 0.0, radius: 2.0, opacity, color }
}

#[test]
fn empty_field_clears_and_resets_alpha() {
    let mut surface = Recorder::default();
    draw(&mut surface, &field_with(&[])).expect("draw");
    assert_eq!(surface.calls, vec![Call::Clear(320.0, 200.0), Call::Alpha(1.0)]);
}

#[test]
fn particles_draw_at_their_opacity_and_color() {
    let mut surface = Recorder::default();
    let field = field_with(&[particle(1.0, 0.5, ParticleColor::Green), particle(2.0, 0.3, ParticleColor::Cyan)]);
    draw(&mut surface, &field).expect("draw");

    assert_eq!(
        surface.calls,
        vec![
            Call::Clear(320.0, 200.0),
            Call::Alpha(0.5),
            Call::Fill("#00ff41".to_owned()),
            Call::Circle(1.0, 5.0, 2.0),
            Call::Alpha(0.3),
            Call::Fill("#00e6ff".to_owned()),
            Call::Circle(2.0, 5.0, 2.0),
            Call::Alpha(1.0),
        ]
    );
}

#[test]
fn alpha_is_reset_even_when_a_draw_fails() {
    let mut surface = Recorder { fail_circles: true, ..Recorder::default() };
    let field = field_with(&[particle(1.0, 0.5, ParticleColor::Green)]);
    assert_eq!(draw(&mut surface, &field), Err("arc failed"));
    assert_eq!(surface.calls.last(), Some(&Call::Alpha(1.0)));
}

#[test]
fn clear_only_wipes() {
    let mut surface = Recorder::default();
    clear(&mut surface, &field_with(&[particle(1.0, 0.5, ParticleColor::Green)]));
    assert_eq!(surface.calls, vec![Call::Clear(320.0, 200.0)]);
}
