//! Decorative particle field behind the hero section.
//!
//! Each frame a particle may spawn (5% chance, only below the cap); every
//! particle then drifts by its velocity and fades by a constant factor.
//! Particles retire once they are nearly transparent or have drifted well
//! outside the canvas. The fade is per frame, not per millisecond, so it runs
//! at whatever rate the frame clock delivers.

#[cfg(test)]
#[path = "particles_test.rs"]
mod particles_test;

use rand::Rng;

use crate::consts::{
    PARTICLE_BOUNDS_MARGIN, PARTICLE_CYAN, PARTICLE_GREEN, PARTICLE_MAX_RADIUS, PARTICLE_MAX_SPEED,
    PARTICLE_MAX_START_OPACITY, PARTICLE_MIN_OPACITY, PARTICLE_MIN_RADIUS, PARTICLE_MIN_START_OPACITY,
    PARTICLE_OPACITY_DECAY, PARTICLE_SPAWN_CHANCE,
};

/// One of the two accent colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleColor {
    Green,
    Cyan,
}

impl ParticleColor {
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Green => PARTICLE_GREEN,
            Self::Cyan => PARTICLE_CYAN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub opacity: f64,
    pub color: ParticleColor,
}

impl Particle {
    /// A particle with uniformly random attributes inside a `width` x `height`
    /// canvas.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Self {
        Self {
            x: rng.random::<f64>() * width,
            y: rng.random::<f64>() * height,
            vx: (rng.random::<f64>() - 0.5) * 2.0 * PARTICLE_MAX_SPEED,
            vy: (rng.random::<f64>() - 0.5) * 2.0 * PARTICLE_MAX_SPEED,
            radius: PARTICLE_MIN_RADIUS + rng.random::<f64>() * (PARTICLE_MAX_RADIUS - PARTICLE_MIN_RADIUS),
            opacity: PARTICLE_MIN_START_OPACITY
                + rng.random::<f64>() * (PARTICLE_MAX_START_OPACITY - PARTICLE_MIN_START_OPACITY),
            color: if rng.random::<f64>() > 0.5 { ParticleColor::Green } else { ParticleColor::Cyan },
        }
    }

    /// Move one frame and fade.
    pub fn advance(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
        self.opacity *= PARTICLE_OPACITY_DECAY;
    }

    /// Still visible and within the margin around a `width` x `height` canvas.
    #[must_use]
    pub fn is_alive(&self, width: f64, height: f64) -> bool {
        self.opacity > PARTICLE_MIN_OPACITY
            && self.x > -PARTICLE_BOUNDS_MARGIN
            && self.x < width + PARTICLE_BOUNDS_MARGIN
            && self.y > -PARTICLE_BOUNDS_MARGIN
            && self.y < height + PARTICLE_BOUNDS_MARGIN
    }
}

/// Size-capped set of live particles and the canvas bounds they live in.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    width: f64,
    height: f64,
    cap: usize,
    particles: Vec<Particle>,
}

impl ParticleField {
    #[must_use]
    pub fn new(cap: usize) -> Self {
        Self { width: 0.0, height: 0.0, cap, particles: Vec::with_capacity(cap) }
    }

    /// Match the drawing surface size. Existing particles keep their positions.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn cap(&self) -> usize {
        self.cap
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.particles.len() >= self.cap
    }

    /// Add a particle unless the field is at its cap.
    pub fn try_spawn(&mut self, particle: Particle) -> bool {
        if self.is_full() {
            return false;
        }
        self.particles.push(particle);
        true
    }

    /// One frame: maybe spawn, then advance and retire.
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if !self.is_full() && rng.random::<f64>() < PARTICLE_SPAWN_CHANCE {
            let particle = Particle::random(rng, self.width, self.height);
            self.particles.push(particle);
        }
        self.advance();
    }

    /// Advance every particle one frame and drop the ones that retired.
    pub fn advance(&mut self) {
        let (width, height) = (self.width, self.height);
        self.particles.retain_mut(|p| {
            p.advance();
            p.is_alive(width, height)
        });
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

/// The particle field plus whether its loop is running.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSystem {
    field: ParticleField,
    running: bool,
}

impl ParticleSystem {
    #[must_use]
    pub fn new(cap: usize) -> Self {
        Self { field: ParticleField::new(cap), running: false }
    }

    /// Returns `false` if already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        log::debug!("particles started");
        true
    }

    /// Stop and discard every particle. Returns `false` if already stopped.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        self.field.clear();
        log::debug!("particles stopped");
        true
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance one frame. Does nothing while stopped.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.running {
            self.field.update(rng);
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.field.resize(width, height);
    }

    #[must_use]
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut ParticleField {
        &mut self.field
    }
}
