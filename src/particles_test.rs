#![allow(clippy::float_cmp)]

use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

// =============================================================
// Helpers
// =============================================================

/// Returns the same word forever: 0 samples as 0.0, `u64::MAX` as ~1.0.
struct ConstRng(u64);

impl rand::RngCore for ConstRng {
    fn next_u32(&mut self) -> u32 {
        (self.0 >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(self.0.to_le_bytes()[0]);
    }
}

fn always_spawn() -> ConstRng {
    ConstRng(0)
}

fn never_spawn() -> ConstRng {
    ConstRng(u64::MAX)
}

fn still(x: f64, y: f64, opacity: f64) -> Particle {
    Particle { x, y, vx: 0.0, vy: 0.0, radius: 2.0, opacity, color: ParticleColor::Green }
}

fn field(width: f64, height: f64, cap: usize) -> ParticleField {
    let mut f = ParticleField::new(cap);
    f.resize(width, height);
    f
}

// =============================================================
// Particle
// =============================================================

#[test]
fn low_samples_produce_minimum_attributes() {
    let p = Particle::random(&mut ConstRng(0), 400.0, 300.0);
    assert_eq!(p.x, 0.0);
    assert_eq!(p.y, 0.0);
    assert_eq!(p.vx, -0.25);
    assert_eq!(p.vy, -0.25);
    assert_eq!(p.radius, 1.0);
    assert_eq!(p.opacity, 0.2);
    assert_eq!(p.color, ParticleColor::Cyan);
}

#[test]
fn high_samples_stay_within_ranges() {
    let p = Particle::random(&mut ConstRng(u64::MAX), 400.0, 300.0);
    assert!(p.x < 400.0 && p.x > 399.0);
    assert!(p.vx <= 0.25 && p.vx > 0.24);
    assert!(p.radius <= 3.0 && p.radius > 2.99);
    assert!(p.opacity <= 0.7 && p.opacity > 0.69);
    assert_eq!(p.color, ParticleColor::Green);
}

#[test]
fn random_particles_respect_ranges() {
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..1000 {
        let p = Particle::random(&mut rng, 200.0, 100.0);
        assert!((0.0..200.0).contains(&p.x));
        assert!((0.0..100.0).contains(&p.y));
        assert!(p.vx.abs() <= 0.25 && p.vy.abs() <= 0.25);
        assert!((1.0..=3.0).contains(&p.radius));
        assert!((0.2..=0.7).contains(&p.opacity));
    }
}

#[test]
fn advance_integrates_velocity_and_decays_opacity() {
    let mut p = Particle { vx: 1.5, vy: -0.5, ..still(10.0, 10.0, 0.5) };
    p.advance();
    assert_eq!(p.x, 11.5);
    assert_eq!(p.y, 9.5);
    assert!((p.opacity - 0.4975).abs() < 1e-12);
}

#[test]
fn colors_map_to_accent_hex() {
    assert_eq!(ParticleColor::Green.css(), "#00ff41");
    assert_eq!(ParticleColor::Cyan.css(), "#00e6ff");
}

// =============================================================
// Retirement
// =============================================================

#[test]
fn faint_particle_retires_on_frame_139() {
    let mut f = field(500.0, 500.0, 50);
    assert!(f.try_spawn(still(250.0, 250.0, 0.02)));

    for _ in 0..138 {
        f.advance();
    }
    assert_eq!(f.len(), 1, "still above the floor after 138 frames");

    f.advance();
    assert!(f.is_empty(), "retired on frame 139");
}

#[test]
fn particle_outside_margin_retires() {
    let mut f = field(100.0, 100.0, 50);
    f.try_spawn(Particle { vx: -1.0, ..still(-9.5, 50.0, 0.7) });
    f.advance();
    assert!(f.is_empty());
}

#[test]
fn particle_inside_margin_survives() {
    let mut f = field(100.0, 100.0, 50);
    f.try_spawn(still(-9.0, 109.0, 0.7));
    f.advance();
    assert_eq!(f.len(), 1);
}

#[test]
fn each_edge_of_the_margin_retires() {
    for (x, y) in [(-10.0, 50.0), (110.0, 50.0), (50.0, -10.0), (50.0, 110.0)] {
        let mut f = field(100.0, 100.0, 50);
        f.try_spawn(still(x, y, 0.7));
        f.advance();
        assert!(f.is_empty(), "({x}, {y}) should retire");
    }
}

// =============================================================
// Spawning and cap
// =============================================================

#[test]
fn spawn_is_rejected_at_cap() {
    let mut f = field(500.0, 500.0, 50);
    for _ in 0..50 {
        assert!(f.try_spawn(still(250.0, 250.0, 0.7)));
    }
    assert!(f.is_full());
    assert!(!f.try_spawn(still(250.0, 250.0, 0.7)));
    assert_eq!(f.len(), 50);
}

#[test]
fn update_never_spawns_past_cap() {
    let mut f = field(500.0, 500.0, 50);
    for _ in 0..50 {
        f.try_spawn(still(250.0, 250.0, 0.7));
    }
    f.update(&mut always_spawn());
    assert_eq!(f.len(), 50);
}

#[test]
fn update_spawns_when_chance_hits() {
    let mut f = field(500.0, 500.0, 50);
    f.update(&mut always_spawn());
    assert_eq!(f.len(), 1);
}

#[test]
fn update_skips_spawn_when_chance_misses() {
    let mut f = field(500.0, 500.0, 50);
    f.update(&mut never_spawn());
    assert!(f.is_empty());
}

#[test]
fn long_run_stays_within_cap() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut f = field(1280.0, 720.0, 50);
    for _ in 0..20_000 {
        f.update(&mut rng);
        assert!(f.len() <= 50);
    }
}

#[test]
fn resize_clamps_negative_sizes() {
    let mut f = ParticleField::new(5);
    f.resize(-3.0, 20.0);
    assert_eq!(f.width(), 0.0);
    assert_eq!(f.height(), 20.0);
}

// =============================================================
// ParticleSystem lifecycle
// =============================================================

#[test]
fn start_is_idempotent() {
    let mut sys = ParticleSystem::new(50);
    assert!(sys.start());
    assert!(!sys.start());
    assert!(sys.is_running());
}

#[test]
fn stop_discards_particles() {
    let mut sys = ParticleSystem::new(50);
    sys.resize(500.0, 500.0);
    sys.start();
    sys.tick(&mut always_spawn());
    assert_eq!(sys.field().len(), 1);

    assert!(sys.stop());
    assert!(sys.field().is_empty());
    assert!(!sys.stop());
}

#[test]
fn tick_while_stopped_is_noop() {
    let mut sys = ParticleSystem::new(50);
    sys.resize(500.0, 500.0);
    sys.tick(&mut always_spawn());
    assert!(sys.field().is_empty());
}

#[test]
fn restart_after_stop_begins_empty() {
    let mut sys = ParticleSystem::new(50);
    sys.resize(500.0, 500.0);
    sys.start();
    for _ in 0..3 {
        sys.tick(&mut always_spawn());
    }
    sys.stop();
    sys.start();
    assert!(sys.field().is_empty());
}
