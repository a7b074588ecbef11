//! Canvas binding for the particle background.
//!
//! The loop is a single frame task whose id is kept in
//! [`PageState::particle_task`](crate::state::PageState). Stopping cancels
//! that task through the clock, which also drops any frame already requested
//! for it, then wipes the canvas.

use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::app::App;
use super::dom::{cast, listen};
use crate::debounce::Debounced;
use crate::error::PageError;
use crate::frame::Progress;
use crate::particles::ParticleSystem;
use crate::render;

pub struct ParticleLoop {
    app: Rc<App>,
    canvas: HtmlCanvasElement,
    ctx: RefCell<CanvasRenderingContext2d>,
    system: RefCell<ParticleSystem>,
    rng: RefCell<SmallRng>,
}

pub fn mount(app: &Rc<App>) -> Result<(), PageError> {
    let Some(canvas) = app.elements.particle_canvas.clone() else {
        log::debug!("particles: no #particleCanvas, skipping");
        return Ok(());
    };
    let particles = ParticleLoop::new(app, canvas)?;

    particles.resize();
    let on_resize = Rc::clone(&particles);
    let resize = Debounced::new(app.config.resize_debounce_ms, move |()| on_resize.resize());
    listen(&app.window, "resize", move |_: web_sys::Event| resize.call(()))?;

    let query = app.config.particle_media_query();
    match app.window.match_media(&query).map_err(|thrown| PageError::dom("matchMedia", thrown))? {
        Some(list) => {
            let on_change = Rc::clone(&particles);
            let watched = list.clone();
            listen(&list, "change", move |_: web_sys::Event| on_change.set_enabled(watched.matches()))?;
        }
        None => log::debug!("particles: matchMedia({query}) returned nothing, breakpoint not watched"),
    }

    if app.state.borrow().particles_enabled {
        particles.start();
    }
    Ok(())
}

impl ParticleLoop {
    /// Bind a particle system to `canvas`'s 2D context. Nothing runs until
    /// [`ParticleLoop::start`].
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Dom`] if the canvas has no 2D context.
    pub fn new(app: &Rc<App>, canvas: HtmlCanvasElement) -> Result<Rc<Self>, PageError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|thrown| PageError::dom("getContext", thrown))?
            .and_then(cast::<CanvasRenderingContext2d>)
            .ok_or_else(|| PageError::Dom { op: "getContext", detail: "no 2d context".to_owned() })?;

        let seed = js_sys::Math::random().to_bits() ^ js_sys::Date::now().to_bits();
        Ok(Rc::new(Self {
            app: Rc::clone(app),
            canvas,
            ctx: RefCell::new(ctx),
            system: RefCell::new(ParticleSystem::new(app.config.max_particles)),
            rng: RefCell::new(SmallRng::seed_from_u64(seed)),
        }))
    }

    /// Match the canvas to its parent's box.
    pub fn resize(&self) {
        let Some(parent) = self.canvas.parent_element() else {
            return;
        };
        let rect = parent.get_bounding_client_rect();
        self.canvas.set_width(pixels(rect.width()));
        self.canvas.set_height(pixels(rect.height()));
        self.system
            .borrow_mut()
            .resize(f64::from(self.canvas.width()), f64::from(self.canvas.height()));
    }

    pub fn set_enabled(self: &Rc<Self>, enabled: bool) {
        self.app.state.borrow_mut().particles_enabled = enabled;
        if enabled {
            self.start();
        } else {
            self.stop();
        }
    }

    pub fn start(self: &Rc<Self>) {
        if self.app.state.borrow().particle_task.is_some() {
            return;
        }
        self.system.borrow_mut().start();
        let this = Rc::clone(self);
        let id = self.app.clock.spawn(move |_now_ms: f64| {
            this.frame();
            Progress::Continue
        });
        self.app.state.borrow_mut().particle_task = Some(id);
    }

    pub fn stop(&self) {
        let Some(id) = self.app.state.borrow_mut().particle_task.take() else {
            return;
        };
        self.app.clock.cancel(id);
        let mut system = self.system.borrow_mut();
        render::clear(&mut *self.ctx.borrow_mut(), system.field());
        system.stop();
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.system.borrow().is_running()
    }

    #[must_use]
    pub fn particle_count(&self) -> usize {
        self.system.borrow().field().len()
    }

    fn frame(&self) {
        let mut system = self.system.borrow_mut();
        system.tick(&mut *self.rng.borrow_mut());
        if let Err(thrown) = render::draw(&mut *self.ctx.borrow_mut(), system.field()) {
            log::warn!("particle draw failed: {thrown:?}");
        }
    }
}

/// Whole CSS pixels for a canvas dimension.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn pixels(css_px: f64) -> u32 {
    css_px.clamp(0.0, f64::from(u32::MAX)).round() as u32
}
