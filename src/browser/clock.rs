//! `requestAnimationFrame` driver for [`FrameTasks`].
//!
//! One callback chain serves every animation on the page. A frame is
//! requested only while tasks are live; cancelling the last task also
//! cancels the pending request by its stored id, so a stopped loop cannot be
//! revived by a frame that was already queued.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::frame::{FrameTasks, TaskId, Tick};

#[derive(Clone)]
pub struct FrameClock {
    inner: Rc<ClockInner>,
}

struct ClockInner {
    window: Window,
    tasks: RefCell<FrameTasks>,
    request: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl FrameClock {
    #[must_use]
    pub fn new(window: Window) -> Self {
        let inner = Rc::new(ClockInner {
            window,
            tasks: RefCell::new(FrameTasks::new()),
            request: Cell::new(None),
            callback: RefCell::new(None),
        });
        let weak: Weak<ClockInner> = Rc::downgrade(&inner);
        let callback = Closure::<dyn FnMut(f64)>::new(move |now_ms: f64| {
            if let Some(inner) = weak.upgrade() {
                inner.on_frame(now_ms);
            }
        });
        *inner.callback.borrow_mut() = Some(callback);
        Self { inner }
    }

    /// Run `task` every frame, starting with the next one.
    pub fn spawn(&self, task: impl Tick + 'static) -> TaskId {
        let id = self.inner.tasks.borrow_mut().spawn(task);
        self.inner.ensure_requested();
        id
    }

    /// Stop a task. Returns `false` if it had already finished.
    pub fn cancel(&self, id: TaskId) -> bool {
        let removed = self.inner.tasks.borrow_mut().cancel(id);
        if self.inner.tasks.borrow().is_empty() {
            self.inner.cancel_request();
        }
        removed
    }

    /// Number of live tasks.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.inner.tasks.borrow().len()
    }

    /// Whether an animation frame is currently requested.
    #[must_use]
    pub fn frame_requested(&self) -> bool {
        self.inner.request.get().is_some()
    }
}

impl ClockInner {
    fn on_frame(&self, now_ms: f64) {
        self.request.set(None);
        if FrameTasks::run_frame(&self.tasks, now_ms) {
            self.ensure_requested();
        }
    }

    fn ensure_requested(&self) {
        if self.request.get().is_some() {
            return;
        }
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return;
        };
        match self.window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => self.request.set(Some(id)),
            Err(thrown) => log::warn!("requestAnimationFrame failed: {thrown:?}"),
        }
    }

    fn cancel_request(&self) {
        if let Some(id) = self.request.take() {
            if let Err(thrown) = self.window.cancel_animation_frame(id) {
                log::warn!("cancelAnimationFrame failed: {thrown:?}");
            }
        }
    }
}
