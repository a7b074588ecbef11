//! Trailing-edge debouncing.
//!
//! A burst of calls spaced closer than the wait window collapses into one
//! invocation carrying the last call's arguments, fired `wait` after that last
//! call. [`Debouncer`] is the clock-free bookkeeping; [`Debounced`] pairs it
//! with a browser timer.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

/// Outcome of a host timer firing.
#[derive(Debug, Clone, PartialEq)]
pub enum TimerFired<A> {
    /// The deadline has passed: invoke with these arguments.
    Run(A),
    /// Not due yet: arm another timer for this many milliseconds.
    Rearm(f64),
    /// Nothing pending (already run or cancelled).
    Idle,
}

/// Pending trailing call, if any.
#[derive(Debug, Clone)]
pub struct Debouncer<A> {
    wait_ms: f64,
    pending: Option<Pending<A>>,
}

#[derive(Debug, Clone)]
struct Pending<A> {
    due_ms: f64,
    args: A,
}

impl<A> Debouncer<A> {
    #[must_use]
    pub fn new(wait_ms: f64) -> Self {
        Self { wait_ms, pending: None }
    }

    /// Record a call at `now_ms`, replacing any pending one.
    pub fn call(&mut self, now_ms: f64, args: A) {
        self.pending = Some(Pending { due_ms: now_ms + self.wait_ms, args });
    }

    /// Take the pending arguments if their deadline has passed.
    pub fn poll(&mut self, now_ms: f64) -> Option<A> {
        match &self.pending {
            Some(p) if now_ms >= p.due_ms => self.pending.take().map(|p| p.args),
            _ => None,
        }
    }

    /// Decide what a host timer firing at `now_ms` should do.
    ///
    /// Browser timers may fire a little early; the deadline recorded by
    /// [`Debouncer::call`] is authoritative, so an early firing asks to be
    /// re-armed for the remainder.
    pub fn on_timer(&mut self, now_ms: f64) -> TimerFired<A> {
        if let Some(args) = self.poll(now_ms) {
            return TimerFired::Run(args);
        }
        match self.due_ms() {
            Some(due_ms) => TimerFired::Rearm(due_ms - now_ms),
            None => TimerFired::Idle,
        }
    }

    /// Drop the pending call. No-op when nothing is pending.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Deadline of the pending call.
    #[must_use]
    pub fn due_ms(&self) -> Option<f64> {
        self.pending.as_ref().map(|p| p.due_ms)
    }

    #[must_use]
    pub fn wait_ms(&self) -> f64 {
        self.wait_ms
    }
}

#[cfg(feature = "hydrate")]
pub use web::Debounced;

#[cfg(feature = "hydrate")]
mod web {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use gloo_timers::callback::Timeout;

    use super::{Debouncer, TimerFired};

    /// A callback wrapped so only the trailing call of a burst runs.
    ///
    /// Cloning shares the pending state, so every clone belongs to the same
    /// burst.
    pub struct Debounced<A> {
        inner: Rc<Inner<A>>,
    }

    struct Inner<A> {
        wait_ms: u32,
        state: RefCell<Debouncer<A>>,
        timer: RefCell<Option<Timeout>>,
        callback: Box<dyn Fn(A)>,
    }

    impl<A> Clone for Debounced<A> {
        fn clone(&self) -> Self {
            Self { inner: Rc::clone(&self.inner) }
        }
    }

    impl<A: 'static> Debounced<A> {
        pub fn new(wait_ms: u32, callback: impl Fn(A) + 'static) -> Self {
            Self {
                inner: Rc::new(Inner {
                    wait_ms,
                    state: RefCell::new(Debouncer::new(f64::from(wait_ms))),
                    timer: RefCell::new(None),
                    callback: Box::new(callback),
                }),
            }
        }

        /// Schedule `args`, cancelling whatever was pending.
        pub fn call(&self, args: A) {
            self.inner.state.borrow_mut().call(js_sys::Date::now(), args);
            arm(&self.inner, self.inner.wait_ms);
        }
    }

    /// Replace the pending timer. Dropping the previous `Timeout` cancels it.
    fn arm<A: 'static>(inner: &Rc<Inner<A>>, delay_ms: u32) {
        let weak: Weak<Inner<A>> = Rc::downgrade(inner);
        let timeout = Timeout::new(delay_ms, move || {
            if let Some(inner) = weak.upgrade() {
                fire(&inner);
            }
        });
        *inner.timer.borrow_mut() = Some(timeout);
    }

    fn fire<A: 'static>(inner: &Rc<Inner<A>>) {
        let outcome = inner.state.borrow_mut().on_timer(js_sys::Date::now());
        match outcome {
            TimerFired::Run(args) => (inner.callback)(args),
            TimerFired::Rearm(remaining_ms) => arm(inner, crate::browser::app::timer_ms(remaining_ms.ceil())),
            TimerFired::Idle => {}
        }
    }
}
