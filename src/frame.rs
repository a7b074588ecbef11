//! Per-frame tasks driven by one frame clock.
//!
//! Every animation on the page (the eased scroll, the particle loop, the
//! preloader poll) is a [`Tick`] registered in a [`FrameTasks`] set. The host
//! clock calls [`FrameTasks::run_frame`] once per display frame and keeps
//! requesting frames only while the set is non-empty. Each task ends itself
//! by returning [`Progress::Done`], or is ended from outside by
//! [`FrameTasks::cancel`] with the [`TaskId`] it was spawned under.

#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;

use std::cell::RefCell;
use std::rc::Rc;

/// Whether a task wants another frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Continue,
    Done,
}

/// Something advanced once per frame.
pub trait Tick {
    fn tick(&mut self, now_ms: f64) -> Progress;
}

impl<F> Tick for F
where
    F: FnMut(f64) -> Progress,
{
    fn tick(&mut self, now_ms: f64) -> Progress {
        self(now_ms)
    }
}

/// Opaque handle for a spawned task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

type SharedTask = Rc<RefCell<dyn Tick>>;

/// Live tasks in spawn order.
#[derive(Default)]
pub struct FrameTasks {
    next_id: u64,
    tasks: Vec<(TaskId, SharedTask)>,
}

impl FrameTasks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a task. It first runs on the next frame.
    pub fn spawn(&mut self, task: impl Tick + 'static) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        let task: SharedTask = Rc::new(RefCell::new(task));
        self.tasks.push((id, task));
        id
    }

    /// Remove a task. Returns `false` if it had already finished or been
    /// cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|(task_id, _)| *task_id != id);
        self.tasks.len() != before
    }

    #[must_use]
    pub fn contains(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|(task_id, _)| *task_id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Tick every live task once. Returns whether another frame is needed.
    ///
    /// The set is not borrowed while a task runs, so tasks may spawn or
    /// cancel other tasks. A task cancelled earlier in the same frame is
    /// skipped; a task spawned during the frame first runs on the next one.
    pub fn run_frame(tasks: &RefCell<Self>, now_ms: f64) -> bool {
        let snapshot = tasks
            .borrow()
            .tasks
            .iter()
            .map(|(id, task)| (*id, Rc::clone(task)))
            .collect::<Vec<_>>();

        for (id, task) in snapshot {
            if !tasks.borrow().contains(id) {
                continue;
            }
            let progress = task.borrow_mut().tick(now_ms);
            if progress == Progress::Done {
                tasks.borrow_mut().cancel(id);
            }
        }

        !tasks.borrow().is_empty()
    }
}
