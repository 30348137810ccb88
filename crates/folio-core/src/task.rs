//! Cancellable timed continuations.
//!
//! The browser shell backs [`Timer`] with `setTimeout`; tests use
//! [`VirtualTimer`] and fast-forward it by hand.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    Finished,
    Cancelled,
}

struct TaskState {
    status: Cell<TaskStatus>,
    on_cancel: RefCell<Option<Box<dyn FnOnce()>>>,
}

/// Shared handle to one scheduled continuation. Clones observe the same task.
///
/// Dropping a handle does not cancel the task.
#[derive(Clone)]
pub struct TaskHandle {
    state: Rc<TaskState>,
}

impl Default for TaskHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskHandle {
    pub fn new() -> Self {
        Self {
            state: Rc::new(TaskState {
                status: Cell::new(TaskStatus::Pending),
                on_cancel: RefCell::new(None),
            }),
        }
    }

    /// Hook run once if the task is cancelled while still pending.
    pub fn set_cancel_hook(&self, hook: impl FnOnce() + 'static) {
        *self.state.on_cancel.borrow_mut() = Some(Box::new(hook));
    }

    #[inline]
    pub fn status(&self) -> TaskStatus {
        self.state.status.get()
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status() == TaskStatus::Pending
    }

    /// Returns false if the task had already run or been cancelled.
    pub fn cancel(&self) -> bool {
        if !self.is_pending() {
            return false;
        }
        self.state.status.set(TaskStatus::Cancelled);
        let hook = self.state.on_cancel.borrow_mut().take();
        if let Some(hook) = hook {
            hook();
        }
        true
    }

    /// Called by timers when the delay elapses. Runs `f` only if the task is
    /// still pending, marking it finished first.
    pub fn run_if_pending(&self, f: impl FnOnce()) -> bool {
        if !self.is_pending() {
            return false;
        }
        self.state.status.set(TaskStatus::Finished);
        self.state.on_cancel.borrow_mut().take();
        f();
        true
    }
}

impl std::fmt::Debug for TaskHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("TaskHandle").field(&self.status()).finish()
    }
}

pub trait Timer {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskHandle;
}

impl<T: Timer + ?Sized> Timer for Rc<T> {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskHandle {
        (**self).schedule(delay, task)
    }
}

struct Scheduled {
    due: Duration,
    seq: u64,
    handle: TaskHandle,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct VirtualClock {
    now: Duration,
    seq: u64,
    queue: Vec<Scheduled>,
}

/// Manually advanced clock. Tasks due at the same instant run in the order
/// they were scheduled.
#[derive(Clone, Default)]
pub struct VirtualTimer {
    clock: Rc<RefCell<VirtualClock>>,
}

impl VirtualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Tasks neither run nor cancelled.
    pub fn pending(&self) -> usize {
        self.clock
            .borrow()
            .queue
            .iter()
            .filter(|s| s.handle.is_pending())
            .count()
    }

    fn pop_due(&self, until: Duration) -> Option<Scheduled> {
        let mut clock = self.clock.borrow_mut();
        let idx = clock
            .queue
            .iter()
            .enumerate()
            .filter(|(_, s)| s.due <= until)
            .min_by_key(|(_, s)| (s.due, s.seq))
            .map(|(i, _)| i)?;
        let next = clock.queue.swap_remove(idx);
        clock.now = next.due;
        Some(next)
    }

    /// Move time forward, running every task that falls due, including tasks
    /// scheduled by tasks run during this call.
    pub fn advance(&self, dt: Duration) -> usize {
        let until = self.now() + dt;
        let mut ran = 0;
        while let Some(next) = self.pop_due(until) {
            let Scheduled { handle, task, .. } = next;
            if handle.run_if_pending(task) {
                ran += 1;
            }
        }
        self.clock.borrow_mut().now = until;
        ran
    }
}

impl Timer for VirtualTimer {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskHandle {
        let handle = TaskHandle::new();
        let mut clock = self.clock.borrow_mut();
        let seq = clock.seq;
        clock.seq += 1;
        let due = clock.now + delay;
        clock.queue.push(Scheduled {
            due,
            seq,
            handle: handle.clone(),
            task,
        });
        handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_in_due_order() {
        let timer = VirtualTimer::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for (ms, tag) in [(30, 'c'), (10, 'a'), (20, 'b'), (10, 'x')] {
            let log = log.clone();
            timer.schedule(
                Duration::from_millis(ms),
                Box::new(move || log.borrow_mut().push(tag)),
            );
        }
        assert_eq!(timer.advance(Duration::from_millis(25)), 3);
        assert_eq!(*log.borrow(), vec!['a', 'x', 'b']);
        assert_eq!(timer.now(), Duration::from_millis(25));
        assert_eq!(timer.pending(), 1);
    }

    #[test]
    fn cancelled_task_never_runs() {
        let timer = VirtualTimer::new();
        let hit = Rc::new(Cell::new(false));
        let hooked = Rc::new(Cell::new(false));
        let h = {
            let hit = hit.clone();
            timer.schedule(Duration::from_millis(5), Box::new(move || hit.set(true)))
        };
        let hooked_cb = hooked.clone();
        h.set_cancel_hook(move || hooked_cb.set(true));
        assert!(h.cancel());
        assert!(!h.cancel());
        timer.advance(Duration::from_millis(10));
        assert!(!hit.get());
        assert!(hooked.get());
        assert_eq!(h.status(), TaskStatus::Cancelled);
    }

    #[test]
    fn nested_schedule_within_window_runs() {
        let timer = VirtualTimer::new();
        let hit = Rc::new(Cell::new(0));
        let t2 = timer.clone();
        let hit_cb = hit.clone();
        timer.schedule(
            Duration::from_millis(10),
            Box::new(move || {
                let hit = hit_cb.clone();
                t2.schedule(Duration::from_millis(10), Box::new(move || hit.set(2)));
                hit_cb.set(1);
            }),
        );
        timer.advance(Duration::from_millis(15));
        assert_eq!(hit.get(), 1);
        timer.advance(Duration::from_millis(5));
        assert_eq!(hit.get(), 2);
    }
}
