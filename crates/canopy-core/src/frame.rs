//! # Frame scheduler
//!
//! Everything time-driven runs as a task on one [`FrameScheduler`], ticked
//! by the host's frame loop on the UI thread:
//!
//! - `on_frame` tasks are sampled every tick until they report
//!   [`FrameResult::Finished`].
//! - `schedule_after` tasks fire once, on the first tick at or after their
//!   deadline.
//!
//! Both hand back a [`TaskHandle`]. Cancelling it is the only way to stop a
//! task early, and a cancelled task is never run again.
//!
//! ```rust
//! use canopy_core::frame::{FrameResult, FrameScheduler};
//! use web_time::{Duration, Instant};
//!
//! let scheduler = FrameScheduler::new();
//! let t0 = Instant::now();
//! let handle = scheduler.schedule_after(Duration::from_millis(10), t0, || {});
//! assert!(handle.is_active());
//! scheduler.tick(t0 + Duration::from_millis(10));
//! assert!(!handle.is_active());
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use slotmap::{SlotMap, new_key_type};
use web_time::{Duration, Instant};

new_key_type! {
    pub struct TaskKey;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameResult {
    Continue,
    Finished,
}

enum TaskKind {
    Frame(Box<dyn FnMut(Instant) -> FrameResult>),
    Timer(Box<dyn FnOnce()>),
}

struct Task {
    due: Option<Instant>,
    // Taken out while the task runs so the callback may touch the scheduler.
    kind: Option<TaskKind>,
}

#[derive(Default)]
struct SchedulerInner {
    tasks: SlotMap<TaskKey, Task>,
    last_tick: Option<Instant>,
}

/// Cloneable handle to a single-threaded task registry.
#[derive(Clone, Default)]
pub struct FrameScheduler {
    inner: Rc<RefCell<SchedulerInner>>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_frame(&self, task: impl FnMut(Instant) -> FrameResult + 'static) -> TaskHandle {
        self.insert(None, TaskKind::Frame(Box::new(task)))
    }

    pub fn schedule_after(
        &self,
        delay: Duration,
        now: Instant,
        task: impl FnOnce() + 'static,
    ) -> TaskHandle {
        self.insert(Some(now + delay), TaskKind::Timer(Box::new(task)))
    }

    fn insert(&self, due: Option<Instant>, kind: TaskKind) -> TaskHandle {
        let key = self.inner.borrow_mut().tasks.insert(Task {
            due,
            kind: Some(kind),
        });
        TaskHandle {
            key,
            scheduler: Rc::downgrade(&self.inner),
        }
    }

    /// Runs every task that was registered before this tick started. Returns
    /// true while any task remains, i.e. the host should request another frame.
    pub fn tick(&self, now: Instant) -> bool {
        let keys: Vec<TaskKey> = {
            let mut inner = self.inner.borrow_mut();
            inner.last_tick = Some(now);
            inner.tasks.keys().collect()
        };

        for key in keys {
            let kind = {
                let mut inner = self.inner.borrow_mut();
                match inner.tasks.get_mut(key) {
                    Some(task) if task.due.is_none_or(|due| due <= now) => task.kind.take(),
                    _ => None,
                }
            };

            match kind {
                Some(TaskKind::Frame(mut f)) => match f(now) {
                    FrameResult::Continue => {
                        // Put back unless the task was cancelled while running.
                        if let Some(task) = self.inner.borrow_mut().tasks.get_mut(key) {
                            task.kind = Some(TaskKind::Frame(f));
                        }
                    }
                    FrameResult::Finished => {
                        self.inner.borrow_mut().tasks.remove(key);
                    }
                },
                Some(TaskKind::Timer(f)) => {
                    self.inner.borrow_mut().tasks.remove(key);
                    f();
                }
                None => {}
            }
        }

        !self.inner.borrow().tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn last_tick(&self) -> Option<Instant> {
        self.inner.borrow().last_tick
    }
}

/// Handle to a scheduled task. Dropping it does not cancel the task.
#[derive(Clone)]
pub struct TaskHandle {
    key: TaskKey,
    scheduler: Weak<RefCell<SchedulerInner>>,
}

impl TaskHandle {
    /// Idempotent. Returns true if this call removed the task.
    pub fn cancel(&self) -> bool {
        let Some(inner) = self.scheduler.upgrade() else {
            return false;
        };
        let removed = inner.borrow_mut().tasks.remove(self.key).is_some();
        if removed {
            log::trace!("frame: cancelled task {:?}", self.key);
        }
        removed
    }

    pub fn is_active(&self) -> bool {
        self.scheduler
            .upgrade()
            .is_some_and(|inner| inner.borrow().tasks.contains_key(self.key))
    }
}

impl std::fmt::Debug for TaskHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskHandle")
            .field("key", &self.key)
            .field("active", &self.is_active())
            .finish()
    }
}
