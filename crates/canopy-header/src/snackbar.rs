use std::cell::{Cell, RefCell};
use std::rc::Rc;

use canopy_core::{FrameScheduler, TaskHandle};
use web_time::{Duration, Instant};

/// Auto-dismiss timer for a transient banner.
///
/// `show` (re)starts the countdown; when it runs out, or on `dismiss`, the
/// dismiss callback runs once. `cancel` stops the countdown silently, which
/// is what unmounting does.
pub struct SnackbarTimer {
    scheduler: FrameScheduler,
    duration: Duration,
    on_dismiss: Rc<dyn Fn()>,
    visible: Rc<Cell<bool>>,
    task: RefCell<Option<TaskHandle>>,
}

impl SnackbarTimer {
    pub fn new(scheduler: FrameScheduler, duration: Duration, on_dismiss: Rc<dyn Fn()>) -> Self {
        Self {
            scheduler,
            duration,
            on_dismiss,
            visible: Rc::new(Cell::new(false)),
            task: RefCell::new(None),
        }
    }

    pub fn show(&self, now: Instant) {
        self.cancel();
        self.visible.set(true);
        let visible = self.visible.clone();
        let on_dismiss = self.on_dismiss.clone();
        let handle = self.scheduler.schedule_after(self.duration, now, move || {
            if visible.replace(false) {
                log::debug!("snackbar: auto-dismissed");
                on_dismiss();
            }
        });
        *self.task.borrow_mut() = Some(handle);
    }

    pub fn dismiss(&self) {
        if self.visible.get() {
            self.cancel();
            (self.on_dismiss)();
        }
    }

    /// Stops the countdown without calling back. Idempotent.
    pub fn cancel(&self) {
        if let Some(handle) = self.task.borrow_mut().take() {
            handle.cancel();
        }
        self.visible.set(false);
    }

    pub fn is_showing(&self) -> bool {
        self.visible.get()
    }
}
