use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Lifetime of one screen instance. Disposers registered on a scope run once,
/// children first, when the scope is disposed or its last handle is dropped.
pub struct Scope {
    inner: Rc<ScopeInner>,
}

#[derive(Default)]
struct ScopeInner {
    disposers: RefCell<Vec<Box<dyn FnOnce()>>>,
    children: RefCell<Vec<Scope>>,
    disposed: Cell<bool>,
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

impl Scope {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(ScopeInner::default()),
        }
    }

    /// Registers cleanup. On an already disposed scope the disposer runs
    /// immediately.
    pub fn add_disposer(&self, disposer: impl FnOnce() + 'static) {
        if self.inner.disposed.get() {
            disposer();
            return;
        }
        self.inner.disposers.borrow_mut().push(Box::new(disposer));
    }

    pub fn child(&self) -> Scope {
        let child = Scope::new();
        self.inner.children.borrow_mut().push(child.clone());
        child
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.get()
    }

    /// Idempotent.
    pub fn dispose(&self) {
        self.inner.dispose();
    }
}

impl ScopeInner {
    fn dispose(&self) {
        if self.disposed.replace(true) {
            return;
        }
        let children = std::mem::take(&mut *self.children.borrow_mut());
        for child in children {
            child.dispose();
        }

        let disposers = std::mem::take(&mut *self.disposers.borrow_mut());
        log::trace!("scope: running {} disposer(s)", disposers.len());
        for disposer in disposers {
            disposer();
        }
    }
}

impl Clone for Scope {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl Drop for ScopeInner {
    fn drop(&mut self) {
        self.dispose();
    }
}
