use std::cell::RefCell;
use std::rc::Rc;

use smallvec::SmallVec;

pub type SubId = usize;

type Subscriber<T> = Box<dyn Fn(&T)>;

/// Observable value. Every write notifies the subscribers synchronously, in
/// registration order, on the calling thread.
///
/// Subscribers may read the signal (`get`, `with`) while being notified, but
/// must not write to it or subscribe from inside the callback.
pub struct Signal<T: 'static>(Rc<RefCell<Inner<T>>>);

struct Inner<T> {
    value: T,
    subs: SmallVec<[Option<Subscriber<T>>; 4]>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(Inner {
            value,
            subs: SmallVec::new(),
        })))
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.borrow().value.clone()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.0.borrow().value)
    }

    pub fn set(&self, v: T) {
        self.0.borrow_mut().value = v;
        self.notify();
    }

    /// Writes `v` only if it differs from the current value. Returns whether
    /// subscribers were notified.
    pub fn set_if_changed(&self, v: T) -> bool
    where
        T: PartialEq,
    {
        {
            let mut inner = self.0.borrow_mut();
            if inner.value == v {
                return false;
            }
            inner.value = v;
        }
        self.notify();
        true
    }

    pub fn update<F: FnOnce(&mut T)>(&self, f: F) {
        f(&mut self.0.borrow_mut().value);
        self.notify();
    }

    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubId {
        let mut inner = self.0.borrow_mut();
        inner.subs.push(Some(Box::new(f)));
        inner.subs.len() - 1
    }

    /// Drops the subscriber. Ids are never reused, so a stale id is a no-op.
    pub fn unsubscribe(&self, id: SubId) {
        if let Some(slot) = self.0.borrow_mut().subs.get_mut(id) {
            *slot = None;
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.0.borrow().subs.iter().flatten().count()
    }

    fn notify(&self) {
        let inner = self.0.borrow();
        for s in inner.subs.iter().flatten() {
            s(&inner.value);
        }
    }
}

pub fn signal<T>(t: T) -> Signal<T> {
    Signal::new(t)
}
