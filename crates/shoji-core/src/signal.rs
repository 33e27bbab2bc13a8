use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::dispose::Dispose;

/// Observable value. Cloning the handle shares the underlying cell.
pub struct Signal<T: 'static>(Rc<Inner<T>>);

struct Inner<T> {
    value: RefCell<T>,
    next_id: Cell<usize>,
    subscribers: RefCell<SmallVec<[(usize, Rc<dyn Fn(&T)>); 2]>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: 'static> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(Inner {
            value: RefCell::new(value),
            next_id: Cell::new(0),
            subscribers: RefCell::new(SmallVec::new()),
        }))
    }

    /// Read through a borrow without cloning the value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.0.value.borrow())
    }

    /// Registers `f` for every subsequent write. The returned handle
    /// unsubscribes when run; dropping it without running keeps the
    /// subscription alive.
    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> Dispose {
        let id = self.0.next_id.get();
        self.0.next_id.set(id + 1);
        self.0.subscribers.borrow_mut().push((id, Rc::new(f)));

        let weak: Weak<Inner<T>> = Rc::downgrade(&self.0);
        Dispose::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.subscribers.borrow_mut().retain(|(sid, _)| *sid != id);
            }
        })
    }

    pub fn subscriber_count(&self) -> usize {
        self.0.subscribers.borrow().len()
    }
}

impl<T: Clone + 'static> Signal<T> {
    pub fn get(&self) -> T {
        self.0.value.borrow().clone()
    }

    pub fn set(&self, value: T) {
        *self.0.value.borrow_mut() = value;
        self.notify();
    }

    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.0.value.borrow_mut());
        self.notify();
    }

    // Snapshots both the value and the subscriber list before delivering,
    // so a subscriber may unsubscribe or write again mid-notification.
    fn notify(&self) {
        let value = self.0.value.borrow().clone();
        let subs: SmallVec<[Rc<dyn Fn(&T)>; 2]> = self
            .0
            .subscribers
            .borrow()
            .iter()
            .map(|(_, f)| f.clone())
            .collect();
        for f in subs {
            f(&value);
        }
    }
}

pub fn signal<T: 'static>(value: T) -> Signal<T> {
    Signal::new(value)
}
