//! Observable properties with change listeners and two-way bindings.
//!
//! Everything here is single-threaded: controls live on the UI thread and
//! listeners run synchronously inside [`Property::set`], in registration
//! order, before `set` returns.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Change listener: receives the old and the new value.
pub type Listener<T> = Rc<dyn Fn(&T, &T)>;

struct Inner<T> {
    value: RefCell<T>,
    listeners: RefCell<Vec<Listener<T>>>,
}

/// A shared, observable value.
///
/// Cloning a `Property` yields another handle to the same value.
pub struct Property<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.inner.value.borrow())
            .field("listeners", &self.inner.listeners.borrow().len())
            .finish()
    }
}

impl<T: Default + Clone + PartialEq + 'static> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + PartialEq + 'static> Property<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(Inner {
                value: RefCell::new(value),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Current value.
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Store a new value and notify listeners.
    ///
    /// Setting a value equal to the current one is a no-op, which is also
    /// what stops two-way bindings from ping-ponging.
    pub fn set(&self, value: T) {
        let old = {
            let mut current = self.inner.value.borrow_mut();
            if *current == value {
                return;
            }
            std::mem::replace(&mut *current, value.clone())
        };
        // Snapshot so listeners may subscribe, unsubscribe or set again.
        let listeners = self.inner.listeners.borrow().clone();
        for listener in listeners {
            listener(&old, &value);
        }
    }

    /// Register a change listener. It stays registered until the returned
    /// [`Subscription`] is dropped.
    #[must_use = "dropping the subscription removes the listener"]
    pub fn subscribe(&self, listener: impl Fn(&T, &T) + 'static) -> Subscription {
        let listener: Listener<T> = Rc::new(listener);
        self.inner.listeners.borrow_mut().push(Rc::clone(&listener));

        let weak: Weak<Inner<T>> = Rc::downgrade(&self.inner);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner
                        .listeners
                        .borrow_mut()
                        .retain(|item| !Rc::ptr_eq(item, &listener));
                }
            })),
        }
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// A handle that does not keep the value alive.
    pub fn downgrade(&self) -> WeakProperty<T> {
        WeakProperty {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Bind this property and `other` in both directions.
    ///
    /// `self` first adopts `other`'s current value; afterwards a change on
    /// either side is written to the other one. The binding lasts until the
    /// returned [`Binding`] is dropped.
    ///
    /// Each side copies the source's value as it is when the listener runs,
    /// so a listener that rewrites a value during notification (rejecting
    /// it, say) is followed by every bound property.
    #[must_use = "dropping the binding unbinds the properties"]
    pub fn bind_bidirectional(&self, other: &Property<T>) -> Binding {
        self.set(other.get());

        let forward = {
            let (source, target) = (self.downgrade(), other.downgrade());
            self.subscribe(move |_, _| mirror(&source, &target))
        };
        let backward = {
            let (source, target) = (other.downgrade(), self.downgrade());
            other.subscribe(move |_, _| mirror(&source, &target))
        };

        Binding {
            _subscriptions: [forward, backward],
        }
    }
}

/// Equal values end the round trip: `set` ignores them.
fn mirror<T: Clone + PartialEq + 'static>(source: &WeakProperty<T>, target: &WeakProperty<T>) {
    let (Some(source), Some(target)) = (source.upgrade(), target.upgrade()) else {
        return;
    };
    target.set(source.get());
}

/// Non-owning handle to a [`Property`].
pub struct WeakProperty<T> {
    inner: Weak<Inner<T>>,
}

impl<T> Clone for WeakProperty<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<T> WeakProperty<T> {
    pub fn upgrade(&self) -> Option<Property<T>> {
        self.inner.upgrade().map(|inner| Property { inner })
    }
}

/// Keeps a listener registered; dropping it unsubscribes.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

/// A two-way binding between two properties; dropping it unbinds them.
#[derive(Debug)]
pub struct Binding {
    _subscriptions: [Subscription; 2],
}
