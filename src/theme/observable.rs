use std::cell::RefCell;
use std::rc::Rc;

/// Identifies a subscription so it can be dropped later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: T,
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Callback<T>)>,
}

/// A value that replays itself to new subscribers and pushes every
/// assignment to existing ones, synchronously and in subscription order.
///
/// Cloning yields another handle to the same value. Callbacks run with no
/// borrow held, so they may call [`Observable::get`]; calling
/// [`Observable::set`] from inside a callback recurses into the
/// notification loop and is not supported.
pub struct Observable<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<T: Clone + 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(
                RefCell::new(Inner {
                    value,
                    next_id: 0,
                    subscribers: Vec::new(),
                })
            ),
        }
    }

    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Replaces the value and notifies every subscriber, even when the new
    /// value equals the old one.
    pub fn set(&self, value: T) {
        let (value, subscribers) = {
            let mut inner = self.inner.borrow_mut();
            inner.value = value;
            let subscribers: Vec<Callback<T>> = inner.subscribers
                .iter()
                .map(|(_, cb)| Rc::clone(cb))
                .collect();
            (inner.value.clone(), subscribers)
        };

        for callback in subscribers {
            callback(&value);
        }
    }

    /// Registers `callback` and invokes it once with the current value
    /// before returning.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> SubscriptionId {
        let callback: Callback<T> = Rc::new(callback);
        let (id, value) = {
            let mut inner = self.inner.borrow_mut();
            let id = SubscriptionId(inner.next_id);
            inner.next_id += 1;
            inner.subscribers.push((id, Rc::clone(&callback)));
            (id, inner.value.clone())
        };

        callback(&value);
        id
    }

    /// Returns `false` when the id was already removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.subscribers.len();
        inner.subscribers.retain(|(sub, _)| *sub != id);
        inner.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}
