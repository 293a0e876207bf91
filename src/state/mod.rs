//! Session-scoped shared state.
//!
//! A [`Store`] is a cloneable handle to one value plus its subscribers. The
//! [`Session`] creates the theme and toast stores at startup and hands them
//! to whoever needs them; nothing here is global.

mod session;
mod theme;
mod toast;

pub use session::Session;
pub use theme::{Theme, ThemeStore};
pub use toast::{Toast, ToastQueue, ToastVariant};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

type Subscriber<T> = Arc<dyn Fn(&T) + Send + Sync>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Inner<T> {
    value: T,
    next_id: u64,
    subscribers: Vec<(u64, Subscriber<T>)>,
}

pub struct Store<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Send + 'static> Store<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                value,
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    pub fn get(&self) -> T {
        self.lock().value.clone()
    }

    /// Read without cloning the whole value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.lock().value)
    }

    pub fn set(&self, value: T) {
        self.update(|v| *v = value);
    }

    /// Mutate in place, then notify every subscriber with the new value.
    ///
    /// Subscribers run after the lock is released, so they may read the
    /// store again.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let (result, snapshot, subscribers) = {
            let mut inner = self.lock();
            let result = f(&mut inner.value);
            let subscribers: Vec<Subscriber<T>> =
                inner.subscribers.iter().map(|(_, s)| Arc::clone(s)).collect();
            (result, inner.value.clone(), subscribers)
        };
        for subscriber in subscribers {
            subscriber(&snapshot);
        }
        result
    }

    pub fn subscribe(&self, f: impl Fn(&T) + Send + Sync + 'static) -> SubscriptionId {
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push((id, Arc::new(f)));
        SubscriptionId(id)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.lock();
        let before = inner.subscribers.len();
        inner.subscribers.retain(|(sid, _)| *sid != id.0);
        inner.subscribers.len() != before
    }

    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn update_notifies_with_new_value() {
        let store = Store::new(1);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        store.subscribe(move |v: &i32| sink.lock().unwrap().push(*v));

        store.set(2);
        let doubled = store.update(|v| {
            *v *= 2;
            *v
        });

        assert_eq!(doubled, 4);
        assert_eq!(*seen.lock().unwrap(), vec![2, 4]);
    }

    #[test]
    fn clones_share_one_value() {
        let store = Store::new(String::from("a"));
        let handle = store.clone();
        handle.set("b".into());
        assert_eq!(store.get(), "b");
        assert_eq!(store.with(|s| s.len()), 1);
    }

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let store = Store::new(0u8);
        let calls = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&calls);
        let id = store.subscribe(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });

        store.set(1);
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set(2);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn subscriber_may_read_the_store() {
        let store = Store::new(5);
        let reader = store.clone();
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        store.subscribe(move |_| *sink.lock().unwrap() = Some(reader.get()));
        store.set(7);
        assert_eq!(*seen.lock().unwrap(), Some(7));
    }
}
