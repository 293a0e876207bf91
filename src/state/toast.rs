use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{Duration, Instant};

use tracing::debug;

use super::{Store, SubscriptionId};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    /// Failures and missing input
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }
}

/// Transient notifications any part of the app can enqueue.
///
/// At most `limit` toasts are kept; showing one more drops the oldest.
/// Expired toasts are removed by [`ToastQueue::prune`].
#[derive(Clone)]
pub struct ToastQueue {
    toasts: Store<Vec<Toast>>,
    next_id: Arc<AtomicU32>,
    duration: Duration,
    limit: usize,
}

impl ToastQueue {
    pub fn new(duration: Duration, limit: usize) -> Self {
        Self {
            toasts: Store::new(Vec::new()),
            next_id: Arc::new(AtomicU32::new(0)),
            duration,
            limit: limit.max(1),
        }
    }

    pub fn show(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        variant: ToastVariant,
    ) -> u32 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let toast = Toast {
            id,
            title: title.into(),
            description: description.into(),
            variant,
            created_at: Instant::now(),
            duration: self.duration,
        };

        debug!(id, ?variant, title = %toast.title, "toast");

        let limit = self.limit;
        self.toasts.update(|toasts| {
            while toasts.len() >= limit {
                toasts.remove(0);
            }
            toasts.push(toast);
        });
        id
    }

    pub fn success(&self, title: impl Into<String>, description: impl Into<String>) -> u32 {
        self.show(title, description, ToastVariant::Default)
    }

    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) -> u32 {
        self.show(title, description, ToastVariant::Destructive)
    }

    pub fn dismiss(&self, id: u32) -> bool {
        self.toasts.update(|toasts| {
            let before = toasts.len();
            toasts.retain(|t| t.id != id);
            toasts.len() != before
        })
    }

    /// Drop every toast expired at `now`; returns how many went.
    pub fn prune(&self, now: Instant) -> usize {
        let expired = self
            .toasts
            .with(|toasts| toasts.iter().filter(|t| t.is_expired_at(now)).count());
        if expired == 0 {
            return 0;
        }
        self.toasts.update(|toasts| toasts.retain(|t| !t.is_expired_at(now)));
        expired
    }

    pub fn active(&self) -> Vec<Toast> {
        self.toasts.get()
    }

    pub fn latest(&self) -> Option<Toast> {
        self.toasts.with(|toasts| toasts.last().cloned())
    }

    pub fn subscribe(&self, f: impl Fn(&[Toast]) + Send + Sync + 'static) -> SubscriptionId {
        self.toasts.subscribe(move |toasts| f(toasts))
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(Duration::from_millis(5000), 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_toast_is_dropped_over_limit() {
        let queue = ToastQueue::new(Duration::from_secs(5), 2);
        queue.success("one", "");
        queue.success("two", "");
        queue.error("three", "");

        let titles: Vec<String> = queue.active().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["two", "three"]);
        assert_eq!(queue.latest().map(|t| t.variant), Some(ToastVariant::Destructive));
    }

    #[test]
    fn dismiss_removes_by_id() {
        let queue = ToastQueue::default();
        let a = queue.success("a", "");
        let b = queue.success("b", "");
        assert!(queue.dismiss(a));
        assert!(!queue.dismiss(a));
        assert_eq!(queue.active().iter().map(|t| t.id).collect::<Vec<_>>(), vec![b]);
    }

    #[test]
    fn prune_removes_expired() {
        let queue = ToastQueue::new(Duration::from_secs(5), 3);
        queue.success("Subscribed!", "You've been added to our newsletter.");

        assert_eq!(queue.prune(Instant::now()), 0);
        assert_eq!(queue.prune(Instant::now() + Duration::from_secs(6)), 1);
        assert!(queue.active().is_empty());
    }

    #[test]
    fn subscribers_see_the_queue() {
        let queue = ToastQueue::default();
        let seen = Arc::new(std::sync::Mutex::new(0));
        let sink = Arc::clone(&seen);
        queue.subscribe(move |toasts| *sink.lock().unwrap() = toasts.len());
        queue.success("hi", "");
        assert_eq!(*seen.lock().unwrap(), 1);
    }
}
