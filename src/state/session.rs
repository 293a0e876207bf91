use std::time::Duration;

use tracing::debug;

use super::{ThemeStore, ToastQueue};
use crate::config::Config;

/// Everything shared across one run of the site: the theme and the toasts.
///
/// Created once at startup and passed down; dropping it ends the session.
#[derive(Clone)]
pub struct Session {
    pub theme: ThemeStore,
    pub toasts: ToastQueue,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        debug!(theme = %config.theme, "session started");
        Self {
            theme: ThemeStore::new(config.theme),
            toasts: ToastQueue::new(
                Duration::from_millis(config.toast.duration_ms),
                config.toast.limit,
            ),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
