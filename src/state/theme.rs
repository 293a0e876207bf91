use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{Store, SubscriptionId};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme `{other}` (expected `light` or `dark`)")),
        }
    }
}

/// Light/dark mode for the lifetime of one session.
#[derive(Clone)]
pub struct ThemeStore {
    store: Store<Theme>,
}

impl ThemeStore {
    pub fn new(initial: Theme) -> Self {
        Self {
            store: Store::new(initial),
        }
    }

    pub fn theme(&self) -> Theme {
        self.store.get()
    }

    pub fn set(&self, theme: Theme) {
        self.store.set(theme);
    }

    /// Flip between light and dark and return the new theme.
    pub fn toggle(&self) -> Theme {
        let next = self.store.update(|t| {
            *t = t.toggled();
            *t
        });
        info!(theme = %next, "theme toggled");
        next
    }

    pub fn subscribe(&self, f: impl Fn(Theme) + Send + Sync + 'static) -> SubscriptionId {
        self.store.subscribe(move |t| f(*t))
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn toggle_flips_and_notifies() {
        let themes = ThemeStore::new(Theme::Light);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        themes.subscribe(move |t| sink.lock().unwrap().push(t));

        assert_eq!(themes.toggle(), Theme::Dark);
        assert_eq!(themes.toggle(), Theme::Light);
        assert_eq!(*seen.lock().unwrap(), vec![Theme::Dark, Theme::Light]);
    }

    #[test]
    fn handles_share_the_session_theme() {
        let themes = ThemeStore::new(Theme::Dark);
        let header = themes.clone();
        header.toggle();
        assert_eq!(themes.theme(), Theme::Light);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Dark".parse::<Theme>(), Ok(Theme::Dark));
        assert!("sepia".parse::<Theme>().is_err());
    }
}
