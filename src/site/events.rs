use tracing::debug;

use crate::api::{ApiClient, ApiError, EventRecord};

pub const ALL_TYPES: &str = "all";

/// The events page's listing: fetched once, filtered locally, refetched
/// after [`EventsView::invalidate`].
#[derive(Debug)]
pub struct EventsView {
    cache: Option<Vec<EventRecord>>,
    filter: String,
}

impl Default for EventsView {
    fn default() -> Self {
        Self {
            cache: None,
            filter: ALL_TYPES.to_string(),
        }
    }
}

impl EventsView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached listing, fetching it first if there is none.
    pub async fn load(&mut self, client: &ApiClient) -> Result<&[EventRecord], ApiError> {
        if self.cache.is_none() {
            let events = client.events().await?;
            self.cache = Some(events);
        } else {
            debug!("events served from cache");
        }
        Ok(self.cache.as_deref().unwrap_or_default())
    }

    /// Seed the cache directly, e.g. from a listing obtained elsewhere.
    pub fn fill(&mut self, events: Vec<EventRecord>) {
        self.cache = Some(events);
    }

    pub fn is_loaded(&self) -> bool {
        self.cache.is_some()
    }

    pub fn invalidate(&mut self) {
        debug!("events cache invalidated");
        self.cache = None;
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// `"all"` shows everything; any other value must equal `eventType`.
    pub fn set_filter(&mut self, event_type: &str) {
        self.filter = event_type.trim().to_string();
    }

    pub fn filtered(&self) -> Vec<&EventRecord> {
        let events = self.cache.as_deref().unwrap_or_default();
        if self.filter.eq_ignore_ascii_case(ALL_TYPES) || self.filter.is_empty() {
            events.iter().collect()
        } else {
            events
                .iter()
                .filter(|e| e.event_type == self.filter)
                .collect()
        }
    }

    pub fn find(&self, id: &str) -> Option<&EventRecord> {
        self.cache.as_deref()?.iter().find(|e| e.id == id)
    }
}
