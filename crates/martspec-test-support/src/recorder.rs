//! Subscriber that records every event it receives.

use std::sync::{Arc, Mutex, PoisonError};

use martspec_events::{Event, EventBus, Subscriber};

/// Records delivered events in arrival order.
#[derive(Clone, Debug)]
pub struct EventRecorder {
    events: Arc<Mutex<Vec<Event>>>,
    subscriber: Subscriber,
}

impl EventRecorder {
    /// Build a recorder that is not yet attached to any bus.
    #[must_use]
    pub fn new() -> Self {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let subscriber = Subscriber::infallible(move |event: &Event| {
            sink.lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(event.clone());
        });
        Self { events, subscriber }
    }

    /// Build a recorder and subscribe it to `channel` on `bus`.
    #[must_use]
    pub fn attach(bus: &EventBus, channel: &str) -> Self {
        let recorder = Self::new();
        bus.subscribe(channel, recorder.subscriber());
        recorder
    }

    /// Handle used to subscribe or unsubscribe the recorder.
    #[must_use]
    pub const fn subscriber(&self) -> &Subscriber {
        &self.subscriber
    }

    /// Snapshot of recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<Event> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Locale codes carried by recorded language changes.
    #[must_use]
    pub fn language_codes(&self) -> Vec<String> {
        self.events()
            .iter()
            .filter_map(Event::language_code)
            .map(ToString::to_string)
            .collect()
    }
}

impl Default for EventRecorder {
    fn default() -> Self {
        Self::new()
    }
}
