//! Channel registry and subscriber handles.

use std::collections::HashMap;
use std::fmt::{self, Debug, Formatter};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, trace};

use crate::error::{EventBusError, EventBusResult, HandlerResult};
use crate::payloads::Event;

type Callback = dyn Fn(&Event) -> HandlerResult + Send + Sync;

/// Shared handle to a subscriber callback.
///
/// Identity is the underlying allocation: clones of one handle are the same
/// subscriber, while two handles built from identical closures are not.
#[derive(Clone)]
pub struct Subscriber {
    callback: Arc<Callback>,
}

impl Subscriber {
    /// Wrap a fallible callback. An `Err` aborts the publish that invoked it.
    #[must_use]
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&Event) -> HandlerResult + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(callback),
        }
    }

    /// Wrap a callback that cannot fail.
    #[must_use]
    pub fn infallible<F>(callback: F) -> Self
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        Self::new(move |event| {
            callback(event);
            Ok(())
        })
    }

    /// Whether both handles refer to the same callback.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.callback, &other.callback)
    }

    fn call(&self, event: &Event) -> HandlerResult {
        (self.callback)(event)
    }
}

impl Debug for Subscriber {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Subscriber")
            .field("callback", &Arc::as_ptr(&self.callback))
            .finish()
    }
}

/// Named-channel publish/subscribe registry.
///
/// Cloning the bus yields another handle to the same registry. All operations
/// on the registry are serialized by a mutex which is never held while a
/// subscriber runs, so callbacks may freely subscribe or unsubscribe.
#[derive(Clone, Default)]
pub struct EventBus {
    channels: Arc<Mutex<HashMap<String, Vec<Subscriber>>>>,
}

impl EventBus {
    /// Construct an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `subscriber` on `channel`, creating the channel on first use.
    ///
    /// Registering the same subscriber twice keeps both entries; it is then
    /// invoked twice per publish.
    pub fn subscribe(&self, channel: impl Into<String>, subscriber: &Subscriber) {
        let channel = channel.into();
        let mut channels = self.lock_channels();
        let subscribers = channels.entry(channel.clone()).or_default();
        subscribers.push(subscriber.clone());
        debug!(
            channel = %channel,
            subscribers = subscribers.len(),
            "event subscriber registered"
        );
    }

    /// Remove the first registration of `subscriber` from `channel`.
    ///
    /// Unknown channels and unregistered subscribers are ignored. Returns
    /// whether an entry was removed.
    pub fn unsubscribe(&self, channel: &str, subscriber: &Subscriber) -> bool {
        let mut channels = self.lock_channels();
        let Some(subscribers) = channels.get_mut(channel) else {
            return false;
        };
        let Some(index) = subscribers
            .iter()
            .position(|existing| existing.same_as(subscriber))
        else {
            return false;
        };
        subscribers.remove(index);
        debug!(
            channel,
            subscribers = subscribers.len(),
            "event subscriber removed"
        );
        true
    }

    /// Invoke every subscriber of `channel` with `event`, in registration order.
    ///
    /// The subscriber list is copied before the first callback runs; changes
    /// made by callbacks apply from the next publish on. Returns the number of
    /// subscribers invoked.
    ///
    /// # Errors
    ///
    /// Returns [`EventBusError::Handler`] for the first subscriber that fails.
    /// Subscribers after it are not invoked. Panics raised by a subscriber
    /// propagate to the caller unchanged.
    pub fn publish(&self, channel: &str, event: &Event) -> EventBusResult<usize> {
        let snapshot = self.snapshot(channel);
        trace!(
            channel,
            kind = event.kind(),
            subscribers = snapshot.len(),
            "publishing event"
        );
        for (position, subscriber) in snapshot.iter().enumerate() {
            subscriber
                .call(event)
                .map_err(|source| EventBusError::Handler {
                    channel: channel.to_string(),
                    position,
                    source,
                })?;
        }
        Ok(snapshot.len())
    }

    /// Publish `event` on its canonical channel.
    ///
    /// # Errors
    ///
    /// Same as [`EventBus::publish`].
    pub fn emit(&self, event: &Event) -> EventBusResult<usize> {
        self.publish(event.channel(), event)
    }

    /// Number of registrations currently held for `channel`.
    #[must_use]
    pub fn subscriber_count(&self, channel: &str) -> usize {
        self.lock_channels().get(channel).map_or(0, Vec::len)
    }

    /// Names of every channel ever subscribed to, sorted.
    #[must_use]
    pub fn channels(&self) -> Vec<String> {
        let mut names = self.lock_channels().keys().cloned().collect::<Vec<_>>();
        names.sort_unstable();
        names
    }

    fn snapshot(&self, channel: &str) -> Vec<Subscriber> {
        self.lock_channels()
            .get(channel)
            .cloned()
            .unwrap_or_default()
    }

    fn lock_channels(&self) -> MutexGuard<'_, HashMap<String, Vec<Subscriber>>> {
        self.channels.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Debug for EventBus {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("EventBus")
            .field("channels", &self.channels())
            .finish()
    }
}
