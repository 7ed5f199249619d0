//! Event bus error primitives.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Error type returned by a failing subscriber callback.
pub type HandlerError = Box<dyn Error + Send + Sync + 'static>;

/// Result returned by subscriber callbacks.
pub type HandlerResult = Result<(), HandlerError>;

/// Error emitted when publishing fails.
#[derive(Debug)]
pub enum EventBusError {
    /// A subscriber returned an error. Subscribers after it were not invoked.
    Handler {
        /// Channel the event was published on.
        channel: String,
        /// Zero-based position of the failing subscriber within the snapshot.
        position: usize,
        /// Error returned by the subscriber.
        source: HandlerError,
    },
}

impl EventBusError {
    /// Channel the failing publish targeted.
    #[must_use]
    pub fn channel(&self) -> &str {
        match self {
            Self::Handler { channel, .. } => channel,
        }
    }

    /// Position of the subscriber that failed.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Handler { position, .. } => *position,
        }
    }
}

impl Display for EventBusError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("event subscriber failed")
    }
}

impl Error for EventBusError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Handler { source, .. } => Some(&**source),
        }
    }
}

/// Result wrapper for event bus operations.
pub type EventBusResult<T> = Result<T, EventBusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_bus_error_exposes_fields() {
        let err = EventBusError::Handler {
            channel: "LANG_CHANGED".to_string(),
            position: 2,
            source: "render failed".into(),
        };

        assert_eq!(err.channel(), "LANG_CHANGED");
        assert_eq!(err.position(), 2);
        assert_eq!(err.to_string(), "event subscriber failed");
        assert_eq!(
            err.source().map(ToString::to_string).as_deref(),
            Some("render failed")
        );
    }
}
