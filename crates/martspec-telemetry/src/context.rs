//! Process-wide span helpers.
//!
//! # Design
//! - Every log line emitted while the guard lives carries the command name and
//!   build identifier.

use tracing::{Span, span::Entered};

use crate::init::build_sha;

/// Guard that keeps the application-level span entered for its lifetime.
pub struct GlobalContextGuard {
    _guard: Entered<'static>,
}

impl GlobalContextGuard {
    /// Enter the application-level span for `command`.
    #[must_use]
    pub fn new(command: impl Into<String>) -> Self {
        let command = command.into();
        let span: &'static Span = Box::leak(Box::new(tracing::info_span!(
            "martspec",
            command = %command,
            build_sha = %build_sha()
        )));
        Self {
            _guard: span.enter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_context_guard_enters_and_exits() {
        let guard = GlobalContextGuard::new("render");
        tracing::info!("inside the application span");
        drop(guard);
    }
}
