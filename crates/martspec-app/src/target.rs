//! Destination of page renders.
//!
//! # Design
//! - Shared between the application and its `LANG_CHANGED` subscriber; the
//!   subscriber replaces the stored page on every notification.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use martspec_site::RenderedPage;

#[derive(Debug, Default)]
struct TargetState {
    page: Option<RenderedPage>,
    renders: u64,
}

/// Holds the most recent render and counts renders.
#[derive(Debug, Clone, Default)]
pub struct RenderTarget {
    state: Arc<Mutex<TargetState>>,
}

impl RenderTarget {
    /// Empty target.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the displayed page.
    pub fn show(&self, page: RenderedPage) {
        let mut state = self.lock();
        state.page = Some(page);
        state.renders += 1;
    }

    /// Page shown by the latest render.
    #[must_use]
    pub fn current(&self) -> Option<RenderedPage> {
        self.lock().page.clone()
    }

    /// Number of renders so far.
    #[must_use]
    pub fn render_count(&self) -> u64 {
        self.lock().renders
    }

    fn lock(&self) -> MutexGuard<'_, TargetState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
