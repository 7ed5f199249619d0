//! Small rounded status labels.

use crate::render::{Block, Component, RenderContext};

/// Pill-shaped label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PillText {
    /// Translation key of the label.
    pub text_key: &'static str,
    /// Background colour.
    pub background: &'static str,
    /// Text colour.
    pub color: &'static str,
}

impl Component for PillText {
    fn render(&self, ctx: &RenderContext<'_>) -> Vec<Block> {
        vec![Block::Pill {
            text: ctx.t(self.text_key),
            background: self.background.to_string(),
            color: self.color.to_string(),
        }]
    }
}
