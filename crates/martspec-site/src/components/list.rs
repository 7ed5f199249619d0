//! Bullet and icon lists.

use crate::render::{Block, Component, IconEntry, RenderContext};

/// Plain bulleted list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulletList {
    /// Translation keys of the items, in order.
    pub item_keys: Vec<&'static str>,
    /// Bullet colour.
    pub marker_color: Option<&'static str>,
}

impl BulletList {
    /// List of `item_keys` with default bullets.
    #[must_use]
    pub fn new(item_keys: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            item_keys: item_keys.into_iter().collect(),
            marker_color: None,
        }
    }

    /// Colour the bullets.
    #[must_use]
    pub const fn with_marker_color(mut self, color: &'static str) -> Self {
        self.marker_color = Some(color);
        self
    }
}

impl Component for BulletList {
    fn render(&self, ctx: &RenderContext<'_>) -> Vec<Block> {
        if self.item_keys.is_empty() {
            return Vec::new();
        }
        vec![Block::List {
            items: self.item_keys.iter().map(|key| ctx.t(key)).collect(),
            marker_color: self.marker_color.map(str::to_string),
        }]
    }
}

/// One icon, heading and text entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconTitleText {
    /// Icon asset path.
    pub icon: &'static str,
    /// Translation key of the icon alt text; `None` marks the icon decorative.
    pub icon_alt_key: Option<&'static str>,
    /// Translation key of the heading.
    pub title_key: &'static str,
    /// Translation key of the body.
    pub text_key: &'static str,
}

impl IconTitleText {
    fn entry(&self, ctx: &RenderContext<'_>) -> IconEntry {
        IconEntry {
            icon: ctx.asset(self.icon),
            icon_alt: self.icon_alt_key.map(|key| ctx.t(key)).unwrap_or_default(),
            title: ctx.t(self.title_key),
            text: ctx.t(self.text_key),
        }
    }
}

/// List of [`IconTitleText`] entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconTitleTextList {
    /// Entries in display order.
    pub items: Vec<IconTitleText>,
}

impl Component for IconTitleTextList {
    fn render(&self, ctx: &RenderContext<'_>) -> Vec<Block> {
        vec![Block::IconList {
            items: self.items.iter().map(|item| item.entry(ctx)).collect(),
        }]
    }
}
