//! Titled text cards.

use crate::render::{Block, Component, Link, LinkStyle, RenderContext};

/// "Read more" link at the bottom of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLink {
    /// Translation key of the label.
    pub label_key: &'static str,
    /// Site path, localized at render time.
    pub path: &'static str,
}

/// Card with a heading, body text and optional background and link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleTextCard {
    /// Translation key of the heading.
    pub title_key: &'static str,
    /// Translation key of the body.
    pub text_key: &'static str,
    /// Background colour or theme class.
    pub background: Option<&'static str>,
    /// Optional link.
    pub link: Option<CardLink>,
}

impl TitleTextCard {
    /// Card on the given background.
    #[must_use]
    pub const fn new(
        title_key: &'static str,
        text_key: &'static str,
        background: &'static str,
    ) -> Self {
        Self {
            title_key,
            text_key,
            background: Some(background),
            link: None,
        }
    }

    /// Attach a read-more link to `path`.
    #[must_use]
    pub const fn with_link(mut self, label_key: &'static str, path: &'static str) -> Self {
        self.link = Some(CardLink { label_key, path });
        self
    }
}

impl Component for TitleTextCard {
    fn render(&self, ctx: &RenderContext<'_>) -> Vec<Block> {
        vec![Block::Card {
            title: ctx.t(self.title_key),
            text: ctx.t(self.text_key),
            background: self.background.map(str::to_string),
            link: self.link.map(|link| Link {
                label: ctx.t(link.label_key),
                href: ctx.link(link.path),
                style: LinkStyle::ReadMore,
            }),
        }]
    }
}
