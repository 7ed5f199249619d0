//! App Store review showcase.

use crate::render::{Block, Component, Link, LinkStyle, RenderContext};

/// Longest review body shown before it is cut with a read-more link.
const EXCERPT_CHARS: usize = 180;
const FILLER_HEAD_KEYS: [&str; 3] = [
    "REVIEW.FILLER_CARD.HEAD1",
    "REVIEW.FILLER_CARD.HEAD2",
    "REVIEW.FILLER_CARD.HEAD3",
];

/// A single customer review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewEntry {
    /// Reviewer nickname.
    pub author: String,
    /// Review headline.
    pub title: String,
    /// Review body.
    pub body: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
}

/// Review section; falls back to a "be the first" card without reviews.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    /// Accent colour of the section.
    pub theme_color: &'static str,
    /// Reviews to show, newest first.
    pub entries: Vec<ReviewEntry>,
}

impl Review {
    /// Empty review section with the given accent colour.
    #[must_use]
    pub const fn new(theme_color: &'static str) -> Self {
        Self {
            theme_color,
            entries: Vec::new(),
        }
    }

    fn review_card(entry: &ReviewEntry, ctx: &RenderContext<'_>, reviews: Option<&str>) -> Block {
        let stars = "★".repeat(usize::from(entry.rating.min(5)));
        let truncated = entry.body.chars().count() > EXCERPT_CHARS;
        let text = if truncated {
            let excerpt: String = entry.body.chars().take(EXCERPT_CHARS).collect();
            format!("{}…", excerpt.trim_end())
        } else {
            entry.body.clone()
        };
        Block::Card {
            title: format!("{stars} {} ({})", entry.title, entry.author),
            text,
            background: None,
            link: reviews.filter(|_| truncated).map(|href| Link {
                label: ctx.t("REVIEW.READ_MORE_LINK"),
                href: href.to_string(),
                style: LinkStyle::ReadMore,
            }),
        }
    }

    fn filler(&self, ctx: &RenderContext<'_>, reviews: Option<&str>) -> Block {
        let mut blocks: Vec<Block> = FILLER_HEAD_KEYS
            .iter()
            .map(|key| Block::Heading {
                level: 3,
                text: ctx.t(key),
            })
            .collect();
        if let Some(href) = reviews {
            blocks.push(Block::Link(Link {
                label: ctx.t("REVIEW.FILLER_CARD.LINK"),
                href: href.to_string(),
                style: LinkStyle::Text,
            }));
        }
        Block::Section {
            background: Some(self.theme_color.to_string()),
            blocks,
        }
    }
}

impl Component for Review {
    fn render(&self, ctx: &RenderContext<'_>) -> Vec<Block> {
        let reviews = ctx.reviews_url();
        let mut blocks = vec![
            Block::Heading {
                level: 2,
                text: ctx.t("REVIEW.HEAD"),
            },
            Block::Paragraph {
                text: ctx.t("REVIEW.DESCRIPTION"),
            },
        ];
        if let Some(href) = &reviews {
            blocks.push(Block::Link(Link {
                label: ctx.t("REVIEW.LINK_ALL_REVIEWS"),
                href: href.clone(),
                style: LinkStyle::Text,
            }));
        }
        if self.entries.is_empty() {
            blocks.push(self.filler(ctx, reviews.as_deref()));
        } else {
            blocks.extend(
                self.entries
                    .iter()
                    .map(|entry| Self::review_card(entry, ctx, reviews.as_deref())),
            );
        }
        vec![Block::Section {
            background: None,
            blocks,
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::SiteContext;
    use martspec_events::EventBus;
    use martspec_i18n::{Locale, LocaleCode};

    fn render(review: &Review, locale: &Locale, app_id: Option<u64>) -> Vec<Block> {
        let site = SiteContext {
            app_id,
            ..SiteContext::default()
        };
        match review.render(&RenderContext::new(locale, &site)).pop() {
            Some(Block::Section { blocks, .. }) => blocks,
            other => panic!("expected section, got {other:?}"),
        }
    }

    #[test]
    fn empty_review_list_shows_filler_card_in_local_storefront() {
        let locale = Locale::new(EventBus::new(), LocaleCode::En);
        locale.change_language("fr").expect("switch");

        let blocks = render(&Review::new("#7B62FE"), &locale, Some(7));

        let storefront = "https://apps.apple.com/fr/app/id7?see-all=reviews";
        assert!(blocks.iter().any(
            |block| matches!(block, Block::Link(link) if link.href == storefront)
        ));
        assert!(matches!(
            blocks.last(),
            Some(Block::Section { background: Some(color), blocks }) if color == "#7B62FE" && blocks.len() == 4
        ));
    }

    #[test]
    fn long_reviews_are_cut_with_read_more() {
        let locale = Locale::new(EventBus::new(), LocaleCode::En);
        let mut review = Review::new("#7B62FE");
        review.entries = vec![
            ReviewEntry {
                author: "ana".into(),
                title: "Great".into(),
                body: "x".repeat(EXCERPT_CHARS + 20),
                rating: 5,
            },
            ReviewEntry {
                author: "ben".into(),
                title: "Fine".into(),
                body: "Short and sweet".into(),
                rating: 4,
            },
        ];

        let blocks = render(&review, &locale, Some(7));
        let cards: Vec<_> = blocks
            .iter()
            .filter_map(|block| match block {
                Block::Card { title, link, .. } => Some((title.as_str(), link.is_some())),
                _ => None,
            })
            .collect();

        assert_eq!(
            cards,
            vec![("★★★★★ Great (ana)", true), ("★★★★ Fine (ben)", false)]
        );
    }

    #[test]
    fn without_app_id_no_store_links_are_rendered() {
        let locale = Locale::new(EventBus::new(), LocaleCode::En);
        let blocks = render(&Review::new("#7B62FE"), &locale, None);
        assert!(!blocks.iter().any(|block| matches!(block, Block::Link(_))));
    }
}
