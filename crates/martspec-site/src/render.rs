//! Render output and the context components render against.

use std::fmt::{self, Display, Formatter};

use martspec_i18n::Locale;
use serde::Serialize;

use crate::error::{SiteError, SiteResult};

/// Deployment inputs shared by every component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContext {
    /// App Store application id, when download buttons should be shown.
    pub app_id: Option<u64>,
    /// Prefix for asset paths, ending in `/`.
    pub asset_base: String,
}

impl Default for SiteContext {
    fn default() -> Self {
        Self {
            app_id: None,
            asset_base: "/".to_string(),
        }
    }
}

/// Everything a component may read while rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    locale: &'a Locale,
    site: &'a SiteContext,
}

impl<'a> RenderContext<'a> {
    /// Bind a locale and site context for one render pass.
    #[must_use]
    pub const fn new(locale: &'a Locale, site: &'a SiteContext) -> Self {
        Self { locale, site }
    }

    /// Localized text for `key`.
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        self.locale.text(key)
    }

    /// Localized, base-prefixed asset URL.
    #[must_use]
    pub fn asset(&self, src: &str) -> String {
        let localized = self.locale.localized_asset(src);
        format!(
            "{}{}",
            self.site.asset_base,
            localized.trim_start_matches('/')
        )
    }

    /// Site link for `path` in the active locale.
    #[must_use]
    pub fn link(&self, path: &str) -> String {
        self.locale.localized_link(path)
    }

    /// App Store product page, when an app id is configured.
    #[must_use]
    pub fn app_store_url(&self) -> Option<String> {
        self.site
            .app_id
            .map(|id| format!("https://apps.apple.com/app/id{id}"))
    }

    /// App Store review listing in the storefront matching the active locale.
    #[must_use]
    pub fn reviews_url(&self) -> Option<String> {
        let country = self.locale.current().country();
        self.site
            .app_id
            .map(|id| format!("https://apps.apple.com/{country}/app/id{id}?see-all=reviews"))
    }

    /// Active locale.
    #[must_use]
    pub const fn locale(&self) -> &Locale {
        self.locale
    }
}

/// A stateless piece of page content.
pub trait Component {
    /// Produce the blocks for the active locale.
    fn render(&self, ctx: &RenderContext<'_>) -> Vec<Block>;
}

/// Image reference with intrinsic size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Image {
    /// Resolved asset URL.
    pub src: String,
    /// Alternative text.
    pub alt: String,
    /// Intrinsic width in pixels.
    pub width: u32,
    /// Intrinsic height in pixels.
    pub height: u32,
}

/// Visual treatment of a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkStyle {
    /// Large call-to-action button.
    Button,
    /// App Store download badge.
    Download,
    /// Inline "read more" arrow link.
    ReadMore,
    /// Plain text link.
    Text,
}

/// Hyperlink with a localized label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Localized label.
    pub label: String,
    /// Target URL or site path.
    pub href: String,
    /// Visual treatment.
    pub style: LinkStyle,
}

/// Entry of an icon list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconEntry {
    /// Icon asset URL.
    pub icon: String,
    /// Icon alternative text; empty for decorative icons.
    pub icon_alt: String,
    /// Entry heading.
    pub title: String,
    /// Entry body.
    pub text: String,
}

/// Rendered content block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// Heading of the given level (1 is the page title).
    Heading {
        /// Heading level, 1 to 3.
        level: u8,
        /// Heading text.
        text: String,
    },
    /// Paragraph of body text.
    Paragraph {
        /// Body text.
        text: String,
    },
    /// Bulleted list.
    List {
        /// Item texts.
        items: Vec<String>,
        /// Bullet colour, when themed.
        #[serde(skip_serializing_if = "Option::is_none")]
        marker_color: Option<String>,
    },
    /// List of icon, heading and text entries.
    IconList {
        /// Entries in display order.
        items: Vec<IconEntry>,
    },
    /// Image.
    Image(Image),
    /// Link or button.
    Link(Link),
    /// Small rounded status label.
    Pill {
        /// Label text.
        text: String,
        /// Background colour.
        background: String,
        /// Text colour.
        color: String,
    },
    /// Titled card.
    Card {
        /// Card heading.
        title: String,
        /// Card body.
        text: String,
        /// Background colour.
        #[serde(skip_serializing_if = "Option::is_none")]
        background: Option<String>,
        /// Optional link at the bottom of the card.
        #[serde(skip_serializing_if = "Option::is_none")]
        link: Option<Link>,
    },
    /// Group of blocks sharing a background.
    Section {
        /// Background colour or theme name.
        #[serde(skip_serializing_if = "Option::is_none")]
        background: Option<String>,
        /// Nested blocks.
        blocks: Vec<Block>,
    },
}

impl Block {
    /// Visit this block and every nested block, depth first.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Self)) {
        visit(self);
        if let Self::Section { blocks, .. } = self {
            for block in blocks {
                block.walk(visit);
            }
        }
    }
}

/// A page rendered for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedPage {
    /// Page slug.
    pub slug: String,
    /// Locale code the page was rendered in.
    pub locale: String,
    /// Whether the locale is right-to-left.
    pub rtl: bool,
    /// Localized page title.
    pub title: String,
    /// Top-level blocks.
    pub blocks: Vec<Block>,
}

impl RenderedPage {
    /// Pretty-printed JSON encoding.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Encode`] if serialization fails.
    pub fn to_json(&self) -> SiteResult<String> {
        serde_json::to_string_pretty(self).map_err(|source| SiteError::Encode { source })
    }

    /// All blocks, nested ones included, depth first.
    #[must_use]
    pub fn all_blocks(&self) -> Vec<&Block> {
        let mut collected = Vec::new();
        for block in &self.blocks {
            block.walk(&mut |visited| collected.push(visited));
        }
        collected
    }

    /// Every link target on the page.
    #[must_use]
    pub fn links(&self) -> Vec<&Link> {
        self.all_blocks()
            .into_iter()
            .filter_map(|block| match block {
                Block::Link(link) | Block::Card { link: Some(link), .. } => Some(link),
                _ => None,
            })
            .collect()
    }
}

impl Display for RenderedPage {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        writeln!(formatter, "[{}] {}", self.locale, self.title)?;
        for block in &self.blocks {
            write_block(formatter, block, 0)?;
        }
        Ok(())
    }
}

fn write_block(formatter: &mut Formatter<'_>, block: &Block, depth: usize) -> fmt::Result {
    let indent = "  ".repeat(depth);
    match block {
        Block::Heading { level, text } => {
            let marks = "#".repeat(usize::from(*level));
            writeln!(formatter, "{indent}{marks} {text}")
        }
        Block::Paragraph { text } => writeln!(formatter, "{indent}{text}"),
        Block::List { items, .. } => items
            .iter()
            .try_for_each(|item| writeln!(formatter, "{indent}- {item}")),
        Block::IconList { items } => items.iter().try_for_each(|entry| {
            writeln!(formatter, "{indent}* {}: {}", entry.title, entry.text)
        }),
        Block::Image(image) => writeln!(
            formatter,
            "{indent}[image: {}] {} ({}x{})",
            image.alt, image.src, image.width, image.height
        ),
        Block::Link(link) => writeln!(formatter, "{indent}[{}] -> {}", link.label, link.href),
        Block::Pill { text, .. } => writeln!(formatter, "{indent}({text})"),
        Block::Card {
            title, text, link, ..
        } => {
            writeln!(formatter, "{indent}> {title}")?;
            writeln!(formatter, "{indent}  {text}")?;
            if let Some(link) = link {
                writeln!(formatter, "{indent}  [{}] -> {}", link.label, link.href)?;
            }
            Ok(())
        }
        Block::Section { blocks, .. } => {
            writeln!(formatter)?;
            blocks
                .iter()
                .try_for_each(|nested| write_block(formatter, nested, depth + 1))
        }
    }
}
