//! Hero headers, download buttons and calls to action.

use crate::components::list::BulletList;
use crate::render::{Block, Component, Image, Link, LinkStyle, RenderContext};

const DEFAULT_CTA_BACKGROUND: &str = "#FFFFFF";
const DEFAULT_CTA_IMAGE_WIDTH: u32 = 590;
const DEFAULT_CTA_IMAGE_HEIGHT: u32 = 585;
const IMAGE_FOR_KEY: &str = "Image for";

/// Image whose path may carry a per-locale variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedImage {
    /// Asset path, using the `-en.` marker for localized variants.
    pub src: &'static str,
    /// Translation key of the alt text.
    pub alt_key: Option<&'static str>,
    /// Intrinsic width in pixels.
    pub width: u32,
    /// Intrinsic height in pixels.
    pub height: u32,
}

impl LocalizedImage {
    /// Image with an alt text key and size.
    #[must_use]
    pub const fn new(src: &'static str, alt_key: &'static str, width: u32, height: u32) -> Self {
        Self {
            src,
            alt_key: Some(alt_key),
            width,
            height,
        }
    }

    pub(crate) fn block(&self, ctx: &RenderContext<'_>, fallback_alt: impl FnOnce() -> String) -> Block {
        Block::Image(Image {
            src: ctx.asset(self.src),
            alt: self.alt_key.map_or_else(fallback_alt, |key| ctx.t(key)),
            width: self.width,
            height: self.height,
        })
    }
}

impl Component for LocalizedImage {
    fn render(&self, ctx: &RenderContext<'_>) -> Vec<Block> {
        vec![self.block(ctx, String::new)]
    }
}

/// App Store download badge; renders nothing without an app id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppStoreButton {
    /// Translation key of the badge label.
    pub title_key: &'static str,
}

impl Component for AppStoreButton {
    fn render(&self, ctx: &RenderContext<'_>) -> Vec<Block> {
        ctx.app_store_url()
            .map(|href| {
                Block::Link(Link {
                    label: ctx.t(self.title_key),
                    href,
                    style: LinkStyle::Download,
                })
            })
            .into_iter()
            .collect()
    }
}

/// Page hero: title, download badge, hero image and a body list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Translation key of the page title.
    pub title_key: &'static str,
    /// Download badge.
    pub download: AppStoreButton,
    /// Hero image.
    pub image: LocalizedImage,
    /// Bullet points under the title.
    pub body: BulletList,
}

impl Component for Header {
    fn render(&self, ctx: &RenderContext<'_>) -> Vec<Block> {
        let mut blocks = vec![Block::Heading {
            level: 1,
            text: ctx.t(self.title_key),
        }];
        blocks.extend(self.body.render(ctx));
        blocks.extend(self.download.render(ctx));
        blocks.extend(self.image.render(ctx));
        blocks
    }
}

/// Side of the call to action the image sits on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImagePosition {
    /// Image before the text.
    Left,
    /// Image after the text.
    #[default]
    Right,
}

/// Closing promotion block with text, optional list, download badge and image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallToAction {
    title_key: &'static str,
    subtitle_key: Option<&'static str>,
    list_title_key: Option<&'static str>,
    list: Option<BulletList>,
    download: Option<AppStoreButton>,
    image: Option<LocalizedImage>,
    image_position: ImagePosition,
    background: &'static str,
}

impl CallToAction {
    /// Call to action titled by `title_key`.
    #[must_use]
    pub const fn new(title_key: &'static str) -> Self {
        Self {
            title_key,
            subtitle_key: None,
            list_title_key: None,
            list: None,
            download: None,
            image: None,
            image_position: ImagePosition::Right,
            background: DEFAULT_CTA_BACKGROUND,
        }
    }

    /// Subtitle under the title.
    #[must_use]
    pub const fn subtitle(mut self, key: &'static str) -> Self {
        self.subtitle_key = Some(key);
        self
    }

    /// Titled bullet list.
    #[must_use]
    pub fn list(mut self, title_key: &'static str, list: BulletList) -> Self {
        self.list_title_key = Some(title_key);
        self.list = Some(list);
        self
    }

    /// Download badge labelled by `title_key`.
    #[must_use]
    pub const fn download(mut self, title_key: &'static str) -> Self {
        self.download = Some(AppStoreButton { title_key });
        self
    }

    /// Image at the default size. Without `alt_key` the alt text is
    /// "Image for" followed by the title.
    #[must_use]
    pub const fn image(mut self, src: &'static str, alt_key: Option<&'static str>) -> Self {
        self.image = Some(LocalizedImage {
            src,
            alt_key,
            width: DEFAULT_CTA_IMAGE_WIDTH,
            height: DEFAULT_CTA_IMAGE_HEIGHT,
        });
        self
    }

    /// Override the image size; no effect before [`CallToAction::image`].
    #[must_use]
    pub const fn image_size(mut self, width: u32, height: u32) -> Self {
        if let Some(image) = self.image.as_mut() {
            image.width = width;
            image.height = height;
        }
        self
    }

    /// Place the image left or right of the text.
    #[must_use]
    pub const fn image_position(mut self, position: ImagePosition) -> Self {
        self.image_position = position;
        self
    }

    /// Background colour.
    #[must_use]
    pub const fn background(mut self, color: &'static str) -> Self {
        self.background = color;
        self
    }
}

impl Component for CallToAction {
    fn render(&self, ctx: &RenderContext<'_>) -> Vec<Block> {
        let title = ctx.t(self.title_key);
        let mut blocks = vec![Block::Heading {
            level: 2,
            text: title.clone(),
        }];
        if let Some(key) = self.subtitle_key {
            blocks.push(Block::Paragraph { text: ctx.t(key) });
        }
        if let Some(key) = self.list_title_key {
            blocks.push(Block::Heading {
                level: 3,
                text: ctx.t(key),
            });
        }
        if let Some(list) = &self.list {
            blocks.extend(list.render(ctx));
        }
        if let Some(download) = &self.download {
            blocks.extend(download.render(ctx));
        }
        if let Some(image) = self.image {
            let image = image.block(ctx, || format!("{} {title}", ctx.t(IMAGE_FOR_KEY)));
            match self.image_position {
                ImagePosition::Left => blocks.insert(0, image),
                ImagePosition::Right => blocks.push(image),
            }
        }

        vec![Block::Section {
            background: Some(self.background.to_string()),
            blocks,
        }]
    }
}
