//! Page registry.

pub mod emotion;

use martspec_i18n::Locale;

use crate::error::{SiteError, SiteResult};
use crate::render::{Block, RenderContext, RenderedPage, SiteContext};

pub use emotion::EmotionPage;

/// A routable marketing page.
pub trait Page: Send + Sync {
    /// URL slug, also used to select the page from the command line.
    fn slug(&self) -> &'static str;

    /// Translation key of the page title.
    fn title_key(&self) -> &'static str;

    /// Blocks making up the page body.
    fn body(&self, ctx: &RenderContext<'_>) -> Vec<Block>;

    /// Render the page in the active locale.
    fn render(&self, locale: &Locale, site: &SiteContext) -> RenderedPage {
        let ctx = RenderContext::new(locale, site);
        RenderedPage {
            slug: self.slug().to_string(),
            locale: locale.current().code().to_string(),
            rtl: locale.is_rtl(),
            title: ctx.t(self.title_key()),
            blocks: self.body(&ctx),
        }
    }
}

static EMOTION: EmotionPage = EmotionPage;

/// Every registered page.
#[must_use]
pub fn available_pages() -> Vec<&'static dyn Page> {
    vec![&EMOTION]
}

/// Look up a page by slug.
///
/// # Errors
///
/// Returns [`SiteError::UnknownPage`] when no page carries `slug`.
pub fn page_by_slug(slug: &str) -> SiteResult<&'static dyn Page> {
    available_pages()
        .into_iter()
        .find(|page| page.slug() == slug)
        .ok_or_else(|| SiteError::UnknownPage {
            slug: slug.to_string(),
        })
}
