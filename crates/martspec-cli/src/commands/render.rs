use anyhow::anyhow;
use martspec_app::Application;
use martspec_config::SiteConfig;
use martspec_i18n::LocaleCode;
use martspec_site::RenderedPage;

use crate::cli::RenderArgs;
use crate::client::{CliError, CliResult};
use crate::output::format_page;

pub(crate) fn handle_render(config: &SiteConfig, args: &RenderArgs) -> CliResult<()> {
    let page = render_page(config, args)?;
    print!("{}", format_page(&page, args.format)?);
    Ok(())
}

/// Start the site with `--lang` taking priority over configured preferences.
pub(crate) fn render_page(config: &SiteConfig, args: &RenderArgs) -> CliResult<RenderedPage> {
    let mut config = config.clone();
    if let Some(lang) = &args.lang {
        if LocaleCode::from_lang_tag(lang).is_none() {
            return Err(CliError::validation(format!("unsupported language '{lang}'")));
        }
        config.preferred_languages = vec![lang.clone()];
    }
    let app = Application::start_with_page(&config, &args.page)?;
    app.current_page()
        .ok_or_else(|| CliError::failure(anyhow!("page was not rendered")))
}
