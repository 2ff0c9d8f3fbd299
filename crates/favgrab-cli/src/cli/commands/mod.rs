//! CLI command handlers. Each command is in its own file.

mod check;
mod interactive;
mod lookup;
mod previews;

pub use check::run_check;
pub use interactive::run_interactive;
pub use lookup::{run_lookup, LookupOptions};
pub use previews::run_previews;

use anyhow::{Context, Result};
use favgrab_core::config::FavgrabConfig;
use favgrab_core::form::FormBinder;
use favgrab_core::i18n::Catalog;
use favgrab_core::session::{Event, Session};
use favgrab_core::view::PageContent;
use std::fs;

/// Catalog from config: builtin strings plus optional overrides.
pub(crate) fn load_catalog(cfg: &FavgrabConfig) -> Result<Catalog> {
    match &cfg.catalog_path {
        Some(path) => Catalog::with_overrides(path),
        None => Ok(Catalog::builtin()),
    }
}

/// Page content: FAQ from the catalog plus the configured markdown block, if any.
pub(crate) fn load_page_content(cfg: &FavgrabConfig, catalog: &Catalog) -> Result<PageContent> {
    let markdown = match &cfg.markdown_path {
        Some(path) => Some(
            fs::read_to_string(path)
                .with_context(|| format!("read markdown {}", path.display()))?,
        ),
        None => None,
    };
    Ok(PageContent::from_catalog(catalog, markdown))
}

/// New session with the field set to `domain` (or the configured default)
/// and the origin read once from config. An unusable origin only hides previews.
pub(crate) fn start_session(cfg: &FavgrabConfig, domain: Option<&str>) -> Result<Session> {
    let catalog = load_catalog(cfg)?;
    let content = load_page_content(cfg, &catalog)?;
    let form = FormBinder::new(domain.unwrap_or(&cfg.default_domain));
    let mut session = Session::new(form, catalog, content);
    match cfg.preview_origin() {
        Ok(origin) => {
            session.apply(Event::OriginResolved(origin));
        }
        Err(e) => tracing::warn!("no preview origin: {:#}", e),
    }
    Ok(session)
}
