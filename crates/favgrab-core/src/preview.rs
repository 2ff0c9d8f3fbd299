//! Preview image URLs derived from the page origin and the confirmed domain.

use crate::i18n::Translate;
use crate::origin::Origin;

/// Which rendition of the favicon a preview points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewSize {
    Default,
    Larger,
}

impl PreviewSize {
    pub const ALL: [PreviewSize; 2] = [PreviewSize::Default, PreviewSize::Larger];

    fn query(self) -> &'static str {
        match self {
            PreviewSize::Default => "",
            PreviewSize::Larger => "?larger=true",
        }
    }

    fn title_key(self) -> &'static str {
        match self {
            PreviewSize::Default => "frontend.home.default_size",
            PreviewSize::Larger => "frontend.home.larger_size",
        }
    }

    fn alt_key(self) -> &'static str {
        match self {
            PreviewSize::Default => "frontend.home.default_size_alt",
            PreviewSize::Larger => "frontend.home.larger_size_alt",
        }
    }
}

/// One embeddable favicon preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewImage {
    pub size: PreviewSize,
    pub url: String,
    pub title: String,
    /// `<img>` snippet users can paste into their own page.
    pub embed_code: String,
    pub alt_text: String,
}

/// Build the default and larger previews for `domain`.
///
/// Returns nothing until the origin is known. Always recomputed; callers
/// must not cache the result across domain or origin changes.
pub fn build_previews(
    origin: Option<&Origin>,
    domain: &str,
    tr: &dyn Translate,
) -> Vec<PreviewImage> {
    let Some(origin) = origin else {
        return Vec::new();
    };
    let base = origin.base();
    PreviewSize::ALL
        .iter()
        .map(|&size| {
            let url = format!("{base}/{domain}{}", size.query());
            PreviewImage {
                size,
                embed_code: format!("<img alt=\"Favicon\" src=\"{url}\" />"),
                title: tr.t(size.title_key()),
                alt_text: tr.translate(size.alt_key(), &[("domain", domain)]),
                url,
            }
        })
        .collect()
}
