//! Plain-text rendering of a [`View`] for terminals.

use std::fmt::Write;

use super::View;

/// What to include besides the dynamic parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Heading, tagline, input row, markdown and FAQ.
    pub page: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { page: true }
    }
}

pub fn render(view: &View, opts: RenderOptions) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_view(&mut out, view, opts);
    out
}

fn write_view(out: &mut String, view: &View, opts: RenderOptions) -> std::fmt::Result {
    if opts.page {
        writeln!(out, "{}", view.heading)?;
        writeln!(out, "{}", "=".repeat(view.heading.chars().count()))?;
        writeln!(out, "| {}", view.tagline)?;
        writeln!(out)?;
        writeln!(out, "{}", view.prompt)?;
        let button = if view.field.loading {
            format!("[{}...]", view.field.submit_label)
        } else if view.field.submit_enabled {
            format!("[{}]", view.field.submit_label)
        } else {
            format!("({})", view.field.submit_label)
        };
        writeln!(out, "> {}  {}", view.field.value, button)?;
        if let Some(msg) = &view.field.message {
            writeln!(out, "  ! {msg}")?;
        }
        writeln!(out)?;
    }

    if let Some(banner) = &view.error_banner {
        let width = banner.chars().count() + 4;
        writeln!(out, "+{}+", "-".repeat(width))?;
        writeln!(out, "|  {banner}  |")?;
        writeln!(out, "+{}+", "-".repeat(width))?;
        writeln!(out)?;
    }

    if let Some(loading) = &view.loading {
        writeln!(out, "{loading}")?;
        writeln!(out)?;
    }

    if let Some(results) = &view.results {
        writeln!(out, "{}", results.title)?;
        for icon in &results.icons {
            write!(out, "  - {}", icon.src)?;
            if let Some(sizes) = &icon.sizes {
                write!(out, "  {sizes}")?;
            }
            if let Some(mime) = &icon.mime_type {
                write!(out, "  {mime}")?;
            }
            writeln!(out)?;
        }
        if let Some(raw) = &results.raw {
            writeln!(out, "{raw}")?;
        }
        writeln!(out)?;
    }

    if !view.previews.is_empty() {
        writeln!(out, "{}", view.previews_title)?;
        for p in &view.previews {
            writeln!(out, "  {}", p.title)?;
            writeln!(out, "    url:   {}", p.url)?;
            writeln!(out, "    alt:   {}", p.alt_text)?;
            writeln!(out, "    embed: {}", p.embed_code)?;
        }
        writeln!(out)?;
    }

    if opts.page {
        if let Some(md) = &view.markdown {
            writeln!(out, "{md}")?;
            writeln!(out)?;
        }
        if !view.faqs.is_empty() {
            writeln!(out, "{}", view.faq_title)?;
            for faq in &view.faqs {
                writeln!(out, "  Q: {}", faq.question)?;
                writeln!(out, "  A: {}", faq.answer)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::{RequestError, RequestErrorKind, RequestState};
    use crate::form::FormBinder;
    use crate::i18n::Catalog;
    use crate::origin::Origin;
    use crate::preview::build_previews;
    use crate::view::{compose, PageContent, Snapshot};

    #[test]
    fn renders_page_with_previews() {
        let c = Catalog::builtin();
        let origin = Origin::new("https:", "fav.example");
        let previews = build_previews(Some(&origin), "openai.com", &c);
        let form = FormBinder::default();
        let content = PageContent::from_catalog(&c, None);
        let view = compose(
            &Snapshot {
                form: &form,
                state: &RequestState::Idle,
                previews: &previews,
            },
            &content,
            &c,
        );
        let text = render(&view, RenderOptions::default());
        assert!(text.starts_with("favgrab\n======="));
        assert!(text.contains("> openai.com  [Get Favicons]"));
        assert!(text.contains("url:   https://fav.example/openai.com?larger=true"));
        assert!(text.contains("Q: What is a favicon?"));
    }

    #[test]
    fn page_includes_markdown_block() {
        let c = Catalog::builtin();
        let form = FormBinder::default();
        let content = PageContent::from_catalog(&c, Some("## About\nFree favicon lookups.".to_string()));
        let view = compose(
            &Snapshot {
                form: &form,
                state: &RequestState::Idle,
                previews: &[],
            },
            &content,
            &c,
        );
        let text = render(&view, RenderOptions::default());
        assert!(text.contains("## About\nFree favicon lookups."));
    }

    #[test]
    fn body_only_skips_static_parts() {
        let c = Catalog::builtin();
        let form = FormBinder::default();
        let content = PageContent::from_catalog(&c, Some("markdown here".to_string()));
        let state = RequestState::Failed(RequestError {
            kind: RequestErrorKind::Network,
            message: "Couldn't connect to server".to_string(),
        });
        let view = compose(
            &Snapshot {
                form: &form,
                state: &state,
                previews: &[],
            },
            &content,
            &c,
        );
        let text = render(&view, RenderOptions { page: false });
        assert!(text.contains("|  Couldn't connect to server  |"));
        assert!(!text.contains("markdown here"));
        assert!(!text.contains("Get Favicons"));
    }
}
