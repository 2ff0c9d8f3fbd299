//! `favgrab previews [domain]` – preview URLs and embed snippets, no lookup.

use anyhow::Result;
use favgrab_core::config::FavgrabConfig;
use favgrab_core::preview::PreviewImage;
use favgrab_core::session::{Effect, Event};

/// Previews for `domain` (or the configured default). Empty when the origin is unavailable.
fn collect_previews(cfg: &FavgrabConfig, domain: Option<&str>) -> Result<Vec<PreviewImage>> {
    let mut session = super::start_session(cfg, domain)?;
    match session.apply(Event::Submit) {
        Effect::Lookup(_) => Ok(session.previews()),
        Effect::Rejected(e) => {
            anyhow::bail!("{}: {} ({})", session.form().value(), e.user_message(), e)
        }
        other => anyhow::bail!("unexpected submit effect: {:?}", other),
    }
}

pub fn run_previews(cfg: &FavgrabConfig, domain: Option<&str>) -> Result<()> {
    let previews = collect_previews(cfg, domain)?;
    if previews.is_empty() {
        eprintln!("no preview origin configured; nothing to show");
    }
    for p in &previews {
        println!("{}", p.title);
        println!("  url:   {}", p.url);
        println!("  alt:   {}", p.alt_text);
        println!("  embed: {}", p.embed_code);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previews_use_configured_origin() {
        let cfg = FavgrabConfig {
            origin: Some("https://fav.example".to_string()),
            ..FavgrabConfig::default()
        };
        let previews = collect_previews(&cfg, Some("rust-lang.org")).unwrap();
        assert_eq!(previews.len(), 2);
        assert_eq!(previews[1].url, "https://fav.example/rust-lang.org?larger=true");
    }

    #[test]
    fn unusable_origin_yields_no_previews() {
        let cfg = FavgrabConfig {
            origin: Some("not a url".to_string()),
            ..FavgrabConfig::default()
        };
        assert!(collect_previews(&cfg, Some("openai.com")).unwrap().is_empty());
        assert!(run_previews(&cfg, Some("openai.com")).is_ok());
    }

    #[test]
    fn invalid_domain_is_rejected() {
        let err = run_previews(&FavgrabConfig::default(), Some("bad")).unwrap_err();
        assert!(err.to_string().starts_with("bad: Invalid domain name"));
    }
}
