//! `favgrab lookup [domain]` – one full lookup cycle.

use anyhow::{Context, Result};
use favgrab_core::api::{CurlApi, FaviconApi};
use favgrab_core::config::FavgrabConfig;
use favgrab_core::fetch::RequestState;
use favgrab_core::preview::PreviewImage;
use favgrab_core::save;
use favgrab_core::session::{Effect, Event, Session};
use favgrab_core::view::text::{self, RenderOptions};
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct LookupOptions {
    pub json: bool,
    pub save: Option<PathBuf>,
    pub page: bool,
}

/// Previews to download for `--save`. Without a preview origin there is nothing to fetch.
fn previews_to_save(session: &Session) -> Result<Vec<PreviewImage>> {
    let previews = session.previews();
    if previews.is_empty() {
        anyhow::bail!("--save needs a preview origin; set `origin` or a valid `api_base_url` in config");
    }
    Ok(previews)
}

pub async fn run_lookup(
    cfg: &FavgrabConfig,
    domain: Option<&str>,
    opts: &LookupOptions,
) -> Result<()> {
    let mut session = super::start_session(cfg, domain)?;

    let ticket = match session.apply(Event::Submit) {
        Effect::Lookup(ticket) => ticket,
        Effect::Rejected(e) => {
            anyhow::bail!("{}: {} ({})", session.form().value(), e.user_message(), e)
        }
        other => anyhow::bail!("unexpected submit effect: {:?}", other),
    };

    let outcome = tokio::task::spawn_blocking({
        let api = CurlApi::from_config(cfg);
        let domain = ticket.domain.clone();
        move || api.lookup(&domain)
    })
    .await
    .context("lookup task join")?;
    session.apply(Event::Settled {
        generation: ticket.generation,
        outcome,
    });

    match (session.state(), opts.json) {
        (RequestState::Succeeded(info), true) => println!("{}", info.pretty()),
        _ => print!(
            "{}",
            text::render(&session.view(), RenderOptions { page: opts.page })
        ),
    }

    if let Some(err) = session.state().error() {
        anyhow::bail!("lookup for {} failed ({:?})", ticket.domain, err.kind);
    }

    if let Some(dir) = &opts.save {
        for preview in previews_to_save(&session)? {
            let path = tokio::task::spawn_blocking({
                let domain = ticket.domain.clone();
                let dir = dir.clone();
                let cfg = cfg.clone();
                move || save::save_preview(&preview, &domain, &dir, &cfg)
            })
            .await
            .context("save task join")??;
            println!("Saved {}", path.display());
        }
    }

    Ok(())
}
