//! `favgrab interactive` – event loop over stdin.
//!
//! Every line edits the field and submits it. Lookups run on the blocking
//! pool and report back through a channel; a newer submission makes any
//! older, still-running lookup stale.

use anyhow::Result;
use favgrab_core::api::{CurlApi, FaviconApi};
use favgrab_core::config::FavgrabConfig;
use favgrab_core::fetch::Settlement;
use favgrab_core::session::{Effect, Event, Session};
use favgrab_core::view::text::{self, RenderOptions};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

fn print_body(session: &Session) {
    print!(
        "{}",
        text::render(&session.view(), RenderOptions { page: false })
    );
}

pub async fn run_interactive(cfg: &FavgrabConfig) -> Result<()> {
    let api: Arc<dyn FaviconApi> = Arc::new(CurlApi::from_config(cfg));
    let mut session = super::start_session(cfg, None)?;
    print!("{}", text::render(&session.view(), RenderOptions::default()));

    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut input_open = true;
    let mut in_flight = 0usize;

    while input_open || in_flight > 0 {
        tokio::select! {
            line = lines.next_line(), if input_open => {
                let Some(line) = line? else {
                    input_open = false;
                    continue;
                };
                let value = line.trim();
                if !value.is_empty() {
                    session.apply(Event::FieldChanged(value.to_string()));
                }
                match session.apply(Event::Submit) {
                    Effect::Lookup(ticket) => {
                        in_flight += 1;
                        let api = Arc::clone(&api);
                        let tx = tx.clone();
                        tokio::task::spawn_blocking(move || {
                            let outcome = api.lookup(&ticket.domain);
                            let _ = tx.send(Event::Settled {
                                generation: ticket.generation,
                                outcome,
                            });
                        });
                        print_body(&session);
                    }
                    Effect::Rejected(e) => {
                        // Empty input is blocked silently; only invalid text gets a message.
                        if let Some(msg) = session.form().inline_message() {
                            println!("  ! {msg}");
                        }
                        tracing::debug!("submission rejected: {}", e);
                    }
                    other => tracing::debug!("unexpected submit effect: {:?}", other),
                }
            }
            Some(event) = rx.recv() => {
                in_flight = in_flight.saturating_sub(1);
                if session.apply(event) == Effect::Settled(Settlement::Applied) {
                    print_body(&session);
                }
            }
        }
    }

    Ok(())
}
