//! `favgrab check <domain>` – run the domain validator.

use anyhow::Result;
use favgrab_core::domain::Domain;

pub fn run_check(candidate: &str) -> Result<()> {
    match Domain::parse(candidate) {
        Ok(domain) => {
            println!("{domain}: ok");
            Ok(())
        }
        Err(e) => anyhow::bail!("{}: {} ({})", candidate, e.user_message(), e),
    }
}
