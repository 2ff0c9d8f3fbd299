//! Download preview images to disk.
//!
//! The body is written to `<name>.part` and renamed once the transfer
//! completed with a 2xx status.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::str;
use std::time::Duration;

use crate::config::FavgrabConfig;
use crate::domain::Domain;
use crate::preview::{PreviewImage, PreviewSize};

/// File extension for a `Content-Type` value; `img` when unknown.
pub fn extension_for(content_type: Option<&str>) -> &'static str {
    let mime = content_type
        .and_then(|ct| ct.split(';').next())
        .map(|m| m.trim().to_ascii_lowercase());
    match mime.as_deref() {
        Some("image/png") => "png",
        Some("image/x-icon") | Some("image/vnd.microsoft.icon") => "ico",
        Some("image/svg+xml") => "svg",
        Some("image/jpeg") => "jpg",
        Some("image/gif") => "gif",
        Some("image/webp") => "webp",
        _ => "img",
    }
}

/// Base file name (no extension) for a preview of `domain`.
pub fn file_stem(domain: &Domain, size: PreviewSize) -> String {
    match size {
        PreviewSize::Default => domain.to_string(),
        PreviewSize::Larger => format!("{domain}-larger"),
    }
}

/// GET `preview.url` and store it in `dir`. Returns the final path.
///
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
pub fn save_preview(
    preview: &PreviewImage,
    domain: &Domain,
    dir: &Path,
    cfg: &FavgrabConfig,
) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    let stem = file_stem(domain, preview.size);
    let part_path = dir.join(format!("{stem}.part"));

    let mut body = Vec::new();
    let mut content_type = None;

    let mut easy = curl::easy::Easy::new();
    easy.url(&preview.url).context("invalid URL")?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))?;
    easy.timeout(Duration::from_secs(cfg.timeout_secs))?;

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(line) = str::from_utf8(data) {
                if let Some((name, value)) = line.split_once(':') {
                    if name.trim().eq_ignore_ascii_case("content-type") {
                        content_type = Some(value.trim().to_string());
                    }
                }
            }
            true
        })?;
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform().context("GET request failed")?;
    }

    let code = easy.response_code().context("no response code")?;
    if !(200..300).contains(&code) {
        anyhow::bail!("GET {} returned HTTP {}", preview.url, code);
    }

    fs::write(&part_path, &body).with_context(|| format!("write {}", part_path.display()))?;
    let final_path = dir.join(format!(
        "{stem}.{}",
        extension_for(content_type.as_deref())
    ));
    fs::rename(&part_path, &final_path)
        .with_context(|| format!("rename to {}", final_path.display()))?;
    tracing::info!(bytes = body.len(), "saved {}", final_path.display());
    Ok(final_path)
}
