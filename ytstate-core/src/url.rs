//! Host URL normalization.
//!
//! YouTrack instances live either at the root of a host or under a path
//! (`https://example.myjetbrains.com/youtrack`), so the path is preserved and
//! only the trailing slash is dropped.

use anyhow::{Result, bail};
use url::Url;

/// Normalize a configured YouTrack host into a base URL.
///
/// Assumes `https://` when no scheme is given and removes trailing slashes,
/// query strings and fragments.
pub fn normalize_host(input: &str) -> Result<String> {
  let trimmed = input.trim();
  if trimmed.is_empty() {
    bail!("Host cannot be empty");
  }

  let url = match Url::parse(trimmed) {
    Ok(url) if has_http_scheme(&url) && url.host().is_some() => url,
    Ok(url) if !url.cannot_be_a_base() && url.host().is_some() => {
      bail!("Unsupported scheme '{}' in host '{trimmed}'", url.scheme())
    }
    _ => parse_with_https_prefix(trimmed)?,
  };

  let mut normalized = format!("{}://{}", url.scheme(), authority(&url));
  normalized.push_str(url.path().trim_end_matches('/'));
  Ok(normalized)
}

fn has_http_scheme(url: &Url) -> bool {
  matches!(url.scheme(), "http" | "https")
}

/// Host and optional port of `url`
fn authority(url: &Url) -> String {
  let host = url.host_str().unwrap_or_default();
  match url.port() {
    Some(port) => format!("{host}:{port}"),
    None => host.to_string(),
  }
}

/// Parse a scheme-less host by prefixing it with `https://`.
fn parse_with_https_prefix(input: &str) -> Result<Url> {
  let with_scheme = format!("https://{}", input.trim_start_matches('/'));
  match Url::parse(&with_scheme) {
    Ok(url) if url.host().is_some() => Ok(url),
    _ => bail!("Failed to parse host '{input}' as a URL"),
  }
}
