use std::time::Duration;

use image::RgbImage;
use reqwest::blocking::Client;
use url::Url;

use crate::artwork::{ArtworkSource, decode::decode_artwork};
use crate::foundation::error::{TapitaError, TapitaResult};

/// PNG endpoint of the public identicon service.
pub const DEFAULT_IDENTICON_URL: &str = "https://api.dicebear.com/6.x/identicon/png";

/// Request timeout used when none is configured.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Options for [`IdenticonClient`].
#[derive(Clone, Debug)]
pub struct IdenticonOpts {
    /// Endpoint that accepts `seed` and `size` query parameters and returns an image.
    pub base_url: String,
    /// Whole-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for IdenticonOpts {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_IDENTICON_URL.to_owned(),
            timeout: Some(DEFAULT_FETCH_TIMEOUT),
        }
    }
}

/// Blocking HTTP client for the identicon service. Single shot: no retries, no cache.
#[derive(Clone, Debug)]
pub struct IdenticonClient {
    client: Client,
    base_url: Url,
}

impl IdenticonClient {
    /// Build a client. Fails if the base URL does not parse.
    pub fn new(opts: IdenticonOpts) -> TapitaResult<Self> {
        let base_url = Url::parse(&opts.base_url).map_err(|e| {
            TapitaError::validation(format!("invalid identicon url '{}': {e}", opts.base_url))
        })?;
        let client = Client::builder()
            .timeout(opts.timeout)
            .build()
            .map_err(|e| TapitaError::fetch(format!("build http client: {e}")))?;
        Ok(Self { client, base_url })
    }

    /// Endpoint this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl ArtworkSource for IdenticonClient {
    fn fetch_artwork(&self, seed: &str, size: u32) -> TapitaResult<RgbImage> {
        let url = identicon_url(&self.base_url, seed, size);
        tracing::debug!(%url, "fetching identicon");

        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| TapitaError::fetch(format!("request '{url}': {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TapitaError::fetch(format!("'{url}' returned {status}")));
        }

        let bytes = response
            .bytes()
            .map_err(|e| TapitaError::fetch(format!("read body of '{url}': {e}")))?;
        tracing::debug!(len = bytes.len(), "identicon downloaded");

        decode_artwork(&bytes, size)
    }
}

/// Build the request URL: `<base>?seed=<seed>&size=<size>`.
///
/// The seed is percent-encoded path style: spaces become `%20`, `/` and the unreserved set
/// `A-Z a-z 0-9 - _ . ~` stay as they are, everything else (UTF-8 bytes included) is escaped.
/// The same title always produces the same URL. Existing query parameters on `base` are
/// preserved.
pub fn identicon_url(base: &Url, seed: &str, size: u32) -> Url {
    let params = format!("seed={}&size={size}", quote_seed(seed));
    let query = match base.query() {
        Some(existing) if !existing.is_empty() => format!("{existing}&{params}"),
        _ => params,
    };
    let mut url = base.clone();
    url.set_query(Some(&query));
    url
}

fn quote_seed(seed: &str) -> String {
    url::form_urlencoded::byte_serialize(seed.as_bytes())
        .map(|piece| match piece {
            "+" => "%20".to_owned(),
            "%2F" => "/".to_owned(),
            "%7E" => "~".to_owned(),
            run => run.replace('*', "%2A"),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/artwork/identicon.rs"]
mod tests;
