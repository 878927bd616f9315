//! Blocking HTTP GET per URL.
//!
//! Uses the curl crate (libcurl) with default timeouts. Only status 200 counts
//! as a fetched image; any other status is reported as missed and the caller
//! moves on. Transport errors are returned as [`FetchError`].

use std::fmt;
use thiserror::Error;

/// Result of one GET that reached the server.
#[derive(Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// HTTP 200 with the full response body.
    Fetched(Vec<u8>),
    /// Any other HTTP status.
    Missed { status: u32 },
}

impl fmt::Debug for FetchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchOutcome::Fetched(body) => write!(f, "Fetched({} bytes)", body.len()),
            FetchOutcome::Missed { status } => write!(f, "Missed(HTTP {})", status),
        }
    }
}

/// Network-level failure: DNS, connect, TLS, malformed URL, broken transfer.
#[derive(Debug, Error)]
#[error("GET {url} failed")]
pub struct FetchError {
    pub url: String,
    #[source]
    pub source: curl::Error,
}

impl FetchError {
    fn new(url: &str, source: curl::Error) -> Self {
        Self {
            url: url.to_string(),
            source,
        }
    }
}

/// Anything that can retrieve the bytes behind a URL.
pub trait Fetch {
    fn fetch(&mut self, url: &str) -> Result<FetchOutcome, FetchError>;
}

impl<F: Fetch + ?Sized> Fetch for &mut F {
    fn fetch(&mut self, url: &str) -> Result<FetchOutcome, FetchError> {
        (**self).fetch(url)
    }
}

/// libcurl-backed fetcher. Reuses one easy handle so keep-alive connections
/// carry over between URLs on the same host.
pub struct CurlFetcher {
    easy: curl::easy::Easy,
}

impl CurlFetcher {
    pub fn new() -> Self {
        Self {
            easy: curl::easy::Easy::new(),
        }
    }
}

impl Default for CurlFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetch for CurlFetcher {
    fn fetch(&mut self, url: &str) -> Result<FetchOutcome, FetchError> {
        let mut body: Vec<u8> = Vec::new();

        let easy = &mut self.easy;
        easy.url(url).map_err(|e| FetchError::new(url, e))?;
        easy.get(true).map_err(|e| FetchError::new(url, e))?;
        easy.follow_location(true)
            .map_err(|e| FetchError::new(url, e))?;

        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(|e| FetchError::new(url, e))?;
            transfer.perform().map_err(|e| FetchError::new(url, e))?;
        }

        let code = easy.response_code().map_err(|e| FetchError::new(url, e))?;
        tracing::debug!(url, status = code, bytes = body.len(), "GET finished");
        if code == 200 {
            Ok(FetchOutcome::Fetched(body))
        } else {
            Ok(FetchOutcome::Missed { status: code })
        }
    }
}
