//! Blocking HTTP transport and the stale-load request sequence guard.
//!
//! Wraps a `reqwest` blocking client with base-URL joining, optional bearer
//! authentication, and the status-to-error mapping the rest of the SDK
//! relies on. Holds no retry policy: network failures surface as
//! [`ShopError::Http`]/[`ShopError::Api`] and the caller decides whether to
//! retry.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config;
use crate::error::{Result, ShopError};
use crate::models::CheckoutRejection;

// ---------------------------------------------------------------------------
// HttpTransport
// ---------------------------------------------------------------------------

/// The shared HTTP layer behind the API wrappers.
pub struct HttpTransport {
    base_url: String,
    api_token: Option<String>,
    client: Client,
}

impl HttpTransport {
    /// Build a transport for `base_url` (trailing slashes are trimmed).
    pub fn new(base_url: &str, timeout: Duration, api_token: Option<String>) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ShopError::InvalidArgument(
                "base URL must not be empty".to_string(),
            ));
        }
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(config::MAX_REDIRECTS))
            .build()?;
        Ok(Self {
            base_url,
            api_token,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// GET `path` with the given query pairs and decode the JSON response.
    pub fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T> {
        let url = self.url(path);
        log::debug!("GET {} ({} query params)", url, query.len());
        let mut request = self.client.get(&url).query(query);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }
        self.decode(request.send()?)
    }

    /// POST a JSON `body` to `path` and decode the JSON response.
    pub fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(path);
        log::debug!("POST {}", url);
        let mut request = self.client.post(&url).json(body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }
        self.decode(request.send()?)
    }

    fn decode<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json()?);
        }
        let body = response.text().unwrap_or_default();
        log::warn!("request failed with status {}: {}", status, body);
        Err(error_for_status(status, &body))
    }
}

/// Map a non-success response to the SDK error taxonomy.
///
/// A 409/422 whose body parses as a [`CheckoutRejection`] becomes
/// [`ShopError::CheckoutRejected`] so callers can react to the
/// machine-readable reason; everything else degrades to `NotFound` or a
/// generic `Api` error carrying the body's message.
fn error_for_status(status: StatusCode, body: &str) -> ShopError {
    if status == StatusCode::NOT_FOUND {
        return ShopError::NotFound(extract_message(body));
    }
    if status == StatusCode::CONFLICT || status == StatusCode::UNPROCESSABLE_ENTITY {
        if let Ok(rejection) = serde_json::from_str::<CheckoutRejection>(body) {
            return ShopError::CheckoutRejected(rejection);
        }
    }
    ShopError::Api {
        status: status.as_u16(),
        message: extract_message(body),
    }
}

/// Pull a human-readable message out of an error body: `message`/`error`
/// JSON fields first, the raw body as fallback.
fn extract_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(msg) = value.get(key).and_then(|v| v.as_str()) {
                return msg.to_string();
            }
        }
    }
    body.trim().to_string()
}

// ---------------------------------------------------------------------------
// RequestSequence — stale catalog load guard
// ---------------------------------------------------------------------------

/// A token identifying one catalog load. Obtained from
/// [`RequestSequence::begin`] before starting the load and checked with
/// [`RequestSequence::is_current`] before applying its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken(u64);

/// Monotonically increasing sequence numbers for catalog loads.
///
/// Catalog loads can overlap when the user changes filters faster than the
/// backend answers. Each load takes a token up front; when a response
/// arrives, only the holder of the newest token may apply it, so a
/// superseded in-flight load never overwrites fresher state.
///
/// ```rust
/// use bloomshop_sdk::transport::RequestSequence;
///
/// let seq = RequestSequence::new();
/// let first = seq.begin();
/// let second = seq.begin();
/// assert!(!seq.is_current(first));
/// assert!(seq.is_current(second));
/// ```
#[derive(Debug, Default)]
pub struct RequestSequence {
    current: AtomicU64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load, superseding every earlier token.
    pub fn begin(&self) -> LoadToken {
        LoadToken(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `token` still identifies the newest load.
    pub fn is_current(&self, token: LoadToken) -> bool {
        self.current.load(Ordering::SeqCst) == token.0
    }
}
