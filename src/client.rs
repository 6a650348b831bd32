//! HTTP boundary for the data.police.uk API.
//!
//! Repositories depend on the [`ApiClient`] trait rather than a concrete
//! transport so they can be exercised against stubs. The trait returns raw
//! payloads; decoding into domain types happens in the repositories via
//! [`decode`], so a payload-shape failure is its own transport error kind.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Host for the public API.
pub const DEFAULT_BASE_URL: &str = "https://data.police.uk/api";

/// Transport-level failures produced at the client boundary.
///
/// Carries displayable messages rather than error sources so values stay
/// cloneable and comparable in tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
  /// Connection or protocol failure before a usable response arrived.
  #[error("network error: {message}")]
  Network { message: String },
  /// The remote resource does not exist (HTTP 404).
  #[error("not found")]
  NotFound,
  /// The payload did not match the expected shape.
  #[error("decode error: {message}")]
  Decode { message: String },
  /// Any other non-success response.
  #[error("unexpected status {status}")]
  UnexpectedStatus { status: u16 },
}

/// A client able to GET a path below the API root and return the raw payload.
#[async_trait]
pub trait ApiClient: Send + Sync {
  async fn get(&self, path: &str) -> Result<Value, ApiError>;
}

/// Decode a raw payload into a typed value.
pub fn decode<T: DeserializeOwned>(payload: Value) -> Result<T, ApiError> {
  serde_json::from_value(payload).map_err(|e| ApiError::Decode {
    message: e.to_string(),
  })
}

/// reqwest-backed client for the public API.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
  http: reqwest::Client,
  base_url: Url,
}

impl HttpApiClient {
  pub fn new(base_url: Url) -> Self {
    Self {
      http: reqwest::Client::new(),
      base_url,
    }
  }

  fn url_for(&self, path: &str) -> Result<Url, ApiError> {
    let joined = format!(
      "{}/{}",
      self.base_url.as_str().trim_end_matches('/'),
      path.trim_start_matches('/')
    );

    Url::parse(&joined).map_err(|e| ApiError::Network {
      message: format!("invalid url {joined}: {e}"),
    })
  }
}

impl Default for HttpApiClient {
  fn default() -> Self {
    Self::new(Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"))
  }
}

#[async_trait]
impl ApiClient for HttpApiClient {
  async fn get(&self, path: &str) -> Result<Value, ApiError> {
    let url = self.url_for(path)?;
    debug!(%url, "GET");

    let response = self
      .http
      .get(url)
      .send()
      .await
      .map_err(|e| ApiError::Network {
        message: e.to_string(),
      })?;

    let status = response.status();
    if status == reqwest::StatusCode::NOT_FOUND {
      return Err(ApiError::NotFound);
    }
    if !status.is_success() {
      return Err(ApiError::UnexpectedStatus {
        status: status.as_u16(),
      });
    }

    response.json::<Value>().await.map_err(|e| ApiError::Decode {
      message: e.to_string(),
    })
  }
}
