use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Header carrying the client-generated token that lets the backend drop duplicate writes.
pub const IDEMPOTENCY_HEADER: &str = "Idempotency-Key";

/// HTTP/JSON client bound to one backend origin.
///
/// Cheap to clone: the connection pool and origin are shared.
#[derive(Clone, Debug)]
pub struct ApiClient {
    /// Pooled HTTP client.
    http: reqwest::Client,
    /// Origin without trailing slash, e.g. `https://api.example.in`.
    base: Option<Arc<str>>,
}

impl ApiClient {
    /// What: Build a client for `base`.
    ///
    /// Inputs:
    /// - `base`: Normalized origin, or `None` when unconfigured (every call then fails
    ///   with [`ApiError::MissingBaseUrl`]).
    /// - `timeout`: Optional per-request timeout; `None` leaves requests unbounded.
    ///
    /// # Errors
    /// - Returns `Err` when the TLS backend cannot be initialized.
    pub fn new(base: Option<String>, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let mut builder = reqwest::Client::builder()
            .user_agent(format!("Swadeshi/{}", env!("CARGO_PKG_VERSION")))
            .default_headers(headers);
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        Ok(Self {
            http: builder.build()?,
            base: base.map(Arc::from),
        })
    }

    /// Configured origin, if any.
    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        self.base.as_deref()
    }

    /// Absolute URL for an API path such as `/api/news`.
    fn url(&self, path: &str) -> Result<String, ApiError> {
        let base = self.base.as_deref().ok_or(ApiError::MissingBaseUrl)?;
        Ok(format!("{base}{path}"))
    }

    /// What: `GET` a JSON document.
    ///
    /// # Errors
    /// - [`ApiError::MissingBaseUrl`], transport, non-2xx status, or decode failures.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path)?;
        tracing::debug!(%url, "GET");
        let resp = self.http.get(&url).send().await?;
        decode(path, resp).await
    }

    /// What: `POST` a JSON body and decode the JSON reply.
    ///
    /// Inputs:
    /// - `idempotency_key`: Sent as [`IDEMPOTENCY_HEADER`] when present.
    ///
    /// # Errors
    /// - [`ApiError::MissingBaseUrl`], transport, non-2xx status, or decode failures.
    pub async fn post_json<B, T>(
        &self,
        path: &str,
        body: &B,
        idempotency_key: Option<&str>,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path)?;
        tracing::debug!(%url, "POST");
        let mut req = self.http.post(&url).json(body);
        if let Some(key) = idempotency_key {
            req = req.header(IDEMPOTENCY_HEADER, key);
        }
        let resp = req.send().await?;
        decode(path, resp).await
    }
}

/// What: Check the status and parse the body.
///
/// Details:
/// - The body is read fully before parsing so decode errors are reported separately
///   from transport errors.
async fn decode<T: DeserializeOwned>(path: &str, resp: reqwest::Response) -> Result<T, ApiError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            code: status.as_u16(),
            path: path.to_string(),
        });
    }
    let bytes = resp.bytes().await?;
    tracing::trace!(path, bytes = bytes.len(), "response received");
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unconfigured_origin_fails_without_network() {
        let client = ApiClient::new(None, None).expect("client");
        assert!(client.base_url().is_none());
        let err = client
            .get_json::<serde_json::Value>("/api/news")
            .await
            .expect_err("must fail");
        assert!(matches!(err, ApiError::MissingBaseUrl));
    }

    #[test]
    fn url_joins_origin_and_path() {
        let client = ApiClient::new(Some("http://127.0.0.1:9".into()), None).expect("client");
        assert_eq!(
            client.url("/api/quotes/today").expect("url"),
            "http://127.0.0.1:9/api/quotes/today"
        );
    }
}
