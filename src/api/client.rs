//! HTTP plumbing shared by the master-data and book-set endpoints.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::domain::ApiError;

const USER_AGENT: &str = "bookset-admin/0.1";

/// Every successful response wraps its payload in `{ "data": ... }`.
#[derive(serde::Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Error bodies carry `{ "error": "..." }` when the server has something to
/// say.
#[derive(serde::Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Typed client for the book-inventory API.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Request(format!("Failed to build client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Client against an explicit base URL (tests point this at a mock
    /// server).
    pub fn with_base_url(base_url: &str) -> Result<Self, ApiError> {
        Self::new(&Config {
            api_base_url: base_url.to_string(),
            timeout_secs: 10,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.http.get(self.url(path)).send().await?;
        Self::decode(resp).await
    }

    pub(crate) async fn get_json_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let resp = self.http.get(self.url(path)).query(query).send().await?;
        Self::decode(resp).await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let resp = self.http.post(self.url(path)).json(body).send().await?;
        Self::check(resp).await
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let resp = self.http.put(self.url(path)).json(body).send().await?;
        Self::check(resp).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let resp = self.http.delete(self.url(path)).send().await?;
        Self::check(resp).await
    }

    /// Decode a `{ "data": T }` envelope, mapping non-2xx statuses to
    /// `ApiError::Api` with the server's message when the body carried one.
    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(Self::api_error(status.as_u16(), &body));
        }

        let envelope: Envelope<T> = serde_json::from_str(&body)
            .map_err(|e| ApiError::Decode(format!("Unexpected response shape: {}", e)))?;
        Ok(envelope.data)
    }

    /// Like `decode`, for endpoints whose success payload we do not consume.
    async fn check(resp: reqwest::Response) -> Result<(), ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        let body = resp.text().await.unwrap_or_default();
        Err(Self::api_error(status.as_u16(), &body))
    }

    fn api_error(status: u16, body: &str) -> ApiError {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error);
        ApiError::Api { status, message }
    }
}
