use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Request, Response};
use tracing::{debug, error, info, warn};

use crate::config::FcmConfig;
use crate::errors::{FcmError, Result};
use crate::message::Message;

/// Endpoint of the legacy FCM HTTP API
pub const DEFAULT_API_URL: &str = "https://fcm.googleapis.com/fcm/send";

/// Firebase Cloud Messaging legacy HTTP client
///
/// Holds the server API key and target endpoint. Each [`FcmClient::send`] is a
/// single POST; the response is handed back without interpretation, so status
/// handling and retries belong to the caller.
#[derive(Debug, Clone)]
pub struct FcmClient {
    api_key: String,
    proxy_api_url: Option<String>,
    http_client: reqwest::Client,
}

impl FcmClient {
    /// Create new FCM client
    ///
    /// # Arguments
    /// * `api_key` - Server key from the Firebase console
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            proxy_api_url: None,
            http_client: reqwest::Client::new(),
        }
    }

    /// Create a client from configuration, applying the request timeout if any
    pub fn from_config(cfg: &FcmConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = cfg.request_timeout() {
            builder = builder.timeout(timeout);
        }

        let client = Self {
            api_key: cfg.api_key.clone(),
            proxy_api_url: cfg.proxy_api_url.clone(),
            http_client: builder
                .build()
                .map_err(|e| FcmError::Config(format!("failed to build HTTP client: {e}")))?,
        };

        info!(
            "Initialized FCM client for {} (timeout: {:?})",
            client.api_url(),
            cfg.request_timeout()
        );

        Ok(client)
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Send to a proxy of your own instead of the Google endpoint
    pub fn with_proxy_api_url(mut self, url: impl Into<String>) -> Self {
        self.proxy_api_url = Some(url.into());
        self
    }

    /// Use a preconfigured transport (timeouts, TLS, pooling)
    pub fn with_http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = http_client;
        self
    }

    pub fn api_url(&self) -> &str {
        self.proxy_api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    /// Assemble the POST for `message` without sending it
    ///
    /// Encrypted messages carry their raw payload and encryption headers; all
    /// others carry the JSON rendering of the message.
    pub fn build_request(&self, message: &Message) -> Result<Request> {
        let mut builder = self
            .http_client
            .post(self.api_url())
            .header(AUTHORIZATION, format!("key={}", self.api_key))
            .header(CONTENT_TYPE, "application/json");

        builder = match message.encrypted_payload() {
            Some(payload) => {
                for (name, value) in payload.headers() {
                    builder = builder.header(name, value);
                }
                debug!(
                    "Built encrypted FCM request to {} ({} bytes)",
                    self.api_url(),
                    payload.body.len()
                );
                builder.body(payload.body.clone())
            }
            None => {
                let body = message.to_json_string()?;
                debug!(
                    "Built FCM request to {} ({} recipients, {} bytes)",
                    self.api_url(),
                    message.recipients().len(),
                    body.len()
                );
                builder.body(body)
            }
        };

        Ok(builder.build()?)
    }

    /// Send `message` and return the raw FCM response
    ///
    /// Non-success statuses are not errors here; only transport failures are.
    pub async fn send(&self, message: &Message) -> Result<Response> {
        let request = self.build_request(message)?;

        let response = self.http_client.execute(request).await.map_err(|e| {
            error!("FCM send request to {} failed: {}", self.api_url(), e);
            e
        })?;

        let status = response.status();
        if status.is_success() {
            info!("FCM request accepted with status {}", status);
        } else {
            warn!("FCM request returned status {}", status);
        }

        Ok(response)
    }
}
