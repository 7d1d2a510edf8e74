use dotenvy::dotenv;
use std::env;
use std::time::Duration;

use crate::errors::{FcmError, Result};

/// FCM client configuration
#[derive(Debug, Clone)]
pub struct FcmConfig {
    pub api_key: String,
    pub proxy_api_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

impl FcmConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            proxy_api_url: None,
            request_timeout_secs: None,
        }
    }

    /// Send through a proxy instead of the Google endpoint
    pub fn with_proxy_api_url(mut self, url: impl Into<String>) -> Self {
        self.proxy_api_url = Some(url.into());
        self
    }

    pub fn with_request_timeout(mut self, secs: u64) -> Self {
        self.request_timeout_secs = Some(secs);
        self
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Load from `FCM_API_KEY`, `FCM_PROXY_API_URL` and `FCM_REQUEST_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let api_key = env::var("FCM_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| FcmError::Config("FCM_API_KEY missing".into()))?;

        let proxy_api_url = env::var("FCM_PROXY_API_URL")
            .ok()
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        let request_timeout_secs = match env::var("FCM_REQUEST_TIMEOUT_SECS") {
            Ok(value) => Some(value.trim().parse().map_err(|_| {
                FcmError::Config("FCM_REQUEST_TIMEOUT_SECS must be a valid u64".into())
            })?),
            Err(_) => None,
        };

        Ok(Self {
            api_key,
            proxy_api_url,
            request_timeout_secs,
        })
    }
}
