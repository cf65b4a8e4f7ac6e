//! Transport for image bytes.

use std::time::Duration;

use cardshell_core::logging::targets;
use url::Url;

use crate::error::{ImageError, Result};

/// Something that can fetch the bytes behind a URL.
///
/// Called from worker threads, one call per download.
pub trait ImageSource: Send + Sync {
    /// Fetch the full body at `url`.
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Configuration for [`HttpImageSource`].
#[derive(Clone, Debug)]
pub struct HttpSourceConfig {
    /// Request timeout.
    pub timeout: Option<Duration>,
    /// Connect timeout.
    pub connect_timeout: Option<Duration>,
    /// User agent.
    pub user_agent: Option<String>,
}

impl Default for HttpSourceConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            connect_timeout: Some(Duration::from_secs(10)),
            user_agent: Some(format!("cardshell/{} (Rust)", env!("CARGO_PKG_VERSION"))),
        }
    }
}

impl HttpSourceConfig {
    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Disable the request timeout.
    pub fn no_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    /// Set the user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

/// Blocking HTTP(S) transport.
#[derive(Clone, Debug)]
pub struct HttpImageSource {
    client: reqwest::blocking::Client,
    config: HttpSourceConfig,
}

impl HttpImageSource {
    /// Source with default timeouts.
    pub fn new() -> Result<Self> {
        Self::with_config(HttpSourceConfig::default())
    }

    /// Source with a custom configuration.
    pub fn with_config(config: HttpSourceConfig) -> Result<Self> {
        let mut builder = reqwest::blocking::Client::builder();

        // `None` means no limit; the blocking builder defaults to 30s otherwise.
        builder = builder.timeout(config.timeout);
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        if let Some(ref ua) = config.user_agent {
            builder = builder.user_agent(ua);
        }

        let client = builder.build()?;
        Ok(Self { client, config })
    }

    /// The configuration.
    pub fn config(&self) -> &HttpSourceConfig {
        &self.config
    }
}

impl ImageSource for HttpImageSource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let url = Url::parse(url)?;
        tracing::debug!(target: targets::HTTP, %url, "GET");

        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ImageError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes()?;
        tracing::trace!(target: targets::HTTP, len = bytes.len(), "body received");
        Ok(bytes.to_vec())
    }
}
