use async_trait::async_trait;
use log::debug;
use reqwest::redirect::Policy;

use crate::config::Config;
use crate::core::error::Result;

/// Fetches the HTTP status code of a URL.
///
/// An `Err` means no status could be obtained at all (DNS, connection,
/// malformed URL, timeout). Error status codes are returned as `Ok`.
#[async_trait]
pub trait ProbeUrl: Send + Sync {
    async fn probe(&self, url: &str) -> Result<u16>;
}

/// Header-only probe over `reqwest`.
///
/// Redirects are not followed, so a moved page reports its 3xx status.
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: reqwest::Client,
}

impl HttpProber {
    pub fn new(config: &Config) -> Result<Self> {
        let user_agent = config.user_agent.as_deref().unwrap_or(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));

        let mut client_builder = reqwest::Client::builder()
            .redirect(Policy::none())
            .user_agent(user_agent);

        if let Some(timeout) = config.timeout_duration() {
            client_builder = client_builder.timeout(timeout);
        }

        Ok(Self {
            client: client_builder.build()?,
        })
    }
}

#[async_trait]
impl ProbeUrl for HttpProber {
    async fn probe(&self, url: &str) -> Result<u16> {
        let response = self.client.head(url).send().await?;
        let status_code = response.status().as_u16();
        debug!("HEAD {url} -> {status_code}");
        Ok(status_code)
    }
}
