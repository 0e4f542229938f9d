//! Page fetching.
//!
//! The extractor only needs "give me the body at this URL". `HttpSource`
//! does that over reqwest; tests plug in canned pages instead.

use tracing::debug;
use url::Url;

use crate::config::ScheduleConfig;
use crate::error::{TvGuideError, TvGuideResult};

/// Something that can return the raw document at a URL.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    async fn fetch(&self, url: &Url) -> TvGuideResult<String>;
}

/// Plain HTTP GET, one request at a time.
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(config: &ScheduleConfig) -> TvGuideResult<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());

        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| TvGuideError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

impl PageSource for HttpSource {
    async fn fetch(&self, url: &Url) -> TvGuideResult<String> {
        debug!(%url, "fetching page");

        let transport = |reason: String| TvGuideError::Transport {
            url: url.to_string(),
            reason,
        };

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(transport(format!("HTTP {status}")));
        }

        response
            .text()
            .await
            .map_err(|e| transport(format!("Failed to read response body: {e}")))
    }
}
