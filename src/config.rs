//! Client configuration: timeout, user agent, and base-URL overrides.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::domain::Domain;
use crate::error::{EspnError, Result};

const DEFAULT_USER_AGENT: &str = concat!("espn-client/", env!("CARGO_PKG_VERSION"));

/// Optional configuration for [`EspnClient`](crate::EspnClient).
///
/// Base-URL overrides exist mainly so tests can point a domain at a mock
/// server; everything defaults to the public ESPN hosts.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub(crate) timeout: Option<Duration>,
    pub(crate) user_agent: String,
    pub(crate) base_urls: BTreeMap<Domain, String>,
    pub(crate) debug: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            base_urls: BTreeMap::new(),
            debug: false,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a request timeout to the underlying HTTP client.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Override the base URL for one domain. A trailing slash is stripped so
    /// paths can always be appended verbatim.
    pub fn with_base_url(mut self, domain: Domain, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_urls
            .insert(domain, base_url.trim_end_matches('/').to_string());
        self
    }

    /// Print each outgoing request URL to stderr before sending.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Resolve the full base-URL table: defaults merged with overrides.
    ///
    /// Fails with a configuration error if any override is not an absolute
    /// http(s) URL.
    pub(crate) fn resolved_base_urls(&self) -> Result<BTreeMap<Domain, String>> {
        for (domain, url) in &self.base_urls {
            let parsed = reqwest::Url::parse(url)
                .map_err(|e| EspnError::config(format!("base URL for {domain:?}: {e}")))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(EspnError::config(format!(
                    "base URL for {domain:?} must be http(s), got {url}"
                )));
            }
        }
        let mut table = BTreeMap::new();
        for domain in Domain::ALL {
            let url = self
                .base_urls
                .get(&domain)
                .cloned()
                .unwrap_or_else(|| domain.default_base_url().to_string());
            table.insert(domain, url);
        }
        Ok(table)
    }
}
