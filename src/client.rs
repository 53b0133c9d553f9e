//! The request façade and the public client.
//!
//! All outbound HTTP goes through [`Facade::request`]: build the URL from
//! the domain's base plus the path, attach query parameters, issue exactly
//! one GET, and either return the decoded JSON body or a normalized
//! [`EspnError`]. The façade never retries, caches, or batches.

use std::collections::BTreeMap;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::domain::Domain;
use crate::endpoints::{Athletes, News, Scoreboard, Teams};
use crate::error::{EspnError, Result};


/// Single component responsible for all outbound HTTP and error
/// normalization. Shared by every accessor on a client.
#[derive(Debug)]
pub(crate) struct Facade {
    http: Client,
    base_urls: BTreeMap<Domain, String>,
    debug: bool,
}

impl Facade {
    fn new(config: &ClientConfig) -> Result<Self> {
        let base_urls = config.resolved_base_urls()?;

        let mut builder = Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| EspnError::config(format!("HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_urls,
            debug: config.debug,
        })
    }

    /// Resolve `domain` + `path` into a fully qualified URL. The path is
    /// appended verbatim.
    pub(crate) fn url_for(&self, domain: Domain, path: &str) -> Result<String> {
        let base = self
            .base_urls
            .get(&domain)
            .ok_or_else(|| EspnError::config(format!("no base URL for {domain:?}")))?;
        Ok(format!("{base}{path}"))
    }

    /// Issue one GET and return the decoded JSON body.
    ///
    /// Non-success statuses map to error kinds by status code alone; a
    /// transport failure (no status observed) becomes a generic API error.
    /// JSON decode failures propagate unchanged.
    pub(crate) async fn request(
        &self,
        domain: Domain,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Value> {
        let url = self.url_for(domain, path)?;
        let builder = self.http.get(&url).query(params);

        if self.debug {
            if let Some(req) = builder.try_clone().and_then(|b| b.build().ok()) {
                eprintln!("URL => {}", req.url());
            }
        }

        let res = builder
            .send()
            .await
            .map_err(|e| EspnError::transport(path, &e))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| EspnError::transport(path, &e))?;

        if status.is_success() {
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = (!body.is_empty()).then_some(body);
            Err(EspnError::from_status(status.as_u16(), path, body))
        }
    }

    /// [`request`](Self::request), decoded into a typed record.
    pub(crate) async fn request_json<T: DeserializeOwned>(
        &self,
        domain: Domain,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let value = self.request(domain, path, params).await?;
        Ok(serde_json::from_value(value)?)
    }
}

/// Async client for ESPN's public REST endpoints.
///
/// Accessors are constructed lazily on first use and reused for the life of
/// the client; they share one HTTP connection pool. Creation is idempotent,
/// so concurrent first accesses are harmless.
///
/// # Examples
///
/// ```rust,no_run
/// use espn_client::{EspnClient, League};
///
/// # async fn example() -> espn_client::Result<()> {
/// let client = EspnClient::new()?;
/// let news = client.news().latest(&League::nfl(), Default::default()).await?;
/// for article in &news.articles {
///     println!("{}", article.headline);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct EspnClient {
    facade: Arc<Facade>,
    news: OnceCell<News>,
    teams: OnceCell<Teams>,
    scoreboard: OnceCell<Scoreboard>,
    athletes: OnceCell<Athletes>,
}

impl EspnClient {
    /// Create a client with default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with explicit configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            facade: Arc::new(Facade::new(&config)?),
            news: OnceCell::new(),
            teams: OnceCell::new(),
            scoreboard: OnceCell::new(),
            athletes: OnceCell::new(),
        })
    }

    /// News accessor.
    pub fn news(&self) -> &News {
        self.news.get_or_init(|| News::new(self.facade.clone()))
    }

    /// Teams accessor.
    pub fn teams(&self) -> &Teams {
        self.teams.get_or_init(|| Teams::new(self.facade.clone()))
    }

    /// Scoreboard accessor.
    pub fn scoreboard(&self) -> &Scoreboard {
        self.scoreboard
            .get_or_init(|| Scoreboard::new(self.facade.clone()))
    }

    /// Athletes accessor.
    pub fn athletes(&self) -> &Athletes {
        self.athletes
            .get_or_init(|| Athletes::new(self.facade.clone()))
    }

    /// Raw façade call for endpoints the typed accessors do not cover.
    pub async fn request(
        &self,
        domain: Domain,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Value> {
        self.facade.request(domain, path, params).await
    }
}
