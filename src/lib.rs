//! ESPN API Client Library
//!
//! A thin async Rust client for ESPN's undocumented public REST endpoints,
//! covering news, teams, scoreboards, and athletes across leagues.
//!
//! ## Features
//!
//! - **Typed accessors**: news, teams, scoreboard, and athletes groupings,
//!   each a direct call into one shared request façade
//! - **Normalized errors**: rate-limited, not-found, and generic API
//!   failures, mapped purely from the HTTP status code
//! - **No magic**: one GET per operation — no caching, no retries, no
//!   batching; backoff policy stays with the caller
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use espn_client::{EspnClient, League, NewsParams};
//!
//! # async fn example() -> espn_client::Result<()> {
//! let client = EspnClient::new()?;
//!
//! let news = client
//!     .news()
//!     .latest(&League::nfl(), NewsParams { limit: Some(5), team: None })
//!     .await?;
//! for article in &news.articles {
//!     println!("{}", article.headline);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error handling
//!
//! Every error surfaces to the caller unmodified. Branch on the kind to
//! recover:
//!
//! ```rust,no_run
//! # async fn example() -> espn_client::Result<()> {
//! # let client = espn_client::EspnClient::new()?;
//! match client.teams().list(&espn_client::League::nba(), None).await {
//!     Ok(teams) => println!("{} teams", teams.teams().count()),
//!     Err(e) if e.is_rate_limited() => eprintln!("backing off"),
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod domain;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod types;

// Re-export commonly used types
pub use client::EspnClient;
pub use config::ClientConfig;
pub use domain::Domain;
pub use endpoints::{AthleteListParams, NewsParams, ScoreboardParams};
pub use error::{EspnError, Result};
pub use types::{AthleteId, League, Season, SeasonType, TeamId, Week};
