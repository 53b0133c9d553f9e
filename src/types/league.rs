//! Sport/league pairs used to build endpoint paths.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A sport and league slug pair, e.g. `football`/`nfl`.
///
/// ESPN's site and core APIs address every league by this pair; the named
/// constructors cover the common ones and [`League::new`] covers the rest.
///
/// # Examples
///
/// ```rust
/// use espn_client::League;
///
/// let nfl = League::nfl();
/// assert_eq!(nfl.sport(), "football");
/// assert_eq!(nfl.slug(), "nfl");
///
/// let epl = League::new("soccer", "eng.1");
/// assert_eq!(epl.slug(), "eng.1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct League {
    sport: String,
    slug: String,
}

impl League {
    pub fn new(sport: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            sport: sport.into(),
            slug: slug.into(),
        }
    }

    pub fn nfl() -> Self {
        Self::new("football", "nfl")
    }

    pub fn college_football() -> Self {
        Self::new("football", "college-football")
    }

    pub fn nba() -> Self {
        Self::new("basketball", "nba")
    }

    pub fn mens_college_basketball() -> Self {
        Self::new("basketball", "mens-college-basketball")
    }

    pub fn mlb() -> Self {
        Self::new("baseball", "mlb")
    }

    pub fn nhl() -> Self {
        Self::new("hockey", "nhl")
    }

    pub fn sport(&self) -> &str {
        &self.sport
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.sport, self.slug)
    }
}
