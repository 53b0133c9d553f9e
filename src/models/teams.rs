//! Team records from the site API.
//!
//! The team list arrives triple-wrapped: sports → leagues → teams, with each
//! team nested one level further under a `team` key. The envelopes here
//! mirror that shape; [`TeamsResponse::teams`] flattens it.

use serde::{Deserialize, Serialize};

use crate::types::TeamId;

/// Top-level envelope for the team list.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TeamsResponse {
    #[serde(default)]
    pub sports: Vec<SportEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SportEntry {
    #[serde(default)]
    pub leagues: Vec<LeagueEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeagueEntry {
    #[serde(default)]
    pub teams: Vec<TeamEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TeamEntry {
    pub team: Team,
}

impl TeamsResponse {
    /// Flatten the sports → leagues → teams nesting into the teams themselves.
    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.sports
            .iter()
            .flat_map(|s| &s.leagues)
            .flat_map(|l| &l.teams)
            .map(|e| &e.team)
    }
}

/// Envelope for a single-team lookup.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TeamResponse {
    pub team: Team,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Team {
    /// ESPN serializes team ids as strings.
    #[serde(deserialize_with = "de_id_str")]
    pub id: TeamId,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub logos: Vec<TeamLogo>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TeamLogo {
    pub href: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// Envelope for a team roster lookup.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RosterResponse {
    #[serde(default)]
    pub athletes: Vec<RosterGroup>,
}

/// Rosters come grouped by position (offense/defense/etc. for football).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RosterGroup {
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub items: Vec<super::athletes::Athlete>,
}

fn de_id_str<'de, D>(deserializer: D) -> Result<TeamId, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    let raw: String = serde::Deserialize::deserialize(deserializer)?;
    raw.parse::<TeamId>().map_err(D::Error::custom)
}
