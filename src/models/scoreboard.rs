//! Scoreboard records from the site API.

use serde::{Deserialize, Serialize};

use super::teams::Team;

/// Top-level envelope for a league scoreboard.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScoreboardResponse {
    #[serde(default)]
    pub events: Vec<Event>,
}

/// A scheduled or completed game.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Event {
    pub id: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "shortName", default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub competitions: Vec<Competition>,
    #[serde(default)]
    pub status: Option<EventStatus>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Competition {
    pub id: String,
    #[serde(default)]
    pub competitors: Vec<Competitor>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Competitor {
    pub id: String,
    /// `"home"` or `"away"`.
    #[serde(rename = "homeAway", default)]
    pub home_away: Option<String>,
    /// Scores arrive as strings on the site API.
    #[serde(default)]
    pub score: Option<String>,
    #[serde(default)]
    pub winner: Option<bool>,
    #[serde(default)]
    pub team: Option<Team>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EventStatus {
    #[serde(default)]
    pub clock: Option<f64>,
    #[serde(default)]
    pub period: Option<u8>,
    #[serde(rename = "type", default)]
    pub status_type: Option<StatusType>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatusType {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}
