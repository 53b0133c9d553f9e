//! Teams accessor.

use std::sync::Arc;

use crate::client::Facade;
use crate::domain::Domain;
use crate::error::Result;
use crate::models::{RosterResponse, TeamResponse, TeamsResponse};
use crate::types::{League, TeamId};

/// Read operations for league teams.
#[derive(Debug)]
pub struct Teams {
    facade: Arc<Facade>,
}

impl Teams {
    pub(crate) fn new(facade: Arc<Facade>) -> Self {
        Self { facade }
    }

    /// All teams in a league.
    ///
    /// The site API caps the default page at 50; pass `limit` to raise it
    /// for larger leagues (college football has several hundred).
    pub async fn list(&self, league: &League, limit: Option<u32>) -> Result<TeamsResponse> {
        let path = format!("/sports/{}/{}/teams", league.sport(), league.slug());

        let mut query = Vec::new();
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }

        self.facade.request_json(Domain::Site, &path, &query).await
    }

    /// One team by its ESPN id.
    pub async fn get(&self, league: &League, team_id: TeamId) -> Result<TeamResponse> {
        let path = format!(
            "/sports/{}/{}/teams/{}",
            league.sport(),
            league.slug(),
            team_id
        );
        self.facade.request_json(Domain::Site, &path, &[]).await
    }

    /// A team's current roster.
    pub async fn roster(&self, league: &League, team_id: TeamId) -> Result<RosterResponse> {
        let path = format!(
            "/sports/{}/{}/teams/{}/roster",
            league.sport(),
            league.slug(),
            team_id
        );
        self.facade.request_json(Domain::Site, &path, &[]).await
    }
}
