//! ESPN API families and their base URLs.

/// Base path for the ESPN site API (news, teams, scoreboards).
pub const SITE_BASE_URL: &str = "https://site.api.espn.com/apis/site/v2";
/// Base path for the site web API (common v3 resources).
pub const SITE_WEB_BASE_URL: &str = "https://site.web.api.espn.com/apis/common/v3";
/// Base path for the sports core API (athletes and other raw resources).
pub const CORE_BASE_URL: &str = "https://sports.core.api.espn.com/v2";
/// Base path for the CDN core API.
pub const CDN_BASE_URL: &str = "https://cdn.espn.com/core";

/// A named group of ESPN endpoints sharing a base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Domain {
    Site,
    SiteWeb,
    Core,
    Cdn,
}

impl Domain {
    /// Default base URL for this domain.
    pub fn default_base_url(&self) -> &'static str {
        match self {
            Domain::Site => SITE_BASE_URL,
            Domain::SiteWeb => SITE_WEB_BASE_URL,
            Domain::Core => CORE_BASE_URL,
            Domain::Cdn => CDN_BASE_URL,
        }
    }

    /// All domains, for building the base-URL table.
    pub(crate) const ALL: [Domain; 4] = [Domain::Site, Domain::SiteWeb, Domain::Core, Domain::Cdn];
}
