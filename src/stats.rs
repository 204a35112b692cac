//! Team statistics operations.

use reqwest::Method;

use crate::models::{TeamInfo, TeamInfoData, TeamStats};
use crate::{Client, Result};

impl Client {
    /// Retrieve per-day usage statistics for your team.
    pub async fn get_team_stats(&self) -> Result<TeamStats> {
        self.send_request(Method::GET, "/team/stats", &[], None::<&()>)
            .await
    }

    /// Retrieve the full team record: domains, SMS numbers, members,
    /// and plan limits.
    pub async fn get_team(&self) -> Result<TeamInfo> {
        self.send_request(Method::GET, "/team/", &[], None::<&()>)
            .await
    }

    /// Retrieve the compact team summary.
    pub async fn get_team_info(&self) -> Result<TeamInfoData> {
        self.send_request(Method::GET, "/teaminfo", &[], None::<&()>)
            .await
    }
}
