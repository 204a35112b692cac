//! Team and usage-statistics wire types.

use serde::Deserialize;

/// Per-day usage statistics for the team.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TeamStats {
    pub stats: Vec<Stat>,
}

/// Usage counters for a single day.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Stat {
    pub date: String,
    pub retrieved: Retrieved,
    pub sent: Sent,
}

/// Message-retrieval counters, split by channel.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Retrieved {
    pub web_public: i64,
    pub api_error: i64,
    pub web_private: i64,
    pub api_email: i64,
}

/// Outbound message counters.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Sent {
    pub sms: i64,
    pub email: i64,
}

/// Full team record: domains, numbers, members, and plan limits.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TeamInfo {
    pub private_domains: Vec<PrivateDomain>,
    #[serde(rename = "sms_number")]
    pub sms_numbers: Vec<SmsNumber>,
    pub members: Vec<Member>,
    pub plan_data: PlanData,
    #[serde(rename = "_id")]
    pub id: String,
    pub plan: String,
    pub team_name: String,
    pub token: String,
    pub status: String,
}

/// Compact team summary returned by the `teaminfo` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TeamInfoData {
    pub server_time: String,
    #[serde(rename = "private_domains")]
    pub domains: Vec<String>,
}

/// A private domain attached to the team.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PrivateDomain {
    pub pd: String,
    pub enabled: bool,
}

/// A team SMS number.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SmsNumber {
    pub number: String,
    pub country: String,
    pub status: String,
}

/// A team member.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Member {
    pub role: String,
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
}

/// Plan limits for the team.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlanData {
    pub storage_mb: i64,
    #[serde(rename = "num_private_domains")]
    pub number_of_private_domains: i64,
    pub email_reads_per_day: i64,
    pub team_accounts: i64,
}
