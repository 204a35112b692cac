//! Domain wire types.

use serde::{Deserialize, Serialize};

use super::Rule;

/// All domains belonging to the authenticated team.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DomainsList {
    pub domains: Vec<Domain>,
}

/// A mail-receiving namespace, public or private.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Domain {
    #[serde(rename = "_id")]
    pub id: String,
    pub description: String,
    pub enabled: bool,
    pub name: String,
    pub rules: Vec<Rule>,
}
