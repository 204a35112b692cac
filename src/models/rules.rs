//! Rule wire types: server-side condition/action mappings evaluated on
//! inbound messages.

use serde::{Deserialize, Serialize};

/// A rule as stored on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Rule {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub enabled: bool,
    pub match_type: MatchType,
    pub priority: i32,
    pub conditions: Vec<Condition>,
    pub actions: Vec<ActionRule>,
}

/// Payload for creating a rule. Note the wire key for the match type is
/// `match` here, unlike the stored rule's `match_type`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleToCreate {
    pub description: String,
    pub enabled: bool,
    #[serde(rename = "match")]
    pub match_type: MatchType,
    pub name: String,
    pub priority: i32,
    pub conditions: Vec<Condition>,
    pub actions: Vec<ActionRule>,
}

/// How a rule's conditions combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchType {
    #[default]
    Any,
    All,
    AlwaysMatch,
}

/// A single rule condition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Condition {
    pub operation: OperationType,
    pub condition_data: ConditionData,
}

/// Comparison applied by a condition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationType {
    #[default]
    Equals,
    Prefix,
}

/// Field/value pair a condition compares against.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConditionData {
    pub field: String,
    pub value: String,
}

/// A single rule action.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionRule {
    pub action: ActionType,
    pub action_data: ActionData,
}

/// What a matched rule does with the message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    #[default]
    Webhook,
    Drop,
}

/// Action parameters (currently the webhook target URL).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionData {
    pub url: String,
}

/// All rules configured on a domain.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub rules: Vec<Rule>,
}

/// Bare `{status}` acknowledgement returned by several mutations.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResponseStatus {
    pub status: String,
}
