//! Message, inbox, and attachment wire types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::Rule;

/// A page of message summaries for an inbox or a whole domain.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Inbox {
    pub domain: String,
    pub to: String,
    #[serde(rename = "msgs")]
    pub messages: Vec<Message>,
    pub cursor: String,
}

/// A received message; summary fields are always present, the full
/// body fields (`parts`, `source`, `text`, ...) only on full fetches.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Message {
    pub subject: String,
    pub from: String,
    pub to: String,
    pub id: String,
    pub time: f64,
    pub seconds_ago: f64,
    pub domain: String,
    pub is_first_exchange: bool,
    pub fromfull: String,
    pub headers: HashMap<String, serde_json::Value>,
    pub parts: Vec<Part>,
    pub origfrom: String,
    pub mrid: String,
    pub size: i64,
    pub stream: String,
    pub msg_type: String,
    pub source: String,
    pub text: String,
}

/// One MIME part of a message.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Part {
    pub headers: HashMap<String, String>,
    pub body: String,
}

/// Messages received on a team SMS number.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SmsMessage {
    pub domain: String,
    pub to: String,
    #[serde(rename = "msgs")]
    pub messages: Vec<Message>,
}

/// Attachment metadata listing for one message.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Attachments {
    pub attachments: Vec<Attachment>,
}

/// Metadata of a single attachment as listed on a message.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Attachment {
    pub filename: String,
    #[serde(rename = "content-disposition")]
    pub content_disposition: String,
    #[serde(rename = "content-transfer-encoding")]
    pub content_transfer_encoding: String,
    #[serde(rename = "content-type")]
    pub content_type: String,
    #[serde(rename = "attachment-id")]
    pub attachment_id: i64,
}

/// A downloaded attachment: raw bytes plus the content type and
/// filename taken from the response headers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AttachmentContent {
    pub bytes: Vec<u8>,
    #[serde(rename = "content-type")]
    pub content_type: String,
    pub filename: String,
}

/// Bare link URLs extracted from a message.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MessageLinks {
    pub links: Vec<String>,
}

/// Links extracted from a message with their anchor text.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MessageLinksFull {
    pub links: Vec<LinkEntity>,
}

/// One extracted link with its anchor text.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LinkEntity {
    pub link: String,
    pub text: String,
}

/// Acknowledgement for message deletions.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DeletedMessages {
    pub status: String,
    pub count: i64,
}

/// Payload for injecting a message into a private inbox.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageToPost {
    pub subject: String,
    pub from: String,
    pub text: String,
}

/// Acknowledgement for an injected message, including any rules it fired.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PostedMessage {
    pub status: String,
    pub id: String,
    pub rules_fired: Vec<Rule>,
}

/// SMTP log lines recorded while a message was received.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SmtpLogs {
    #[serde(rename = "log")]
    pub log_entries: Vec<SmtpLogEntry>,
}

/// One SMTP log line.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SmtpLogEntry {
    pub log: String,
    pub time: String,
    pub event: String,
}

/// Sort order for inbox listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sort {
    #[default]
    Ascending,
    Descending,
}

impl Sort {
    /// Wire token used in query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            Sort::Ascending => "ascending",
            Sort::Descending => "descending",
        }
    }
}
