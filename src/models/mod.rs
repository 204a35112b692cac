//! Wire types for the Mailinator REST API.
//!
//! Field names and nesting follow the remote service's JSON contract
//! exactly; response types default missing fields instead of failing.

mod authenticators;
mod domains;
mod messages;
mod rules;
mod stats;
mod webhooks;

pub use authenticators::{Authenticator, Authenticators, TotpCode};
pub use domains::{Domain, DomainsList};
pub use messages::{
    Attachment, AttachmentContent, Attachments, DeletedMessages, Inbox, LinkEntity, Message,
    MessageLinks, MessageLinksFull, MessageToPost, Part, PostedMessage, SmsMessage, SmtpLogEntry,
    SmtpLogs, Sort,
};
pub use rules::{
    ActionData, ActionRule, ActionType, Condition, ConditionData, MatchType, OperationType,
    ResponseStatus, Rule, RuleToCreate, Rules,
};
pub use stats::{
    Member, PlanData, PrivateDomain, Retrieved, Sent, SmsNumber, Stat, TeamInfo, TeamInfoData,
    TeamStats,
};
pub use webhooks::{ResponseStatusWithId, Webhook};
