//! # Mailinator Client
//! Asynchronous wrapper around the Mailinator email/SMS testing HTTP API, providing typed methods for domains, inboxes, messages, attachments, rules, webhooks, authenticators, and team statistics through a single [`Client`] configured via [`ClientBuilder`].
//!
//! ## Audience and uses
//! For Rust developers who exercise email or SMS flows in integration tests, QA pipelines, or automation scripts against Mailinator's public or private domains: configure with [`ClientBuilder`] (or [`Client::new`] with just an API token), list inboxes, fetch [`Message`]s and attachments, manage [`Rule`]s, and push webhooks.
//!
//! ## Runtime requirements
//! Async-only; run inside a Tokio (v1) runtime. HTTP calls use `reqwest`, so ensure the chosen Tokio features (`rt-multi-thread` or `current_thread`) are available in your application.
//!
//! ## Out of scope
//! Not an SMTP server, mail sender, or durable mailbox. It only proxies the Mailinator REST API and inherits its availability, plan limits, and retention windows. Requests are attempted exactly once; retries and credential storage are the caller's concern.
//!
//! ## Errors
//! Network-level failures surface as [`Error::Request`]; non-200 responses become [`Error::Api`] (the server's own message) or [`Error::UnknownStatus`]; malformed payloads become [`Error::Json`] or [`Error::ContentDisposition`]. The crate-wide [`Result`] alias wraps these errors.
//!
//! ## Example
//! ```no_run
//! use mailinator_client::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mailinator_client::Error> {
//!     let client = Client::new("your-api-token")?;
//!
//!     let domains = client.get_domains().await?;
//!     for domain in domains.domains {
//!         println!("Domain: {}", domain.name);
//!     }
//!
//!     let inbox = client.fetch_inbox("mydomain.com", "testinbox", &Default::default()).await?;
//!     for msg in inbox.messages {
//!         println!("From: {}, Subject: {}", msg.from, msg.subject);
//!     }
//!     Ok(())
//! }
//! ```

mod authenticators;
mod client;
mod domains;
mod error;
mod messages;
mod models;
mod rules;
mod stats;
mod webhooks;

pub use client::{Client, ClientBuilder};
pub use error::Error;
pub use messages::FetchInboxOptions;
pub use models::{
    ActionData, ActionRule, ActionType, Attachment, AttachmentContent, Attachments,
    Authenticator, Authenticators, Condition, ConditionData, DeletedMessages, Domain,
    DomainsList, Inbox, LinkEntity, MatchType, Member, Message, MessageLinks,
    MessageLinksFull, MessageToPost, OperationType, Part, PlanData, PostedMessage,
    PrivateDomain, ResponseStatus, ResponseStatusWithId, Retrieved, Rule, RuleToCreate,
    Rules, Sent, SmsMessage, SmsNumber, SmtpLogEntry, SmtpLogs, Sort, Stat, TeamInfo,
    TeamInfoData, TeamStats, TotpCode, Webhook,
};

/// Result type alias for Mailinator operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
