//! Message, inbox, and attachment operations.

use reqwest::Method;

use crate::models::{
    AttachmentContent, Attachments, DeletedMessages, Inbox, Message, MessageLinks,
    MessageLinksFull, MessageToPost, PostedMessage, SmsMessage, SmtpLogs, Sort,
};
use crate::{Client, Result};

/// Optional parameters for [`Client::fetch_inbox`].
///
/// Unset fields fall back to the server-side defaults (`skip=0`,
/// `limit=50`, ascending sort); the remaining modifiers are appended to
/// the query string only when set.
#[derive(Debug, Clone, Default)]
pub struct FetchInboxOptions {
    /// Number of messages to skip (default 0).
    pub skip: Option<u32>,
    /// Maximum number of messages to return (default 50).
    pub limit: Option<u32>,
    /// Sort order by received time (default ascending).
    pub sort: Option<Sort>,
    /// Decode MIME-encoded subject lines server-side.
    pub decode_subject: bool,
    /// Resume listing from a previously returned cursor.
    pub cursor: Option<String>,
    /// Return full message bodies instead of summaries.
    pub full: bool,
    /// Delete messages after retrieval (e.g. `"10s"`).
    pub delete: Option<String>,
    /// Long-poll for new messages up to this duration (e.g. `"30s"`).
    pub wait: Option<String>,
}

impl FetchInboxOptions {
    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("skip", self.skip.unwrap_or(0).to_string()),
            ("limit", self.limit.unwrap_or(50).to_string()),
            ("sort", self.sort.unwrap_or_default().as_str().to_string()),
            ("decode_subject", self.decode_subject.to_string()),
        ];

        if let Some(cursor) = &self.cursor {
            query.push(("cursor", cursor.clone()));
        }
        if self.full {
            query.push(("full", "true".to_string()));
        }
        if let Some(delete) = &self.delete {
            query.push(("delete", delete.clone()));
        }
        if let Some(wait) = &self.wait {
            query.push(("wait", wait.clone()));
        }

        query
    }
}

impl Client {
    /// Retrieve a page of message summaries for an inbox. Use `"*"` as
    /// the inbox to list across the whole domain.
    ///
    /// # Examples
    /// ```no_run
    /// # use mailinator_client::{Client, FetchInboxOptions};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), mailinator_client::Error> {
    /// let client = Client::new("your-api-token")?;
    /// let options = FetchInboxOptions {
    ///     limit: Some(10),
    ///     full: true,
    ///     ..Default::default()
    /// };
    /// let inbox = client.fetch_inbox("mydomain.com", "testinbox", &options).await?;
    /// for msg in inbox.messages {
    ///     println!("{}: {}", msg.from, msg.subject);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch_inbox(
        &self,
        domain: &str,
        inbox: &str,
        options: &FetchInboxOptions,
    ) -> Result<Inbox> {
        self.send_request(
            Method::GET,
            &format!("/domains/{domain}/inboxes/{inbox}"),
            &options.query(),
            None::<&()>,
        )
        .await
    }

    /// Retrieve a specific message by id from a specific inbox.
    pub async fn fetch_inbox_message(
        &self,
        domain: &str,
        inbox: &str,
        message_id: &str,
    ) -> Result<Message> {
        self.send_request(
            Method::GET,
            &format!("/domains/{domain}/inboxes/{inbox}/messages/{message_id}"),
            &[],
            None::<&()>,
        )
        .await
    }

    /// Retrieve a specific message by id. Pass a `delete` modifier
    /// (e.g. `"10s"`) to delete the message after retrieval.
    pub async fn fetch_message(
        &self,
        domain: &str,
        message_id: &str,
        delete: Option<&str>,
    ) -> Result<Message> {
        let mut query = Vec::new();
        if let Some(delete) = delete {
            query.push(("delete", delete.to_string()));
        }

        self.send_request(
            Method::GET,
            &format!("/domains/{domain}/messages/{message_id}"),
            &query,
            None::<&()>,
        )
        .await
    }

    /// Retrieve SMS messages for a team SMS number. The number doubles
    /// as the inbox name.
    pub async fn fetch_sms_message(&self, domain: &str, sms_number: &str) -> Result<SmsMessage> {
        self.send_request(
            Method::GET,
            &format!("/domains/{domain}/inboxes/{sms_number}"),
            &[],
            None::<&()>,
        )
        .await
    }

    /// List the attachments of a message in a specific inbox.
    pub async fn fetch_inbox_message_attachments(
        &self,
        domain: &str,
        inbox: &str,
        message_id: &str,
    ) -> Result<Attachments> {
        self.send_request(
            Method::GET,
            &format!("/domains/{domain}/inboxes/{inbox}/messages/{message_id}/attachments"),
            &[],
            None::<&()>,
        )
        .await
    }

    /// List the attachments of a message.
    pub async fn fetch_message_attachments(
        &self,
        domain: &str,
        message_id: &str,
    ) -> Result<Attachments> {
        self.send_request(
            Method::GET,
            &format!("/domains/{domain}/messages/{message_id}/attachments"),
            &[],
            None::<&()>,
        )
        .await
    }

    /// Download a specific attachment from a message in a specific
    /// inbox. The server answers with the raw bytes; the filename and
    /// content type come from the response headers.
    pub async fn fetch_inbox_message_attachment(
        &self,
        domain: &str,
        inbox: &str,
        message_id: &str,
        attachment_id: i64,
    ) -> Result<AttachmentContent> {
        self.send_request(
            Method::GET,
            &format!(
                "/domains/{domain}/inboxes/{inbox}/messages/{message_id}/attachments/{attachment_id}"
            ),
            &[],
            None::<&()>,
        )
        .await
    }

    /// Download a specific attachment from a message.
    pub async fn fetch_message_attachment(
        &self,
        domain: &str,
        message_id: &str,
        attachment_id: i64,
    ) -> Result<AttachmentContent> {
        self.send_request(
            Method::GET,
            &format!("/domains/{domain}/messages/{message_id}/attachments/{attachment_id}"),
            &[],
            None::<&()>,
        )
        .await
    }

    /// Retrieve all links found within a message.
    pub async fn fetch_message_links(
        &self,
        domain: &str,
        message_id: &str,
    ) -> Result<MessageLinks> {
        self.send_request(
            Method::GET,
            &format!("/domains/{domain}/messages/{message_id}/links"),
            &[],
            None::<&()>,
        )
        .await
    }

    /// Retrieve all links found within a message, with anchor text.
    pub async fn fetch_message_links_full(
        &self,
        domain: &str,
        message_id: &str,
    ) -> Result<MessageLinksFull> {
        self.send_request(
            Method::GET,
            &format!("/domains/{domain}/messages/{message_id}/linksfull"),
            &[],
            None::<&()>,
        )
        .await
    }

    /// Retrieve all links found within a message in a specific inbox.
    pub async fn fetch_inbox_message_links(
        &self,
        domain: &str,
        inbox: &str,
        message_id: &str,
    ) -> Result<MessageLinks> {
        self.send_request(
            Method::GET,
            &format!("/domains/{domain}/inboxes/{inbox}/messages/{message_id}/links"),
            &[],
            None::<&()>,
        )
        .await
    }

    /// Delete ALL messages from a private domain. This action is
    /// irreversible.
    pub async fn delete_all_domain_messages(&self, domain: &str) -> Result<DeletedMessages> {
        self.send_request(
            Method::DELETE,
            &format!("/domains/{domain}/inboxes"),
            &[],
            None::<&()>,
        )
        .await
    }

    /// Delete ALL messages from a specific private inbox.
    pub async fn delete_all_inbox_messages(
        &self,
        domain: &str,
        inbox: &str,
    ) -> Result<DeletedMessages> {
        self.send_request(
            Method::DELETE,
            &format!("/domains/{domain}/inboxes/{inbox}"),
            &[],
            None::<&()>,
        )
        .await
    }

    /// Delete a specific message.
    pub async fn delete_message(
        &self,
        domain: &str,
        inbox: &str,
        message_id: &str,
    ) -> Result<DeletedMessages> {
        self.send_request(
            Method::DELETE,
            &format!("/domains/{domain}/inboxes/{inbox}/messages/{message_id}"),
            &[],
            None::<&()>,
        )
        .await
    }

    /// Deliver a JSON message into a private inbox.
    ///
    /// # Examples
    /// ```no_run
    /// # use mailinator_client::{Client, MessageToPost};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), mailinator_client::Error> {
    /// let client = Client::new("your-api-token")?;
    /// let message = MessageToPost {
    ///     subject: "hello".to_string(),
    ///     from: "noreply@example.com".to_string(),
    ///     text: "injected for testing".to_string(),
    /// };
    /// let posted = client.post_message("mydomain.com", "testinbox", &message).await?;
    /// println!("message id: {}", posted.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn post_message(
        &self,
        domain: &str,
        inbox: &str,
        message: &MessageToPost,
    ) -> Result<PostedMessage> {
        self.send_request(
            Method::POST,
            &format!("/domains/{domain}/inboxes/{inbox}/messages"),
            &[],
            Some(message),
        )
        .await
    }

    /// Retrieve the SMTP log recorded while a message was received.
    pub async fn fetch_message_smtp_log(
        &self,
        domain: &str,
        message_id: &str,
    ) -> Result<SmtpLogs> {
        self.send_request(
            Method::GET,
            &format!("/domains/{domain}/messages/{message_id}/smtplog"),
            &[],
            None::<&()>,
        )
        .await
    }

    /// Retrieve the SMTP log for a message in a specific inbox.
    pub async fn fetch_inbox_message_smtp_log(
        &self,
        domain: &str,
        inbox: &str,
        message_id: &str,
    ) -> Result<SmtpLogs> {
        self.send_request(
            Method::GET,
            &format!("/domains/{domain}/inboxes/{inbox}/messages/{message_id}/smtplog"),
            &[],
            None::<&()>,
        )
        .await
    }

    /// Retrieve the raw RFC 822 source of a message, verbatim.
    pub async fn fetch_message_raw(&self, domain: &str, message_id: &str) -> Result<String> {
        self.send_request_raw(
            Method::GET,
            &format!("/domains/{domain}/messages/{message_id}/raw"),
            &[],
            None::<&()>,
        )
        .await
    }

    /// Retrieve the raw RFC 822 source of a message in a specific inbox.
    pub async fn fetch_inbox_message_raw(
        &self,
        domain: &str,
        inbox: &str,
        message_id: &str,
    ) -> Result<String> {
        self.send_request_raw(
            Method::GET,
            &format!("/domains/{domain}/inboxes/{inbox}/messages/{message_id}/raw"),
            &[],
            None::<&()>,
        )
        .await
    }

    /// Fetch the latest 5 full messages across the domain.
    pub async fn fetch_latest_messages(&self, domain: &str) -> Result<Inbox> {
        self.send_request(
            Method::GET,
            &format!("/domains/{domain}/messages/*"),
            &[],
            None::<&()>,
        )
        .await
    }

    /// Fetch the latest 5 full messages for a specific inbox.
    pub async fn fetch_latest_inbox_messages(&self, domain: &str, inbox: &str) -> Result<Inbox> {
        self.send_request(
            Method::GET,
            &format!("/domains/{domain}/inboxes/{inbox}/messages/*"),
            &[],
            None::<&()>,
        )
        .await
    }
}
