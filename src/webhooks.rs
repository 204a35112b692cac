//! Webhook ingestion operations.
//!
//! Webhooks into a private system never use the regular API token:
//! these URLs are typically handed to third-party services (Twilio,
//! Zapier, IFTTT, ...), so authentication uses a dedicated webhook
//! token passed as the `whtoken` query parameter. A client built with
//! an empty API token works fine here.

use reqwest::Method;

use crate::models::{ResponseStatusWithId, Webhook};
use crate::{Client, Result};

impl Client {
    /// Push a webhook message into your private domain. The message
    /// lands in the inbox named by the payload's `to` field.
    pub async fn private_webhook(
        &self,
        webhook_token: &str,
        webhook: &Webhook,
    ) -> Result<ResponseStatusWithId> {
        self.send_request(
            Method::POST,
            "/domains/private/webhook",
            &[("whtoken", webhook_token.to_string())],
            Some(webhook),
        )
        .await
    }

    /// Push a webhook message directly into a specific private inbox,
    /// regardless of the payload's `to` field.
    pub async fn private_inbox_webhook(
        &self,
        webhook_token: &str,
        inbox: &str,
        webhook: &Webhook,
    ) -> Result<ResponseStatusWithId> {
        self.send_request(
            Method::POST,
            &format!("/domains/private/webhook/{inbox}"),
            &[("whtoken", webhook_token.to_string())],
            Some(webhook),
        )
        .await
    }

    /// Push a webhook from a known third-party service (e.g. `twilio`),
    /// letting the server map the service's payload fields. The
    /// destination inbox is derived from the payload (for Twilio, the
    /// receiving phone number).
    pub async fn private_custom_service_webhook(
        &self,
        webhook_token: &str,
        custom_service: &str,
        webhook: &Webhook,
    ) -> Result<()> {
        self.send_request_raw(
            Method::POST,
            &format!("/domains/private/{custom_service}"),
            &[("whtoken", webhook_token.to_string())],
            Some(webhook),
        )
        .await?;

        Ok(())
    }

    /// Push a webhook from a known third-party service into a specific
    /// inbox instead of the service-derived one.
    pub async fn private_custom_service_inbox_webhook(
        &self,
        webhook_token: &str,
        custom_service: &str,
        inbox: &str,
        webhook: &Webhook,
    ) -> Result<()> {
        self.send_request_raw(
            Method::POST,
            &format!("/domains/private/{custom_service}/{inbox}"),
            &[("whtoken", webhook_token.to_string())],
            Some(webhook),
        )
        .await?;

        Ok(())
    }
}
