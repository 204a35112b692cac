//! Authenticator (TOTP 2FA) operations.

use reqwest::Method;

use crate::models::{Authenticator, Authenticators, TotpCode};
use crate::{Client, Result};

impl Client {
    /// Compute an instant TOTP 2FA code from a secret key.
    pub async fn instant_totp_code(&self, totp_secret_key: &str) -> Result<TotpCode> {
        self.send_request(
            Method::GET,
            &format!("/totp/{totp_secret_key}"),
            &[],
            None::<&()>,
        )
        .await
    }

    /// Fetch the current passcodes for all saved authenticator keys.
    pub async fn get_authenticators(&self) -> Result<Authenticators> {
        self.send_request(Method::GET, "/authenticators", &[], None::<&()>)
            .await
    }

    /// Fetch the current TOTP code for one of your saved keys.
    pub async fn get_authenticators_by_id(&self, id: &str) -> Result<Authenticator> {
        self.send_request(
            Method::GET,
            &format!("/authenticators/{id}"),
            &[],
            None::<&()>,
        )
        .await
    }

    /// Singular-path alias of [`Client::get_authenticators`], kept for
    /// parity with the service's duplicated endpoint.
    pub async fn get_authenticator(&self) -> Result<Authenticators> {
        self.send_request(Method::GET, "/authenticator", &[], None::<&()>)
            .await
    }

    /// Singular-path alias of [`Client::get_authenticators_by_id`].
    pub async fn get_authenticator_by_id(&self, id: &str) -> Result<Authenticator> {
        self.send_request(
            Method::GET,
            &format!("/authenticator/{id}"),
            &[],
            None::<&()>,
        )
        .await
    }
}
