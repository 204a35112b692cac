//! Authenticator (TOTP 2FA) wire types.

use serde::Deserialize;

/// A TOTP code computed from a caller-supplied secret key.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TotpCode {
    pub time_step: i64,
    #[serde(rename = "futurecodes")]
    pub future_codes: Vec<String>,
    #[serde(rename = "next_reset_secs")]
    pub next_reset_seconds: i64,
    pub passcode: String,
}

/// Current passcodes for every saved authenticator key.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Authenticators {
    pub passcodes: Vec<Authenticator>,
}

/// Current passcode for one saved authenticator key.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Authenticator {
    pub id: String,
    pub time_step: i64,
    #[serde(rename = "futurecodes")]
    pub future_codes: Vec<String>,
    #[serde(rename = "next_reset_secs")]
    pub next_reset_seconds: i64,
    pub passcode: String,
}
