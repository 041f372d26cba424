//! Telegram login capability and the values that flow through it.
use std::fmt;

use crate::{lib::errors::AuthError, wizard::prompt::Prompter};

pub mod client;
pub mod dc;
pub mod session_string;

pub use client::TelegramAuthenticator;

/// API credential pair issued by my.telegram.org.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiCredentials {
    pub api_id: i32,
    pub api_hash: String,
}

impl fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_id", &self.api_id)
            .field("api_hash", &"<redacted>")
            .finish()
    }
}

/// Serialized, already-authenticated login. Only ever printed, never stored.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionToken(<{} chars>)", self.0.len())
    }
}

/// Opens a session, drives the interactive login, and exports the session string.
///
/// The connection must be released before `authenticate` returns, whatever the outcome.
#[allow(async_fn_in_trait)]
pub trait Authenticator {
    async fn authenticate(
        &self,
        credentials: &ApiCredentials,
        prompter: &mut dyn Prompter,
    ) -> Result<SessionToken, AuthError>;
}
