//! Telegram login backed by the `grammers` MTProto client.
use grammers_client::{Client, Config, InitParams, SignInError};
use grammers_session::Session;
use tracing::{debug, info, warn};

use super::{dc, session_string, ApiCredentials, Authenticator, SessionToken};
use crate::{
    lib::{errors::AuthError, telemetry},
    wizard::prompt::{Prompt, Prompter},
};

/// Real Telegram login: phone number, login code, and the cloud password when two-step
/// verification is enabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct TelegramAuthenticator;

impl TelegramAuthenticator {
    pub fn new() -> Self {
        Self
    }
}

impl Authenticator for TelegramAuthenticator {
    async fn authenticate(
        &self,
        credentials: &ApiCredentials,
        prompter: &mut dyn Prompter,
    ) -> Result<SessionToken, AuthError> {
        let connection = TelegramConnection::open(credentials).await?;
        let outcome = connection.login(prompter).await;
        connection.close();
        outcome
    }
}

/// Owns the network connection for the duration of one login.
///
/// Dropping the guard closes the connection, so every early return releases it.
struct TelegramConnection {
    client: Option<Client>,
    api_id: i32,
}

impl TelegramConnection {
    async fn open(credentials: &ApiCredentials) -> Result<Self, AuthError> {
        telemetry::emit_auth_step(credentials.api_id, "connect");
        let client = Client::connect(Config {
            session: Session::new(),
            api_id: credentials.api_id,
            api_hash: credentials.api_hash.clone(),
            params: InitParams::default(),
        })
        .await
        .map_err(|err| AuthError::Connect {
            message: err.to_string(),
        })?;

        info!(
            target: "telegram_mcp_setup::auth",
            api_id = credentials.api_id,
            "Connected to Telegram"
        );
        Ok(Self {
            client: Some(client),
            api_id: credentials.api_id,
        })
    }

    fn client(&self) -> Result<&Client, AuthError> {
        self.client.as_ref().ok_or_else(|| AuthError::Connect {
            message: "connection already closed".into(),
        })
    }

    async fn login(&self, prompter: &mut dyn Prompter) -> Result<SessionToken, AuthError> {
        let client = self.client()?;

        let phone = prompter.ask(&Prompt::Phone)?;
        if phone.is_empty() {
            return Err(AuthError::RequestCode {
                message: "a phone number is required".into(),
            });
        }
        telemetry::emit_auth_step(self.api_id, "request_code");
        let login_token =
            client
                .request_login_code(&phone)
                .await
                .map_err(|err| AuthError::RequestCode {
                    message: err.to_string(),
                })?;

        let code = prompter.ask(&Prompt::Code)?;
        telemetry::emit_auth_step(self.api_id, "sign_in");
        match client.sign_in(&login_token, &code).await {
            Ok(_) => {}
            Err(SignInError::PasswordRequired(password_token)) => {
                let hint = password_token.hint().map(str::to_string);
                let password = prompter.ask(&Prompt::Password { hint })?;
                telemetry::emit_auth_step(self.api_id, "check_password");
                client
                    .check_password(password_token, password.as_bytes())
                    .await
                    .map_err(map_sign_in_error)?;
            }
            Err(err) => return Err(map_sign_in_error(err)),
        }

        info!(
            target: "telegram_mcp_setup::auth",
            api_id = self.api_id,
            "Signed in to Telegram"
        );
        export_session(client.session())
    }

    fn close(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(client) = self.client.take() {
            debug!(
                target: "telegram_mcp_setup::auth",
                api_id = self.api_id,
                "Closing Telegram connection"
            );
            drop(client);
        }
    }
}

impl Drop for TelegramConnection {
    fn drop(&mut self) {
        self.release();
    }
}

fn map_sign_in_error(err: SignInError) -> AuthError {
    match err {
        SignInError::InvalidCode => AuthError::InvalidCode,
        SignInError::InvalidPassword => AuthError::InvalidPassword,
        SignInError::SignUpRequired { .. } => AuthError::SignUpRequired,
        other => AuthError::SignIn {
            message: other.to_string(),
        },
    }
}

/// Export the home data center's auth key as a session string.
fn export_session(session: &Session) -> Result<SessionToken, AuthError> {
    let dc_id = session
        .get_user()
        .map(|user| user.dc)
        .ok_or_else(|| AuthError::SessionExport {
            message: "session has no signed-in user".into(),
        })?;
    let auth_key = session
        .dc_auth_key(dc_id)
        .ok_or_else(|| AuthError::SessionExport {
            message: format!("no auth key for data center {dc_id}"),
        })?;
    let addr = dc::production_address(dc_id).ok_or_else(|| {
        warn!(
            target: "telegram_mcp_setup::auth",
            dc_id,
            "Signed in on an unknown data center"
        );
        AuthError::SessionExport {
            message: format!("unknown data center {dc_id}"),
        }
    })?;

    session_string::encode(dc_id, addr, &auth_key).ok_or_else(|| AuthError::SessionExport {
        message: format!("data center {dc_id} does not fit a session string"),
    })
}
