//! Account registration against the backend API.

use serde::Serialize;

use crate::error::AuthError;
use crate::store::{KEY_TOKEN, SessionStore};

/// Fields posted to the users endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Registration {
    fn validate(&self) -> Result<(), AuthError> {
        if self.name.trim().is_empty() {
            return Err(AuthError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(AuthError::MissingField("email"));
        }
        if self.password.is_empty() {
            return Err(AuthError::MissingField("password"));
        }
        Ok(())
    }
}

/// `POST` the registration to `users_url` and store the returned token.
///
/// No retry. Nothing is written to the store unless the backend answers with
/// a 2xx JSON body carrying a string `token`.
///
/// # Errors
///
/// `MissingField` for a blank field (no request is sent),
/// `RegistrationFailed` for transport errors, non-2xx statuses, and bodies
/// without a token, `StoreError` if the token cannot be saved.
pub async fn register<S: SessionStore + ?Sized>(
    client: &reqwest::Client,
    users_url: &str,
    registration: &Registration,
    store: &mut S,
) -> Result<(), AuthError> {
    registration.validate()?;

    let body = client
        .post(users_url)
        .json(registration)
        .send()
        .await
        .map_err(|e| AuthError::RegistrationFailed(format!("send: {e}")))?
        .error_for_status()
        .map_err(|e| AuthError::RegistrationFailed(format!("status: {e}")))?
        .json::<serde_json::Value>()
        .await
        .map_err(|e| AuthError::RegistrationFailed(format!("parse response: {e}")))?;

    let token = body["token"]
        .as_str()
        .ok_or_else(|| AuthError::RegistrationFailed("response missing 'token'".into()))?;

    store.set(KEY_TOKEN, token)?;
    tracing::info!(email = %registration.email, "account registered");
    Ok(())
}
