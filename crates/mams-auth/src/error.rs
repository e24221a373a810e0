use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated: run `mams login`")]
    NotAuthenticated,

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("session store error: {0}")]
    StoreError(String),

    #[error("registration failed: {0}")]
    RegistrationFailed(String),
}
