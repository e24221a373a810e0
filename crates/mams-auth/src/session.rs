//! Session lifecycle: resolve, login, logout.
//!
//! `init_session` and `clear_session` are the only writers of the role and
//! name keys; every view reads the session through [`resolve_session`].

use mams_core::entities::{Session, SessionState};
use mams_core::enums::Role;

use crate::error::AuthError;
use crate::store::{KEY_USER_NAME, KEY_USER_ROLE, SessionStore};

/// Read the stored session.
///
/// No stored role, or a role that is not recognised, resolves to
/// `Unauthenticated`. A missing name falls back to `fallback_user_name`.
///
/// # Errors
///
/// `StoreError` if the store cannot be read.
pub fn resolve_session<S: SessionStore + ?Sized>(
    store: &S,
    fallback_user_name: &str,
) -> Result<SessionState, AuthError> {
    let Some(raw_role) = store.get(KEY_USER_ROLE)? else {
        return Ok(SessionState::Unauthenticated);
    };
    let Some(role) = Role::from_stored(&raw_role) else {
        tracing::warn!(role = %raw_role, "unknown stored role; treating session as unauthenticated");
        return Ok(SessionState::Unauthenticated);
    };
    let user_name = store
        .get(KEY_USER_NAME)?
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| fallback_user_name.to_string());
    Ok(SessionState::Authenticated(Session::new(role, user_name)))
}

/// Resolve the session or fail with `NotAuthenticated`.
///
/// # Errors
///
/// `NotAuthenticated` when no usable session is stored; `StoreError` if the
/// store cannot be read.
pub fn require_session<S: SessionStore + ?Sized>(
    store: &S,
    fallback_user_name: &str,
) -> Result<Session, AuthError> {
    resolve_session(store, fallback_user_name)?
        .into_session()
        .ok_or(AuthError::NotAuthenticated)
}

/// Derive a role from a username: contains "admin" → admin, else contains
/// "logistics" → logistics, otherwise commander. Case-insensitive.
#[must_use]
pub fn role_for_username(username: &str) -> Role {
    let lowered = username.to_lowercase();
    if lowered.contains("admin") {
        Role::Admin
    } else if lowered.contains("logistics") {
        Role::Logistics
    } else {
        Role::Commander
    }
}

/// Sign in. The password is required but not verified.
///
/// # Errors
///
/// `MissingField` for a blank username or password; `StoreError` if the
/// session cannot be written.
pub fn login<S: SessionStore + ?Sized>(
    store: &mut S,
    username: &str,
    password: &str,
) -> Result<Session, AuthError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(AuthError::MissingField("username"));
    }
    if password.is_empty() {
        return Err(AuthError::MissingField("password"));
    }
    let session = Session::new(role_for_username(username), username);
    init_session(store, &session)?;
    tracing::info!(user = %session.user_name, role = %session.role, "logged in");
    Ok(session)
}

/// Persist `session` as the current one.
///
/// # Errors
///
/// `StoreError` if the store cannot be written.
pub fn init_session<S: SessionStore + ?Sized>(
    store: &mut S,
    session: &Session,
) -> Result<(), AuthError> {
    store.set(KEY_USER_ROLE, session.role.as_str())?;
    store.set(KEY_USER_NAME, &session.user_name)
}

/// Remove the stored role and name. Any registration token is kept.
///
/// # Errors
///
/// `StoreError` if the store cannot be written.
pub fn clear_session<S: SessionStore + ?Sized>(store: &mut S) -> Result<(), AuthError> {
    store.remove(KEY_USER_ROLE)?;
    store.remove(KEY_USER_NAME)
}

/// Sign out.
///
/// # Errors
///
/// Same as [`clear_session`].
pub fn logout<S: SessionStore + ?Sized>(store: &mut S) -> Result<(), AuthError> {
    clear_session(store)?;
    tracing::info!("logged out");
    Ok(())
}
