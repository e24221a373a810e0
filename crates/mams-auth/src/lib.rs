//! # mams-auth
//!
//! Session handling for the M.A.M.S. CLI.
//!
//! Provides the string key/value [`SessionStore`] (a private JSON file or an
//! in-memory map), the role resolver every protected command goes through,
//! placeholder username-based login, and account registration over HTTP.

pub mod error;
pub mod register;
pub mod session;
pub mod store;

pub use error::AuthError;
pub use register::{Registration, register};
pub use session::{
    clear_session, init_session, login, logout, require_session, resolve_session,
    role_for_username,
};
pub use store::{FileSessionStore, MemorySessionStore, SessionStore};
