use mams_auth::MemorySessionStore;
use mams_config::MamsConfig;

use crate::context::AppContext;

/// Context over an empty in-memory store.
pub fn anonymous_ctx() -> AppContext {
    AppContext::with_store(MamsConfig::default(), Box::new(MemorySessionStore::new()))
}

/// Context signed in as `username` under the default configuration.
pub fn ctx_as(username: &str) -> AppContext {
    ctx_as_with(username, MamsConfig::default())
}

pub fn ctx_as_with(username: &str, config: MamsConfig) -> AppContext {
    let mut store = MemorySessionStore::new();
    mams_auth::login(&mut store, username, "pw").expect("login should succeed");
    AppContext::with_store(config, Box::new(store))
}
