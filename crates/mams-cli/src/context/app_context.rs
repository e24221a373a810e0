use anyhow::Context;
use mams_auth::{AuthError, FileSessionStore, SessionStore};
use mams_config::MamsConfig;
use mams_core::entities::Session;
use mams_core::nav::{self, Page};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: MamsConfig,
    pub store: Box<dyn SessionStore>,
}

impl AppContext {
    /// Open the session store at the configured (or default) path.
    pub fn init(config: MamsConfig) -> anyhow::Result<Self> {
        let store = match config.session.resolved_store_path() {
            Some(path) => FileSessionStore::new(path),
            None => FileSessionStore::at_default_path().context("no session store path")?,
        };
        tracing::debug!(path = %store.path().display(), "session store");
        Ok(Self::with_store(config, Box::new(store)))
    }

    pub fn with_store(config: MamsConfig, store: Box<dyn SessionStore>) -> Self {
        Self { config, store }
    }

    /// The signed-in session, or the login redirect as an error.
    pub fn session(&self) -> Result<Session, AuthError> {
        mams_auth::require_session(self.store.as_ref(), &self.config.session.fallback_user_name)
    }

    /// The session, provided its role may open `page`.
    pub fn session_for(&self, page: Page) -> anyhow::Result<Session> {
        let session = self.session()?;
        if !nav::can_access(session.role, page) {
            anyhow::bail!(
                "the {} page is not available to the {} role",
                page,
                session.role
            );
        }
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use mams_auth::MemorySessionStore;
    use mams_core::enums::Role;
    use pretty_assertions::assert_eq;

    use super::*;

    fn ctx_with_login(username: &str) -> AppContext {
        let mut store = MemorySessionStore::new();
        mams_auth::login(&mut store, username, "pw").expect("login");
        AppContext::with_store(MamsConfig::default(), Box::new(store))
    }

    #[test]
    fn anonymous_context_redirects_to_login() {
        let ctx = AppContext::with_store(MamsConfig::default(), Box::new(MemorySessionStore::new()));
        let err = ctx.session_for(Page::Dashboard).unwrap_err();
        assert!(err.to_string().contains("mams login"));
    }

    #[test]
    fn logistics_cannot_open_reports() {
        let ctx = ctx_with_login("logistics.officer");
        assert_eq!(ctx.session().unwrap().role, Role::Logistics);
        assert!(ctx.session_for(Page::Transfers).is_ok());
        let err = ctx.session_for(Page::Reports).unwrap_err();
        assert!(err.to_string().contains("reports page"));
    }

    #[test]
    fn admin_opens_audit_and_settings() {
        let ctx = ctx_with_login("admin");
        assert!(ctx.session_for(Page::Audit).is_ok());
        assert!(ctx.session_for(Page::Settings).is_ok());
    }

    #[test]
    fn commander_is_kept_out_of_audit() {
        let ctx = ctx_with_login("gen.davis");
        assert!(ctx.session_for(Page::Reports).is_ok());
        assert!(ctx.session_for(Page::Audit).is_err());
    }
}
