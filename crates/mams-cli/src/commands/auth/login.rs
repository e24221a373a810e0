use mams_core::responses::SessionResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LoginArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(args: &LoginArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&run(args, ctx)?, flags.format)
}

fn run(args: &LoginArgs, ctx: &mut AppContext) -> anyhow::Result<SessionResponse> {
    let session = mams_auth::login(ctx.store.as_mut(), &args.username, &args.password)?;
    Ok(SessionResponse {
        greeting: session.greeting(),
        session,
    })
}

#[cfg(test)]
mod tests {
    use mams_core::enums::Role;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::commands::shared::test_support::anonymous_ctx;

    fn args(username: &str, password: &str) -> LoginArgs {
        LoginArgs {
            username: username.into(),
            password: password.into(),
        }
    }

    #[test]
    fn login_persists_role_from_username() {
        let mut ctx = anonymous_ctx();
        let response = run(&args("logistics_chen", "pw"), &mut ctx).unwrap();
        assert_eq!(response.session.role, Role::Logistics);
        assert_eq!(
            response.greeting,
            "Welcome back, logistics_chen \u{2022} Logistics Access"
        );
        assert_eq!(ctx.session().unwrap(), response.session);
    }

    #[test]
    fn empty_password_is_refused() {
        let mut ctx = anonymous_ctx();
        let err = run(&args("admin", ""), &mut ctx).unwrap_err();
        assert!(err.to_string().contains("password"));
        assert!(ctx.session().is_err());
    }
}
