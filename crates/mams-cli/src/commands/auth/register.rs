use mams_auth::Registration;
use mams_core::responses::RegisterResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RegisterArgs;
use crate::context::AppContext;
use crate::output::output;

const FAILURE_NOTICE: &str = "Registration Failed: Please check your details and try again.";

pub async fn handle(
    args: &RegisterArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match run(args, ctx).await {
        Ok(response) => output(&response, flags.format),
        Err(error) => {
            tracing::error!(error = %format!("{error:#}"), "registration failed");
            anyhow::bail!(FAILURE_NOTICE)
        }
    }
}

async fn run(args: &RegisterArgs, ctx: &mut AppContext) -> anyhow::Result<RegisterResponse> {
    let client = reqwest::Client::new();
    let registration = Registration {
        name: args.name.clone(),
        email: args.email.clone(),
        password: args.password.clone(),
    };

    mams_auth::register(
        &client,
        &ctx.config.api.users_url(),
        &registration,
        ctx.store.as_mut(),
    )
    .await?;

    Ok(RegisterResponse {
        registered: true,
        email: registration.email,
    })
}
