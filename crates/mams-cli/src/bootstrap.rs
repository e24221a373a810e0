use std::path::Path;

use anyhow::Context;
use mams_config::MamsConfig;

/// Load `.env` from the working directory, then the layered configuration.
pub fn load_config() -> anyhow::Result<MamsConfig> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    load_dotenv_from(&cwd)?;
    MamsConfig::load().map_err(anyhow::Error::from)
}

fn load_dotenv_from(dir: &Path) -> anyhow::Result<()> {
    let env_path = dir.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
        return Ok(());
    }

    dotenvy::dotenv().ok();
    Ok(())
}
