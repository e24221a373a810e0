use mams_core::nav::Page;
use mams_core::seed;
use mams_core::settings::{self, SettingsEditor, SystemSettings};
use serde::Serialize;
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SettingsCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SettingValueResponse {
    path: String,
    value: Value,
}

#[derive(Debug, Serialize)]
struct SettingUpdateResponse {
    path: String,
    previous: Value,
    value: Value,
    changed: bool,
}

#[derive(Debug, Serialize)]
struct PasswordChangeResponse {
    changed: bool,
}

/// Handle `mams settings`.
pub async fn handle(
    action: &SettingsCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.session_for(Page::Settings)?;
    let mut editor = SettingsEditor::new(SystemSettings::default());

    match action {
        SettingsCommands::Show { path: None } => output(editor.current(), flags.format),
        SettingsCommands::Show { path: Some(path) } => output(
            &SettingValueResponse {
                path: path.clone(),
                value: editor.lookup(path)?,
            },
            flags.format,
        ),
        SettingsCommands::Set { path, value } => {
            output(&update(&mut editor, path, value)?, flags.format)
        }
        SettingsCommands::Profile => output(&seed::user_profile(), flags.format),
        SettingsCommands::Password {
            current,
            new,
            confirm,
        } => output(&password(&editor, current, new, confirm)?, flags.format),
    }
}

fn update(editor: &mut SettingsEditor, path: &str, raw: &str) -> anyhow::Result<SettingUpdateResponse> {
    let previous = editor.lookup(path)?;
    editor.update(path, raw)?;
    let changed = editor.has_changes();
    editor.save();
    Ok(SettingUpdateResponse {
        path: path.to_string(),
        previous,
        value: editor.lookup(path)?,
        changed,
    })
}

fn password(
    editor: &SettingsEditor,
    current: &str,
    new: &str,
    confirm: &str,
) -> anyhow::Result<PasswordChangeResponse> {
    settings::change_password(
        &editor.current().security.password_policy,
        current,
        new,
        confirm,
    )?;
    Ok(PasswordChangeResponse { changed: true })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn numeric_setting_update_reports_previous_value() {
        let mut editor = SettingsEditor::new(SystemSettings::default());
        let previous = editor.lookup("security.session_timeout").unwrap();

        let response = update(&mut editor, "security.session_timeout", "15").unwrap();

        assert_eq!(response.previous, previous);
        assert_eq!(response.value, json!(15));
        assert_eq!(response.changed, previous != json!(15));
        assert!(!editor.has_changes());
        assert_eq!(editor.saved().security.session_timeout, 15);
    }

    #[test]
    fn same_value_is_not_a_change() {
        let mut editor = SettingsEditor::new(SystemSettings::default());
        let current = editor.lookup("general.system_name").unwrap();
        let raw = current.as_str().unwrap().to_string();
        let response = update(&mut editor, "general.system_name", &raw).unwrap();
        assert!(!response.changed);
    }

    #[test]
    fn wrong_shape_is_rejected() {
        let mut editor = SettingsEditor::new(SystemSettings::default());
        let err = update(&mut editor, "backup.retention_count", "plenty").unwrap_err();
        assert!(err.to_string().contains("backup.retention_count"));
        assert_eq!(editor.current(), &SystemSettings::default());
    }

    #[test]
    fn unknown_path_is_rejected() {
        let mut editor = SettingsEditor::new(SystemSettings::default());
        assert!(update(&mut editor, "general.theme", "dark").is_err());
    }

    #[test]
    fn password_change_follows_the_configured_policy() {
        let editor = SettingsEditor::new(SystemSettings::default());
        let response = password(&editor, "old", "Correct-Horse-42", "Correct-Horse-42").unwrap();
        assert!(response.changed);

        let err = password(&editor, "old", "Correct-Horse-42", "Correct-Horse-43").unwrap_err();
        assert!(err.to_string().contains("do not match"));
    }
}
