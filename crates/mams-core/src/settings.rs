//! System settings, the edit/save/reset buffer, and the password policy.
//!
//! Settings are addressed by dotted paths over their serialized form
//! (`security.password_policy.min_length`). An edit is applied to a JSON copy
//! of the working settings and accepted only if the result still
//! deserializes, so a bad value never reaches the working copy.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::enums::Role;
use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Enumerated settings
// ---------------------------------------------------------------------------

/// How much detail the audit trail captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    Minimal,
    Standard,
    Detailed,
    Verbose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum BackupFrequency {
    Daily,
    Weekly,
    Monthly,
}

// ---------------------------------------------------------------------------
// SystemSettings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GeneralSettings {
    pub system_name: String,
    pub timezone: String,
    pub language: String,
    pub date_format: String,
    /// Minutes of inactivity before automatic logout.
    pub auto_logout: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub require_uppercase: bool,
    pub require_numbers: bool,
    pub require_special_chars: bool,
    pub expiry_days: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SecuritySettings {
    pub password_policy: PasswordPolicy,
    /// Minutes.
    pub session_timeout: u32,
    pub max_login_attempts: u32,
    pub two_factor_auth: bool,
    pub ip_whitelist: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
#[allow(clippy::struct_excessive_bools)]
pub struct NotificationSettings {
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub push_notifications: bool,
    pub critical_alerts: bool,
    pub maintenance_reminders: bool,
    pub transfer_notifications: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct AuditSettings {
    pub enable_audit_log: bool,
    /// Days.
    pub retention_period: u32,
    pub log_level: LogLevel,
    pub auto_archive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct BackupSettings {
    pub auto_backup: bool,
    pub backup_frequency: BackupFrequency,
    pub retention_count: u32,
    pub backup_location: String,
}

/// Administrator-editable system configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SystemSettings {
    pub general: GeneralSettings,
    pub security: SecuritySettings,
    pub notifications: NotificationSettings,
    pub audit: AuditSettings,
    pub backup: BackupSettings,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            general: GeneralSettings {
                system_name: "Military Asset Management System".into(),
                timezone: "UTC-05:00".into(),
                language: "English (US)".into(),
                date_format: "MM/DD/YYYY".into(),
                auto_logout: 30,
            },
            security: SecuritySettings {
                password_policy: PasswordPolicy {
                    min_length: 12,
                    require_uppercase: true,
                    require_numbers: true,
                    require_special_chars: true,
                    expiry_days: 90,
                },
                session_timeout: 60,
                max_login_attempts: 3,
                two_factor_auth: true,
                ip_whitelist: vec!["192.168.1.0/24".into(), "10.0.0.0/8".into()],
            },
            notifications: NotificationSettings {
                email_notifications: true,
                sms_notifications: false,
                push_notifications: true,
                critical_alerts: true,
                maintenance_reminders: true,
                transfer_notifications: true,
            },
            audit: AuditSettings {
                enable_audit_log: true,
                retention_period: 365,
                log_level: LogLevel::Detailed,
                auto_archive: true,
            },
            backup: BackupSettings {
                auto_backup: true,
                backup_frequency: BackupFrequency::Daily,
                retention_count: 30,
                backup_location: "/backup/military-assets".into(),
            },
        }
    }
}

/// Profile of the signed-in operator, shown on the settings page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UserProfile {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    pub last_login: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// SettingsEditor
// ---------------------------------------------------------------------------

/// Working copy of the settings plus the last saved snapshot.
#[derive(Debug, Clone, Default)]
pub struct SettingsEditor {
    saved: SystemSettings,
    working: SystemSettings,
}

impl SettingsEditor {
    #[must_use]
    pub fn new(settings: SystemSettings) -> Self {
        Self {
            saved: settings.clone(),
            working: settings,
        }
    }

    #[must_use]
    pub const fn current(&self) -> &SystemSettings {
        &self.working
    }

    #[must_use]
    pub const fn saved(&self) -> &SystemSettings {
        &self.saved
    }

    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.working != self.saved
    }

    /// Value at a dotted path in the working copy.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the path names no setting.
    pub fn lookup(&self, path: &str) -> Result<Value, CoreError> {
        let doc = serde_json::to_value(&self.working).map_err(anyhow::Error::from)?;
        path.split('.')
            .try_fold(&doc, |node, key| node.get(key))
            .cloned()
            .ok_or_else(|| unknown_path(path))
    }

    /// Set the value at a dotted path. `raw` is parsed as JSON, falling back
    /// to a plain string, so `15`, `false`, and `weekly` all work.
    ///
    /// # Errors
    ///
    /// `Validation` if the path names no setting or the value has the wrong
    /// shape. The working copy is unchanged on error.
    pub fn update(&mut self, path: &str, raw: &str) -> Result<(), CoreError> {
        let mut doc = serde_json::to_value(&self.working).map_err(anyhow::Error::from)?;
        let value =
            serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));

        let slot = path
            .split('.')
            .try_fold(&mut doc, |node, key| node.get_mut(key))
            .ok_or_else(|| unknown_path(path))?;
        *slot = value;

        self.working = serde_json::from_value(doc)
            .map_err(|e| CoreError::Validation(format!("invalid value for '{path}': {e}")))?;
        tracing::debug!(path, "setting updated");
        Ok(())
    }

    /// Promote the working copy to the saved snapshot.
    pub fn save(&mut self) -> &SystemSettings {
        self.saved = self.working.clone();
        tracing::info!("settings saved");
        &self.saved
    }

    /// Discard unsaved edits.
    pub fn reset(&mut self) {
        self.working = self.saved.clone();
    }
}

fn unknown_path(path: &str) -> CoreError {
    CoreError::Validation(format!("unknown setting '{path}'"))
}

// ---------------------------------------------------------------------------
// Password policy
// ---------------------------------------------------------------------------

/// A single way a password falls short of the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordViolation {
    TooShort { min_length: usize },
    MissingUppercase,
    MissingNumber,
    MissingSpecialChar,
}

impl fmt::Display for PasswordViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { min_length } => {
                write!(f, "must be at least {min_length} characters")
            }
            Self::MissingUppercase => f.write_str("must contain an uppercase letter"),
            Self::MissingNumber => f.write_str("must contain a number"),
            Self::MissingSpecialChar => f.write_str("must contain a special character"),
        }
    }
}

impl PasswordPolicy {
    /// Every rule `password` breaks, in policy order. Empty means compliant.
    #[must_use]
    pub fn check(&self, password: &str) -> Vec<PasswordViolation> {
        let mut violations = Vec::new();
        if password.chars().count() < self.min_length {
            violations.push(PasswordViolation::TooShort {
                min_length: self.min_length,
            });
        }
        if self.require_uppercase && !password.chars().any(char::is_uppercase) {
            violations.push(PasswordViolation::MissingUppercase);
        }
        if self.require_numbers && !password.chars().any(|c| c.is_ascii_digit()) {
            violations.push(PasswordViolation::MissingNumber);
        }
        if self.require_special_chars
            && !password
                .chars()
                .any(|c| !c.is_alphanumeric() && !c.is_whitespace())
        {
            violations.push(PasswordViolation::MissingSpecialChar);
        }
        violations
    }
}

/// Validate a password change request against `policy`.
///
/// The current password is required but not verified; there is no credential
/// backend to check it against.
///
/// # Errors
///
/// `Validation` when the current password is empty, the confirmation does not
/// match, or the new password breaks the policy.
pub fn change_password(
    policy: &PasswordPolicy,
    current: &str,
    new: &str,
    confirm: &str,
) -> Result<(), CoreError> {
    if current.is_empty() {
        return Err(CoreError::Validation(
            "current password is required".into(),
        ));
    }
    if new != confirm {
        return Err(CoreError::Validation(
            "new password and confirmation do not match".into(),
        ));
    }
    let violations = policy.check(new);
    if !violations.is_empty() {
        let reasons: Vec<String> = violations.iter().map(ToString::to_string).collect();
        return Err(CoreError::Validation(format!(
            "new password {}",
            reasons.join(", ")
        )));
    }
    tracing::info!("password changed");
    Ok(())
}
