//! Transfer workflow configuration.

use mams_core::workflow::ApprovalPolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WorkflowConfig {
    /// Who may approve, reject, or advance transfers (`open` or `command-staff`).
    #[serde(default)]
    pub approval_policy: ApprovalPolicy,
}
