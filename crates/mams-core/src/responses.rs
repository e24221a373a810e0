//! CLI response types returned as JSON by `mams` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Session, Transfer};
use crate::enums::TransferStatus;
use crate::nav::Page;
use crate::stats::{DashboardSummary, StatusTile};

/// Response from `mams login` and `mams whoami`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SessionResponse {
    pub session: Session,
    pub greeting: String,
}

/// One entry of `mams menu`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MenuEntry {
    pub title: String,
    pub page: Page,
    pub path: String,
}

/// Response from `mams dashboard`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DashboardResponse {
    pub greeting: String,
    pub summary: DashboardSummary,
    pub transfer_tiles: Vec<StatusTile>,
}

/// Response from the transfer workflow commands.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TransferActionResponse {
    pub previous_status: TransferStatus,
    pub transfer: Transfer,
}

/// Response from `mams register`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RegisterResponse {
    pub registered: bool,
    pub email: String,
}
