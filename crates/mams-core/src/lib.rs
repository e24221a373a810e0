//! # mams-core
//!
//! Domain model and in-memory views for the Military Asset Management System.
//!
//! This crate provides the types and pure operations every surface shares:
//! - Entity structs and closed status enums with badge tones and lifecycles
//! - Role-scoped navigation (`nav`)
//! - The record filter engine (`filter`)
//! - Per-view working copies: `Inventory`, `TransferBoard`, `AuditLog`,
//!   `ReportShelf`, and `SettingsEditor`
//! - Dashboard aggregates (`stats`)
//! - The seeded snapshot every view starts from (`seed`)
//! - CLI response types and the cross-cutting `CoreError`

pub mod audit_log;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod filter;
pub mod ids;
pub mod inventory;
pub mod nav;
pub mod reports;
pub mod responses;
pub mod seed;
pub mod settings;
pub mod stats;
pub mod workflow;
