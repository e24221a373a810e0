//! Entity structs for all M.A.M.S. domain records.
//!
//! Records are flat and immutable-by-replacement: no entity owns another, all
//! cross-references are string identifiers. All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema` for JSON output and schema validation.

mod asset;
mod audit;
mod base;
mod report;
mod session;
mod transfer;

pub use asset::Asset;
pub use audit::{AuditEntry, ValueChange};
pub use base::{Base, Coordinates};
pub use report::Report;
pub use session::{Session, SessionState};
pub use transfer::{Transfer, TransferState};
