//! ID prefix constants and sequential ID formatting.
//!
//! Record identifiers are `{PREFIX}-{NNN}` with a zero-padded sequence number,
//! e.g. `TRF-004`.

pub const PREFIX_ASSET: &str = "AST";
pub const PREFIX_TRANSFER: &str = "TRF";
pub const PREFIX_AUDIT: &str = "AUD";
pub const PREFIX_REPORT: &str = "RPT";
pub const PREFIX_BASE: &str = "BASE";

/// Format an ID from its prefix and sequence number.
#[must_use]
pub fn format_id(prefix: &str, seq: u32) -> String {
    format!("{prefix}-{seq:03}")
}

/// Parse the sequence number out of an ID with the given prefix.
#[must_use]
pub fn parse_seq(prefix: &str, id: &str) -> Option<u32> {
    id.strip_prefix(prefix)?.strip_prefix('-')?.parse().ok()
}

/// Next free ID after the highest sequence number among `existing`.
pub fn next_id<'a>(prefix: &str, existing: impl IntoIterator<Item = &'a str>) -> String {
    let max = existing
        .into_iter()
        .filter_map(|id| parse_seq(prefix, id))
        .max()
        .unwrap_or(0);
    format_id(prefix, max + 1)
}
