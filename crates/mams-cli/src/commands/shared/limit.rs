/// Compute effective limit with precedence: local arg -> global flag -> configured default.
#[must_use]
pub fn effective_limit(local: Option<u32>, global: Option<u32>, fallback: u32) -> u32 {
    local.or(global).unwrap_or(fallback)
}

/// Keep at most `limit` records, preserving order.
pub fn truncate_to<T>(records: &mut Vec<T>, limit: u32) {
    records.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
}

#[cfg(test)]
mod tests {
    use super::{effective_limit, truncate_to};

    #[test]
    fn local_takes_precedence() {
        assert_eq!(effective_limit(Some(5), Some(10), 20), 5);
    }

    #[test]
    fn global_used_when_local_missing() {
        assert_eq!(effective_limit(None, Some(10), 20), 10);
    }

    #[test]
    fn configured_default_used_when_none_set() {
        assert_eq!(effective_limit(None, None, 20), 20);
    }

    #[test]
    fn truncation_keeps_leading_records() {
        let mut ids = vec!["TRF-001", "TRF-002", "TRF-003"];
        truncate_to(&mut ids, 2);
        assert_eq!(ids, ["TRF-001", "TRF-002"]);
        truncate_to(&mut ids, 10);
        assert_eq!(ids.len(), 2);
    }
}
