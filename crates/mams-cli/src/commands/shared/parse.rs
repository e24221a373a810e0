use chrono::NaiveDate;
use mams_core::filter::Selector;
use serde::de::DeserializeOwned;

/// Parse a kebab-case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('_', "-");
    serde_json::from_value(serde_json::Value::String(normalized))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse an optional filter argument; absent means `all`.
pub fn parse_selector<T>(raw: Option<&str>, field: &str) -> anyhow::Result<Selector<T>>
where
    T: DeserializeOwned,
{
    raw.map_or(Ok(Selector::All), |raw| {
        raw.parse()
            .map_err(|error| anyhow::anyhow!("invalid {field} filter: {error}"))
    })
}

pub fn parse_date(raw: &str, field: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}' (expected YYYY-MM-DD): {error}"))
}
