use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Geographic position of an installation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A military installation holding assets.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Base {
    pub id: String,
    pub name: String,
    pub location: String,
    pub commander: String,
    pub asset_count: u32,
    pub coordinates: Coordinates,
}
