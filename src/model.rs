//! # Document Vocabulary
//!
//! Collection names, persisted field names, and typed views of the two
//! document kinds. Storage itself is schemaless (`serde_json::Value`); the
//! typed structs exist for callers that want a checked shape, with serde
//! renames matching the persisted field spelling.

use serde::{Deserialize, Serialize};

/// Collection holding vehicle documents (with embedded accident summaries).
pub const VEHICLES: &str = "vehicles";

/// Collection holding flat, independently addressable accident documents.
pub const ACCIDENTS: &str = "accidents";

/// Natural-key field on a vehicle document.
pub const VIN_FIELD: &str = "VIN";

/// Key field on an accident document.
pub const AID_FIELD: &str = "AID";

/// Embedded accident list field on a vehicle document.
pub const ACCIDENTS_FIELD: &str = "accidents";

/// City/state pair used by both document kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "City")]
    pub city: String,

    #[serde(rename = "State")]
    pub state: String,
}

/// An accident record, stored flat in `accidents` and duplicated inline in
/// each referenced vehicle's embedded list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accident {
    #[serde(rename = "AID")]
    pub aid: u64,

    /// VINs of the vehicles involved. Not validated against the vehicle
    /// collection.
    #[serde(rename = "Carsinvolved")]
    pub vehicles_involved: Vec<String>,

    #[serde(rename = "Date")]
    pub date: String,

    #[serde(rename = "Location")]
    pub location: Location,

    #[serde(rename = "Description")]
    pub description: String,
}

/// A vehicle record, addressed by VIN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(rename = "VIN")]
    pub vin: String,

    #[serde(rename = "Modelname")]
    pub model_name: String,

    #[serde(rename = "Modelyear")]
    pub model_year: String,

    #[serde(rename = "Location")]
    pub location: Location,

    #[serde(rename = "previousownerscount")]
    pub previous_owners_count: u32,

    /// Embedded accident summaries. Absent in the wire format means empty.
    #[serde(rename = "accidents", default)]
    pub accidents: Vec<Accident>,
}
