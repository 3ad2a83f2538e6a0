//! The CAP alert document model.
//!
//! Mirrors the CAP 1.2 element tree: `Alert` → `Info`* → `Area`* →
//! {`Circle` | `Polygon` | `Geocode`}*. Instances are produced by an
//! upstream parser that has already applied the structural schema, so the
//! model only captures what profile checks read. Optional elements are
//! `Option`s so presence stays distinct from an empty value, and repeated
//! elements keep document order.

mod area;
mod info;
mod values;

pub use area::*;
pub use info::*;
pub use values::*;

use serde::{Deserialize, Serialize};

/// Top-level `<alert>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    #[serde(default)]
    pub identifier: String,
    #[serde(default)]
    pub sender: String,
    pub sent: String,
    pub msg_type: MsgType,
    /// Prior alerts as `sender,identifier,sent` triples.
    #[serde(default)]
    pub references: Vec<String>,
    #[serde(default)]
    pub info: Vec<Info>,
}

impl Alert {
    pub fn new(sent: impl Into<String>, msg_type: MsgType) -> Self {
        Self {
            identifier: String::new(),
            sender: String::new(),
            sent: sent.into(),
            msg_type,
            references: Vec::new(),
            info: Vec::new(),
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
