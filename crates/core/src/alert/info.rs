//! `<info>`: one alert instance for a language and audience.

use serde::{Deserialize, Serialize};

use super::{Area, Category, Certainty, ResponseType, Severity, Urgency, ValuePair};

pub const DEFAULT_LANGUAGE: &str = "en-US";

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub category: Vec<Category>,
    #[serde(default)]
    pub event: String,
    #[serde(default)]
    pub response_type: Vec<ResponseType>,
    #[serde(default)]
    pub urgency: Option<Urgency>,
    #[serde(default)]
    pub severity: Option<Severity>,
    #[serde(default)]
    pub certainty: Option<Certainty>,
    #[serde(default)]
    pub event_code: Vec<ValuePair>,
    #[serde(default)]
    pub effective: Option<String>,
    #[serde(default)]
    pub onset: Option<String>,
    #[serde(default)]
    pub expires: Option<String>,
    #[serde(default)]
    pub sender_name: Option<String>,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub instruction: Option<String>,
    #[serde(default)]
    pub web: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub area: Vec<Area>,
}

impl Default for Info {
    fn default() -> Self {
        Self {
            language: default_language(),
            category: Vec::new(),
            event: String::new(),
            response_type: Vec::new(),
            urgency: None,
            severity: None,
            certainty: None,
            event_code: Vec::new(),
            effective: None,
            onset: None,
            expires: None,
            sender_name: None,
            headline: None,
            description: None,
            instruction: None,
            web: None,
            contact: None,
            area: Vec::new(),
        }
    }
}

/// True when `value` is absent, empty, or only whitespace.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

impl Info {
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    pub fn headline_or_empty(&self) -> &str {
        self.headline.as_deref().unwrap_or("")
    }

    /// Any area of this info carries a `<circle>` or `<polygon>`.
    pub fn has_circle_or_polygon(&self) -> bool {
        self.area.iter().any(Area::has_circle_or_polygon)
    }
}
