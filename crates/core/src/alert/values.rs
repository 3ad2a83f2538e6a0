//! Closed CAP vocabularies: message type, category, urgency, severity,
//! certainty and response type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Implements `as_str`, `Display` and `FromStr` using the literal CAP spelling
/// of each variant.
macro_rules! cap_vocabulary {
    ($ty:ident, $label:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($ty::$variant),)+
                    other => Err(CoreError::UnknownValue {
                        kind: $label,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

/// `<msgType>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MsgType {
    Alert,
    Update,
    Cancel,
    Ack,
    Error,
}

cap_vocabulary!(MsgType, "msgType", {
    Alert => "Alert",
    Update => "Update",
    Cancel => "Cancel",
    Ack => "Ack",
    Error => "Error",
});

impl MsgType {
    /// Update and Cancel messages act on earlier alerts.
    pub fn amends_prior_alerts(&self) -> bool {
        matches!(self, MsgType::Update | MsgType::Cancel)
    }
}

/// `<category>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Geo,
    Met,
    Safety,
    Security,
    Rescue,
    Fire,
    Health,
    Env,
    Transport,
    Infra,
    #[serde(rename = "CBRNE")]
    Cbrne,
    Other,
}

cap_vocabulary!(Category, "category", {
    Geo => "Geo",
    Met => "Met",
    Safety => "Safety",
    Security => "Security",
    Rescue => "Rescue",
    Fire => "Fire",
    Health => "Health",
    Env => "Env",
    Transport => "Transport",
    Infra => "Infra",
    Cbrne => "CBRNE",
    Other => "Other",
});

/// `<responseType>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResponseType {
    Shelter,
    Evacuate,
    Prepare,
    Execute,
    Avoid,
    Monitor,
    Assess,
    AllClear,
    #[serde(rename = "None")]
    NoAction,
}

cap_vocabulary!(ResponseType, "responseType", {
    Shelter => "Shelter",
    Evacuate => "Evacuate",
    Prepare => "Prepare",
    Execute => "Execute",
    Avoid => "Avoid",
    Monitor => "Monitor",
    Assess => "Assess",
    AllClear => "AllClear",
    NoAction => "None",
});

/// `<urgency>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Urgency {
    Immediate,
    Expected,
    Future,
    Past,
    Unknown,
}

cap_vocabulary!(Urgency, "urgency", {
    Immediate => "Immediate",
    Expected => "Expected",
    Future => "Future",
    Past => "Past",
    Unknown => "Unknown",
});

/// `<severity>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Extreme,
    Severe,
    Moderate,
    Minor,
    Unknown,
}

cap_vocabulary!(Severity, "severity", {
    Extreme => "Extreme",
    Severe => "Severe",
    Moderate => "Moderate",
    Minor => "Minor",
    Unknown => "Unknown",
});

/// `<certainty>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Certainty {
    Observed,
    Likely,
    Possible,
    Unlikely,
    Unknown,
}

cap_vocabulary!(Certainty, "certainty", {
    Observed => "Observed",
    Likely => "Likely",
    Possible => "Possible",
    Unlikely => "Unlikely",
    Unknown => "Unknown",
});

/// A `<valueName>`/`<value>` pair, used by `<eventCode>`, `<geocode>` and
/// `<parameter>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuePair {
    pub value_name: String,
    pub value: String,
}

impl ValuePair {
    pub fn new(value_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            value_name: value_name.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cap_spellings_round_trip_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), *category);
        }
        assert_eq!("CBRNE".parse::<Category>().unwrap(), Category::Cbrne);
        assert_eq!("None".parse::<ResponseType>().unwrap(), ResponseType::NoAction);
    }

    #[test]
    fn unknown_spelling_is_rejected() {
        let err = "Sideways".parse::<Urgency>().unwrap_err();
        assert_eq!(
            err,
            CoreError::UnknownValue {
                kind: "urgency",
                value: "Sideways".to_string()
            }
        );
    }

    #[test]
    fn serde_uses_cap_spellings() {
        assert_eq!(serde_json::to_string(&Category::Cbrne).unwrap(), "\"CBRNE\"");
        assert_eq!(serde_json::to_string(&ResponseType::NoAction).unwrap(), "\"None\"");
        let msg: MsgType = serde_json::from_str("\"Cancel\"").unwrap();
        assert!(msg.amends_prior_alerts());
        assert!(!MsgType::Alert.amends_prior_alerts());
    }
}
