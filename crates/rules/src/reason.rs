//! Reason taxonomies and the finding carrier.
//!
//! Every rule a profile evaluates maps to exactly one token in either
//! [`ErrorType`] (blocks publication) or [`RecommendationType`] (advisory).
//! Each token owns a stable code, used as the localization key and wire
//! form, and a default English message. Callers localize off the code,
//! never the message text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Behavior shared by both taxonomies.
pub trait ReasonType: fmt::Debug + Copy {
    /// Stable `SCREAMING_SNAKE_CASE` token.
    fn code(&self) -> &'static str;
    /// Default English message.
    fn message(&self) -> &'static str;
    /// Whether a finding of this type must block acceptance.
    fn is_blocking(&self) -> bool;
}

/// Declares a taxonomy enum whose variants each carry a code and message.
macro_rules! taxonomy {
    (
        $(#[$meta:meta])*
        $name:ident, blocking = $blocking:literal, {
            $($variant:ident => $code:literal, $message:expr;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $code)] $variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
        }

        impl ReasonType for $name {
            fn code(&self) -> &'static str {
                match self {
                    $($name::$variant => $code,)+
                }
            }

            fn message(&self) -> &'static str {
                match self {
                    $($name::$variant => $message,)+
                }
            }

            fn is_blocking(&self) -> bool {
                $blocking
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.code())
            }
        }
    };
}

taxonomy! {
    /// Profile violations that must prevent publication.
    ErrorType, blocking = true, {
        UpdateOrCancelMustReference => "UPDATE_OR_CANCEL_MUST_REFERENCE",
            "All related messages that have not yet expired must be referenced when an \
             \"Update\" or \"Cancel\" is issued. This ensures that an \"Update\" or \
             \"Cancel\" applies to at least one non-expired alert.";
        CategoriesMustMatch => "CATEGORIES_MUST_MATCH",
            "All <info> blocks must contain the same <category>s";
        EventsInSameLanguageMustMatch => "EVENTS_IN_SAME_LANGUAGE_MUST_MATCH",
            "All <info> blocks with the same <language> must contain the same <event>";
        EventCodesMustMatch => "EVENT_CODES_MUST_MATCH",
            "All <info> blocks must contain the same <eventCode>s";
        InfoIsRequired => "INFO_IS_REQUIRED",
            "At least one <info> must be present";
        DescriptionIsRequired => "DESCRIPTION_IS_REQUIRED",
            "<description> must be present";
        WebIsRequired => "WEB_IS_REQUIRED",
            "<web> must be present";
        ExpiresIsRequired => "EXPIRES_IS_REQUIRED",
            "<expires> must be present";
        EffectiveNotAfterExpires => "EFFECTIVE_NOT_AFTER_EXPIRES",
            "<effective> should not come after <expires>";
        UrgencyIsRequired => "URGENCY_IS_REQUIRED",
            "<urgency> must be present";
        SeverityIsRequired => "SEVERITY_IS_REQUIRED",
            "<severity> must be present";
        CertaintyIsRequired => "CERTAINTY_IS_REQUIRED",
            "<certainty> must be present";
        AreaIsRequired => "AREA_IS_REQUIRED",
            "At least one <area> must be present";
        CirclePolygonOrGeocodeIsRequired => "CIRCLE_POLYGON_OR_GEOCODE_IS_REQUIRED",
            "Each <area> must have at least one <circle>, <polygon> or <geocode>.";
    }
}

taxonomy! {
    /// Advisory findings that do not block publication.
    RecommendationType, blocking = false, {
        SenderNameStronglyRecommended => "SENDER_NAME_STRONGLY_RECOMMENDED",
            "<senderName> is strongly recommended.";
        ResponseTypeStronglyRecommended => "RESPONSE_TYPE_STRONGLY_RECOMMENDED",
            "<responseType> is strongly recommended.";
        InstructionStronglyRecommended => "INSTRUCTION_STRONGLY_RECOMMENDED",
            "<instruction> is strongly recommended.";
        CirclePolygonEncouraged => "CIRCLE_POLYGON_ENCOURAGED",
            "<polygon> and <circle>, while optional, are encouraged as more accurate \
             representations of <geocode> values";
        SentIncludeTimezoneOffset => "SENT_INCLUDE_TIMEZONE_OFFSET",
            "Time zone should be included in <sent> whenever possible.";
        EffectiveIncludeTimezoneOffset => "EFFECTIVE_INCLUDE_TIMEZONE_OFFSET",
            "Time zone should be included in <effective> whenever possible.";
        OnsetIncludeTimezoneOffset => "ONSET_INCLUDE_TIMEZONE_OFFSET",
            "Time zone should be included in <onset> whenever possible.";
        ExpiresIncludeTimezoneOffset => "EXPIRES_INCLUDE_TIMEZONE_OFFSET",
            "Time zone should be included in <expires> whenever possible.";
        HeadlineTooLong => "HEADLINE_TOO_LONG",
            "Headline should be less than 140 characters";
        HeadlineAndDescriptionShouldDiffer => "HEADLINE_AND_DESCRIPTION_SHOULD_DIFFER",
            "Description should provide more detail than the headline and should not be \
             identical.";
        DescriptionAndInstructionShouldDiffer => "DESCRIPTION_AND_INSTRUCTION_SHOULD_DIFFER",
            "Description should describe the hazard while instruction should provide \
             human-readable instructions. They should not be identical.";
        UnknownUrgencyDiscouraged => "UNKNOWN_URGENCY_DISCOURAGED",
            "Unknown <urgency> is discouraged.";
        UnknownSeverityDiscouraged => "UNKNOWN_SEVERITY_DISCOURAGED",
            "Unknown <severity> is discouraged.";
        UnknownCertaintyDiscouraged => "UNKNOWN_CERTAINTY_DISCOURAGED",
            "Unknown <certainty> is discouraged.";
        ContactIsRecommended => "CONTACT_IS_RECOMMENDED",
            "<contact> is recommended to give users a way to provide feedback and respond \
             to the alert.";
        NonzeroCircleRadiusRecommended => "NONZERO_CIRCLE_RADIUS_RECOMMENDED",
            "A CAP <area> defines the area inside which people should be alerted, not the \
             area of the event causing the alert. This area should normally have nonzero \
             radius";
    }
}

/// Either taxonomy, so findings from both share one carrier.
///
/// Serializes as the bare token; the two taxonomies never share a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReasonKind {
    Error(ErrorType),
    Recommendation(RecommendationType),
}

impl ReasonKind {
    pub fn code(&self) -> &'static str {
        match self {
            ReasonKind::Error(t) => t.code(),
            ReasonKind::Recommendation(t) => t.code(),
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ReasonKind::Error(t) => t.message(),
            ReasonKind::Recommendation(t) => t.message(),
        }
    }

    pub fn is_blocking(&self) -> bool {
        match self {
            ReasonKind::Error(t) => t.is_blocking(),
            ReasonKind::Recommendation(t) => t.is_blocking(),
        }
    }
}

impl From<ErrorType> for ReasonKind {
    fn from(t: ErrorType) -> Self {
        ReasonKind::Error(t)
    }
}

impl From<RecommendationType> for ReasonKind {
    fn from(t: RecommendationType) -> Self {
        ReasonKind::Recommendation(t)
    }
}

/// One finding: where in the document, and which rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reason {
    /// XPath-like location with zero-based indices, e.g.
    /// `/alert/info[1]/area[0]/circle[2]`.
    pub path: String,
    pub kind: ReasonKind,
}

impl Reason {
    pub fn new(path: impl Into<String>, kind: impl Into<ReasonKind>) -> Self {
        Self {
            path: path.into(),
            kind: kind.into(),
        }
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn message(&self) -> &'static str {
        self.kind.message()
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [{}] {}", self.path, self.code(), self.message())
    }
}
