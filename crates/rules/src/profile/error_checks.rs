//! Blocking checks: references, info consistency, required fields, time
//! ordering and area shapes.

use std::collections::{BTreeSet, HashMap};

use capguard_core::{is_blank, Alert, CapTimestamp, Category, Info, ValuePair};

use super::{area_path, info_path};
use crate::error::Result;
use crate::reason::{ErrorType, Reason};

pub(super) fn check_errors(alert: &Alert) -> Result<Vec<Reason>> {
    let mut reasons = Vec::new();

    check_references(alert, &mut reasons);

    let Some(first) = alert.info.first() else {
        reasons.push(Reason::new("/alert", ErrorType::InfoIsRequired));
        return Ok(reasons);
    };

    let mut baseline = Baseline::new(first);
    for (i, info) in alert.info.iter().enumerate() {
        let xpath = info_path(i);
        baseline.check(info, &xpath, &mut reasons);

        if is_blank(info.description.as_deref()) {
            reasons.push(Reason::new(&xpath, ErrorType::DescriptionIsRequired));
        }

        check_effective_not_after_expires(alert, info, &xpath, &mut reasons)?;
        check_required_fields(info, &xpath, &mut reasons);
        check_area_shapes(info, &xpath, &mut reasons);
    }

    Ok(reasons)
}

// ── References ──────────────────────────────────────────────────────

fn check_references(alert: &Alert, reasons: &mut Vec<Reason>) {
    // An Update or Cancel must reference the active messages it amends.
    if alert.msg_type.amends_prior_alerts() && alert.references.is_empty() {
        reasons.push(Reason::new("/alert/msgType", ErrorType::UpdateOrCancelMustReference));
    }
}

// ── Cross-info consistency ──────────────────────────────────────────

/// Values every info is compared against: the first info's category and
/// event-code sets, and the first event seen per language.
struct Baseline<'a> {
    categories: BTreeSet<Category>,
    event_codes: BTreeSet<&'a ValuePair>,
    event_by_language: HashMap<&'a str, &'a str>,
}

impl<'a> Baseline<'a> {
    fn new(first: &'a Info) -> Self {
        Self {
            categories: first.category.iter().copied().collect(),
            event_codes: first.event_code.iter().collect(),
            event_by_language: HashMap::new(),
        }
    }

    fn check(&mut self, info: &'a Info, xpath: &str, reasons: &mut Vec<Reason>) {
        let categories: BTreeSet<Category> = info.category.iter().copied().collect();
        if categories != self.categories {
            reasons.push(Reason::new(
                format!("{xpath}/category"),
                ErrorType::CategoriesMustMatch,
            ));
        }

        let event_codes: BTreeSet<&ValuePair> = info.event_code.iter().collect();
        if event_codes != self.event_codes {
            reasons.push(Reason::new(
                format!("{xpath}/eventCode"),
                ErrorType::EventCodesMustMatch,
            ));
        }

        match self.event_by_language.get(info.language.as_str()) {
            Some(event) if *event != info.event => {
                reasons.push(Reason::new(
                    format!("{xpath}/event"),
                    ErrorType::EventsInSameLanguageMustMatch,
                ));
            }
            Some(_) => {}
            None => {
                self.event_by_language.insert(&info.language, &info.event);
            }
        }
    }
}

// ── Time ordering ───────────────────────────────────────────────────

/// `<effective>` (or `<sent>` when effective is absent) must not come after
/// `<expires>`. Equal instants are fine.
fn check_effective_not_after_expires(
    alert: &Alert,
    info: &Info,
    xpath: &str,
    reasons: &mut Vec<Reason>,
) -> Result<()> {
    let Some(expires) = info.expires.as_deref().filter(|v| !v.trim().is_empty()) else {
        return Ok(());
    };
    let effective = info
        .effective
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(&alert.sent);

    let effective = CapTimestamp::parse(effective)?;
    let expires = CapTimestamp::parse(expires)?;
    if effective.is_after(&expires) {
        reasons.push(Reason::new(
            format!("{xpath}/effective"),
            ErrorType::EffectiveNotAfterExpires,
        ));
    }
    Ok(())
}

// ── Required fields ─────────────────────────────────────────────────

fn check_required_fields(info: &Info, xpath: &str, reasons: &mut Vec<Reason>) {
    if is_blank(info.web.as_deref()) {
        reasons.push(Reason::new(xpath, ErrorType::WebIsRequired));
    }
    if is_blank(info.expires.as_deref()) {
        reasons.push(Reason::new(xpath, ErrorType::ExpiresIsRequired));
    }
    if info.area.is_empty() {
        reasons.push(Reason::new(xpath, ErrorType::AreaIsRequired));
    }
    if info.urgency.is_none() {
        reasons.push(Reason::new(xpath, ErrorType::UrgencyIsRequired));
    }
    if info.severity.is_none() {
        reasons.push(Reason::new(xpath, ErrorType::SeverityIsRequired));
    }
    if info.certainty.is_none() {
        reasons.push(Reason::new(xpath, ErrorType::CertaintyIsRequired));
    }
}

// ── Areas ───────────────────────────────────────────────────────────

fn check_area_shapes(info: &Info, xpath: &str, reasons: &mut Vec<Reason>) {
    for (j, area) in info.area.iter().enumerate() {
        if !area.has_any_shape() {
            reasons.push(Reason::new(
                area_path(xpath, j),
                ErrorType::CirclePolygonOrGeocodeIsRequired,
            ));
        }
    }
}
