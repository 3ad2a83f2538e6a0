//! Advisory checks: zone offsets, optional-but-expected fields, text
//! quality, unknown enum values and area precision.

use capguard_core::{is_blank, Alert, Certainty, Info, Severity, Urgency};

use super::timezone::zero_timezone_finding;
use super::{area_path, info_path};
use crate::error::Result;
use crate::reason::{Reason, RecommendationType};

/// Headlines longer than this many characters are flagged.
pub(crate) const HEADLINE_MAX_CHARS: usize = 140;

pub(super) fn check_recommendations(alert: &Alert) -> Result<Vec<Reason>> {
    let mut reasons = Vec::new();

    reasons.extend(zero_timezone_finding(
        Some(alert.sent.as_str()),
        "/alert/sent",
        RecommendationType::SentIncludeTimezoneOffset,
    )?);

    for (i, info) in alert.info.iter().enumerate() {
        let xpath = info_path(i);
        check_timezones(info, &xpath, &mut reasons)?;
        check_expected_fields(info, &xpath, &mut reasons);
        check_text(info, &xpath, &mut reasons);
        check_unknown_values(info, &xpath, &mut reasons);

        if is_blank(info.contact.as_deref()) {
            reasons.push(Reason::new(&xpath, RecommendationType::ContactIsRecommended));
        }

        check_area_precision(info, &xpath, &mut reasons);
    }

    Ok(reasons)
}

fn check_timezones(info: &Info, xpath: &str, reasons: &mut Vec<Reason>) -> Result<()> {
    let fields = [
        (&info.effective, "effective", RecommendationType::EffectiveIncludeTimezoneOffset),
        (&info.onset, "onset", RecommendationType::OnsetIncludeTimezoneOffset),
        (&info.expires, "expires", RecommendationType::ExpiresIncludeTimezoneOffset),
    ];
    for (value, field, kind) in fields {
        reasons.extend(zero_timezone_finding(
            value.as_deref(),
            &format!("{xpath}/{field}"),
            kind,
        )?);
    }
    Ok(())
}

fn check_expected_fields(info: &Info, xpath: &str, reasons: &mut Vec<Reason>) {
    if is_blank(info.sender_name.as_deref()) {
        reasons.push(Reason::new(xpath, RecommendationType::SenderNameStronglyRecommended));
    }
    // <responseType> goes hand in hand with a matching <instruction>.
    if info.response_type.is_empty() {
        reasons.push(Reason::new(xpath, RecommendationType::ResponseTypeStronglyRecommended));
    }
    if is_blank(info.instruction.as_deref()) {
        reasons.push(Reason::new(xpath, RecommendationType::InstructionStronglyRecommended));
    }
}

fn check_text(info: &Info, xpath: &str, reasons: &mut Vec<Reason>) {
    let too_long = info
        .headline
        .as_deref()
        .is_some_and(|h| h.chars().count() > HEADLINE_MAX_CHARS);
    if too_long {
        reasons.push(Reason::new(
            format!("{xpath}/headline"),
            RecommendationType::HeadlineTooLong,
        ));
    }

    // Absent elements compare as empty text.
    let description = info.description_or_empty();
    if description == info.headline_or_empty() {
        reasons.push(Reason::new(
            format!("{xpath}/headline"),
            RecommendationType::HeadlineAndDescriptionShouldDiffer,
        ));
    }

    if let Some(instruction) = info.instruction.as_deref() {
        if !instruction.trim().is_empty() && instruction == description {
            reasons.push(Reason::new(
                format!("{xpath}/description"),
                RecommendationType::DescriptionAndInstructionShouldDiffer,
            ));
        }
    }
}

fn check_unknown_values(info: &Info, xpath: &str, reasons: &mut Vec<Reason>) {
    if info.urgency == Some(Urgency::Unknown) {
        reasons.push(Reason::new(
            format!("{xpath}/urgency"),
            RecommendationType::UnknownUrgencyDiscouraged,
        ));
    }
    if info.severity == Some(Severity::Unknown) {
        reasons.push(Reason::new(
            format!("{xpath}/severity"),
            RecommendationType::UnknownSeverityDiscouraged,
        ));
    }
    if info.certainty == Some(Certainty::Unknown) {
        reasons.push(Reason::new(
            format!("{xpath}/certainty"),
            RecommendationType::UnknownCertaintyDiscouraged,
        ));
    }
}

/// Circles and polygons are preferred over bare geocodes, and a circle
/// should cover an area rather than a point.
fn check_area_precision(info: &Info, xpath: &str, reasons: &mut Vec<Reason>) {
    for (j, area) in info.area.iter().enumerate() {
        for (k, circle) in area.circle.iter().enumerate() {
            if circle.radius == 0.0 {
                reasons.push(Reason::new(
                    format!("{}/circle[{k}]", area_path(xpath, j)),
                    RecommendationType::NonzeroCircleRadiusRecommended,
                ));
            }
        }
    }

    if !info.area.is_empty() && !info.has_circle_or_polygon() {
        reasons.push(Reason::new(
            area_path(xpath, 0),
            RecommendationType::CirclePolygonEncouraged,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::fixtures::{valid_alert, valid_info};
    use capguard_core::{Area, Circle, Point, ValuePair};

    fn codes(reasons: &[Reason]) -> Vec<(&str, &str)> {
        reasons.iter().map(|r| (r.path.as_str(), r.code())).collect()
    }

    #[test]
    fn valid_alert_has_no_recommendations() {
        let reasons = check_recommendations(&valid_alert()).unwrap();
        assert!(reasons.is_empty(), "recommendations: {reasons:?}");
    }

    #[test]
    fn zero_offsets_flagged_per_field() {
        let mut alert = valid_alert();
        alert.sent = "2011-09-22T15:00:00-00:00".to_string();
        alert.info[0].onset = Some("2011-09-22T15:05:00Z".to_string());
        alert.info[0].expires = Some("2011-09-22T16:00:00+00:00".to_string());
        let reasons = check_recommendations(&alert).unwrap();
        assert_eq!(
            codes(&reasons),
            vec![
                ("/alert/sent", "SENT_INCLUDE_TIMEZONE_OFFSET"),
                ("/alert/info[0]/onset", "ONSET_INCLUDE_TIMEZONE_OFFSET"),
                ("/alert/info[0]/expires", "EXPIRES_INCLUDE_TIMEZONE_OFFSET"),
            ]
        );
    }

    #[test]
    fn zero_offset_on_effective() {
        let mut alert = valid_alert();
        alert.info[0].effective = Some("2011-09-22T15:00:00Z".to_string());
        let reasons = check_recommendations(&alert).unwrap();
        assert_eq!(
            codes(&reasons),
            vec![("/alert/info[0]/effective", "EFFECTIVE_INCLUDE_TIMEZONE_OFFSET")]
        );
    }

    #[test]
    fn absent_optional_timestamps_not_flagged() {
        let mut alert = valid_alert();
        alert.info[0].effective = None;
        alert.info[0].onset = None;
        assert!(check_recommendations(&alert).unwrap().is_empty());
    }

    #[test]
    fn expected_fields_missing() {
        let mut alert = valid_alert();
        let info = &mut alert.info[0];
        info.sender_name = Some(" ".to_string());
        info.response_type.clear();
        info.instruction = None;
        info.contact = None;
        let reasons = check_recommendations(&alert).unwrap();
        assert_eq!(
            codes(&reasons),
            vec![
                ("/alert/info[0]", "SENDER_NAME_STRONGLY_RECOMMENDED"),
                ("/alert/info[0]", "RESPONSE_TYPE_STRONGLY_RECOMMENDED"),
                ("/alert/info[0]", "INSTRUCTION_STRONGLY_RECOMMENDED"),
                ("/alert/info[0]", "CONTACT_IS_RECOMMENDED"),
            ]
        );
    }

    #[test]
    fn headline_length_boundary() {
        let mut alert = valid_alert();
        alert.info[0].headline = Some("h".repeat(HEADLINE_MAX_CHARS));
        assert!(check_recommendations(&alert).unwrap().is_empty());

        alert.info[0].headline = Some("h".repeat(HEADLINE_MAX_CHARS + 1));
        let reasons = check_recommendations(&alert).unwrap();
        assert_eq!(codes(&reasons), vec![("/alert/info[0]/headline", "HEADLINE_TOO_LONG")]);
    }

    #[test]
    fn headline_length_counts_characters_not_bytes() {
        let mut alert = valid_alert();
        alert.info[0].headline = Some("é".repeat(HEADLINE_MAX_CHARS));
        assert!(check_recommendations(&alert).unwrap().is_empty());
    }

    #[test]
    fn headline_equal_to_description() {
        let mut alert = valid_alert();
        alert.info[0].headline = alert.info[0].description.clone();
        let reasons = check_recommendations(&alert).unwrap();
        assert_eq!(
            codes(&reasons),
            vec![("/alert/info[0]/headline", "HEADLINE_AND_DESCRIPTION_SHOULD_DIFFER")]
        );
    }

    #[test]
    fn instruction_equal_to_description() {
        let mut alert = valid_alert();
        alert.info[0].instruction = alert.info[0].description.clone();
        let reasons = check_recommendations(&alert).unwrap();
        assert_eq!(
            codes(&reasons),
            vec![("/alert/info[0]/description", "DESCRIPTION_AND_INSTRUCTION_SHOULD_DIFFER")]
        );
    }

    #[test]
    fn unknown_values_flagged_individually() {
        let mut alert = valid_alert();
        alert.info[0].urgency = Some(Urgency::Unknown);
        alert.info[0].severity = Some(Severity::Unknown);
        alert.info[0].certainty = Some(Certainty::Unknown);
        let reasons = check_recommendations(&alert).unwrap();
        assert_eq!(
            codes(&reasons),
            vec![
                ("/alert/info[0]/urgency", "UNKNOWN_URGENCY_DISCOURAGED"),
                ("/alert/info[0]/severity", "UNKNOWN_SEVERITY_DISCOURAGED"),
                ("/alert/info[0]/certainty", "UNKNOWN_CERTAINTY_DISCOURAGED"),
            ]
        );
    }

    #[test]
    fn zero_radius_circle() {
        let mut alert = valid_alert();
        alert.info[0].area[0].circle.push(Circle::new(Point::new(1.0, 1.0), 0.0));
        let reasons = check_recommendations(&alert).unwrap();
        assert_eq!(
            codes(&reasons),
            vec![("/alert/info[0]/area[0]/circle[1]", "NONZERO_CIRCLE_RADIUS_RECOMMENDED")]
        );
    }

    #[test]
    fn geocode_only_info_encourages_shapes() {
        let mut alert = valid_alert();
        alert.info[0].area = vec![Area {
            area_desc: "Sacramento County".to_string(),
            geocode: vec![ValuePair::new("SAME", "006067")],
            ..Area::default()
        }];
        let reasons = check_recommendations(&alert).unwrap();
        assert_eq!(codes(&reasons), vec![("/alert/info[0]/area[0]", "CIRCLE_POLYGON_ENCOURAGED")]);
    }

    #[test]
    fn shapes_in_any_area_satisfy_the_info() {
        let mut alert = valid_alert();
        let geocode_only = Area {
            geocode: vec![ValuePair::new("SAME", "006067")],
            ..Area::default()
        };
        let with_circle = Area {
            circle: vec![Circle::new(Point::new(38.0, -121.0), 10.0)],
            ..Area::default()
        };
        alert.info[0].area = vec![geocode_only, with_circle];
        assert!(check_recommendations(&alert).unwrap().is_empty());
    }

    #[test]
    fn info_without_areas_gets_no_shape_recommendation() {
        let mut alert = valid_alert();
        alert.info[0].area.clear();
        assert!(check_recommendations(&alert).unwrap().is_empty());
    }

    #[test]
    fn findings_follow_info_order() {
        let mut alert = valid_alert();
        let mut second = valid_info();
        second.contact = None;
        alert.info.push(second);
        alert.info[0].urgency = Some(Urgency::Unknown);
        let reasons = check_recommendations(&alert).unwrap();
        assert_eq!(
            codes(&reasons),
            vec![
                ("/alert/info[0]/urgency", "UNKNOWN_URGENCY_DISCOURAGED"),
                ("/alert/info[1]", "CONTACT_IS_RECOMMENDED"),
            ]
        );
    }
}
