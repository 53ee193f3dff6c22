use super::common::*;
use crate::compliance::domain::{CheckInKind, ComplianceWindow, Segment};
use crate::compliance::EngineError;

#[test]
fn quarterly_rule_counts_due_months_inside_one_year() {
    let engine = engine();
    let entity = employee("a", None);

    let full_year = window((2025, 1, 1), (2025, 12, 31));
    let required = engine
        .required_for(CheckInKind::QuarterlyOneOnOne, &entity, &full_year)
        .expect("registered kind");
    assert_eq!(required, Some(4));

    let april_to_september = window((2025, 4, 1), (2025, 9, 30));
    let required = engine
        .required_for(CheckInKind::QuarterlyOneOnOne, &entity, &april_to_september)
        .expect("registered kind");
    assert_eq!(required, Some(2));
}

#[test]
fn any_twelve_month_span_requires_twelve_monthly_and_four_quarterly() {
    let engine = engine();
    let entity = employee("a", None);
    let span = window((2025, 7, 1), (2026, 6, 30));

    let monthly = engine
        .required_for(CheckInKind::RiskReview, &entity, &span)
        .expect("registered kind");
    assert_eq!(monthly, Some(12));

    let quarterly = engine
        .required_for(CheckInKind::QuarterlyOneOnOne, &entity, &span)
        .expect("registered kind");
    assert_eq!(quarterly, Some(4));
}

#[test]
fn monthly_rule_spanning_year_boundary_counts_four_months() {
    let engine = engine();
    let entity = employee("a", None);
    let span = window((2025, 11, 1), (2026, 2, 28));

    let required = engine
        .required_for(CheckInKind::RiskReview, &entity, &span)
        .expect("registered kind");
    assert_eq!(required, Some(4));
}

#[test]
fn multi_year_window_sums_each_year() {
    let engine = engine();
    let entity = employee("a", None);
    let span = window((2024, 1, 1), (2026, 12, 31));

    let quarterly = engine
        .required_for(CheckInKind::QuarterlyOneOnOne, &entity, &span)
        .expect("registered kind");
    assert_eq!(quarterly, Some(12));

    let semestral = engine
        .required_for(CheckInKind::DevelopmentAction, &entity, &span)
        .expect("registered kind");
    assert_eq!(semestral, Some(6));
}

#[test]
fn semestral_rule_skips_windows_missing_its_months() {
    let engine = engine();
    let entity = employee("a", None);

    let feb_to_jun = window((2025, 2, 1), (2025, 6, 30));
    let required = engine
        .required_for(CheckInKind::DevelopmentAction, &entity, &feb_to_jun)
        .expect("registered kind");
    assert_eq!(required, Some(0));

    let jan_to_jul = window((2025, 1, 1), (2025, 7, 31));
    let required = engine
        .required_for(CheckInKind::DevelopmentAction, &entity, &jan_to_jul)
        .expect("registered kind");
    assert_eq!(required, Some(2));
}

#[test]
fn segment_quota_multiplies_inclusive_month_count() {
    let engine = engine();
    let retail = employee("r", Some(Segment::Retail));

    let one_month = full_month(2025, 4);
    let required = engine
        .required_for(CheckInKind::SegmentTouchpoint, &retail, &one_month)
        .expect("registered kind");
    assert_eq!(required, Some(4));

    // Jan 15 – Feb 10 is one inclusive month, not two calendar months.
    let partial = window((2025, 1, 15), (2025, 2, 10));
    let required = engine
        .required_for(CheckInKind::SegmentTouchpoint, &retail, &partial)
        .expect("registered kind");
    assert_eq!(required, Some(4));
}

#[test]
fn segment_gated_quota_without_segment_is_not_applicable() {
    let engine = engine();
    let entity = employee("no-segment", None);
    let one_month = full_month(2025, 4);

    let required = engine
        .required_for(CheckInKind::SegmentTouchpoint, &entity, &one_month)
        .expect("registered kind");
    assert_eq!(required, None);
}

#[test]
fn feedback_carries_no_requirement() {
    let engine = engine();
    let entity = employee("a", Some(Segment::Field));
    let one_month = full_month(2025, 4);

    let required = engine
        .required_for(CheckInKind::Feedback, &entity, &one_month)
        .expect("registered kind");
    assert_eq!(required, None);
}

#[test]
fn leader_sync_quota_follows_resolved_cadence() {
    let engine = director_engine();
    let quarter = window((2025, 1, 1), (2025, 3, 31));

    let weekly = engine
        .required_for(CheckInKind::LeaderSync, &leader("Ana Souza"), &quarter)
        .expect("registered kind");
    assert_eq!(weekly, Some(12));

    let unknown = engine
        .required_for(CheckInKind::LeaderSync, &leader("Zeca Prado"), &quarter)
        .expect("registered kind");
    assert_eq!(unknown, Some(3));
}

#[test]
fn unregistered_kind_fails_fast() {
    let engine = engine();
    let entity = employee("a", None);
    let one_month = full_month(2025, 4);

    let error = engine
        .required_for(CheckInKind::LeaderSync, &entity, &one_month)
        .expect_err("leader sync is not on the employee board");
    assert_eq!(error, EngineError::UnregisteredKind(CheckInKind::LeaderSync));
}

#[test]
fn inverted_window_is_rejected() {
    let error = ComplianceWindow::new(date(2025, 5, 2), date(2025, 5, 1))
        .expect_err("start after end");
    assert!(matches!(error, EngineError::InvalidWindow { .. }));
}
