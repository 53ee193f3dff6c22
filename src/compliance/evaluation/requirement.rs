use std::collections::BTreeSet;

use chrono::Datelike;

use super::super::domain::{ComplianceWindow, ManagedEntity};
use super::super::frequency::FrequencyResolver;
use super::super::schedule::ScheduleRule;

/// How many occurrences of a rule fall due inside the window.
///
/// `None` means the rule carries no obligation for this entity — an
/// informational kind, or a segment-gated quota for an entity without a
/// segment. Such kinds are excluded from aggregation, never penalized.
pub(crate) fn required_count(
    rule: &ScheduleRule,
    window: &ComplianceWindow,
    entity: &ManagedEntity,
    resolver: &FrequencyResolver,
) -> Option<u32> {
    match rule {
        ScheduleRule::MonthSet { months } => Some(due_months_in_window(months, window)),
        ScheduleRule::SegmentQuota { per_month } => {
            let quota = entity
                .segment
                .and_then(|segment| per_month.get(&segment).copied())?;
            Some(window.months() * quota)
        }
        ScheduleRule::ResolvedQuota => {
            let cadence = resolver.resolve(&entity.display_name);
            Some(window.months() * cadence.required_per_month)
        }
        ScheduleRule::Informational { .. } => None,
    }
}

/// Count the rule's fixed months falling inside the window, year by year.
///
/// Each calendar year touched by the window contributes the intersection of
/// the rule's zero-indexed months with that year's clamped month sub-range,
/// which keeps partial first/last years and multi-year spans correct.
fn due_months_in_window(months: &BTreeSet<u32>, window: &ComplianceWindow) -> u32 {
    let start = window.start();
    let end = window.end();
    let mut due = 0;
    for year in start.year()..=end.year() {
        let lo = if year == start.year() { start.month0() } else { 0 };
        let hi = if year == end.year() { end.month0() } else { 11 };
        due += months.iter().filter(|&&month| month >= lo && month <= hi).count() as u32;
    }
    due
}
