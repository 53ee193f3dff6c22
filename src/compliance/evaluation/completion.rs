use std::collections::BTreeSet;

use chrono::Datelike;

use super::super::domain::{CheckInEvent, CheckInKind, ComplianceWindow};
use super::super::schedule::CountingMode;

/// Tally in-window events of one kind under the rule's counting semantics.
///
/// An event matches on kind equality with a parsed timestamp inside the
/// inclusive window; unparsable stamps are skipped. The true count is
/// returned — quota clamping happens during aggregation so over-performing
/// one kind cannot offset another.
pub(crate) fn completed_count(
    kind: CheckInKind,
    window: &ComplianceWindow,
    events: &[CheckInEvent],
    mode: CountingMode,
) -> u32 {
    let matching = events
        .iter()
        .filter(|event| event.kind == kind)
        .filter_map(|event| event.occurred_on())
        .filter(|day| window.contains(*day));

    match mode {
        CountingMode::Raw => matching.count() as u32,
        CountingMode::OncePerCalendarMonth => matching
            .map(|day| (day.year(), day.month()))
            .collect::<BTreeSet<_>>()
            .len() as u32,
    }
}
