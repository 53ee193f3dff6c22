//! Check-in cadence compliance scoring.
//!
//! A schedule registry declares when each check-in kind falls due, the
//! frequency resolver maps leader names to configured sync cadences, and the
//! adherence engine combines required versus completed counts per entity into
//! percentages, ranked leaderboards, and month-by-month historical series.

pub mod domain;
mod evaluation;
pub mod frequency;
pub mod history;
pub mod ranking;
pub mod schedule;

#[cfg(test)]
mod tests;

use chrono::NaiveDate;

pub use domain::{CheckInEvent, CheckInKind, ComplianceWindow, EntityId, ManagedEntity, Segment};
pub use evaluation::{classify, AdherenceEngine, AdherenceResult, CheckInStatus, KindBreakdown};
pub use frequency::{FrequencyResolver, MatchRule, MeetingFrequency, ResolvedCadence};
pub use history::{TimeSeriesPoint, MAX_SERIES_MONTHS};
pub use ranking::{bonus_points, ScoreBoardEntry};
pub use schedule::{CountingMode, ScheduleRegistry, ScheduleRule};

/// Conditions that indicate a caller or configuration bug.
///
/// Data-quality issues (unparsable timestamps, missing segments, cadence
/// lookup misses) are absorbed defensively instead; only programmer errors
/// fail loudly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("compliance window start {start} is after end {end}")]
    InvalidWindow { start: NaiveDate, end: NaiveDate },
    #[error("{year}-{month:02} is not a calendar month")]
    InvalidMonth { year: i32, month: u32 },
    #[error("no schedule rule registered for check-in kind '{}'", .0.label())]
    UnregisteredKind(CheckInKind),
    #[error("history series task failed: {0}")]
    SeriesTask(String),
}
