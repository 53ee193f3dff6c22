use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::EngineError;

/// Identifier wrapper for tracked people.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub String);

/// Business segments gating the touchpoint quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Segment {
    Retail,
    Corporate,
    Field,
}

impl Segment {
    pub const fn label(self) -> &'static str {
        match self {
            Segment::Retail => "retail",
            Segment::Corporate => "corporate",
            Segment::Field => "field",
        }
    }
}

/// A person whose check-in cadence is tracked — an employee on the team
/// boards, a leader on the director board.
///
/// Created and updated elsewhere; the engine only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedEntity {
    pub id: EntityId,
    pub display_name: String,
    pub segment: Option<Segment>,
    pub supervisor: Option<EntityId>,
    pub tracked: bool,
}

/// Categories of recorded interactions, each governed by exactly one
/// schedule rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CheckInKind {
    QuarterlyOneOnOne,
    SegmentTouchpoint,
    RiskReview,
    DevelopmentAction,
    Feedback,
    LeaderSync,
}

impl CheckInKind {
    pub const fn label(self) -> &'static str {
        match self {
            CheckInKind::QuarterlyOneOnOne => "quarterly-1:1",
            CheckInKind::SegmentTouchpoint => "segment-touchpoint",
            CheckInKind::RiskReview => "monthly-risk",
            CheckInKind::DevelopmentAction => "development-action",
            CheckInKind::Feedback => "feedback",
            CheckInKind::LeaderSync => "leader-sync",
        }
    }
}

/// One recorded interaction, as fetched by the caller.
///
/// `occurred_at` stays raw: upstream sources mix RFC 3339 stamps with bare
/// dates and the occasional garbage value, so parsing is deferred and
/// unparsable stamps are skipped by the counters instead of erroring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckInEvent {
    pub kind: CheckInKind,
    pub occurred_at: String,
    pub score: Option<f32>,
}

impl CheckInEvent {
    pub fn new(kind: CheckInKind, occurred_at: impl Into<String>) -> Self {
        Self {
            kind,
            occurred_at: occurred_at.into(),
            score: None,
        }
    }

    /// Calendar day of the event, when the raw stamp parses.
    pub fn occurred_on(&self) -> Option<NaiveDate> {
        let raw = self.occurred_at.trim();
        if raw.is_empty() {
            return None;
        }
        if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
            return Some(stamp.date_naive());
        }
        if let Ok(stamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
            return Some(stamp.date());
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }
}

/// Inclusive date range over which requirement and completion are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl ComplianceWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, EngineError> {
        if start > end {
            return Err(EngineError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Window covering exactly one calendar month, `month` being 1-based.
    pub fn calendar_month(year: i32, month: u32) -> Result<Self, EngineError> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(EngineError::InvalidMonth { year, month })?;
        let end = start
            .checked_add_months(Months::new(1))
            .and_then(|next| next.checked_sub_days(Days::new(1)))
            .ok_or(EngineError::InvalidMonth { year, month })?;
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        day >= self.start && day <= self.end
    }

    /// Inclusive month count, day-sensitive: Jan 15 – Feb 10 is one month,
    /// Nov 1 – Feb 28 is four. Quota rules multiply this by their per-month
    /// quota rather than enumerating calendar months.
    pub fn months(&self) -> u32 {
        let mut span = (self.end.year() - self.start.year()) * 12 + self.end.month() as i32
            - self.start.month() as i32;
        if self.end.day() < self.start.day() {
            span -= 1;
        }
        (span.max(0) + 1) as u32
    }
}
