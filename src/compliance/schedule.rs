use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::domain::{CheckInKind, Segment};
use super::EngineError;

/// Counting semantics applied when tallying completions for a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountingMode {
    /// Distinct (year, month) pairs count once, however often the check-in
    /// repeated within a month.
    OncePerCalendarMonth,
    /// Every matching event counts individually.
    Raw,
}

/// Declarative description of when one check-in kind falls due.
///
/// Exactly one rule kind applies per check-in kind; rules are never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleRule {
    /// Due once per listed zero-indexed calendar month, every year.
    MonthSet { months: BTreeSet<u32> },
    /// Monthly quota keyed by the entity's segment; entities without a
    /// segment carry no obligation for the kind.
    SegmentQuota { per_month: BTreeMap<Segment, u32> },
    /// Monthly quota resolved from the entity's display name through the
    /// cadence table, defaulting to one per month.
    ResolvedQuota,
    /// No obligation; `monthly_max` flags over-use when present.
    Informational { monthly_max: Option<u32> },
}

impl ScheduleRule {
    pub fn month_set(months: impl IntoIterator<Item = u32>) -> Self {
        Self::MonthSet {
            months: months.into_iter().filter(|month| *month < 12).collect(),
        }
    }

    pub fn segment_quota(per_month: impl IntoIterator<Item = (Segment, u32)>) -> Self {
        Self::SegmentQuota {
            per_month: per_month.into_iter().collect(),
        }
    }

    pub fn counting_mode(&self) -> CountingMode {
        match self {
            ScheduleRule::MonthSet { .. } => CountingMode::OncePerCalendarMonth,
            ScheduleRule::SegmentQuota { .. }
            | ScheduleRule::ResolvedQuota
            | ScheduleRule::Informational { .. } => CountingMode::Raw,
        }
    }
}

/// Immutable lookup from check-in kind to its schedule rule.
///
/// Injected into the engine so boards and tests substitute rule sets without
/// touching process-wide state; adding a kind is a registry change only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRegistry {
    rules: BTreeMap<CheckInKind, ScheduleRule>,
}

impl ScheduleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(mut self, kind: CheckInKind, rule: ScheduleRule) -> Self {
        self.rules.insert(kind, rule);
        self
    }

    /// Fails fast on unregistered kinds: passing one is a caller bug, not a
    /// data-quality issue.
    pub fn rule(&self, kind: CheckInKind) -> Result<&ScheduleRule, EngineError> {
        self.rules
            .get(&kind)
            .ok_or(EngineError::UnregisteredKind(kind))
    }

    pub fn contains(&self, kind: CheckInKind) -> bool {
        self.rules.contains_key(&kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CheckInKind, &ScheduleRule)> + '_ {
        self.rules.iter().map(|(kind, rule)| (*kind, rule))
    }

    /// Rule set backing the team ranking and per-employee boards.
    pub fn standard() -> Self {
        Self::new()
            .with_rule(
                CheckInKind::QuarterlyOneOnOne,
                ScheduleRule::month_set([2, 5, 8, 11]),
            )
            .with_rule(
                CheckInKind::SegmentTouchpoint,
                ScheduleRule::segment_quota([
                    (Segment::Retail, 4),
                    (Segment::Corporate, 2),
                    (Segment::Field, 2),
                ]),
            )
            .with_rule(CheckInKind::RiskReview, ScheduleRule::month_set(0..12))
            .with_rule(CheckInKind::DevelopmentAction, ScheduleRule::month_set([0, 6]))
            .with_rule(
                CheckInKind::Feedback,
                ScheduleRule::Informational {
                    monthly_max: Some(4),
                },
            )
    }

    /// Rule set backing the director-to-leader board, where sync cadence is
    /// configured per leader name.
    pub fn director() -> Self {
        Self::new()
            .with_rule(CheckInKind::LeaderSync, ScheduleRule::ResolvedQuota)
            .with_rule(
                CheckInKind::Feedback,
                ScheduleRule::Informational {
                    monthly_max: Some(4),
                },
            )
    }
}
