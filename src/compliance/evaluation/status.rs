use serde::{Deserialize, Serialize};

/// Structured check-in status for one kind over one window.
///
/// Variants carry their counts natively; display strings are derived at the
/// presentation boundary via [`CheckInStatus::label`] and never parsed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckInStatus {
    NotApplicable,
    Completed,
    Partial { completed: u32, required: u32 },
    Pending { required: u32 },
    /// Reserved for informational kinds whose usage surpassed the window
    /// allowance; display-only, never part of the aggregate.
    Exceeded { completed: u32, allowance: u32 },
}

impl CheckInStatus {
    pub fn label(&self) -> String {
        match self {
            CheckInStatus::NotApplicable => "n/a".to_string(),
            CheckInStatus::Completed => "completed".to_string(),
            CheckInStatus::Partial {
                completed,
                required,
            } => format!("in progress {completed}/{required}"),
            CheckInStatus::Pending { required } => format!("pending 0/{required}"),
            CheckInStatus::Exceeded {
                completed,
                allowance,
            } => format!("over limit {completed}/{allowance}"),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, CheckInStatus::Pending { .. })
    }
}

/// Classify a (completed, required) pair.
///
/// `Pending` is `Partial(0, required)` for display purposes but kept distinct
/// so boards can filter on it.
pub fn classify(completed: u32, required: u32) -> CheckInStatus {
    if required == 0 {
        CheckInStatus::NotApplicable
    } else if completed >= required {
        CheckInStatus::Completed
    } else if completed > 0 {
        CheckInStatus::Partial {
            completed,
            required,
        }
    } else {
        CheckInStatus::Pending { required }
    }
}
