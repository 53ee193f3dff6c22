use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::domain::{CheckInEvent, ComplianceWindow, EntityId, ManagedEntity};
use super::evaluation::{AdherenceEngine, AdherenceResult};

/// Score distance below which two totals are considered tied.
const SCORE_TOLERANCE: f64 = 0.01;

/// One ranked leaderboard row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBoardEntry {
    pub rank: usize,
    pub entity_id: EntityId,
    pub display_name: String,
    pub bonus_points: f64,
    pub total_score: f64,
    pub result: AdherenceResult,
}

/// Volume bonus: three points per ten completions, zero when the toggle is
/// off. Always a non-negative multiple of three.
pub fn bonus_points(total_completed: u32, bonus_enabled: bool) -> f64 {
    if bonus_enabled {
        f64::from((total_completed / 10) * 3)
    } else {
        0.0
    }
}

impl AdherenceEngine {
    /// Evaluate and rank a population over one window.
    ///
    /// Untracked entities are left off the board. Rows sort by total score
    /// descending; totals within [`SCORE_TOLERANCE`] fall back to adherence
    /// descending so the bonus alone cannot decide a tie, and full ties keep
    /// input order. Rank is the row's position after the sort.
    pub fn leaderboard(
        &self,
        population: &[(ManagedEntity, Vec<CheckInEvent>)],
        window: &ComplianceWindow,
        bonus_enabled: bool,
    ) -> Vec<ScoreBoardEntry> {
        let mut entries: Vec<ScoreBoardEntry> = population
            .iter()
            .filter(|(entity, _)| entity.tracked)
            .map(|(entity, events)| {
                let result = self.evaluate(entity, window, events);
                let bonus = bonus_points(result.total_completed, bonus_enabled);
                ScoreBoardEntry {
                    rank: 0,
                    entity_id: entity.id.clone(),
                    display_name: entity.display_name.clone(),
                    bonus_points: bonus,
                    total_score: result.adherence + bonus,
                    result,
                }
            })
            .collect();

        entries.sort_by(compare_entries);
        for (index, entry) in entries.iter_mut().enumerate() {
            entry.rank = index + 1;
        }
        entries
    }
}

fn compare_entries(a: &ScoreBoardEntry, b: &ScoreBoardEntry) -> Ordering {
    if (a.total_score - b.total_score).abs() >= SCORE_TOLERANCE {
        return b
            .total_score
            .partial_cmp(&a.total_score)
            .unwrap_or(Ordering::Equal);
    }
    b.result
        .adherence
        .partial_cmp(&a.result.adherence)
        .unwrap_or(Ordering::Equal)
}
