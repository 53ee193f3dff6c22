pub(crate) mod completion;
pub(crate) mod requirement;
mod status;

pub use status::{classify, CheckInStatus};

use serde::{Deserialize, Serialize};

use super::domain::{CheckInEvent, CheckInKind, ComplianceWindow, EntityId, ManagedEntity};
use super::frequency::FrequencyResolver;
use super::schedule::{ScheduleRegistry, ScheduleRule};
use super::EngineError;

/// Stateless engine applying an injected schedule registry and cadence table.
///
/// The team ranking, per-employee board, and director-to-leader board all go
/// through this one engine and differ only in the registry and population
/// they pass in.
#[derive(Debug, Clone, Default)]
pub struct AdherenceEngine {
    registry: ScheduleRegistry,
    resolver: FrequencyResolver,
}

impl AdherenceEngine {
    pub fn new(registry: ScheduleRegistry, resolver: FrequencyResolver) -> Self {
        Self { registry, resolver }
    }

    /// Engine over the standard employee-board rules with an empty cadence
    /// table.
    pub fn standard() -> Self {
        Self::new(ScheduleRegistry::standard(), FrequencyResolver::new())
    }

    pub fn registry(&self) -> &ScheduleRegistry {
        &self.registry
    }

    pub fn resolver(&self) -> &FrequencyResolver {
        &self.resolver
    }

    /// Required occurrences of one kind for this entity and window.
    pub fn required_for(
        &self,
        kind: CheckInKind,
        entity: &ManagedEntity,
        window: &ComplianceWindow,
    ) -> Result<Option<u32>, EngineError> {
        let rule = self.registry.rule(kind)?;
        Ok(requirement::required_count(
            rule,
            window,
            entity,
            &self.resolver,
        ))
    }

    /// Completed occurrences of one kind under its rule's counting mode.
    pub fn completed_for(
        &self,
        kind: CheckInKind,
        window: &ComplianceWindow,
        events: &[CheckInEvent],
    ) -> Result<u32, EngineError> {
        let rule = self.registry.rule(kind)?;
        Ok(completion::completed_count(
            kind,
            window,
            events,
            rule.counting_mode(),
        ))
    }

    /// Aggregate every registered kind for one entity into a single result.
    ///
    /// Quota completions are clamped to their requirement before joining the
    /// totals, so over-performing one kind never offsets another. An entity
    /// with zero obligations is fully adherent by convention.
    pub fn evaluate(
        &self,
        entity: &ManagedEntity,
        window: &ComplianceWindow,
        events: &[CheckInEvent],
    ) -> AdherenceResult {
        let mut total_required = 0u32;
        let mut total_completed = 0u32;
        let mut breakdown = Vec::new();

        for (kind, rule) in self.registry.iter() {
            let completed = completion::completed_count(kind, window, events, rule.counting_mode());
            match requirement::required_count(rule, window, entity, &self.resolver) {
                Some(required) => {
                    let contributed = completed.min(required);
                    total_required += required;
                    total_completed += contributed;
                    breakdown.push(KindBreakdown {
                        kind,
                        completed,
                        required: Some(required),
                        contributed,
                        status: classify(contributed, required),
                    });
                }
                None => {
                    breakdown.push(KindBreakdown {
                        kind,
                        completed,
                        required: None,
                        contributed: 0,
                        status: informational_status(rule, window, completed),
                    });
                }
            }
        }

        let adherence = if total_required > 0 {
            round2(f64::from(total_completed) / f64::from(total_required) * 100.0)
        } else {
            100.0
        };

        AdherenceResult {
            entity_id: entity.id.clone(),
            total_completed,
            total_required,
            adherence,
            status: classify(total_completed, total_required),
            breakdown,
        }
    }
}

fn informational_status(
    rule: &ScheduleRule,
    window: &ComplianceWindow,
    completed: u32,
) -> CheckInStatus {
    if let ScheduleRule::Informational {
        monthly_max: Some(max),
    } = rule
    {
        let allowance = max * window.months();
        if completed > allowance {
            return CheckInStatus::Exceeded {
                completed,
                allowance,
            };
        }
    }
    CheckInStatus::NotApplicable
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Per-kind slice of an evaluation, consumed by the status boards.
///
/// `completed` is the true count; `contributed` is what actually joined the
/// aggregate after clamping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindBreakdown {
    pub kind: CheckInKind,
    pub completed: u32,
    pub required: Option<u32>,
    pub contributed: u32,
    pub status: CheckInStatus,
}

/// Aggregated adherence for one entity over one window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdherenceResult {
    pub entity_id: EntityId,
    pub total_completed: u32,
    pub total_required: u32,
    pub adherence: f64,
    pub status: CheckInStatus,
    pub breakdown: Vec<KindBreakdown>,
}
