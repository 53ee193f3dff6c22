//! Check-in cadence compliance engine.
//!
//! Computes how many structured check-ins each tracked person owed and
//! completed over an arbitrary date window, turns the pair into an adherence
//! percentage, ranks a population with an optional volume bonus, and replays
//! the same computation month by month for trend charts. Persistence,
//! delivery, and presentation belong to the callers; the engine consumes
//! plain records and returns plain, serializable results.

pub mod compliance;
pub mod config;
pub mod telemetry;

pub use compliance::{
    AdherenceEngine, AdherenceResult, CheckInEvent, CheckInKind, CheckInStatus, ComplianceWindow,
    EngineError, EntityId, FrequencyResolver, KindBreakdown, ManagedEntity, MeetingFrequency,
    ScheduleRegistry, ScheduleRule, ScoreBoardEntry, Segment, TimeSeriesPoint,
};
