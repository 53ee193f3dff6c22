use chrono::NaiveDate;

use crate::compliance::domain::{
    CheckInEvent, CheckInKind, ComplianceWindow, EntityId, ManagedEntity, Segment,
};
use crate::compliance::evaluation::AdherenceEngine;
use crate::compliance::frequency::{FrequencyResolver, MeetingFrequency};
use crate::compliance::schedule::ScheduleRegistry;

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn window(start: (i32, u32, u32), end: (i32, u32, u32)) -> ComplianceWindow {
    ComplianceWindow::new(date(start.0, start.1, start.2), date(end.0, end.1, end.2))
        .expect("valid window")
}

pub(super) fn full_month(year: i32, month: u32) -> ComplianceWindow {
    ComplianceWindow::calendar_month(year, month).expect("valid month")
}

pub(super) fn employee(suffix: &str, segment: Option<Segment>) -> ManagedEntity {
    ManagedEntity {
        id: EntityId(format!("emp-{suffix}")),
        display_name: format!("Employee {suffix}"),
        segment,
        supervisor: Some(EntityId("lead-1".to_string())),
        tracked: true,
    }
}

pub(super) fn leader(name: &str) -> ManagedEntity {
    ManagedEntity {
        id: EntityId(format!("lead-{}", name.to_lowercase().replace(' ', "-"))),
        display_name: name.to_string(),
        segment: None,
        supervisor: None,
        tracked: true,
    }
}

pub(super) fn event(kind: CheckInKind, stamp: &str) -> CheckInEvent {
    CheckInEvent::new(kind, stamp)
}

pub(super) fn resolver() -> FrequencyResolver {
    FrequencyResolver::new()
        .with_entry("Ana Souza", MeetingFrequency::Weekly)
        .with_entry("João Pereira", MeetingFrequency::Biweekly)
        .with_entry("Carla Mendes Dias", MeetingFrequency::Monthly)
}

pub(super) fn engine() -> AdherenceEngine {
    AdherenceEngine::new(ScheduleRegistry::standard(), resolver())
}

pub(super) fn director_engine() -> AdherenceEngine {
    AdherenceEngine::new(ScheduleRegistry::director(), resolver())
}
