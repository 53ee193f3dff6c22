use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tokio::task::JoinSet;

use super::domain::{CheckInEvent, ComplianceWindow, EntityId, ManagedEntity};
use super::evaluation::AdherenceEngine;
use super::EngineError;

/// Longest span a single series request may cover.
pub const MAX_SERIES_MONTHS: u32 = 12;

/// One (entity, calendar month) adherence sample.
///
/// `adherence` is `None` for months where the entity had no applicable
/// requirement and no completion, so charts can show gaps instead of a
/// misleading 100%.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub entity_id: EntityId,
    pub year: i32,
    pub month: u32,
    pub label: String,
    pub adherence: Option<f64>,
}

impl AdherenceEngine {
    /// Replay the aggregation month by month to build the historical trend.
    ///
    /// Up to [`MAX_SERIES_MONTHS`] consecutive calendar months starting at
    /// the anchor's month are evaluated. Every (entity, month) pair is
    /// independent, so each tracked entity fans out onto its own task and the
    /// results fan back in with a collect step. Entities whose months are all
    /// empty are pruned, and points come back ordered chronologically, then
    /// by entity id.
    pub async fn build_series(
        &self,
        population: &[(ManagedEntity, Vec<CheckInEvent>)],
        anchor: NaiveDate,
        window_count: u32,
    ) -> Result<Vec<TimeSeriesPoint>, EngineError> {
        let windows = series_windows(anchor, window_count)?;

        let mut tasks: JoinSet<Vec<TimeSeriesPoint>> = JoinSet::new();
        for (entity, events) in population.iter().filter(|(entity, _)| entity.tracked) {
            let engine = self.clone();
            let entity = entity.clone();
            let events = events.clone();
            let windows = windows.clone();
            tasks.spawn(async move { entity_series(&engine, &entity, &events, &windows) });
        }

        let mut points = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            let series = joined.map_err(|err| EngineError::SeriesTask(err.to_string()))?;
            points.extend(series);
        }

        points.sort_by(|a, b| (a.year, a.month, &a.entity_id).cmp(&(b.year, b.month, &b.entity_id)));
        Ok(points)
    }
}

fn series_windows(
    anchor: NaiveDate,
    window_count: u32,
) -> Result<Vec<(i32, u32, ComplianceWindow)>, EngineError> {
    let capped = window_count.min(MAX_SERIES_MONTHS);
    let mut windows = Vec::with_capacity(capped as usize);
    for offset in 0..capped {
        let index = anchor.month0() + offset;
        let year = anchor.year() + (index / 12) as i32;
        let month = index % 12 + 1;
        windows.push((year, month, ComplianceWindow::calendar_month(year, month)?));
    }
    Ok(windows)
}

fn entity_series(
    engine: &AdherenceEngine,
    entity: &ManagedEntity,
    events: &[CheckInEvent],
    windows: &[(i32, u32, ComplianceWindow)],
) -> Vec<TimeSeriesPoint> {
    let mut series: Vec<TimeSeriesPoint> = windows
        .iter()
        .map(|(year, month, window)| {
            let result = engine.evaluate(entity, window, events);
            let active = result.breakdown.iter().any(|row| match row.required {
                Some(required) => required > 0 || row.completed > 0,
                None => false,
            });
            TimeSeriesPoint {
                entity_id: entity.id.clone(),
                year: *year,
                month: *month,
                label: format!("{year}-{month:02}"),
                adherence: active.then_some(result.adherence),
            }
        })
        .collect();

    // An entity that never had an applicable obligation renders no series.
    if series.iter().all(|point| point.adherence.is_none()) {
        series.clear();
    }
    series
}
