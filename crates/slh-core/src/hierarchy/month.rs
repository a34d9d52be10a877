//! Month files and work-visit extraction from the timeline schema.

use std::cell::OnceCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::calendar::{is_weekend, parse_timestamp};
use crate::error::SlhError;
use crate::time_range::TimeRange;
use crate::work_visit::WorkVisit;

/// Semantic type the timeline schema uses for the workplace.
pub const TIMELINE_WORK_TYPE: &str = "TYPE_WORK";

#[derive(Debug, Deserialize)]
struct TimelineDocument {
    #[serde(rename = "timelineObjects")]
    timeline_objects: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimelineObject {
    place_visit: Option<PlaceVisit>,
}

#[derive(Debug, Deserialize)]
struct PlaceVisit {
    location: Option<Location>,
    duration: Option<VisitDuration>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Location {
    semantic_type: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VisitDuration {
    start_timestamp: Option<String>,
    end_timestamp: Option<String>,
}

/// Extracts weekday workplace visits from a timeline document.
///
/// Visits are returned in the order their dates first appear. Elements that
/// are not work place visits, lack a parseable duration, or start on a weekend
/// are skipped. The first visit seen for a date only seeds the entry: its own
/// interval is not recorded, later visits on the same date are.
pub fn extract_work_visits(json: &str) -> Result<Vec<WorkVisit>, serde_json::Error> {
    let document: TimelineDocument = serde_json::from_str(json)?;
    let Some(objects) = document.timeline_objects else {
        return Ok(Vec::new());
    };

    let mut visits: Vec<WorkVisit> = Vec::new();
    let mut by_date: HashMap<chrono::NaiveDate, usize> = HashMap::new();

    for (idx, value) in objects.into_iter().enumerate() {
        let object: TimelineObject = match serde_json::from_value(value) {
            Ok(object) => object,
            Err(err) => {
                tracing::trace!(idx, error = %err, "skipping malformed timeline object");
                continue;
            }
        };
        let Some(place_visit) = object.place_visit else {
            continue;
        };

        let is_work = place_visit
            .location
            .and_then(|l| l.semantic_type)
            .is_some_and(|t| t == TIMELINE_WORK_TYPE);
        if !is_work {
            continue;
        }

        let Some(duration) = place_visit.duration else {
            tracing::trace!(idx, "skipping work visit without duration");
            continue;
        };
        let start = duration.start_timestamp.as_deref().and_then(parse_timestamp);
        let end = duration.end_timestamp.as_deref().and_then(parse_timestamp);
        let (Some(start), Some(end)) = (start, end) else {
            tracing::trace!(idx, "skipping work visit with unparseable timestamps");
            continue;
        };

        if is_weekend(&start) {
            continue;
        }

        let date = start.date_naive();
        if let Some(&existing) = by_date.get(&date) {
            visits[existing].push(TimeRange::new(start, end));
        } else {
            by_date.insert(date, visits.len());
            visits.push(WorkVisit::new(date));
        }
    }

    Ok(visits)
}

/// One `<year>_<MonthName>` file of a year directory.
#[derive(Debug)]
pub struct MonthUnit {
    path: PathBuf,
    month: u32,
    work_visits: OnceCell<Vec<WorkVisit>>,
}

impl MonthUnit {
    pub(crate) fn new(path: PathBuf, month: u32) -> Self {
        Self {
            path,
            month,
            work_visits: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Work visits of this month, parsed from disk on first access.
    pub fn work_visits(&self) -> Result<&[WorkVisit], SlhError> {
        if let Some(visits) = self.work_visits.get() {
            return Ok(visits);
        }

        let data = fs::read_to_string(&self.path).map_err(|e| SlhError::io(&self.path, e))?;
        let visits = extract_work_visits(&data).map_err(|e| SlhError::json(&self.path, e))?;
        tracing::debug!(path = ?self.path, visits = visits.len(), "parsed month");

        Ok(self.work_visits.get_or_init(|| visits))
    }

    /// Number of distinct workdays in this month.
    pub fn workday_count(&self) -> Result<usize, SlhError> {
        Ok(self.work_visits()?.len())
    }
}
