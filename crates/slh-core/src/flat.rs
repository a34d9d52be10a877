//! Single-file exports built from semantic segments.
//!
//! Unlike the directory-tree schema, this path keeps only the set of dates
//! with a workplace segment and applies no weekend filter.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use chrono::Datelike;
use serde::Deserialize;

use crate::calendar::parse_timestamp;
use crate::error::SlhError;
use crate::summary::WorkdaySummary;

/// Semantic type the segment schema uses for the workplace.
pub const SEGMENT_WORK_TYPE: &str = "WORK";

#[derive(Debug, Deserialize)]
struct SegmentsDocument {
    #[serde(rename = "semanticSegments")]
    semantic_segments: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SemanticSegment {
    start_time: Option<String>,
    visit: Option<SegmentVisit>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SegmentVisit {
    top_candidate: Option<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    semantic_type: Option<String>,
}

/// Counts the distinct workdays of `year` in a segments document.
///
/// `month` restricts the count to one month. Returns `None` when the document
/// has no `semanticSegments` array. A segment's end is not consulted: only the
/// date of its `startTime` is kept.
pub fn extract_workdays(
    json: &str,
    year: i32,
    month: Option<u32>,
) -> Result<Option<WorkdaySummary>, serde_json::Error> {
    let document: SegmentsDocument = serde_json::from_str(json)?;
    let Some(segments) = document.semantic_segments else {
        return Ok(None);
    };

    let mut dates = BTreeSet::new();
    for (idx, value) in segments.into_iter().enumerate() {
        let segment: SemanticSegment = match serde_json::from_value(value) {
            Ok(segment) => segment,
            Err(err) => {
                tracing::trace!(idx, error = %err, "skipping malformed segment");
                continue;
            }
        };
        let Some(start) = segment.start_time.as_deref().and_then(parse_timestamp) else {
            continue;
        };
        if start.year() != year || month.is_some_and(|m| start.month() != m) {
            continue;
        }

        let is_work = segment
            .visit
            .and_then(|v| v.top_candidate)
            .and_then(|c| c.semantic_type)
            .is_some_and(|t| t == SEGMENT_WORK_TYPE);
        if is_work {
            dates.insert(start.date_naive());
        }
    }

    Ok(Some(WorkdaySummary::from_dates(year, &dates)))
}

/// Reads a segments file and counts its workdays.
pub fn read_workdays(
    path: &Path,
    year: i32,
    month: Option<u32>,
) -> Result<WorkdaySummary, SlhError> {
    let data = fs::read_to_string(path).map_err(|e| SlhError::io(path, e))?;
    let summary = extract_workdays(&data, year, month)
        .map_err(|e| SlhError::json(path, e))?
        .ok_or_else(|| SlhError::MissingField {
            path: path.to_path_buf(),
            field: "semanticSegments",
        })?;
    tracing::debug!(path = ?path, year, total = summary.total(), "counted segment workdays");
    Ok(summary)
}
