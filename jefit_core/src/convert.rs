//! End-to-end conversion pipeline.
//!
//! One synchronous pass: split sections, build both tables, left-join logs
//! onto sessions, explode packed sets, normalize names, render and export.
//! Every stage fully materializes its output before the next one runs, and
//! any structural error aborts the run before the output file is touched.

use crate::export::HevyRow;
use crate::mapping::NameMap;
use crate::{expand, export, join, mapping, sections, table, Result};
use chrono::FixedOffset;
use std::path::Path;

/// Log-table column holding the foreign key into the session table
const LOG_SESSION_KEY: &str = "belongsession";

/// Session-table column holding the session identifier
const SESSION_ID_KEY: &str = "_id";

/// Outcome of a successful conversion
#[derive(Clone, Debug)]
pub struct ConversionReport {
    pub sessions: usize,
    pub log_entries: usize,
    pub sets: usize,
    /// Distinct exercise names absent from the map, sorted
    pub unmapped: Vec<String>,
}

/// Convert raw JeFit export text into Hevy rows.
///
/// Fails without producing any rows on structural problems: malformed
/// tables, an empty side of the join, or a malformed packed-set token.
pub fn convert_str(
    input: &str,
    map: &NameMap,
    tz: FixedOffset,
) -> Result<(Vec<HevyRow>, ConversionReport)> {
    let split = sections::split_sections(input.lines());

    let session_table = table::build_session_table(&split.sessions)?;
    let log_table = table::build_log_table(&split.logs)?;

    let joined = join::left_join(&log_table, &session_table, LOG_SESSION_KEY, SESSION_ID_KEY)?;
    let mut records = expand::expand_sets(&joined)?;
    let unmapped = mapping::normalize_names(&mut records, map);
    let rows = export::render_rows(&records, tz);

    let report = ConversionReport {
        sessions: session_table.rows.len(),
        log_entries: log_table.rows.len(),
        sets: rows.len(),
        unmapped,
    };

    tracing::info!(
        "Converted {} sessions / {} log entries into {} set rows",
        report.sessions,
        report.log_entries,
        report.sets
    );

    Ok((rows, report))
}

/// Convert an input file on disk into an output CSV file.
///
/// The output file is only created once the whole conversion has
/// succeeded, so a failed run never leaves a partial file behind.
pub fn convert_file(
    input: &Path,
    output: &Path,
    map: &NameMap,
    tz: FixedOffset,
) -> Result<ConversionReport> {
    let contents = std::fs::read_to_string(input)?;
    let (rows, report) = convert_str(&contents, map, tz)?;
    export::write_csv(&rows, output)?;
    Ok(report)
}
