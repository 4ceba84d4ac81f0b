//! Hevy-format row rendering and CSV export.
//!
//! Assembles the fixed 12-column Hevy import schema and writes the whole
//! table at once. Double-quote characters that survived earlier stages as
//! string-literal markers are scrubbed before the sink ever sees them.

use crate::expand::SetRecord;
use crate::timefmt;
use crate::Result;
use chrono::FixedOffset;
use std::path::Path;

/// Fixed workout title for every imported session
pub const WORKOUT_NAME: &str = "Workout";

/// Fixed note marking rows that came through this converter
pub const WORKOUT_NOTES: &str = "Imported from JeFit";

/// A row in the Hevy CSV output
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct HevyRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Workout Name")]
    pub workout_name: String,
    #[serde(rename = "Duration")]
    pub duration: String,
    #[serde(rename = "Exercise Name")]
    pub exercise_name: String,
    #[serde(rename = "Set Order")]
    pub set_order: u32,
    #[serde(rename = "Weight")]
    pub weight: String,
    #[serde(rename = "Reps")]
    pub reps: String,
    #[serde(rename = "Distance")]
    pub distance: u32,
    #[serde(rename = "Seconds")]
    pub seconds: u32,
    #[serde(rename = "Notes")]
    pub notes: String,
    #[serde(rename = "Workout Notes")]
    pub workout_notes: String,
    #[serde(rename = "RPE")]
    pub rpe: String,
}

fn scrub(value: &str) -> String {
    value.replace('"', "")
}

/// Render set records into Hevy rows, resolving timestamps in `tz`
pub fn render_rows(records: &[SetRecord], tz: FixedOffset) -> Vec<HevyRow> {
    records
        .iter()
        .map(|record| HevyRow {
            date: scrub(&timefmt::format_row_timestamp(
                &record.start_time,
                &record.date,
                tz,
            )),
            workout_name: WORKOUT_NAME.to_string(),
            duration: format!("{}s", scrub(&record.total_time)),
            exercise_name: scrub(&record.exercise_name),
            set_order: record.set_order,
            weight: scrub(&record.weight),
            reps: scrub(&record.reps),
            distance: 0,
            seconds: 0,
            notes: String::new(),
            workout_notes: WORKOUT_NOTES.to_string(),
            rpe: String::new(),
        })
        .collect()
}

/// Write the complete output table to a CSV file, truncating prior content
pub fn write_csv(rows: &[HevyRow], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    let file = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    file.sync_all()?;

    tracing::info!("Wrote {} rows to {:?}", rows.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Offset, Utc};

    fn record() -> SetRecord {
        SetRecord {
            date: "2024-01-01".into(),
            start_time: String::new(),
            total_time: "1800".into(),
            exercise_name: "Squat (Barbell)".into(),
            weight: "100".into(),
            reps: "5".into(),
            set_order: 1,
        }
    }

    #[test]
    fn test_render_fixed_fields() {
        let rows = render_rows(&[record()], Utc.fix());
        let row = &rows[0];
        assert_eq!(row.workout_name, "Workout");
        assert_eq!(row.duration, "1800s");
        assert_eq!(row.distance, 0);
        assert_eq!(row.seconds, 0);
        assert_eq!(row.notes, "");
        assert_eq!(row.workout_notes, "Imported from JeFit");
        assert_eq!(row.rpe, "");
        assert_eq!(row.date, "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_render_scrubs_internal_quotes() {
        let mut rec = record();
        rec.exercise_name = "\"Squat (Barbell)\"".into();
        let rows = render_rows(&[rec], Utc.fix());
        assert_eq!(rows[0].exercise_name, "Squat (Barbell)");
    }

    #[test]
    fn test_csv_header_and_rows() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("hevy.csv");

        let rows = render_rows(&[record()], Utc.fix());
        write_csv(&rows, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Date,Workout Name,Duration,Exercise Name,Set Order,Weight,Reps,Distance,Seconds,Notes,Workout Notes,RPE"
        );
        assert_eq!(lines.count(), 1);
    }

    #[test]
    fn test_write_truncates_previous_content() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("hevy.csv");
        std::fs::write(&path, "stale content\nstale content\nstale content\n").unwrap();

        let rows = render_rows(&[record()], Utc.fix());
        write_csv(&rows, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("stale"));
        assert_eq!(contents.lines().count(), 2);
    }
}
