//! Packed set-log expansion.
//!
//! JeFit stores all sets of one exercise in a single packed field, e.g.
//! `"50x10,55x8,55x6"`. Hevy wants one row per set, numbered per exercise.
//! The set number is a running counter per exercise name across the whole
//! joined table (set N of this exercise over the export), not per session.

use crate::table::Table;
use crate::{Error, Result};
use std::collections::HashMap;

/// One individual exercise set, ready for formatting and export
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetRecord {
    /// Calendar date of the session (raw `mydate`, may be empty if unmatched)
    pub date: String,
    /// Epoch-seconds start of the session (raw `starttime`, may be empty)
    pub start_time: String,
    /// Session duration in seconds, numeric as text
    pub total_time: String,
    pub exercise_name: String,
    pub weight: String,
    pub reps: String,
    /// 1-based, strictly increasing per distinct exercise name
    pub set_order: u32,
}

/// Explode each joined row's packed `logs` field into one record per set.
///
/// Each comma-separated token must split on `x` into exactly a weight and a
/// rep count; anything else aborts the run naming the offending token.
pub fn expand_sets(joined: &Table) -> Result<Vec<SetRecord>> {
    let ename_idx = joined.require_column("ename")?;
    let logs_idx = joined.require_column("logs")?;
    let date_idx = joined.require_column("mydate")?;
    let total_idx = joined.require_column("total_time")?;
    let start_idx = joined.column_index("starttime");

    let mut counters: HashMap<String, u32> = HashMap::new();
    let mut records = Vec::new();

    for row in &joined.rows {
        let exercise_name = &row[ename_idx];

        for token in row[logs_idx].split(',') {
            let parts: Vec<&str> = token.split('x').collect();
            let (weight, reps) = match parts[..] {
                [weight, reps] => (weight, reps),
                _ => {
                    return Err(Error::SetFormat {
                        exercise: exercise_name.clone(),
                        token: token.to_string(),
                    })
                }
            };

            let order = counters.entry(exercise_name.clone()).or_insert(0);
            *order += 1;

            records.push(SetRecord {
                date: row[date_idx].clone(),
                start_time: start_idx.map(|i| row[i].clone()).unwrap_or_default(),
                total_time: row[total_idx].clone(),
                exercise_name: exercise_name.clone(),
                weight: weight.to_string(),
                reps: reps.to_string(),
                set_order: *order,
            });
        }
    }

    tracing::debug!(
        "Expanded {} joined rows into {} set records",
        joined.rows.len(),
        records.len()
    );
    Ok(records)
}
