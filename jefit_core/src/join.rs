//! Left join of the exercise-log table onto the workout-session table.
//!
//! Every log row survives the join: a log row whose session reference has
//! no matching session keeps empty session fields instead of being dropped.
//! Joining against an empty table is refused outright, because the output
//! would be garbage either way.

use crate::table::Table;
use crate::{Error, Result};
use std::collections::HashMap;

/// Suffix applied to colliding column names from the log (left) side
pub const LOG_SUFFIX: &str = "-E";

/// Suffix applied to colliding column names from the session (right) side
pub const SESSION_SUFFIX: &str = "-S";

/// Left join `logs` onto `sessions`, matching `left_key` against `right_key`.
///
/// Non-key columns present on both sides are kept under disambiguating
/// suffixes. When several sessions share an id, the first one wins.
pub fn left_join(
    logs: &Table,
    sessions: &Table,
    left_key: &str,
    right_key: &str,
) -> Result<Table> {
    if logs.is_empty() {
        return Err(Error::EmptyInput("exercise log"));
    }
    if sessions.is_empty() {
        return Err(Error::EmptyInput("workout session"));
    }

    let left_key_idx = logs.require_column(left_key)?;
    let right_key_idx = sessions.require_column(right_key)?;

    let mut columns = Vec::with_capacity(logs.columns.len() + sessions.columns.len());
    for name in &logs.columns {
        if name != left_key && name != right_key && sessions.column_index(name).is_some() {
            columns.push(format!("{}{}", name, LOG_SUFFIX));
        } else {
            columns.push(name.clone());
        }
    }
    for name in &sessions.columns {
        if name != left_key && name != right_key && logs.column_index(name).is_some() {
            columns.push(format!("{}{}", name, SESSION_SUFFIX));
        } else {
            columns.push(name.clone());
        }
    }

    let mut by_id: HashMap<&str, &Vec<String>> = HashMap::new();
    for row in &sessions.rows {
        by_id.entry(row[right_key_idx].as_str()).or_insert(row);
    }

    let mut rows = Vec::with_capacity(logs.rows.len());
    let mut unmatched = 0usize;
    for row in &logs.rows {
        let mut joined = row.clone();
        match by_id.get(row[left_key_idx].as_str()) {
            Some(session) => joined.extend(session.iter().cloned()),
            None => {
                unmatched += 1;
                joined.extend(std::iter::repeat(String::new()).take(sessions.columns.len()));
            }
        }
        rows.push(joined);
    }

    if unmatched > 0 {
        tracing::warn!("{} log rows reference an unknown session id", unmatched);
    }
    tracing::debug!("Joined {} log rows against {} sessions", rows.len(), sessions.rows.len());

    Ok(Table { columns, rows })
}
