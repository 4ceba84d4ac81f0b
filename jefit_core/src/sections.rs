//! Section splitting for the JeFit export format.
//!
//! A JeFit export is one text file carrying two `###`-tagged sections, each
//! holding a CSV header line followed by data lines. This module classifies
//! raw input lines into those sections; everything outside them is dropped.

/// Marker line tagging the start of the workout-session section
pub const SESSIONS_MARKER: &str = "### WORKOUT SESSIONS ###";

/// Marker line tagging the start of the exercise-log section
pub const LOGS_MARKER: &str = "### EXERCISE LOGS ###";

/// Non-empty lines collected per section, in input order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sections {
    pub sessions: Vec<String>,
    pub logs: Vec<String>,
}

#[derive(Clone, Copy)]
enum Active {
    Sessions,
    Logs,
}

/// Split raw input lines into the two recognized sections.
///
/// Marker matching is a case-sensitive substring test. Any other line
/// starting with `#` ends the active section, so trailing commentary cannot
/// bleed into the tables. Blank lines and lines before the first marker are
/// dropped. An input with no markers yields two empty sections.
pub fn split_sections<'a, I>(lines: I) -> Sections
where
    I: IntoIterator<Item = &'a str>,
{
    let mut sections = Sections::default();
    let mut active: Option<Active> = None;

    for raw in lines {
        let line = raw.trim();

        if line.contains(SESSIONS_MARKER) {
            active = Some(Active::Sessions);
        } else if line.contains(LOGS_MARKER) {
            active = Some(Active::Logs);
        } else if line.is_empty() {
            continue;
        } else if line.starts_with('#') {
            active = None;
        } else if let Some(section) = active {
            match section {
                Active::Sessions => sections.sessions.push(line.to_string()),
                Active::Logs => sections.logs.push(line.to_string()),
            }
        }
    }

    tracing::debug!(
        "Split input into {} session lines and {} log lines",
        sections.sessions.len(),
        sections.logs.len()
    );

    sections
}
