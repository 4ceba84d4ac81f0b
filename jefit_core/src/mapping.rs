//! Exercise name normalization via an external mapping file.
//!
//! The JeFit→Hevy name table ships as a JSON object (source name → Hevy
//! name) so it can be updated without touching the pipeline. Names missing
//! from the map pass through unchanged; that is the only condition allowed
//! to degrade instead of aborting the run.

use crate::expand::SetRecord;
use crate::Result;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

/// A load-once mapping from source exercise name to target exercise name
#[derive(Clone, Debug, Default)]
pub struct NameMap {
    entries: HashMap<String, String>,
}

impl NameMap {
    /// Load a name map from a JSON object file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let entries: HashMap<String, String> = serde_json::from_str(&contents)?;
        tracing::info!("Loaded {} name mappings from {:?}", entries.len(), path);
        Ok(Self { entries })
    }

    /// Build a name map from in-memory entries
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Rewrite exercise names in place through the map.
///
/// Surrounding double quotes are stripped before lookup. Returns the
/// distinct unmapped names, sorted, each warned about exactly once no
/// matter how many sets reference it.
pub fn normalize_names(records: &mut [SetRecord], map: &NameMap) -> Vec<String> {
    let mut unmapped = BTreeSet::new();

    for record in records.iter_mut() {
        let stripped = record.exercise_name.trim_matches('"');
        match map.get(stripped) {
            Some(mapped) => record.exercise_name = mapped.to_string(),
            None => {
                unmapped.insert(stripped.to_string());
            }
        }
    }

    let unmapped: Vec<String> = unmapped.into_iter().collect();
    for name in &unmapped {
        tracing::warn!("Exercise {:?} is not in the name map; keeping it as-is", name);
    }
    unmapped
}
