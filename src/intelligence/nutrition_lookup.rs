// ABOUTME: Static nutrition database keyed by food label and alias
// ABOUTME: Total lookup: unknown labels resolve to the generic default record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors

//! Nutrition Lookup
//!
//! Labels are matched after trimming and lowercasing. Aliases are declared per
//! record and resolve to the same values as the canonical label.

use foodscan_core::models::NutritionRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// One database row as stored in `nutrition.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionEntry {
    /// Canonical label
    pub label: String,
    /// Other names resolving to this record
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Nutrition values
    #[serde(flatten)]
    pub record: NutritionRecord,
}

/// On-disk layout of `nutrition.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionFile {
    /// Record returned for unknown labels
    #[serde(default)]
    pub default: NutritionRecord,
    /// Known foods
    pub foods: Vec<NutritionEntry>,
}

/// Label to nutrition record map
#[derive(Debug, Clone, Default)]
pub struct NutritionDatabase {
    records: HashMap<String, Arc<NutritionRecord>>,
    default: NutritionRecord,
}

fn normalize(label: &str) -> String {
    label.trim().to_lowercase()
}

impl NutritionDatabase {
    /// Build the database, indexing every label and alias
    #[must_use]
    pub fn new(file: NutritionFile) -> Self {
        let entries: Vec<(String, Vec<String>, Arc<NutritionRecord>)> = file
            .foods
            .into_iter()
            .map(|entry| (entry.label, entry.aliases, Arc::new(entry.record)))
            .collect();

        let mut records = HashMap::new();
        for (_, aliases, record) in &entries {
            for alias in aliases {
                records.insert(normalize(alias), Arc::clone(record));
            }
        }
        // canonical labels override aliases of other entries
        for (label, _, record) in entries {
            records.insert(normalize(&label), record);
        }
        Self {
            records,
            default: file.default,
        }
    }

    /// Nutrition facts for `label`, or the default record
    #[must_use]
    pub fn lookup(&self, label: &str) -> &NutritionRecord {
        let key = normalize(label);
        match self.records.get(&key) {
            Some(record) => record,
            None => {
                debug!(label = %key, "no nutrition entry, using default record");
                &self.default
            }
        }
    }

    /// Whether `label` has its own entry
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.records.contains_key(&normalize(label))
    }

    /// Record returned for unknown labels
    #[must_use]
    pub const fn default_record(&self) -> &NutritionRecord {
        &self.default
    }

    /// Number of indexed names, aliases included
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no names are indexed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(label: &str, aliases: &[&str], calories: f64) -> NutritionEntry {
        NutritionEntry {
            label: label.to_owned(),
            aliases: aliases.iter().map(|a| (*a).to_owned()).collect(),
            record: NutritionRecord {
                calories,
                ..NutritionRecord::default()
            },
        }
    }

    #[test]
    fn test_alias_resolves_to_canonical_values() {
        let db = NutritionDatabase::new(NutritionFile {
            default: NutritionRecord::default(),
            foods: vec![entry("roti", &["chapati"], 120.0)],
        });
        assert!((db.lookup("  Chapati ").calories - 120.0).abs() < f64::EPSILON);
        assert!(db.contains("ROTI"));
        assert_eq!(db.len(), 2);
    }

    #[test]
    fn test_unknown_label_uses_default() {
        let db = NutritionDatabase::new(NutritionFile {
            default: NutritionRecord::default(),
            foods: vec![entry("idli", &[], 156.0)],
        });
        assert!(!db.contains("xyz123"));
        assert_eq!(db.lookup("xyz123"), &NutritionRecord::default());
    }
}
