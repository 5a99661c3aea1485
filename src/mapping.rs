//! Report-table end-use labels → PS-E category names.

use crate::error::MepResult;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Built-in pairs for the LEED baseline tables: row label → PS-E row label.
const BUILTIN: &[(&str, &str)] = &[
    ("Interior lighting", "LIGHTS"),
    ("Exterior lighting", "EXT USAGE"),
    ("Space heating", "SPACE HEATING"),
    ("Space cooling", "SPACE COOLING"),
    ("Pumps", "PUMPS & AUX"),
    ("Heat rejection", "HEAT REJECT"),
    ("Fans - interior ventilation", "VENT FANS"),
    ("Service water heating", "DOMEST HOT WTR"),
];

/// Maps report-table row labels to the PS-E categories that feed them.
#[derive(Debug, Clone)]
pub struct EndUseMap {
    entries: Vec<(String, String)>,
}

impl EndUseMap {
    /// The LEED baseline-table mapping.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN
                .iter()
                .map(|(label, category)| (label.to_string(), category.to_string()))
                .collect(),
        }
    }

    /// Load a replacement mapping from a YAML file of `label: category` pairs.
    pub fn from_yaml_file(path: &Path) -> MepResult<Self> {
        let content = fs::read_to_string(path)?;
        let raw: BTreeMap<String, String> = serde_yaml::from_str(&content)?;
        Ok(Self {
            entries: raw.into_iter().collect(),
        })
    }

    /// PS-E category feeding the given row label, matched case-insensitively
    /// on the trimmed label.
    pub fn category_for(&self, label: &str) -> Option<&str> {
        let wanted = label.trim().to_lowercase();
        self.entries
            .iter()
            .find(|(l, _)| l.trim().to_lowercase() == wanted)
            .map(|(_, category)| category.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
