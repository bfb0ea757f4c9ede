//! Static reference enumerations: regions, sectors, sub-sectors and
//! project statuses.
//!
//! The snapshot is fixed at startup. It is either the built-in list below
//! or a JSON file of the same shape as `GET /api/metadata`.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const STATUS_PLANNED: &str = "Planned";
pub const STATUS_IN_PROGRESS: &str = "In Progress";
pub const STATUS_COMPLETED: &str = "Completed";
pub const STATUS_SUSPENDED: &str = "Suspended";

/// Sub-sector value that lets the user type a free-text sub-sector.
pub const SUB_SECTOR_OTHER: &str = "Other";

const REGIONS: &[&str] = &[
    "Addis Ababa",
    "Afar",
    "Amhara",
    "Benishangul-Gumuz",
    "Central Ethiopia",
    "Dire Dawa",
    "Gambela",
    "Harari",
    "Oromia",
    "Sidama",
    "Somali",
    "South Ethiopia",
    "South West Ethiopia",
    "Tigray",
];

const SECTORS: &[&str] = &[
    "Agriculture",
    "Manufacturing",
    "Health",
    "Education",
    "Construction",
    "Mining",
    "Tourism",
    "ICT",
    "Energy",
    "Trade and Services",
];

const SUB_SECTORS: &[&str] = &[
    "Agroprocessing",
    "Crop Production",
    "Livestock",
    "Food and Beverage",
    "Textile and Garment",
    "Leather and Leather Products",
    "Pharmaceuticals",
    "Hospital and Clinic",
    "Hotel and Lodge",
    "Software Development",
    "Real Estate",
    SUB_SECTOR_OTHER,
];

const PROJECT_STATUSES: &[&str] = &[
    STATUS_PLANNED,
    STATUS_IN_PROGRESS,
    STATUS_COMPLETED,
    STATUS_SUSPENDED,
];

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// Immutable metadata snapshot served by `GET /api/metadata`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub regions: Vec<String>,
    pub sectors: Vec<String>,
    pub sub_sectors: Vec<String>,
    pub project_statuses: Vec<String>,
}

impl Default for Metadata {
    fn default() -> Self {
        let owned = |list: &[&str]| list.iter().map(|s| s.to_string()).collect();
        Self {
            regions: owned(REGIONS),
            sectors: owned(SECTORS),
            sub_sectors: owned(SUB_SECTORS),
            project_statuses: owned(PROJECT_STATUSES),
        }
    }
}

impl Metadata {
    /// Load a snapshot from a JSON file and check it.
    pub fn from_json_file(path: &Path) -> Result<Self, CoreError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Internal(format!("Cannot read metadata file {}: {e}", path.display()))
        })?;
        let metadata: Metadata = serde_json::from_str(&raw).map_err(|e| {
            CoreError::Validation(format!("Invalid metadata file {}: {e}", path.display()))
        })?;
        metadata.check()?;
        Ok(metadata)
    }

    /// Every list must be non-empty and free of repeated entries.
    pub fn check(&self) -> Result<(), CoreError> {
        for (name, list) in self.lists() {
            if list.is_empty() {
                return Err(CoreError::Validation(format!(
                    "Metadata list '{name}' must not be empty"
                )));
            }
            let mut seen = HashSet::new();
            for entry in list {
                if entry.trim().is_empty() {
                    return Err(CoreError::Validation(format!(
                        "Metadata list '{name}' contains a blank entry"
                    )));
                }
                if !seen.insert(entry.as_str()) {
                    return Err(CoreError::Validation(format!(
                        "Metadata list '{name}' repeats '{entry}'"
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn is_region(&self, value: &str) -> bool {
        self.regions.iter().any(|r| r == value)
    }

    pub fn is_sector(&self, value: &str) -> bool {
        self.sectors.iter().any(|s| s == value)
    }

    pub fn is_project_status(&self, value: &str) -> bool {
        self.project_statuses.iter().any(|s| s == value)
    }

    fn lists(&self) -> [(&'static str, &Vec<String>); 4] {
        [
            ("regions", &self.regions),
            ("sectors", &self.sectors),
            ("subSectors", &self.sub_sectors),
            ("projectStatuses", &self.project_statuses),
        ]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
