//! Run-level reporting.

use crate::pipeline::{FileOutcome, SkipReason};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EntryStatus {
    NotFound,
    Skipped {
        reason: SkipReason,
    },
    Modified {
        constructors: Vec<String>,
        getters: Vec<String>,
    },
    /// Only recorded when the run continues past I/O errors
    Failed {
        error: String,
    },
}

impl From<FileOutcome> for EntryStatus {
    fn from(outcome: FileOutcome) -> Self {
        match outcome {
            FileOutcome::NotFound => EntryStatus::NotFound,
            FileOutcome::Skipped(reason) => EntryStatus::Skipped { reason },
            FileOutcome::Modified {
                constructors,
                getters,
            } => EntryStatus::Modified {
                constructors,
                getters,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub path: PathBuf,
    #[serde(flatten)]
    pub status: EntryStatus,
}

/// Per-file entries of one run, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub entries: Vec<FileEntry>,
}

impl RunReport {
    fn count(&self, pred: impl Fn(&EntryStatus) -> bool) -> usize {
        self.entries.iter().filter(|entry| pred(&entry.status)).count()
    }

    /// Number of paths the run was given.
    pub fn attempted(&self) -> usize {
        self.entries.len()
    }

    pub fn modified(&self) -> usize {
        self.count(|status| matches!(status, EntryStatus::Modified { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|status| matches!(status, EntryStatus::Skipped { .. }))
    }

    pub fn not_found(&self) -> usize {
        self.count(|status| matches!(status, EntryStatus::NotFound))
    }

    pub fn failed(&self) -> usize {
        self.count(|status| matches!(status, EntryStatus::Failed { .. }))
    }

    /// Total constructors and getters removed across all files.
    pub fn members_removed(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| match &entry.status {
                EntryStatus::Modified {
                    constructors,
                    getters,
                } => constructors.len() + getters.len(),
                _ => 0,
            })
            .sum()
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total files modified: {}/{}",
            self.modified(),
            self.attempted()
        )
    }
}
