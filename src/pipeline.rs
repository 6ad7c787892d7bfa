//! Per-file pass orchestration.
//!
//! This module ties the stages together:
//! - [`transform`] is the pure text pipeline (classify, strip constructors,
//!   strip getters, collapse blank lines)
//! - [`process_file`] reads one file, transforms it, and writes it back only
//!   when the text changed
//! - [`run_files`] processes an ordered list of paths sequentially and builds
//!   a [`RunReport`]

use crate::classify::{classify, Eligibility};
use crate::edit::{atomic_write, SpanError};
use crate::normalize::{collapse_blank_lines, unify_line_endings};
use crate::report::{EntryStatus, FileEntry, RunReport};
use crate::strip::{strip_constructors, strip_getters};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result of running the text pipeline over one file's contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transform {
    pub eligibility: Eligibility,
    pub constructors: Vec<String>,
    pub getters: Vec<String>,
    pub text: String,
}

impl Transform {
    fn unchanged(eligibility: Eligibility, text: &str) -> Self {
        Self {
            eligibility,
            constructors: Vec::new(),
            getters: Vec::new(),
            text: text.to_string(),
        }
    }
}

/// Run all four stages over `text`.
///
/// Line endings are unified to `\n` first, so the output never mixes them.
/// Ineligible text is otherwise returned unchanged without running the
/// strippers.
pub fn transform(text: &str) -> Result<Transform, SpanError> {
    let text = unify_line_endings(text);
    let text: &str = &text;

    let eligibility = classify(text);
    let declared = match &eligibility {
        Eligibility::Eligible { declared, .. } => declared.clone(),
        _ => return Ok(Transform::unchanged(eligibility, text)),
    };

    let without_constructors = strip_constructors(text, &declared)?;
    let without_getters = strip_getters(&without_constructors.text)?;
    let normalized = collapse_blank_lines(&without_getters.text);

    Ok(Transform {
        eligibility,
        constructors: without_constructors.names().map(str::to_string).collect(),
        getters: without_getters.names().map(str::to_string).collect(),
        text: normalized,
    })
}

/// Why a file was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// No `public class <Name>` declaration
    NoDeclaredType,
    /// No Lombok constructor/data annotation
    NoMarker,
    /// Eligible, but the pipeline produced identical text
    NoChange,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoDeclaredType => write!(f, "no public class declaration"),
            SkipReason::NoMarker => write!(f, "no Lombok annotation"),
            SkipReason::NoChange => write!(f, "nothing to remove"),
        }
    }
}

/// Result of processing a single file
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "FileOutcome should be checked for modification"]
pub enum FileOutcome {
    NotFound,
    Skipped(SkipReason),
    /// The new text was written (or would be, in a dry run)
    Modified {
        constructors: Vec<String>,
        getters: Vec<String>,
    },
}

impl FileOutcome {
    /// The single boolean signal: did the file's text change?
    pub fn is_modified(&self) -> bool {
        matches!(self, FileOutcome::Modified { .. })
    }
}

/// Original and rewritten text of a modified file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub original: String,
    pub updated: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processed {
    pub outcome: FileOutcome,
    /// Present only when the outcome is [`FileOutcome::Modified`]
    pub rewrite: Option<Rewrite>,
}

impl Processed {
    fn untouched(outcome: FileOutcome) -> Self {
        Self {
            outcome,
            rewrite: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessOptions {
    /// Compute outcomes without writing any file
    pub dry_run: bool,
    /// Record per-file I/O failures and continue instead of aborting the run
    pub keep_going: bool,
}

#[derive(Error, Debug)]
pub enum StripError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("span error: {0}")]
    Span(#[from] SpanError),
}

/// Read, transform and conditionally rewrite one file.
///
/// The file is read whole, transformed in memory and written whole (via
/// tempfile + rename) only if its text changed. Line endings are unified
/// on read, so a file whose only difference is `\r\n` counts as unchanged
/// and keeps them; a rewritten file uses `\n` throughout. Unchanged files
/// are never opened for writing.
pub fn process_file(path: &Path, options: &ProcessOptions) -> Result<Processed, StripError> {
    if !path.exists() {
        return Ok(Processed::untouched(FileOutcome::NotFound));
    }

    let raw = fs::read_to_string(path).map_err(|source| StripError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let original = unify_line_endings(&raw).into_owned();

    let result = transform(&original)?;
    match result.eligibility {
        Eligibility::NoDeclaredType => {
            return Ok(Processed::untouched(FileOutcome::Skipped(
                SkipReason::NoDeclaredType,
            )))
        }
        Eligibility::NoMarker { .. } => {
            return Ok(Processed::untouched(FileOutcome::Skipped(
                SkipReason::NoMarker,
            )))
        }
        Eligibility::Eligible { .. } => {}
    }

    if result.text == original {
        return Ok(Processed::untouched(FileOutcome::Skipped(
            SkipReason::NoChange,
        )));
    }

    if !options.dry_run {
        atomic_write(path, result.text.as_bytes()).map_err(|source| StripError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }

    Ok(Processed {
        outcome: FileOutcome::Modified {
            constructors: result.constructors,
            getters: result.getters,
        },
        rewrite: Some(Rewrite {
            original,
            updated: result.text,
        }),
    })
}

/// Process `paths` one at a time, in order.
///
/// `on_file` is called after each file with its report entry and, for
/// modified files, the before/after text. Without `keep_going` the first
/// I/O error aborts the run.
pub fn run_files<F>(
    paths: &[PathBuf],
    options: &ProcessOptions,
    mut on_file: F,
) -> Result<RunReport, StripError>
where
    F: FnMut(&FileEntry, Option<&Rewrite>),
{
    let mut report = RunReport::default();

    for path in paths {
        let (status, rewrite) = match process_file(path, options) {
            Ok(processed) => (EntryStatus::from(processed.outcome), processed.rewrite),
            Err(err) if options.keep_going => (
                EntryStatus::Failed {
                    error: err.to_string(),
                },
                None,
            ),
            Err(err) => return Err(err),
        };

        let entry = FileEntry {
            path: path.clone(),
            status,
        };
        on_file(&entry, rewrite.as_ref());
        report.entries.push(entry);
    }

    Ok(report)
}
