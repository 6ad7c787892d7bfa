use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// A list of source files to process, replacing a hard-coded file list.
///
/// ```toml
/// [meta]
/// name = "invoice-backend"
/// root = "backend"
///
/// [input]
/// files = ["src/main/java/com/example/Foo.java"]
/// ```
#[derive(Debug, Deserialize, Default, Clone)]
pub struct Manifest {
    #[serde(default)]
    pub meta: Metadata,
    #[serde(default)]
    pub input: Input,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct Metadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Base directory for relative `files`, itself relative to the manifest
    #[serde(default)]
    pub root: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct Input {
    #[serde(default)]
    pub files: Vec<String>,
}

impl Manifest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut issues = Vec::new();

        if self.input.files.is_empty() {
            issues.push(ValidationIssue::EmptyFileList);
        }

        if let Some(root) = &self.meta.root {
            if root.trim().is_empty() {
                issues.push(ValidationIssue::BlankRoot);
            }
        }

        let mut seen = HashSet::new();
        for (index, file) in self.input.files.iter().enumerate() {
            if file.trim().is_empty() {
                issues.push(ValidationIssue::BlankFile { index });
            } else if !seen.insert(file.as_str()) {
                issues.push(ValidationIssue::DuplicateFile { file: file.clone() });
            }
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { issues })
        }
    }

    /// Directory that relative `files` entries resolve against.
    pub fn root_dir(&self, manifest_dir: &Path) -> PathBuf {
        match &self.meta.root {
            Some(root) => manifest_dir.join(root),
            None => manifest_dir.to_path_buf(),
        }
    }

    /// Resolve `files` in declaration order.
    pub fn file_paths(&self, manifest_dir: &Path) -> Vec<PathBuf> {
        let root = self.root_dir(manifest_dir);
        self.input
            .files
            .iter()
            .map(|file| root.join(file.trim()))
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, issue) in self.issues.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    EmptyFileList,
    BlankRoot,
    BlankFile { index: usize },
    DuplicateFile { file: String },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::EmptyFileList => write!(f, "manifest lists no files"),
            ValidationIssue::BlankRoot => write!(f, "meta.root is set but blank"),
            ValidationIssue::BlankFile { index } => {
                write!(f, "input.files[{index}] is blank")
            }
            ValidationIssue::DuplicateFile { file } => {
                write!(f, "file '{file}' is listed more than once")
            }
        }
    }
}
