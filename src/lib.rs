//! Lombok Strip: remove hand-written boilerplate that Lombok already generates
//!
//! Given Java sources annotated with `@Data`, `@AllArgsConstructor`,
//! `@NoArgsConstructor` or `@RequiredArgsConstructor`, deletes the explicit
//! constructors and getters those annotations make redundant.
//!
//! # Architecture
//!
//! Each file goes through four stages, strictly in order:
//!
//! 1. [`classify()`]: find the `public class` name and a Lombok marker
//! 2. [`strip_constructors`]: delete constructors of that class
//! 3. [`strip_getters`]: delete zero-argument `get*` methods
//! 4. [`collapse_blank_lines`]: squash the blank lines left behind
//!
//! Matching is textual and shallow. A member is only removed when its body
//! (and argument list, and generic clause) contains no nested delimiters;
//! anything deeper is left alone.
//!
//! # Safety
//!
//! - Files are read whole and written whole, or not at all
//! - Atomic file writes (tempfile + fsync + rename)
//! - Unchanged files are never rewritten
//! - `\r\n` line endings are read as `\n`; rewritten files use `\n`
//! - Symlinked inputs are written through, the link stays in place
//! - Idempotent: a second pass finds nothing to remove
//!
//! # Example
//!
//! ```
//! use lombok_strip::transform;
//!
//! let source = "@Data\npublic class Foo {\n    private String a;\n\n    public String getA() { return a; }\n}\n";
//! let result = transform(source).unwrap();
//! assert_eq!(result.getters, vec!["getA"]);
//! assert_eq!(result.text, "@Data\npublic class Foo {\n    private String a;\n}\n");
//! ```

pub mod classify;
pub mod config;
pub mod edit;
pub mod inputs;
pub mod normalize;
pub mod pipeline;
pub mod report;
pub mod scan;
pub mod strip;

// Re-exports
pub use classify::{classify, BoilerplateMarker, DeclaredType, Eligibility};
pub use config::{load_file_list, load_from_path, load_from_str, ConfigError, Manifest};
pub use edit::{excise, RemovableSpan, SpanError};
pub use inputs::{expand_paths, ExpandedPaths};
pub use normalize::{collapse_blank_lines, unify_line_endings};
pub use pipeline::{
    process_file, run_files, transform, FileOutcome, ProcessOptions, Processed, Rewrite,
    SkipReason, StripError, Transform,
};
pub use report::{EntryStatus, FileEntry, RunReport};
pub use strip::{strip_constructors, strip_getters, Stripped};
