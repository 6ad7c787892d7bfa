use std::fs;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// A region of source text that a stripping stage decided to delete.
///
/// The span starts at the newline preceding the member (absorbing any blank
/// lines in between) and ends right after its closing brace. The newline that
/// must follow the brace is not part of the span, so the text around a
/// removed member keeps exactly one line break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovableSpan {
    /// Byte offset of the leading newline (inclusive)
    pub start: usize,
    /// Byte offset just past the closing brace (exclusive)
    pub end: usize,
    /// Constructor type name or getter method name
    pub name: String,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SpanError {
    #[error("Invalid byte range: [{start}, {end}) in text of length {len}")]
    OutOfBounds {
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("Overlapping spans: [{first_start}, {first_end}) and [{second_start}, {second_end})")]
    Overlap {
        first_start: usize,
        first_end: usize,
        second_start: usize,
        second_end: usize,
    },

    #[error("Span boundary at byte {0} splits a UTF-8 character")]
    NotCharBoundary(usize),
}

fn validate(text: &str, span: &RemovableSpan) -> Result<(), SpanError> {
    if span.start > span.end || span.end > text.len() {
        return Err(SpanError::OutOfBounds {
            start: span.start,
            end: span.end,
            len: text.len(),
        });
    }
    for offset in [span.start, span.end] {
        if !text.is_char_boundary(offset) {
            return Err(SpanError::NotCharBoundary(offset));
        }
    }
    Ok(())
}

/// Delete every span from `text`.
///
/// Spans must be sorted by `start` and must not overlap; both hold for the
/// output of a single left-to-right scan. All spans are validated before
/// any text is built.
pub fn excise(text: &str, spans: &[RemovableSpan]) -> Result<String, SpanError> {
    for span in spans {
        validate(text, span)?;
    }

    for window in spans.windows(2) {
        let (first, second) = (&window[0], &window[1]);
        if first.end > second.start {
            return Err(SpanError::Overlap {
                first_start: first.start,
                first_end: first.end,
                second_start: second.start,
                second_end: second.end,
            });
        }
    }

    let removed: usize = spans.iter().map(|span| span.end - span.start).sum();
    let mut out = String::with_capacity(text.len() - removed);
    let mut copied = 0;
    for span in spans {
        out.push_str(&text[copied..span.start]);
        copied = span.end;
    }
    out.push_str(&text[copied..]);

    Ok(out)
}

/// Atomic file write: tempfile + fsync + rename.
///
/// Either the full write succeeds or the file is left as it was. The
/// original file's permissions are carried over to the replacement.
/// Symlinks are resolved first, so the rename replaces the file the link
/// points to and the link itself survives.
pub fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let target = match fs::canonicalize(path) {
        Ok(target) => target,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => path.to_path_buf(),
        Err(e) => return Err(e),
    };
    let path = target.as_path();

    // Create tempfile in same directory to ensure same filesystem
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        Some(_) => Path::new("."),
        None => {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path has no parent directory",
            ))
        }
    };

    let mut temp = tempfile::NamedTempFile::new_in(parent)?;
    temp.write_all(content)?;
    temp.as_file().sync_all()?;

    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(temp.path(), metadata.permissions())?;
    }

    temp.persist(path).map_err(|e| e.error)?;

    Ok(())
}
