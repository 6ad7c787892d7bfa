//! Line-ending and blank-line normalization.
//!
//! Sources are read with universal newlines: `\r\n` and a lone `\r` both
//! become `\n` before any matching, and the rewritten file uses `\n`.
//!
//! Removing members leaves stacks of empty lines behind. Within any run of
//! whitespace that spans three or more newlines, everything from the first
//! newline to the last one is replaced with `"\n\n"`, i.e. one blank line.
//! Trailing spaces before the first newline and indentation after the last
//! one are kept.

use std::borrow::Cow;

/// Translate `\r\n` and lone `\r` line endings to `\n`.
pub fn unify_line_endings(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Newline positions seen in the current whitespace run.
#[derive(Debug, Default)]
struct NewlineRun {
    first: usize,
    last: usize,
    count: usize,
}

impl NewlineRun {
    fn record(&mut self, idx: usize) {
        if self.count == 0 {
            self.first = idx;
        }
        self.last = idx;
        self.count += 1;
    }

    /// Emit pending text into `out` if the run is long enough to collapse.
    fn flush(&mut self, text: &str, out: &mut String, copied: &mut usize) {
        if self.count >= 3 {
            out.push_str(&text[*copied..self.first]);
            out.push_str("\n\n");
            *copied = self.last + 1;
        }
        *self = NewlineRun::default();
    }
}

pub fn collapse_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut run = NewlineRun::default();

    for (idx, c) in text.char_indices() {
        if c == '\n' {
            run.record(idx);
        } else if !c.is_whitespace() {
            run.flush(text, &mut out, &mut copied);
        }
    }
    run.flush(text, &mut out, &mut copied);

    out.push_str(&text[copied..]);
    out
}
