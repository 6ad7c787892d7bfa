//! Constructor and getter stripping.
//!
//! Both strippers share one scan loop: try a shape matcher at every newline,
//! and when it matches, record the span and resume the search at the
//! newline that terminated the member. Matchers are shallow on purpose; a
//! member whose body contains a nested block is left in place.

mod constructor;
mod getter;

pub use constructor::strip_constructors;
pub use getter::strip_getters;

use crate::edit::{excise, RemovableSpan, SpanError};

/// Output of one stripping stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stripped {
    pub text: String,
    /// Removed spans, with offsets into the stage's input text
    pub spans: Vec<RemovableSpan>,
}

impl Stripped {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.spans.iter().map(|span| span.name.as_str())
    }
}

/// A matched member: where its closing brace ends and what it is called.
struct MemberMatch<'a> {
    end: usize,
    name: &'a str,
}

/// Run `matcher` at every newline of `text`, left to right, without overlap.
fn scan_members<'a, F>(text: &'a str, matcher: F) -> Vec<RemovableSpan>
where
    F: Fn(&'a str, usize) -> Option<MemberMatch<'a>>,
{
    let mut spans = Vec::new();
    let mut from = 0;

    while let Some(offset) = text[from..].find('\n') {
        let start = from + offset;
        match matcher(text, start) {
            Some(found) => {
                spans.push(RemovableSpan {
                    start,
                    end: found.end,
                    name: found.name.to_string(),
                });
                // The trailing newline stays in the text and may lead the next member.
                from = found.end;
            }
            None => from = start + 1,
        }
    }

    spans
}

fn strip_with<'a, F>(text: &'a str, matcher: F) -> Result<Stripped, SpanError>
where
    F: Fn(&'a str, usize) -> Option<MemberMatch<'a>>,
{
    let spans = scan_members(text, matcher);
    if spans.is_empty() {
        return Ok(Stripped {
            text: text.to_string(),
            spans,
        });
    }
    let text = excise(text, &spans)?;
    Ok(Stripped { text, spans })
}
