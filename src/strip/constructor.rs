use super::{strip_with, MemberMatch, Stripped};
use crate::classify::DeclaredType;
use crate::edit::SpanError;
use crate::scan::Cursor;

/// Match `\n <ws>* public <ws>+ Name <ws>* ( args ) <ws>* { body }` followed by a newline.
///
/// `args` may not contain `(` and `body` may not contain `{`.
fn constructor_at<'a>(text: &'a str, start: usize, declared: &str) -> Option<MemberMatch<'a>> {
    let mut cur = Cursor::at(text, start);
    cur.eat_char('\n').then_some(())?;
    cur.skip_ws();
    cur.eat_str("public").then_some(())?;
    cur.require_ws()?;

    let name_start = cur.pos();
    cur.eat_str(declared).then_some(())?;
    let name = &text[name_start..cur.pos()];

    cur.skip_ws();
    cur.eat_flat_group('(', ')')?;
    cur.skip_ws();
    cur.eat_flat_group('{', '}')?;

    let end = cur.pos();
    cur.eat_char('\n').then_some(())?;
    Some(MemberMatch { end, name })
}

/// Remove every explicit constructor of `declared` with a flat body.
pub fn strip_constructors(text: &str, declared: &DeclaredType) -> Result<Stripped, SpanError> {
    strip_with(text, |text, start| {
        constructor_at(text, start, declared.as_str())
    })
}
