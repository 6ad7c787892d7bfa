use super::{strip_with, MemberMatch, Stripped};
use crate::edit::SpanError;
use crate::scan::Cursor;

/// Match a zero-argument `get*` method with a flat body, followed by a newline.
///
/// The return type is a single word with at most one generic clause that
/// contains no further `<`. The body is not inspected beyond the brace check.
fn getter_at(text: &str, start: usize) -> Option<MemberMatch<'_>> {
    let mut cur = Cursor::at(text, start);
    cur.eat_char('\n').then_some(())?;
    cur.skip_ws();
    cur.eat_str("public").then_some(())?;
    cur.require_ws()?;

    cur.eat_word()?;
    if cur.peek() == Some('<') {
        let params = cur.eat_flat_group('<', '>')?;
        if params.is_empty() {
            return None;
        }
    }
    cur.require_ws()?;

    let name_start = cur.pos();
    cur.eat_str("get").then_some(())?;
    cur.eat_word()?;
    let name = &text[name_start..cur.pos()];

    cur.skip_ws();
    let args = cur.eat_flat_group('(', ')')?;
    if !args.trim().is_empty() {
        return None;
    }
    cur.skip_ws();
    cur.eat_flat_group('{', '}')?;

    let end = cur.pos();
    cur.eat_char('\n').then_some(())?;
    Some(MemberMatch { end, name })
}

/// Remove every explicit getter with a flat body.
pub fn strip_getters(text: &str) -> Result<Stripped, SpanError> {
    strip_with(text, getter_at)
}
