//! Shallow cursor over source text.
//!
//! The cursor walks a `&str` by byte offset and only ever looks one
//! delimiter level deep. Anything that would need a second level (a `{`
//! inside a body, a `(` inside an argument list, a `<` inside a generic
//! clause) is reported as a miss rather than balanced.

/// Characters matched by a `\w` class: Unicode alphanumerics and `_`.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned at byte offset `pos`.
    ///
    /// `pos` must lie on a char boundary of `text`.
    pub fn at(text: &'a str, pos: usize) -> Self {
        debug_assert!(text.is_char_boundary(pos));
        Self { text, pos }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn eat_char(&mut self, expected: char) -> bool {
        match self.peek() {
            Some(c) if c == expected => {
                self.pos += c.len_utf8();
                true
            }
            _ => false,
        }
    }

    pub fn eat_str(&mut self, expected: &str) -> bool {
        if self.rest().starts_with(expected) {
            self.pos += expected.len();
            true
        } else {
            false
        }
    }

    /// Skip whitespace (newlines included) and return how many chars were skipped.
    pub fn skip_ws(&mut self) -> usize {
        let mut skipped = 0;
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
            skipped += 1;
        }
        skipped
    }

    /// Skip at least one whitespace char.
    pub fn require_ws(&mut self) -> Option<()> {
        (self.skip_ws() > 0).then_some(())
    }

    /// Consume a non-empty run of word chars.
    pub fn eat_word(&mut self) -> Option<&'a str> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !is_word_char(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        (self.pos > start).then(|| &self.text[start..self.pos])
    }

    /// Consume `open`, then everything up to and including the first `close`.
    ///
    /// Returns the text between the delimiters. A second `open` before `close`
    /// means nesting and yields `None`, as does running out of text.
    pub fn eat_flat_group(&mut self, open: char, close: char) -> Option<&'a str> {
        let mut probe = *self;
        if !probe.eat_char(open) {
            return None;
        }
        let inner_start = probe.pos;
        for (offset, c) in probe.rest().char_indices() {
            if c == close {
                let inner_end = inner_start + offset;
                self.pos = inner_end + c.len_utf8();
                return Some(&self.text[inner_start..inner_end]);
            }
            if c == open {
                return None;
            }
        }
        None
    }
}
