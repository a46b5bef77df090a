//! Copyable cursor over a bounded window of the source.
//!
//! Reads past the window end return `0x00`, so scanners can test
//! `current()`, `peek()` and `peek2()` without bounds checks. The window
//! end is an offset into the whole buffer, not the buffer length: text
//! after it is invisible to lookahead.
//!
//! The cursor only ever stops on UTF-8 character boundaries. Byte steps are
//! taken over ASCII bytes; everything else goes through the `_char`
//! methods, which move a whole scalar value.

/// Cursor over `source[..end]`, positioned at `pos`.
///
/// Created via [`BufferView::cursor_at`](crate::BufferView::cursor_at).
/// The cursor is [`Copy`]; scanners probe ahead on a copy and report the
/// end offset, leaving the original untouched.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: u32,
    /// Exclusive end of the visible window.
    end: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str, pos: u32, end: u32) -> Self {
        debug_assert!(pos <= end, "cursor position past window end");
        debug_assert!(end as usize <= source.len(), "window end past source");
        Self { source, pos, end }
    }

    /// Byte at the current position, or `0x00` at the window end.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Byte one ahead, or `0x00` past the window end.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos.saturating_add(1))
    }

    /// Byte two ahead, or `0x00` past the window end.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.byte_at(self.pos.saturating_add(2))
    }

    /// Byte just before the cursor, or `0x00` at offset 0.
    ///
    /// Reads the whole buffer: the byte may lie before the window start.
    #[inline]
    pub fn prev(&self) -> u8 {
        match self.pos.checked_sub(1) {
            Some(at) => self.source.as_bytes()[at as usize],
            None => 0,
        }
    }

    #[inline]
    fn byte_at(&self, at: u32) -> u8 {
        if at < self.end {
            self.source.as_bytes()[at as usize]
        } else {
            0
        }
    }

    /// Character at the current position, or `None` at the window end.
    pub fn current_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Exclusive end of the visible window.
    #[inline]
    pub fn end(&self) -> u32 {
        self.end
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.end
    }

    /// Whether the visible text at the cursor begins with `pattern`.
    ///
    /// A pattern that would run past the window end never matches.
    #[inline]
    pub fn starts_with(&self, pattern: &[u8]) -> bool {
        self.remaining().starts_with(pattern)
    }

    /// Visible bytes from the cursor to the window end.
    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        &self.source.as_bytes()[self.pos as usize..self.end as usize]
    }

    /// Visible text from the cursor to the window end.
    fn rest(&self) -> &'a str {
        self.source
            .get(self.pos as usize..self.end as usize)
            .unwrap_or_default()
    }

    /// Text from the cursor up to `end`.
    pub fn slice_to(&self, end: u32) -> &'a str {
        self.source
            .get(self.pos as usize..end.min(self.end) as usize)
            .unwrap_or_default()
    }

    /// Advance one byte. The current byte must be ASCII.
    #[inline]
    pub fn advance(&mut self) {
        debug_assert!(self.current().is_ascii(), "byte step over non-ASCII");
        if self.pos < self.end {
            self.pos += 1;
        }
    }

    /// Offset just past the current character, or the window end at EOF.
    pub fn next_char_end(&self) -> u32 {
        let width = self.current_char().map_or(0, char::len_utf8);
        self.pos + to_u32(width)
    }

    /// Advance one whole character.
    #[inline]
    pub fn advance_char(&mut self) {
        self.pos = self.next_char_end();
    }

    /// Advance while `pred` holds for the current byte.
    ///
    /// `pred` must reject `0x00` and only accept ASCII bytes.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current()) && !self.is_eof() {
            self.pos += 1;
        }
    }

    /// Advance while `pred` holds for the current character.
    pub fn eat_while_char(&mut self, pred: impl Fn(char) -> bool) {
        let taken: usize = self
            .rest()
            .chars()
            .take_while(|&c| pred(c))
            .map(char::len_utf8)
            .sum();
        self.pos += to_u32(taken);
    }

    /// Advance to the next occurrence of `a` or `b` (both ASCII), returning
    /// the byte found. Stops at the window end and returns `0x00` if
    /// neither occurs.
    pub fn skip_to_either(&mut self, a: u8, b: u8) -> u8 {
        debug_assert!(a.is_ascii() && b.is_ascii(), "needles must be ASCII");
        match memchr::memchr2(a, b, self.remaining()) {
            Some(offset) => {
                self.pos += to_u32(offset);
                self.current()
            }
            None => {
                self.pos = self.end;
                0
            }
        }
    }
}

/// Saturating `usize` to `u32` conversion for offsets.
pub(crate) fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests;
