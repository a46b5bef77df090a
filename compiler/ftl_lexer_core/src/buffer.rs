//! Borrowed view of the region of a document being lexed.
//!
//! Editors relex a slice `[start, end)` of a larger buffer. The view keeps
//! the whole buffer so scanners can look behind the start, and clamps the
//! range so every later offset computation is in bounds.

use crate::cursor::{to_u32, Cursor};

/// Immutable `[start, end)` window over a source string.
///
/// # Invariant
///
/// `start <= end <= source.len()`, and both offsets lie on UTF-8
/// character boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BufferView<'a> {
    source: &'a str,
    start: u32,
    end: u32,
}

impl<'a> BufferView<'a> {
    /// Create a view, clamping `end` to the source length and `start` to
    /// `end`. Offsets inside a multi-byte character snap back to its first
    /// byte.
    ///
    /// Sources longer than `u32::MAX` bytes are visible up to `u32::MAX`.
    pub fn new(source: &'a str, start: u32, end: u32) -> Self {
        let end = floor_char_boundary(source, end.min(to_u32(source.len())));
        let start = floor_char_boundary(source, start.min(end));
        Self { source, start, end }
    }

    /// View over the whole source.
    pub fn full(source: &'a str) -> Self {
        Self::new(source, 0, u32::MAX)
    }

    /// The whole buffer, including text outside the view.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    #[inline]
    pub fn start(&self) -> u32 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> u32 {
        self.end
    }

    #[inline]
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Text inside the view.
    pub fn text(&self) -> &'a str {
        self.source
            .get(self.start as usize..self.end as usize)
            .unwrap_or_default()
    }

    /// Cursor at `pos`, clamped into the view. Lookahead stops at the
    /// view end.
    pub fn cursor_at(&self, pos: u32) -> Cursor<'a> {
        let pos = floor_char_boundary(self.source, pos.clamp(self.start, self.end));
        Cursor::new(self.source, pos, self.end)
    }
}

/// Largest character boundary `<= offset`. `offset` must be within `source`.
fn floor_char_boundary(source: &str, offset: u32) -> u32 {
    let mut at = offset as usize;
    while at > 0 && !source.is_char_boundary(at) {
        at -= 1;
    }
    to_u32(at)
}

#[cfg(test)]
mod tests;
