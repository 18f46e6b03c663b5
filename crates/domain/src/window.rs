use std::ops::Range;

/// Section of the search array to scan: `count` elements from `start`.
///
/// Values are trusted; bounds are checked by the caller before a window is
/// built from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Window {
    pub start: usize,
    pub count: usize,
}

impl Window {
    pub const fn new(start: usize, count: usize) -> Self {
        Self { start, count }
    }

    /// Window covering an entire array of `len` elements.
    pub const fn whole(len: usize) -> Self {
        Self { start: 0, count: len }
    }

    #[inline]
    pub const fn end(&self) -> usize {
        self.start + self.count
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub const fn indices(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Borrows the covered section, or `None` if it does not fit `array`.
    pub fn section<'a, T>(&self, array: &'a [T]) -> Option<&'a [T]> {
        array.get(self.indices())
    }
}
