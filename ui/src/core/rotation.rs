//! Index state for auto-advancing carousels.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    index: usize,
    len: usize,
}

impl Rotation {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Move to the next slide, wrapping after the last one.
    pub fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Jump to `index`; out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }
}
