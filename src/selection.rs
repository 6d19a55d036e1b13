/// Highlighted position inside the catalog.
///
/// Moves clamp at both ends; there is no wraparound. With an empty catalog
/// every operation is a no-op and [`Selection::current`] is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    index: usize,
    len: usize,
}

impl Selection {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    pub fn move_up(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = self.index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + 1).min(self.len - 1);
    }

    /// Jumps to the 1-based position `n`; out-of-range values are ignored.
    /// Returns whether the selection moved.
    pub fn jump_to(&mut self, n: usize) -> bool {
        if n == 0 || n > self.len {
            return false;
        }
        self.index = n - 1;
        true
    }
}
