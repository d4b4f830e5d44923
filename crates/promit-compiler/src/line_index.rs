use crate::alloc::Reallocator;
use crate::CompileError;

/// Capacity of the line table before the first growth.
const INITIAL_CAPACITY: usize = 8;

/// Table of source lines, used to show the offending line in diagnostics.
///
/// Line `n` (1-based, as in [`promit_lexer::Span::line`]) is stored at
/// index `n - 1`, without its trailing `\n`. A last line with no trailing
/// newline is still captured. Every line copy comes from the reallocator
/// the index was built with and is handed back to it when the index is
/// dropped.
pub struct LineIndex<'r> {
    lines: Vec<Vec<u8>>,
    reallocator: &'r dyn Reallocator,
}

impl<'r> LineIndex<'r> {
    /// Split `source` into lines with a single forward scan.
    pub fn build(source: &str, reallocator: &'r dyn Reallocator) -> Result<Self, CompileError> {
        let mut index = LineIndex {
            lines: Vec::with_capacity(INITIAL_CAPACITY),
            reallocator,
        };

        for line in source.split_inclusive('\n') {
            index.push(line.strip_suffix('\n').unwrap_or(line))?;
        }

        Ok(index)
    }

    fn push(&mut self, text: &str) -> Result<(), CompileError> {
        if self.lines.len() == self.lines.capacity() {
            let capacity = (self.lines.len() + 1).next_power_of_two();
            self.lines.reserve_exact(capacity - self.lines.len());
        }

        let size = text.len().max(1);
        let mut block = self
            .reallocator
            .reallocate(None, size)
            .ok_or(CompileError::AllocationFailed { size })?;
        block.clear();
        block.extend_from_slice(text.as_bytes());

        self.lines.push(block);
        Ok(())
    }

    /// Text of the 1-based line `line`, or `None` past the last line.
    pub fn line_text(&self, line: usize) -> Option<&str> {
        let block = self.lines.get(line.checked_sub(1)?)?;
        std::str::from_utf8(block).ok()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.lines.capacity()
    }

    /// Iterate over the lines in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines
            .iter()
            .filter_map(|block| std::str::from_utf8(block).ok())
    }
}

impl Drop for LineIndex<'_> {
    fn drop(&mut self) {
        for block in self.lines.drain(..) {
            let _ = self.reallocator.reallocate(Some(block), 0);
        }
    }
}

impl std::fmt::Debug for LineIndex<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
