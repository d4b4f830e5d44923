//! Swappable allocation strategy for line-index storage.
//!
//! A reallocator follows a single-entry protocol:
//!
//! | block     | size | effect                                   |
//! |-----------|------|------------------------------------------|
//! | `None`    | > 0  | allocate a block of at least `size` bytes |
//! | `Some(b)` | 0    | free `b`, returns `None`                  |
//! | `Some(b)` | > 0  | resize `b` to hold `size` bytes           |
//!
//! Returning `None` for an allocation request signals failure.

/// Allocation strategy used for the owned line copies of a [`LineIndex`].
///
/// Any `Fn(Option<Vec<u8>>, usize) -> Option<Vec<u8>>` closure is a
/// reallocator, so hosts can redirect allocation without a new type.
///
/// [`LineIndex`]: crate::LineIndex
pub trait Reallocator {
    fn reallocate(&self, block: Option<Vec<u8>>, size: usize) -> Option<Vec<u8>>;
}

impl<F> Reallocator for F
where
    F: Fn(Option<Vec<u8>>, usize) -> Option<Vec<u8>>,
{
    fn reallocate(&self, block: Option<Vec<u8>>, size: usize) -> Option<Vec<u8>> {
        self(block, size)
    }
}

/// The default reallocator, backed by the global allocator.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemReallocator;

impl Reallocator for SystemReallocator {
    fn reallocate(&self, block: Option<Vec<u8>>, size: usize) -> Option<Vec<u8>> {
        match (block, size) {
            (_, 0) => None,
            (None, size) => Some(Vec::with_capacity(size)),
            (Some(mut block), size) => {
                if size > block.capacity() {
                    block.reserve_exact(size - block.len());
                } else {
                    block.truncate(size);
                    block.shrink_to(size);
                }
                Some(block)
            }
        }
    }
}
