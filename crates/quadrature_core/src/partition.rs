//! Static contiguous partitioning of the iteration space.
//!
//! The index range `[0, N)` is divided once, before execution, into
//! contiguous blocks whose sizes differ by at most one. Each block is summed
//! sequentially by one worker into a private accumulator; there is no
//! runtime rebalancing between blocks.

/// A contiguous half-open block `[start, end)` of the iteration space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block {
    /// First index of the block (inclusive).
    pub start: u64,
    /// One past the last index of the block (exclusive).
    pub end: u64,
}

impl Block {
    /// Returns the number of indices in the block.
    #[inline]
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    /// Returns `true` if the block contains no indices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Partitions `[0, n)` into at most `blocks` contiguous blocks.
///
/// The first `n % blocks` blocks receive one extra index, so block sizes
/// differ by at most one. When `n < blocks`, only `n` single-index blocks
/// are produced; empty blocks are never emitted.
///
/// # Examples
///
/// ```rust
/// use quadrature_core::partition;
///
/// let blocks = partition(10, 4);
/// assert_eq!(blocks.len(), 4);
/// assert_eq!(blocks[0].len(), 3); // 10 % 4 == 2 blocks of 3
/// assert_eq!(blocks[3].len(), 2);
/// assert_eq!(blocks.last().unwrap().end, 10);
/// ```
pub fn partition(n: u64, blocks: usize) -> Vec<Block> {
    if n == 0 {
        return Vec::new();
    }

    let blocks = (blocks.max(1) as u64).min(n);
    let mut out = Vec::with_capacity(blocks as usize);

    let base = n / blocks;
    let extra = n % blocks;

    let mut start = 0;
    for b in 0..blocks {
        let len = base + u64::from(b < extra);
        out.push(Block {
            start,
            end: start + len,
        });
        start += len;
    }
    out
}
