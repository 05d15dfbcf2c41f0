// src/graph/simplitig.rs
//! Two-sided growable sequence buffer used while extending a simplitig.

use std::collections::VecDeque;

/// Default maximum simplitig length in bases.
pub const DEFAULT_MAX_SIMPLITIG_LEN: usize = 10_000_000;

/// Outcome of adding one base to a [`SimplitigBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extension {
    /// More bases may be added
    Open,
    /// One side reached its bound; extension must stop
    Full,
}

/// Sequence buffer grown from a seed k-mer in both directions.
///
/// The right side (seed plus appended bases) and the left side (prepended
/// bases) are each bounded by `max_len`. The allocation is kept between
/// simplitigs.
#[derive(Debug)]
pub struct SimplitigBuffer {
    seq: VecDeque<u8>,
    /// Number of bases prepended to the seed
    left_len: usize,
    max_len: usize,
}

impl SimplitigBuffer {
    pub fn new(k: usize, max_len: usize) -> Self {
        debug_assert!(k <= max_len);
        Self {
            seq: VecDeque::with_capacity((k * 64).min(max_len)),
            left_len: 0,
            max_len,
        }
    }

    /// Reset the buffer to a new seed k-mer.
    pub fn start(&mut self, seed: &[u8]) {
        self.seq.clear();
        self.seq.extend(seed.iter().copied());
        self.left_len = 0;
    }

    #[inline]
    fn right_len(&self) -> usize {
        self.seq.len() - self.left_len
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.right_len() >= self.max_len || self.left_len >= self.max_len
    }

    #[inline]
    fn state(&self) -> Extension {
        if self.is_full() {
            Extension::Full
        } else {
            Extension::Open
        }
    }

    /// Append a base at the right edge.
    pub fn push_right(&mut self, base: u8) -> Extension {
        debug_assert!(!self.is_full());
        self.seq.push_back(base);
        self.state()
    }

    /// Prepend a base at the left edge.
    pub fn push_left(&mut self, base: u8) -> Extension {
        debug_assert!(!self.is_full());
        self.seq.push_front(base);
        self.left_len += 1;
        self.state()
    }

    /// Current simplitig as one contiguous slice.
    pub fn as_slice(&mut self) -> &[u8] {
        self.seq.make_contiguous()
    }
}
