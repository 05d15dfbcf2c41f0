// src/kmer/set.rs
use ahash::AHashSet;

use super::codec::{decode, encode_canonical};

/// A set of canonical k-mer codes for a fixed `k`.
///
/// Each set has a single owner at a time: the scanner builds it, set
/// operations mutate it through `&mut`, and the assembler consumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KmerSet {
    k: usize,
    codes: AHashSet<u64>,
}

impl KmerSet {
    pub fn new(k: usize) -> Self {
        Self { k, codes: AHashSet::new() }
    }

    /// Build a set from canonical codes.
    pub fn from_codes<I: IntoIterator<Item = u64>>(k: usize, codes: I) -> Self {
        Self { k, codes: codes.into_iter().collect() }
    }

    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Insert a canonical code. Returns `false` if it was already present.
    #[inline]
    pub fn insert(&mut self, code: u64) -> bool {
        self.codes.insert(code)
    }

    #[inline]
    pub fn contains(&self, code: u64) -> bool {
        self.codes.contains(&code)
    }

    #[inline]
    pub fn remove(&mut self, code: u64) -> bool {
        self.codes.remove(&code)
    }

    /// Keep only the codes for which `keep` returns true.
    pub fn retain<F: FnMut(u64) -> bool>(&mut self, mut keep: F) {
        self.codes.retain(|&code| keep(code));
    }

    /// Canonicalize the first `k` bases of `kmer` and test membership.
    pub fn contains_kmer(&self, kmer: &[u8]) -> bool {
        kmer.len() >= self.k && encode_canonical(kmer, self.k).is_some_and(|c| self.contains(c))
    }

    /// Codes in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.codes.iter().copied()
    }

    /// Codes in ascending numeric order.
    pub fn sorted_codes(&self) -> Vec<u64> {
        let mut codes: Vec<u64> = self.iter().collect();
        codes.sort_unstable();
        codes
    }

    /// Decoded k-mers in ascending code order.
    pub fn to_strings(&self) -> Vec<String> {
        self.sorted_codes().into_iter().map(|c| decode(c, self.k)).collect()
    }
}
