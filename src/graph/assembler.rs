// src/graph/assembler.rs
//! Greedy simplitig assembly over the implicit de Bruijn graph of a k-mer set.
//!
//! The graph is never built: an edge exists whenever the canonical form of a
//! (k-1)-overlap extension is still in the set, so every probe is a set
//! lookup and every accepted k-mer is removed from the set. The set shrinks by
//! at least one code (the seed) per simplitig, which bounds the loop.

use serde::Serialize;
use tracing::debug;

use super::simplitig::{Extension, SimplitigBuffer, DEFAULT_MAX_SIMPLITIG_LEN};
use crate::error::{Error, Result};
use crate::io::fasta::SequenceSink;
use crate::kmer::codec::{complement, decode, encode_canonical, reverse_complement_in_place, MAX_K, NUCLEOTIDES};
use crate::kmer::set::KmerSet;

/// Order in which seed k-mers are taken from the set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum SeedOrder {
    /// Hash-set iteration order
    #[default]
    Arbitrary,
    /// Ascending code order; output is fully reproducible
    Sorted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssemblerConfig {
    /// Maximum length of each side of a simplitig around its seed
    pub max_len: usize,
    pub seed_order: SeedOrder,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_SIMPLITIG_LEN,
            seed_order: SeedOrder::Arbitrary,
        }
    }
}

/// Counters for one assembly run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssemblyStats {
    /// K-mers consumed from the set
    pub kmers: usize,
    /// Simplitigs emitted (NS)
    pub simplitigs: usize,
    /// Bases emitted over all simplitigs
    pub total_length: usize,
    /// Simplitigs stopped by the length bound
    pub truncated: usize,
}

impl AssemblyStats {
    /// Cumulative length implied by the k-mer count: `kmers + NS * (k - 1)`.
    pub fn expected_length(&self, k: usize) -> usize {
        self.kmers + self.simplitigs * (k - 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Right,
    Left,
}

pub struct Assembler {
    k: usize,
    config: AssemblerConfig,
}

impl Assembler {
    pub fn new(k: usize, config: AssemblerConfig) -> Result<Self> {
        if !(1..=MAX_K).contains(&k) {
            return Err(Error::Config(format!("K-mer length must satisfy 1 <= k <= {MAX_K}.")));
        }
        if config.max_len < k {
            return Err(Error::Config(format!(
                "Maximum simplitig length ({}) must be at least k ({k}).",
                config.max_len
            )));
        }
        Ok(Self { k, config })
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Drain `set` into simplitigs named `c1`, `c2`, ... written to `sink`.
    pub fn assemble<S: SequenceSink + ?Sized>(&self, mut set: KmerSet, sink: &mut S) -> Result<AssemblyStats> {
        let k = self.k;
        if set.k() != k {
            return Err(Error::KMismatch { expected: k, found: set.k() });
        }

        let seeds = match self.config.seed_order {
            SeedOrder::Arbitrary => set.iter().collect::<Vec<_>>(),
            SeedOrder::Sorted => set.sorted_codes(),
        };

        let mut stats = AssemblyStats::default();
        let mut buffer = SimplitigBuffer::new(k, self.config.max_len);

        for seed in seeds {
            // already absorbed into an earlier simplitig
            if !set.remove(seed) {
                continue;
            }
            stats.kmers += 1;

            let mut seed_kmer = decode(seed, k).into_bytes();
            buffer.start(&seed_kmer);

            let (right, right_cut) = self.extend(&mut set, &mut buffer, &seed_kmer, Direction::Right);
            reverse_complement_in_place(&mut seed_kmer);
            let (left, left_cut) = self.extend(&mut set, &mut buffer, &seed_kmer, Direction::Left);
            stats.kmers += right + left;

            stats.simplitigs += 1;
            if right_cut || left_cut {
                stats.truncated += 1;
                debug!(
                    "simplitig c{} reached the maximum length ({} bp per side), truncating",
                    stats.simplitigs, self.config.max_len
                );
            }

            let name = format!("c{}", stats.simplitigs);
            let seq = buffer.as_slice();
            stats.total_length += seq.len();
            sink.write_record(&name, None, seq)?;
        }

        debug!(
            "assembled {} k-mers into {} simplitigs ({} truncated)",
            stats.kmers, stats.simplitigs, stats.truncated
        );
        Ok(stats)
    }

    /// Greedily extend from `start` (a k-mer on the strand being walked) until
    /// no successor is left in `set` or the buffer is full.
    ///
    /// Returns the number of k-mers consumed, and whether the bound stopped the
    /// walk while a successor was still present.
    fn extend(
        &self,
        set: &mut KmerSet,
        buffer: &mut SimplitigBuffer,
        start: &[u8],
        direction: Direction,
    ) -> (usize, bool) {
        let k = self.k;
        let mut kmer = [0u8; MAX_K];
        kmer[..k].copy_from_slice(start);

        let mut state = if buffer.is_full() { Extension::Full } else { Extension::Open };
        let mut consumed = 0;
        loop {
            kmer.copy_within(1..k, 0);

            let mut next = None;
            for &base in &NUCLEOTIDES {
                kmer[k - 1] = base;
                if let Some(code) = encode_canonical(&kmer[..k], k).filter(|&code| set.contains(code)) {
                    next = Some((base, code));
                    break;
                }
            }

            let Some((base, code)) = next else { return (consumed, false) };
            if state == Extension::Full {
                // the successor stays in the set and seeds a later simplitig
                return (consumed, true);
            }

            set.remove(code);
            consumed += 1;
            state = match direction {
                Direction::Right => buffer.push_right(base),
                // walking the reverse strand: the base lands complemented on the left
                Direction::Left => buffer.push_left(complement(base)),
            };
        }
    }
}
