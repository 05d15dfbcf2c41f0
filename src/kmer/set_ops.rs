// src/kmer/set_ops.rs
//! Intersection and difference over per-source k-mer sets.

use super::set::KmerSet;
use crate::error::{Error, Result};

fn check_k(sets: &[KmerSet], k: usize) -> Result<()> {
    match sets.iter().find(|s| s.k() != k) {
        Some(s) => Err(Error::KMismatch { expected: k, found: s.k() }),
        None => Ok(()),
    }
}

/// Codes present in every one of `sets`.
///
/// The smallest set (first one on ties) seeds the result, which is then
/// filtered against every set.
pub fn intersect(sets: &[KmerSet]) -> Result<KmerSet> {
    let seed = sets
        .iter()
        .min_by_key(|s| s.len())
        .ok_or(Error::NoInputs)?;
    check_k(sets, seed.k())?;

    let mut intersection = seed.clone();
    for set in sets {
        intersection.retain(|code| set.contains(code));
    }
    Ok(intersection)
}

/// Remove every code of `subtrahend` from each of `sets`.
///
/// Returns the total number of codes removed; a repeated call removes nothing.
pub fn subtract(sets: &mut [KmerSet], subtrahend: &KmerSet) -> Result<usize> {
    check_k(sets, subtrahend.k())?;

    let mut removed = 0;
    for set in sets.iter_mut() {
        for code in subtrahend.iter() {
            if set.remove(code) {
                removed += 1;
            }
        }
    }
    Ok(removed)
}

/// Check `original[i] == difference[i] + intersection` for every source.
pub fn check_partition(original: &[usize], differences: &[KmerSet], intersection: usize) -> Result<()> {
    for (i, (&before, after)) in original.iter().zip(differences).enumerate() {
        if before != after.len() + intersection {
            return Err(Error::Invariant(format!(
                "source {}: {} k-mers != {} unique + {} shared",
                i + 1,
                before,
                after.len(),
                intersection
            )));
        }
    }
    Ok(())
}
