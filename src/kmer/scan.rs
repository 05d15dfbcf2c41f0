// src/kmer/scan.rs
//! Sliding-window extraction of canonical k-mers from sequence records.

use serde::Serialize;

use super::codec::encode_canonical;
use super::set::KmerSet;
use crate::error::Result;
use crate::io::fasta::SequenceRecord;

/// Summary of one scanned source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    /// Number of sequence records
    pub sequences: u64,
    /// Cumulative sequence length in bp
    pub total_length: u64,
    /// Distinct canonical k-mers collected
    pub kmers: usize,
}

/// Insert every valid canonical k-mer of `seq` into `set`.
///
/// Windows containing a non-nucleotide symbol are skipped. Returns the
/// number of windows that encoded successfully.
pub fn scan_sequence(set: &mut KmerSet, seq: &[u8]) -> usize {
    let k = set.k();
    if seq.len() < k {
        return 0;
    }

    let mut encoded = 0;
    for window in seq.windows(k) {
        if let Some(code) = encode_canonical(window, k) {
            set.insert(code);
            encoded += 1;
        }
    }
    encoded
}

/// Collect the k-mer set of one source.
///
/// The first reader error aborts the scan.
pub fn scan_source<I>(records: I, k: usize) -> Result<(KmerSet, ScanStats)>
where
    I: IntoIterator<Item = Result<SequenceRecord>>,
{
    let mut set = KmerSet::new(k);
    let mut stats = ScanStats::default();

    for record in records {
        let record = record?;
        stats.sequences += 1;
        stats.total_length += record.seq.len() as u64;
        scan_sequence(&mut set, &record.seq);
    }

    stats.kmers = set.len();
    Ok((set, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kmer::codec::encode_forward;

    fn record(seq: &str) -> Result<SequenceRecord> {
        Ok(SequenceRecord::new("r", seq.as_bytes().to_vec()))
    }

    #[test]
    fn test_scan_simple_sequence() {
        let mut set = KmerSet::new(3);
        assert_eq!(scan_sequence(&mut set, b"ACGTACG"), 5);
        // ACG/CGT and GTA/TAC are reverse-complement pairs
        assert_eq!(set.len(), 2);
        for kmer in ["ACG", "CGT", "GTA", "TAC"] {
            assert!(set.contains_kmer(kmer.as_bytes()), "{kmer} missing");
        }
    }

    #[test]
    fn test_windows_with_n_are_skipped() {
        let mut set = KmerSet::new(3);
        // ACG | CGN GNT NTA skipped | TAC ACG CGT
        assert_eq!(scan_sequence(&mut set, b"ACGNTACGT"), 4);
        assert_eq!(set.len(), 2);
        assert!(set.contains_kmer(b"TAC"));
        assert!(set.contains_kmer(b"CGT"));
        assert!(set.contains(encode_forward(b"ACG", 3).unwrap()));
        assert!(set.contains(encode_forward(b"GTA", 3).unwrap()));
        assert!(!set.contains_kmer(b"CGN"));
    }

    #[test]
    fn test_short_sequence_contributes_nothing() {
        let mut set = KmerSet::new(5);
        assert_eq!(scan_sequence(&mut set, b"ACGT"), 0);
        assert!(set.is_empty());
    }

    #[test]
    fn test_scan_source_stats() {
        let records = vec![record("ACGTACG"), record("NNNN"), record("")];
        let (set, stats) = scan_source(records, 3).unwrap();
        assert_eq!(stats.sequences, 3);
        assert_eq!(stats.total_length, 11);
        assert_eq!(stats.kmers, 2);
        assert_eq!(set.len(), 2);
    }
}
