// src/kmer/codec.rs
//! 2-bit k-mer encoding.
//!
//! DNA bases are encoded as:
//! - A = 00 (0)
//! - C = 01 (1)
//! - G = 10 (2)
//! - T = 11 (3)
//!
//! Bases are packed most-significant first, so a k-mer of up to 32 bases fits
//! in a single `u64` and numeric order matches lexicographic order.

/// Longest k-mer representable in a `u64` code.
pub const MAX_K: usize = 32;

/// Bases in code order; also the order in which extensions are tried.
pub const NUCLEOTIDES: [u8; 4] = [b'A', b'C', b'G', b'T'];

/// Encode a single nucleotide to 2 bits
#[inline]
pub fn encode_base(base: u8) -> Option<u8> {
    match base {
        b'A' | b'a' => Some(0),
        b'C' | b'c' => Some(1),
        b'G' | b'g' => Some(2),
        b'T' | b't' => Some(3),
        _ => None, // N or other ambiguity codes
    }
}

/// Decode 2 bits back to an uppercase nucleotide
#[inline]
pub fn decode_base(bits: u8) -> u8 {
    NUCLEOTIDES[(bits & 0b11) as usize]
}

/// Watson-Crick partner of a base; anything else is returned unchanged.
#[inline]
pub fn complement(base: u8) -> u8 {
    match encode_base(base) {
        Some(v) => decode_base(3 - v),
        None => base,
    }
}

/// Pack the first `k` bases of `seq` left-to-right.
///
/// Returns `None` if any of them is not a nucleotide.
#[inline]
pub fn encode_forward(seq: &[u8], k: usize) -> Option<u64> {
    debug_assert!((1..=MAX_K).contains(&k) && seq.len() >= k);
    let mut code = 0u64;
    for &b in &seq[..k] {
        code = (code << 2) | encode_base(b)? as u64;
    }
    Some(code)
}

/// Pack the reverse complement of the first `k` bases of `seq`.
#[inline]
pub fn encode_reverse(seq: &[u8], k: usize) -> Option<u64> {
    debug_assert!((1..=MAX_K).contains(&k) && seq.len() >= k);
    let mut code = 0u64;
    for &b in seq[..k].iter().rev() {
        code = (code << 2) | (3 - encode_base(b)?) as u64;
    }
    Some(code)
}

/// Canonical code: the smaller of the forward and reverse-complement codes.
#[inline]
pub fn encode_canonical(seq: &[u8], k: usize) -> Option<u64> {
    let fwd = encode_forward(seq, k)?;
    let rev = encode_reverse(seq, k)?;
    Some(fwd.min(rev))
}

/// Decode a code back to its k-mer string (inverse of [`encode_forward`]).
pub fn decode(code: u64, k: usize) -> String {
    let mut kmer = String::with_capacity(k);
    for i in (0..k).rev() {
        kmer.push(decode_base(((code >> (i * 2)) & 0b11) as u8) as char);
    }
    kmer
}

/// Reverse complement computed directly on a code.
pub fn reverse_complement_code(code: u64, k: usize) -> u64 {
    let mut rc = 0u64;
    let mut rest = code;
    for _ in 0..k {
        rc = (rc << 2) | ((rest & 0b11) ^ 0b11);
        rest >>= 2;
    }
    rc
}

/// Reverse-complement a sequence in place. Non-nucleotide bytes are kept.
pub fn reverse_complement_in_place(seq: &mut [u8]) {
    seq.reverse();
    for b in seq.iter_mut() {
        *b = complement(*b);
    }
}

/// Returns the reverse complement of a DNA sequence
pub fn reverse_complement(seq: &str) -> String {
    let mut bytes = seq.as_bytes().to_vec();
    reverse_complement_in_place(&mut bytes);
    // complement() maps ASCII to ASCII
    String::from_utf8_lossy(&bytes).into_owned()
}
