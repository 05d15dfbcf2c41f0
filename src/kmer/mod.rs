//! K-mer encoding, per-source k-mer sets and set algebra

pub mod codec;
pub mod scan;
pub mod set;
pub mod set_ops;

pub use set::KmerSet;
