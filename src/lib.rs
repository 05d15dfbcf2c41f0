//! K-mer set intersection, difference and simplitig assembly.
//!
//! Sequences are reduced to sets of canonical k-mers, the sets can be
//! intersected or made disjoint, and any set is written back as simplitigs:
//! greedy, vertex-disjoint paths through its de Bruijn graph that together
//! spell every k-mer exactly once.

pub mod error;
pub mod graph;
pub mod io;
pub mod kmer;
pub mod pipeline;
pub mod stats;

pub use error::{Error, Result};
