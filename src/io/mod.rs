pub mod fasta;
pub mod stats;
