//! Simplitig assembly over the implicit de Bruijn graph of a k-mer set

pub mod assembler;
pub mod simplitig;
