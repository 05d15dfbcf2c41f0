//! End-to-end k-mer set pipeline

pub mod run;

pub use run::{run, PipelineConfig};
