//! Run summary written as JSON with `--json`.

use std::fs::File;
use std::io::{BufWriter, Write};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::assembler::{AssemblerConfig, AssemblyStats};
use crate::kmer::scan::ScanStats;

#[derive(Debug, Clone, Serialize)]
pub struct SourceSummary {
    pub path: String,
    #[serde(flatten)]
    pub scan: ScanStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutputSummary {
    pub path: String,
    #[serde(flatten)]
    pub assembly: AssemblyStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub k: usize,
    pub assembler: AssemblerConfig,
    pub sources: Vec<SourceSummary>,
    /// Shared k-mers, when more than one source was given
    pub intersection: Option<usize>,
    pub outputs: Vec<OutputSummary>,
}

impl RunSummary {
    pub fn new(k: usize, assembler: AssemblerConfig) -> Self {
        Self {
            k,
            assembler,
            sources: Vec::new(),
            intersection: None,
            outputs: Vec::new(),
        }
    }

    /// Total bases emitted over all outputs.
    pub fn total_length(&self) -> usize {
        self.outputs.iter().map(|o| o.assembly.total_length).sum()
    }

    pub fn write_json(&self, path: &str) -> Result<()> {
        let file = File::create(path).map_err(|e| Error::io(path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self).map_err(|e| Error::io(path, e.into()))?;
        writer.flush().map_err(|e| Error::io(path, e))
    }
}

/// `1234567` -> `1.23` (Mbp, two decimals).
pub fn megabases(bp: u64) -> f64 {
    (bp as f64 * 1e-4).round() * 1e-2
}
