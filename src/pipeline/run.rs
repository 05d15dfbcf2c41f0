// src/pipeline/run.rs
//! Sequential driver: scan every source, intersect/subtract, assemble.

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::graph::assembler::{Assembler, AssemblerConfig};
use crate::io::fasta::{FastaWriter, SequenceReader, STDIO_PATH};
use crate::io::stats::StatsWriter;
use crate::kmer::codec::MAX_K;
use crate::kmer::scan::{scan_source, ScanStats};
use crate::kmer::set::KmerSet;
use crate::kmer::set_ops::{check_partition, intersect, subtract};
use crate::stats::{megabases, OutputSummary, RunSummary, SourceSummary};

/// Everything a run needs; built from the command line.
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    pub k: usize,
    /// Input sources (`-` for stdin)
    pub inputs: Vec<String>,
    /// One difference output per input, or none
    pub outputs: Vec<String>,
    /// Output for the shared k-mers
    pub intersection: Option<String>,
    /// Tab-separated k-mer counts
    pub stats: Option<String>,
    /// JSON run summary
    pub json: Option<String>,
    pub assembler: AssemblerConfig,
    /// Echoed in the `# cmd:` line of the stats file
    pub command_line: Vec<String>,
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_K).contains(&self.k) {
            return Err(Error::Config(format!("K-mer length must satisfy 1 <= k <= {MAX_K}.")));
        }
        if self.inputs.is_empty() {
            return Err(Error::Config("At least one input file (-i) is required.".into()));
        }
        if !self.outputs.is_empty() && self.outputs.len() != self.inputs.len() {
            return Err(Error::Config(format!(
                "If -o is used, it must be used as many times as -i ({}!={}).",
                self.inputs.len(),
                self.outputs.len()
            )));
        }
        if self.inputs.len() == 1 && self.outputs.is_empty() {
            return Err(Error::Config("With a single input, an output file (-o) is required.".into()));
        }
        if self.outputs.is_empty() && self.intersection.is_none() {
            return Err(Error::Config("Nothing to compute: use -o and/or -x.".into()));
        }
        if self.assembler.max_len < self.k {
            return Err(Error::Config(format!(
                "Maximum simplitig length ({}) must be at least k ({}).",
                self.assembler.max_len, self.k
            )));
        }
        let fasta_to_stdout = self.outputs.iter().chain(&self.intersection).any(|p| p.as_str() == STDIO_PATH);
        if self.stats.as_deref() == Some(STDIO_PATH) && fasta_to_stdout {
            return Err(Error::Config(
                "The statistics file (-s) and a simplitig output (-o/-x) cannot both be '-'.".into(),
            ));
        }
        Ok(())
    }
}

fn banner(title: &str) {
    let rule = "=".repeat(title.len());
    info!("{}", rule);
    info!("{}", title);
    info!("{}", rule);
}

fn load_source(path: &str, k: usize) -> Result<(KmerSet, ScanStats)> {
    info!("   fasta loading ({})", path);
    let reader = SequenceReader::open(path)?;
    let (set, scan) = scan_source(reader, k)?;
    info!(
        "      #kmers={}, NS={}, CL={} bp ({} Mbp)",
        scan.kmers,
        scan.sequences,
        scan.total_length,
        megabases(scan.total_length)
    );
    Ok((set, scan))
}

fn assemble_into(
    assembler: &Assembler,
    set: KmerSet,
    path: &str,
    stats: Option<&mut StatsWriter>,
) -> Result<OutputSummary> {
    if let Some(stats) = stats {
        stats.record(path, set.len())?;
    }

    let mut writer = FastaWriter::create(path)?;
    let assembly = assembler.assemble(set, &mut writer)?;
    writer.finish()?;

    let cl = assembly.expected_length(assembler.k());
    info!("   simplitig computation finished ({})", path);
    info!(
        "      #kmers={}, NS={}, CL={} bp ({} Mbp)",
        assembly.kmers,
        assembly.simplitigs,
        cl,
        megabases(cl as u64)
    );
    if assembly.truncated > 0 {
        warn!(
            "      {} simplitigs hit the length bound; emitted {} bp",
            assembly.truncated, assembly.total_length
        );
    }

    Ok(OutputSummary { path: path.to_string(), assembly })
}

/// Run the whole computation described by `config`.
pub fn run(config: &PipelineConfig) -> Result<RunSummary> {
    config.validate()?;
    let k = config.k;
    let assembler = Assembler::new(k, config.assembler.clone())?;
    let mut summary = RunSummary::new(k, config.assembler.clone());

    let mut stats = config.stats.as_deref().map(StatsWriter::create).transpose()?;
    if let Some(stats) = stats.as_mut() {
        stats.write_command(&config.command_line)?;
    }

    banner("1) Loading input files");
    let mut sets = Vec::with_capacity(config.inputs.len());
    for path in &config.inputs {
        let (set, scan) = load_source(path, k)?;
        if let Some(stats) = stats.as_mut() {
            stats.record(path, set.len())?;
        }
        summary.sources.push(SourceSummary { path: path.clone(), scan });
        sets.push(set);
    }

    if sets.len() == 1 {
        if config.intersection.is_some() {
            warn!("-x has no effect with a single input; ignoring it");
        }
        if let Some(set) = sets.pop() {
            banner("2) Computing simplitigs");
            let out = assemble_into(&assembler, set, &config.outputs[0], stats.as_mut())?;
            summary.outputs.push(out);
        }
    } else {
        banner("2) Intersecting");
        info!("2.1) Computing the intersection");
        let intersection = intersect(&sets)?;
        info!("   intersection: #kmers={}", intersection.len());
        summary.intersection = Some(intersection.len());

        if !config.outputs.is_empty() {
            info!("2.2) Computing set differences");
            let original: Vec<usize> = sets.iter().map(KmerSet::len).collect();
            subtract(&mut sets, &intersection)?;
            check_partition(&original, &sets, intersection.len())?;
            for (before, after) in original.iter().zip(&sets) {
                info!("   input: #kmers={}, output: #kmers={}", before, after.len());
            }
        }

        banner("3) Computing simplitigs");
        if !config.outputs.is_empty() {
            for (set, path) in sets.into_iter().zip(&config.outputs) {
                let out = assemble_into(&assembler, set, path, stats.as_mut())?;
                summary.outputs.push(out);
            }
        }
        if let Some(path) = &config.intersection {
            let out = assemble_into(&assembler, intersection, path, stats.as_mut())?;
            summary.outputs.push(out);
        }
    }

    if let Some(stats) = stats {
        stats.finish()?;
    }
    if let Some(path) = &config.json {
        summary.write_json(path)?;
    }
    Ok(summary)
}
