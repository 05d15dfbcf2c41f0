use clap::Parser;

use kmerset::graph::assembler::{AssemblerConfig, SeedOrder};
use kmerset::graph::simplitig::DEFAULT_MAX_SIMPLITIG_LEN;
use kmerset::pipeline::PipelineConfig;

#[derive(Parser, Debug)]
#[command(
    name = "kmerset",
    version,
    about = "Computation of simplitigs and k-mer set operations",
    after_help = "Examples:\n  \
        kmerset -k 31 -i ref.fa -o simplitigs.fa\n      compute simplitigs of ref.fa\n  \
        kmerset -k 31 -i ref1.fa -i ref2.fa -x inter.fa\n      intersect the k-mer sets of ref1 and ref2\n  \
        kmerset -k 31 -i ref1.fa -i ref2.fa -x inter.fa -o dif1.fa -o dif2.fa\n      intersect ref1 and ref2, and compute the set differences\n\n\
        Note that '-' can be used for standard input/output."
)]
pub struct Cli {
    /// K-mer length (from [1, 32])
    #[arg(short, value_name = "INT")]
    pub k: usize,

    /// Input FASTA/FASTQ file, optionally gzipped (can be used multiple times)
    #[arg(short = 'i', value_name = "FILE")]
    pub inputs: Vec<String>,

    /// Output FASTA file (if used, must be used as many times as -i)
    #[arg(short = 'o', value_name = "FILE")]
    pub outputs: Vec<String>,

    /// Compute intersection, subtract it, save it
    #[arg(short = 'x', value_name = "FILE")]
    pub intersection: Option<String>,

    /// Output file with k-mer statistics
    #[arg(short = 's', value_name = "FILE")]
    pub stats: Option<String>,

    /// Silent mode
    #[arg(short = 'S')]
    pub silent: bool,

    /// Maximum simplitig length on each side of its seed k-mer
    #[arg(long, value_name = "INT", default_value_t = DEFAULT_MAX_SIMPLITIG_LEN)]
    pub max_len: usize,

    /// Take seed k-mers in ascending order (reproducible output)
    #[arg(long)]
    pub sorted_seeds: bool,

    /// Write a JSON run summary
    #[arg(long, value_name = "FILE")]
    pub json: Option<String>,
}

impl Cli {
    /// Pipeline configuration; `command_line` is echoed into the stats file.
    pub fn into_config(self, command_line: Vec<String>) -> PipelineConfig {
        let seed_order = if self.sorted_seeds { SeedOrder::Sorted } else { SeedOrder::Arbitrary };
        PipelineConfig {
            k: self.k,
            inputs: self.inputs,
            outputs: self.outputs,
            intersection: self.intersection,
            stats: self.stats,
            json: self.json,
            assembler: AssemblerConfig { max_len: self.max_len, seed_order },
            command_line,
        }
    }
}
