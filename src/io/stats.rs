// src/io/stats.rs
//! Tab-separated k-mer count report (`-s`).

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use super::fasta::STDIO_PATH;
use crate::error::{Error, Result};

/// Writes `# cmd: ...` followed by one `label\tcount` line per set.
pub struct StatsWriter {
    path: PathBuf,
    writer: Box<dyn Write>,
}

impl StatsWriter {
    pub fn create(path: &str) -> Result<Self> {
        let writer: Box<dyn Write> = if path == STDIO_PATH {
            Box::new(BufWriter::new(io::stdout()))
        } else {
            Box::new(BufWriter::new(File::create(path).map_err(|e| Error::io(path, e))?))
        };
        Ok(Self::from_writer(path, writer))
    }

    pub fn from_writer(label: impl Into<PathBuf>, writer: Box<dyn Write>) -> Self {
        Self { path: label.into(), writer }
    }

    /// Header line recording the invocation.
    pub fn write_command(&mut self, args: &[String]) -> Result<()> {
        let line = format!("# cmd: {}", args.join(" "));
        self.write_line(&line)
    }

    pub fn record(&mut self, label: &str, count: usize) -> Result<()> {
        let line = format!("{}\t{}", label, count);
        self.write_line(&line)
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line).map_err(|e| Error::io(&self.path, e))
    }

    pub fn finish(mut self) -> Result<()> {
        self.writer.flush().map_err(|e| Error::io(&self.path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_stats_file_format() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();

        let mut stats = StatsWriter::create(path).unwrap();
        let args: Vec<String> = ["kmerset", "-k", "31", "-i", "a.fa"].iter().map(|s| s.to_string()).collect();
        stats.write_command(&args).unwrap();
        stats.record("a.fa", 1234).unwrap();
        stats.record("out.fa", 17).unwrap();
        stats.finish().unwrap();

        let text = std::fs::read_to_string(path).unwrap();
        assert_eq!(text, "# cmd: kmerset -k 31 -i a.fa\na.fa\t1234\nout.fa\t17\n");
    }
}
