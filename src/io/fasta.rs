// src/io/fasta.rs
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Stdout, Write};
use std::path::{Path, PathBuf};

use bio::io::{fasta, fastq};
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::{Error, Result};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Path that stands for stdin or stdout.
pub const STDIO_PATH: &str = "-";

/// A named nucleotide sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    pub name: String,
    pub comment: Option<String>,
    pub seq: Vec<u8>,
}

impl SequenceRecord {
    pub fn new(name: impl Into<String>, seq: Vec<u8>) -> Self {
        Self { name: name.into(), comment: None, seq }
    }
}

/// Destination for assembled sequences.
pub trait SequenceSink {
    fn write_record(&mut self, name: &str, comment: Option<&str>, seq: &[u8]) -> Result<()>;
}

impl SequenceSink for Vec<SequenceRecord> {
    fn write_record(&mut self, name: &str, comment: Option<&str>, seq: &[u8]) -> Result<()> {
        self.push(SequenceRecord {
            name: name.to_string(),
            comment: comment.map(str::to_string),
            seq: seq.to_vec(),
        });
        Ok(())
    }
}

enum Records {
    Fasta(fasta::Records<Box<dyn BufRead>>),
    Fastq(fastq::Records<Box<dyn BufRead>>),
    Empty,
}

/// Streaming FASTA/FASTQ reader.
///
/// Accepts plain or gzip-compressed input (detected from the magic bytes, so
/// stdin works too) and picks FASTA or FASTQ from the first record marker.
pub struct SequenceReader {
    path: PathBuf,
    records: Records,
}

impl SequenceReader {
    /// Open `path`, or stdin when `path` is `-`.
    pub fn open(path: &str) -> Result<Self> {
        let raw: Box<dyn Read> = if path == STDIO_PATH {
            Box::new(io::stdin())
        } else {
            Box::new(File::open(path).map_err(|e| Error::io(path, e))?)
        };
        Self::from_reader(path, raw)
    }

    /// Wrap an already opened stream; `label` is used in error messages.
    pub fn from_reader(label: impl AsRef<Path>, raw: impl Read + 'static) -> Result<Self> {
        let path = label.as_ref().to_path_buf();
        let mut buffered = BufReader::new(raw);
        let is_gzip = buffered
            .fill_buf()
            .map_err(|e| Error::io(&path, e))?
            .starts_with(&GZIP_MAGIC);

        let mut reader: Box<dyn BufRead> = if is_gzip {
            Box::new(BufReader::new(MultiGzDecoder::new(buffered)))
        } else {
            Box::new(buffered)
        };

        let records = match first_marker(&mut reader).map_err(|e| Error::io(&path, e))? {
            None => Records::Empty,
            Some(b'>') => Records::Fasta(fasta::Reader::from_bufread(reader).records()),
            Some(b'@') => Records::Fastq(fastq::Reader::from_bufread(reader).records()),
            Some(other) => {
                return Err(Error::Parse {
                    path,
                    message: format!("expected '>' or '@' at start of input, found '{}'", other as char),
                })
            }
        };

        Ok(Self { path, records })
    }
}

/// Skip leading whitespace and return the first byte without consuming it.
fn first_marker(reader: &mut dyn BufRead) -> io::Result<Option<u8>> {
    loop {
        let (skip, marker) = {
            let buf = reader.fill_buf()?;
            if buf.is_empty() {
                return Ok(None);
            }
            match buf.iter().position(|b| !b.is_ascii_whitespace()) {
                Some(pos) => (pos, Some(buf[pos])),
                None => (buf.len(), None),
            }
        };
        reader.consume(skip);
        if marker.is_some() {
            return Ok(marker);
        }
    }
}

impl Iterator for SequenceReader {
    type Item = Result<SequenceRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match &mut self.records {
            Records::Empty => return None,
            Records::Fasta(records) => records.next()?.map(|r| SequenceRecord {
                name: r.id().to_string(),
                comment: r.desc().map(str::to_string),
                seq: r.seq().to_vec(),
            }).map_err(|e| {
                if e.kind() == io::ErrorKind::InvalidData {
                    Error::Parse { path: self.path.clone(), message: e.to_string() }
                } else {
                    Error::io(&self.path, e)
                }
            }),
            Records::Fastq(records) => records.next()?.map(|r| SequenceRecord {
                name: r.id().to_string(),
                comment: r.desc().map(str::to_string),
                seq: r.seq().to_vec(),
            }).map_err(|e| Error::Parse { path: self.path.clone(), message: e.to_string() }),
        };
        Some(record)
    }
}

enum Output {
    Stdout(BufWriter<Stdout>),
    Plain(BufWriter<File>),
    Compressed(BufWriter<GzEncoder<File>>),
}

/// Unwrapped FASTA output: one header line, one sequence line.
pub struct FastaWriter {
    path: PathBuf,
    output: Output,
}

impl FastaWriter {
    /// Create `path` (stdout for `-`); a `.gz` suffix enables gzip compression.
    pub fn create(path: &str) -> Result<Self> {
        let output = if path == STDIO_PATH {
            Output::Stdout(BufWriter::new(io::stdout()))
        } else {
            let file = File::create(path).map_err(|e| Error::io(path, e))?;
            if path.ends_with(".gz") {
                Output::Compressed(BufWriter::new(GzEncoder::new(file, Compression::default())))
            } else {
                Output::Plain(BufWriter::new(file))
            }
        };
        Ok(Self { path: PathBuf::from(path), output })
    }

    fn write_raw(&mut self, name: &str, comment: Option<&str>, seq: &[u8]) -> io::Result<()> {
        let writer: &mut dyn Write = match &mut self.output {
            Output::Stdout(w) => w,
            Output::Plain(w) => w,
            Output::Compressed(w) => w,
        };
        match comment {
            Some(comment) => writeln!(writer, ">{} {}", name, comment)?,
            None => writeln!(writer, ">{}", name)?,
        }
        writer.write_all(seq)?;
        writer.write_all(b"\n")
    }

    /// Flush buffered output and finish the gzip stream if any.
    pub fn finish(self) -> Result<()> {
        let path = self.path;
        let done = match self.output {
            Output::Stdout(mut w) => w.flush(),
            Output::Plain(mut w) => w.flush(),
            Output::Compressed(w) => w
                .into_inner()
                .map_err(|e| e.into_error())
                .and_then(|gz| gz.finish().map(|_| ())),
        };
        done.map_err(|e| Error::io(path, e))
    }
}

impl SequenceSink for FastaWriter {
    fn write_record(&mut self, name: &str, comment: Option<&str>, seq: &[u8]) -> Result<()> {
        self.write_raw(name, comment, seq).map_err(|e| Error::io(&self.path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn read_all(label: &str, data: &'static [u8]) -> Vec<SequenceRecord> {
        SequenceReader::from_reader(label, Cursor::new(data))
            .unwrap()
            .collect::<Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_read_multiline_fasta() {
        let recs = read_all("t.fa", b">s1 first one\nACGT\nacgt\n>s2\nNNAC\n");
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].name, "s1");
        assert_eq!(recs[0].comment.as_deref(), Some("first one"));
        assert_eq!(recs[0].seq, b"ACGTacgt");
        assert_eq!(recs[1].seq, b"NNAC");
    }

    #[test]
    fn test_read_fastq() {
        let recs = read_all("t.fq", b"@r1\nACGTT\n+\nIIIII\n@r2\nGG\n+\nII\n");
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].name, "r1");
        assert_eq!(recs[1].seq, b"GG");
    }

    #[test]
    fn test_empty_input_has_no_records() {
        assert!(read_all("empty.fa", b"").is_empty());
        assert!(read_all("blank.fa", b"\n\n").is_empty());
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let err = SequenceReader::from_reader("x.txt", Cursor::new(&b"hello\n"[..])).err().unwrap();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = SequenceReader::open("/nonexistent/dir/in.fa").err().unwrap();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_gzip_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.fa.gz");
        let path = path.to_str().unwrap();

        let mut sink = FastaWriter::create(path).unwrap();
        sink.write_record("c1", None, b"ACGTTGCA").unwrap();
        sink.write_record("c2", Some("note"), b"GGG").unwrap();
        sink.finish().unwrap();

        let recs = SequenceReader::open(path).unwrap().collect::<Result<Vec<_>>>().unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].seq, b"ACGTTGCA");
        assert_eq!(recs[1].comment.as_deref(), Some("note"));
    }

    #[test]
    fn test_plain_output_is_unwrapped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.fa");
        let long = vec![b'A'; 200];

        let mut sink = FastaWriter::create(path.to_str().unwrap()).unwrap();
        sink.write_record("c1", None, &long).unwrap();
        sink.finish().unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec![">c1", &"A".repeat(200)]);
    }
}
