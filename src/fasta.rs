//! Multi-line FASTA to one header line plus one sequence line per entry.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::error::Error;
use crate::record::FastaRecord;
use crate::util::{LineReader, create_writer};

/// Streaming FASTA reader joining wrapped sequence lines.
pub struct FastaReader {
    lines: LineReader,
    // Header that ended the previous entry.
    pending_header: Option<String>,
    started: bool,
}

impl FastaReader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Ok(Self::with_lines(LineReader::from_path(path.as_ref())?))
    }

    pub fn from_bufread<R: BufRead + Send + 'static>(reader: R) -> Self {
        Self::with_lines(LineReader::new(reader))
    }

    fn with_lines(lines: LineReader) -> Self {
        Self {
            lines,
            pending_header: None,
            started: false,
        }
    }

    fn read_one(&mut self) -> Result<Option<FastaRecord>, Error> {
        let mut line = String::with_capacity(256);

        if !self.started {
            self.started = true;
            let mut skipped = 0u64;
            loop {
                if self.lines.read_line(&mut line)? == 0 {
                    break;
                }
                let trimmed = line.trim();
                if trimmed.starts_with('>') {
                    self.pending_header = Some(trimmed.to_string());
                    break;
                }
                if !trimmed.is_empty() {
                    skipped += 1;
                }
            }
            if skipped > 0 {
                log::debug!("ignored {skipped} sequence lines before the first header");
            }
        }

        let Some(header) = self.pending_header.take() else {
            return Ok(None);
        };

        let mut seq = String::new();
        while self.lines.read_line(&mut line)? > 0 {
            let trimmed = line.trim();
            if trimmed.starts_with('>') {
                self.pending_header = Some(trimmed.to_string());
                break;
            }
            seq.push_str(trimmed);
        }

        Ok(Some(FastaRecord { header, seq }))
    }
}

impl Iterator for FastaReader {
    type Item = Result<FastaRecord, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_one().transpose()
    }
}

/// Copy every entry of `reader` to `out` in single-line form.
pub fn reformat_oneline<W: Write>(reader: FastaReader, out: &mut W) -> Result<u64, Error> {
    let mut n = 0u64;
    for rec in reader {
        rec?.write_to(out).map_err(Error::Write)?;
        n += 1;
    }
    out.flush().map_err(Error::Write)?;
    Ok(n)
}

/// File-to-file form of [`reformat_oneline`]; returns the entry count.
pub fn convert_multiline_fasta_to_oneline<P, Q>(input: P, output: Q) -> Result<u64, Error>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let reader = FastaReader::from_path(input.as_ref())?;
    let mut out = create_writer(output.as_ref())?;
    let n = reformat_oneline(reader, &mut out)?;
    log::debug!("wrote {n} entries to {:?}", output.as_ref());
    Ok(n)
}
