use crate::error::{Error, FormatError};
use crate::record::FastqRecord;
use crate::util::LineReader;

use std::io::BufRead;
use std::path::Path;

/// Sync FASTQ reader, streaming, strictly 4 lines per record.
///
/// The separator line is read and discarded without inspection, and
/// quality/sequence lengths are not compared here; see
/// [`FastqRecord::check`].
pub struct FastqReader {
    lines: LineReader,
    done: bool,
}

impl FastqReader {
    /// Open from a file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Ok(Self {
            lines: LineReader::from_path(path.as_ref())?,
            done: false,
        })
    }

    /// Wrap an arbitrary `BufRead` (stdin, in-memory buffers, etc.).
    pub fn from_bufread<R: BufRead + Send + 'static>(reader: R) -> Self {
        Self {
            lines: LineReader::new(reader),
            done: false,
        }
    }

    fn read_one(&mut self) -> Result<Option<FastqRecord>, Error> {
        let mut header = String::with_capacity(128);
        // EOF and a blank header line both end the stream
        if self.lines.read_line(&mut header)? == 0 || header.trim().is_empty() {
            return Ok(None);
        }

        let mut line = String::with_capacity(256);

        self.expect_line(&mut line)?;
        let seq = line.trim_end().as_bytes().to_vec();

        // separator
        self.expect_line(&mut line)?;

        self.expect_line(&mut line)?;
        let qual = line.trim_end().as_bytes().to_vec();

        Ok(Some(FastqRecord {
            header: header.trim_end().to_string(),
            seq,
            qual,
        }))
    }

    fn expect_line(&mut self, line: &mut String) -> Result<(), Error> {
        if self.lines.read_line(line)? == 0 {
            return Err(Error::fmt_err(FormatError::UnexpectedEof, self.lines.ctx()));
        }
        Ok(())
    }
}

impl Iterator for FastqReader {
    type Item = Result<FastqRecord, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_one() {
            Ok(Some(rec)) => Some(Ok(rec)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}
