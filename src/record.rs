use std::io::{self, Write};

use crate::error::FormatError;

/// One FASTQ entry. `header` is the raw header line, `@` included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastqRecord {
    pub header: String,
    pub seq: Vec<u8>,
    pub qual: Vec<u8>,
}

impl FastqRecord {
    #[inline]
    pub fn len(&self) -> usize {
        self.seq.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// Percentage of G/C bases; 0 for an empty sequence.
    pub fn gc_content(&self) -> f64 {
        if self.seq.is_empty() {
            return 0.0;
        }
        let gc = self
            .seq
            .iter()
            .filter(|&&b| matches!(b, b'G' | b'C' | b'g' | b'c'))
            .count();
        gc as f64 / self.seq.len() as f64 * 100.0
    }

    /// Mean Phred+33 score; 0 for an empty quality string.
    pub fn mean_quality(&self) -> f64 {
        if self.qual.is_empty() {
            return 0.0;
        }
        let total: i64 = self.qual.iter().map(|&b| i64::from(b) - 33).sum();
        total as f64 / self.qual.len() as f64
    }

    pub fn check(&self) -> Result<(), FormatError> {
        if self.qual.len() != self.seq.len() {
            return Err(FormatError::LengthMismatch {
                seq: self.seq.len(),
                qual: self.qual.len(),
            });
        }
        Ok(())
    }

    /// Writes the 4-line form with a bare `+` separator.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(self.header.as_bytes())?;
        w.write_all(b"\n")?;
        w.write_all(&self.seq)?;
        w.write_all(b"\n+\n")?;
        w.write_all(&self.qual)?;
        w.write_all(b"\n")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub header: String,
    pub seq: String,
}

impl FastaRecord {
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        writeln!(w, "{}", self.header)?;
        writeln!(w, "{}", self.seq)
    }
}
