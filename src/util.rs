use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::path::Path;

use crate::error::{Error, IoContext};

const READ_CAPACITY: usize = 256 * 1024;

pub fn open_file(path: &Path) -> Result<File, Error> {
    File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })
}

pub fn create_writer(path: &Path) -> Result<BufWriter<File>, Error> {
    let f = File::create(path).map_err(|source| Error::Create {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::new(f))
}

/// Line source that strips line endings and tracks its position.
pub(crate) struct LineReader {
    rdr: Box<dyn BufRead + Send>,
    line_num: u64,
    byte_pos: u64,
}

impl LineReader {
    pub(crate) fn from_path(path: &Path) -> Result<Self, Error> {
        let f = open_file(path)?;
        Ok(Self::new(BufReader::with_capacity(READ_CAPACITY, f)))
    }

    pub(crate) fn new<R: BufRead + Send + 'static>(reader: R) -> Self {
        Self {
            rdr: Box::new(reader),
            line_num: 0,
            byte_pos: 0,
        }
    }

    /// Returns the raw byte count (0 at EOF); `buf` holds the line without `\n`/`\r\n`.
    pub(crate) fn read_line(&mut self, buf: &mut String) -> Result<usize, Error> {
        buf.clear();
        let n = self
            .rdr
            .read_line(buf)
            .map_err(|e| Error::io_err(e, self.ctx()))?;
        if n > 0 {
            self.line_num += 1;
            self.byte_pos += n as u64;
            if buf.ends_with('\n') {
                buf.pop();
            }
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(n)
    }

    #[inline]
    pub(crate) fn ctx(&self) -> IoContext {
        IoContext {
            byte_pos: self.byte_pos,
            line_num: self.line_num,
        }
    }
}
