//! Hit descriptions from BLAST text reports.

use std::collections::BTreeSet;
use std::io::{BufRead, Write};
use std::path::Path;

use crate::error::Error;
use crate::util::{LineReader, create_writer};

pub const SIGNIFICANT_ALIGNMENTS: &str = "Sequences producing significant alignments:";

/// Description part of a hit row: everything after the first
/// whitespace-delimited token, trailing whitespace removed.
fn row_description(row: &str) -> Option<&str> {
    let row = row.trim();
    let (_id, rest) = row.split_once(char::is_whitespace)?;
    let desc = rest.trim_start();
    (!desc.is_empty()).then_some(desc)
}

/// Unique hit descriptions of the first significant-alignments table,
/// sorted ascending. A report without the table yields nothing.
pub fn extract_descriptions<R: BufRead + Send + 'static>(reader: R) -> Result<Vec<String>, Error> {
    collect_descriptions(LineReader::new(reader))
}

fn collect_descriptions(mut lines: LineReader) -> Result<Vec<String>, Error> {
    let mut line = String::with_capacity(256);

    loop {
        if lines.read_line(&mut line)? == 0 {
            log::debug!("no significant alignments table found");
            return Ok(Vec::new());
        }
        if line.contains(SIGNIFICANT_ALIGNMENTS) {
            log::debug!("alignments table starts at {}", lines.ctx());
            break;
        }
    }

    let mut descriptions = BTreeSet::new();
    let mut in_rows = false;
    while lines.read_line(&mut line)? > 0 {
        if line.trim().is_empty() {
            // blank lines between the marker and the first row are layout
            if in_rows {
                break;
            }
            continue;
        }
        in_rows = true;
        match row_description(&line) {
            Some(desc) => {
                descriptions.insert(desc.to_string());
            }
            None => log::debug!("hit row without description at {}", lines.ctx()),
        }
    }

    Ok(descriptions.into_iter().collect())
}

/// Write the descriptions of the report at `input` to `output`, one per line.
pub fn parse_blast_output<P, Q>(input: P, output: Q) -> Result<usize, Error>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let descriptions = collect_descriptions(LineReader::from_path(input.as_ref())?)?;
    let mut out = create_writer(output.as_ref())?;
    for desc in &descriptions {
        writeln!(out, "{desc}").map_err(Error::Write)?;
    }
    out.flush().map_err(Error::Write)?;
    Ok(descriptions.len())
}
