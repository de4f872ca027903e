//! Small streaming utilities for plaintext sequence files.
//!
//! - FASTQ: lazy 4-line record stream and a filter on GC%, length and
//!   mean Phred+33 quality that writes survivors in input order.
//! - FASTA: multi-line entries collapsed to one header + one sequence line.
//! - BLAST: unique, sorted hit descriptions from the significant-alignments table.
//! - DNA/RNA validation, transcription, complement and reverse complement.
//!
//! The library logs through the `log` facade only and never installs a logger.

pub mod blast;
pub mod error;
pub mod fasta;
pub mod filter;
pub mod policy;
pub mod reader;
pub mod record;
pub mod sequence;
pub mod transform;
mod util;

pub use crate::blast::{extract_descriptions, parse_blast_output};
pub use crate::error::{BoundsError, Error, FormatError, IoContext, Result, SequenceError};
pub use crate::fasta::{FastaReader, convert_multiline_fasta_to_oneline, reformat_oneline};
pub use crate::filter::{FastqFilter, FilterStats, filter_fastq, filter_fastq_stream};
pub use crate::policy::{Bounds, ErrorPolicy, FilterOptions};
pub use crate::reader::FastqReader;
pub use crate::record::{FastaRecord, FastqRecord};
pub use crate::sequence::{SeqKind, validate_sequence};
pub use crate::transform::{
    Operation, Transformed, complement, reverse, reverse_complement, run_args, run_batch,
    transcribe,
};
