use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::sequence::SeqKind;
use crate::transform::Operation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IoContext {
    pub byte_pos: u64,
    pub line_num: u64,
}

impl fmt::Display for IoContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} (byte {})", self.line_num, self.byte_pos)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("unexpected EOF inside record")]
    UnexpectedEof,
    #[error("quality length ({qual}) does not match sequence length ({seq})")]
    LengthMismatch { seq: usize, qual: usize },
}

/// Why a sequence failed alphabet validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    MixedTU,
    NotIn(SeqKind),
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::MixedTU => f.write_str("contains both T and U"),
            InvalidReason::NotIn(kind) => write!(f, "invalid for {kind}"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("invalid sequence {seq:?}: {reason}")]
    InvalidSequence { seq: String, reason: InvalidReason },
    #[error("cannot {op}: {reason}")]
    InvalidOperation {
        op: Operation,
        reason: &'static str,
    },
    #[error("no complement for base {0:?}")]
    UnknownBase(char),
    #[error("unknown operation {0:?}")]
    UnknownOperation(String),
    #[error("no operation given")]
    MissingOperation,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoundsError {
    #[error("lower bound {low} is greater than upper bound {high}")]
    Inverted { low: String, high: String },
    #[error("expected one or two bound values, got {0}")]
    Arity(usize),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot create {path:?}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("I/O error at {ctx}: {source}")]
    Io {
        #[source]
        source: io::Error,
        ctx: IoContext,
    },
    #[error("write failed: {0}")]
    Write(#[source] io::Error),
    #[error("format error at {ctx}: {source}")]
    Format {
        #[source]
        source: FormatError,
        ctx: IoContext,
    },
    #[error("malformed record {header:?}: {source}")]
    Record {
        header: String,
        #[source]
        source: FormatError,
    },
    #[error(transparent)]
    Bounds(#[from] BoundsError),
}

impl Error {
    pub(crate) fn io_err(source: io::Error, ctx: IoContext) -> Self {
        Self::Io { source, ctx }
    }
    pub(crate) fn fmt_err(source: FormatError, ctx: IoContext) -> Self {
        Self::Format { source, ctx }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
