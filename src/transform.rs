//! DNA/RNA string transforms.

use std::fmt;
use std::str::FromStr;

use crate::error::SequenceError;
use crate::sequence::{SeqKind, has_uracil, validate_sequence};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Transcribe,
    Reverse,
    Complement,
    ReverseComplement,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::Transcribe => "transcribe",
            Operation::Reverse => "reverse",
            Operation::Complement => "complement",
            Operation::ReverseComplement => "reverse_complement",
        }
    }

    pub fn apply(self, seq: &str) -> Result<String, SequenceError> {
        match self {
            Operation::Transcribe => transcribe(seq),
            Operation::Reverse => Ok(reverse(seq)),
            Operation::Complement => complement(seq),
            Operation::ReverseComplement => reverse_complement(seq),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "transcribe" => Ok(Operation::Transcribe),
            "reverse" => Ok(Operation::Reverse),
            "complement" => Ok(Operation::Complement),
            "reverse_complement" => Ok(Operation::ReverseComplement),
            other => Err(SequenceError::UnknownOperation(other.to_string())),
        }
    }
}

/// DNA to RNA: `T`/`t` become `U`/`u`. Input already holding `U` is refused.
pub fn transcribe(seq: &str) -> Result<String, SequenceError> {
    if has_uracil(seq) {
        return Err(SequenceError::InvalidOperation {
            op: Operation::Transcribe,
            reason: "RNA detected, only DNA can be transcribed",
        });
    }
    Ok(seq
        .chars()
        .map(|c| match c {
            'T' => 'U',
            't' => 'u',
            c => c,
        })
        .collect())
}

pub fn reverse(seq: &str) -> String {
    seq.chars().rev().collect()
}

/// Per-base complement; a sequence containing `U` is paired as RNA.
pub fn complement(seq: &str) -> Result<String, SequenceError> {
    let kind = if has_uracil(seq) {
        SeqKind::Rna
    } else {
        SeqKind::Dna
    };
    seq.chars().map(|c| kind.complement_base(c)).collect()
}

pub fn reverse_complement(seq: &str) -> Result<String, SequenceError> {
    complement(seq).map(|c| reverse(&c))
}

/// Result of a batch transform: unwrapped when exactly one input was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transformed {
    Single(String),
    Many(Vec<String>),
}

impl Transformed {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Transformed::Single(s) => vec![s],
            Transformed::Many(v) => v,
        }
    }
}

/// Validate then transform every sequence, keeping input order.
pub fn run_batch<S: AsRef<str>>(seqs: &[S], op: Operation) -> Result<Transformed, SequenceError> {
    let mut out = seqs
        .iter()
        .map(|s| {
            let s = s.as_ref();
            validate_sequence(s)?;
            op.apply(s)
        })
        .collect::<Result<Vec<_>, _>>()?;
    if out.len() == 1 {
        return Ok(Transformed::Single(out.remove(0)));
    }
    Ok(Transformed::Many(out))
}

/// Like [`run_batch`], with the operation name as the last argument.
pub fn run_args<S: AsRef<str>>(args: &[S]) -> Result<Transformed, SequenceError> {
    let (op, seqs) = args.split_last().ok_or(SequenceError::MissingOperation)?;
    let op = op.as_ref().parse::<Operation>()?;
    run_batch(seqs, op)
}
