//! Sequence alphabets and validation.

use std::fmt;

use crate::error::{InvalidReason, SequenceError};
use crate::transform::Operation;

/// Kind of biological sequence, each with its own alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeqKind {
    Dna,
    Rna,
    AminoAcid,
}

impl SeqKind {
    /// Valid symbols, uppercase. Input is matched case-insensitively.
    pub const fn alphabet(self) -> &'static [u8] {
        match self {
            SeqKind::Dna => b"ATCG",
            SeqKind::Rna => b"AUCG",
            SeqKind::AminoAcid => b"ACDEFGHIKLMNPQRSTVWY",
        }
    }

    #[inline]
    pub fn is_valid(self, c: char) -> bool {
        c.is_ascii() && self.alphabet().contains(&(c.to_ascii_uppercase() as u8))
    }

    /// Check every symbol of `seq` against this kind's alphabet.
    pub fn validate(self, seq: &str) -> Result<(), SequenceError> {
        if seq.chars().all(|c| self.is_valid(c)) {
            Ok(())
        } else {
            Err(SequenceError::InvalidSequence {
                seq: seq.to_string(),
                reason: InvalidReason::NotIn(self),
            })
        }
    }

    /// Base-pairing partner of `c`, case preserved.
    ///
    /// `T` and `U` both pair with `A`; `A` pairs with `U` for RNA and `T`
    /// otherwise. Protein residues have no partner.
    pub fn complement_base(self, c: char) -> Result<char, SequenceError> {
        if self == SeqKind::AminoAcid {
            return Err(SequenceError::InvalidOperation {
                op: Operation::Complement,
                reason: "protein sequences have no complement",
            });
        }
        let a_partner = if self == SeqKind::Rna { 'U' } else { 'T' };
        let upper = match c.to_ascii_uppercase() {
            'A' => a_partner,
            'T' | 'U' => 'A',
            'C' => 'G',
            'G' => 'C',
            _ => return Err(SequenceError::UnknownBase(c)),
        };
        Ok(if c.is_ascii_lowercase() {
            upper.to_ascii_lowercase()
        } else {
            upper
        })
    }

    /// Render a validated single-line FASTA entry.
    pub fn to_fasta(self, header: &str, seq: &str) -> Result<String, SequenceError> {
        self.validate(seq)?;
        let header = header.strip_prefix('>').unwrap_or(header);
        Ok(format!(">{header}\n{seq}\n"))
    }
}

impl fmt::Display for SeqKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SeqKind::Dna => "DNA",
            SeqKind::Rna => "RNA",
            SeqKind::AminoAcid => "protein",
        })
    }
}

#[inline]
pub(crate) fn has_uracil(seq: &str) -> bool {
    seq.contains(['U', 'u'])
}

/// Classify a nucleotide string as DNA or RNA, case-insensitively.
///
/// Anything containing `U` must be pure RNA; everything else must be DNA.
/// The empty string counts as DNA.
pub fn validate_sequence(seq: &str) -> Result<SeqKind, SequenceError> {
    let kind = if has_uracil(seq) {
        if seq.contains(['T', 't']) {
            return Err(SequenceError::InvalidSequence {
                seq: seq.to_string(),
                reason: InvalidReason::MixedTU,
            });
        }
        SeqKind::Rna
    } else {
        SeqKind::Dna
    };
    kind.validate(seq)?;
    Ok(kind)
}
