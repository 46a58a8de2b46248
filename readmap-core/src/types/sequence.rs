//! Residue alphabet guess for query reads
//!
//! The protein workflow translates its reads before alignment, so a query
//! file that already holds amino acids has to be caught up front.

use serde::{Deserialize, Serialize};

/// Share of nucleotide letters above which a read counts as DNA or RNA
const NUCLEOTIDE_THRESHOLD: f32 = 0.9;

/// Alphabet a read appears to be written in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SequenceType {
    Dna,
    /// Nucleotides with at least one `U`
    Rna,
    Protein,
    /// Empty read
    #[default]
    Unknown,
}

impl SequenceType {
    /// Guess the alphabet of raw residues
    ///
    /// Reads made mostly of `ACGTUN` (any case) are nucleotides.
    pub fn detect(residues: &[u8]) -> Self {
        if residues.is_empty() {
            return Self::Unknown;
        }

        let mut nucleotides = 0usize;
        let mut uracil = false;
        for base in residues.iter().map(u8::to_ascii_uppercase) {
            match base {
                b'A' | b'C' | b'G' | b'T' | b'N' => nucleotides += 1,
                b'U' => {
                    nucleotides += 1;
                    uracil = true;
                }
                _ => {}
            }
        }

        if nucleotides as f32 / residues.len() as f32 > NUCLEOTIDE_THRESHOLD {
            if uracil {
                Self::Rna
            } else {
                Self::Dna
            }
        } else {
            Self::Protein
        }
    }
}
