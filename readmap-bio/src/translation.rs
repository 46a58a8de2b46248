//! Codon translation of nucleotide reads
//!
//! Reads are translated with the standard genetic code (NCBI table 1). `U`
//! is read as `T`, codons containing anything other than ACGT/U become `X`,
//! stop codons become `*`, and a trailing partial codon is dropped.

use crate::sequence::Sequence;
use bio::alphabets::dna;
use std::fmt;

/// Amino acids in TCAG codon order (first base slowest)
const STANDARD_CODE: &[u8; 64] =
    b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

/// Reading frame: 1..=3 on the forward strand, -1..=-3 on the reverse complement
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Frame(i8);

impl Frame {
    /// All six frames in ascending order (-3, -2, -1, 1, 2, 3)
    pub const ALL: [Frame; 6] = [
        Frame(-3),
        Frame(-2),
        Frame(-1),
        Frame(1),
        Frame(2),
        Frame(3),
    ];

    pub fn new(value: i8) -> Option<Self> {
        matches!(value, -3..=-1 | 1..=3).then_some(Frame(value))
    }

    pub fn value(&self) -> i8 {
        self.0
    }

    pub fn is_reverse(&self) -> bool {
        self.0 < 0
    }

    fn offset(&self) -> usize {
        (self.0.unsigned_abs() - 1) as usize
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn base_index(base: u8) -> Option<usize> {
    match base.to_ascii_uppercase() {
        b'T' | b'U' => Some(0),
        b'C' => Some(1),
        b'A' => Some(2),
        b'G' => Some(3),
        _ => None,
    }
}

fn codon_to_amino_acid(codon: &[u8]) -> u8 {
    match (base_index(codon[0]), base_index(codon[1]), base_index(codon[2])) {
        (Some(a), Some(b), Some(c)) => STANDARD_CODE[a * 16 + b * 4 + c],
        _ => b'X',
    }
}

/// Reverse complement of a nucleotide sequence
///
/// `U` is read as `T` first; case and IUPAC ambiguity codes are kept.
pub fn reverse_complement(sequence: &[u8]) -> Vec<u8> {
    let bases: Vec<u8> = sequence
        .iter()
        .map(|&b| match b {
            b'U' => b'T',
            b'u' => b't',
            other => other,
        })
        .collect();
    dna::revcomp(bases)
}

/// Translate a nucleotide sequence from its first base
pub fn translate(sequence: &[u8]) -> Vec<u8> {
    sequence.chunks_exact(3).map(codon_to_amino_acid).collect()
}

/// Translate a sequence in one reading frame
pub fn translate_frame(sequence: &[u8], frame: Frame) -> Vec<u8> {
    let strand = if frame.is_reverse() {
        reverse_complement(sequence)
    } else {
        sequence.to_vec()
    };
    strand
        .get(frame.offset()..)
        .map(translate)
        .unwrap_or_default()
}

/// Six-frame translation of a read, ids suffixed `_frame_<n>`
pub fn six_frame_translations(read: &Sequence) -> Vec<Sequence> {
    Frame::ALL
        .iter()
        .map(|&frame| {
            Sequence::new(
                format!("{}_frame_{}", read.id, frame),
                translate_frame(&read.sequence, frame),
            )
        })
        .collect()
}
