//! Biological sequence handling for readmap
//!
//! FASTA input/output for staged query files and six-frame translation of
//! DNA reads for searches against protein databases.

pub mod formats;
pub mod sequence;
pub mod translation;

pub use formats::fasta::{read_fasta, write_fasta};
pub use sequence::Sequence;
pub use translation::{six_frame_translations, translate, Frame};
