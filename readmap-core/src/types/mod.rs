//! Core types shared across all readmap modules
pub mod option;
pub mod sequence;

pub use option::OptionValue;
pub use sequence::SequenceType;
