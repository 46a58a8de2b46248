//! Test doubles for code written against [`crate::traits::Aligner`]

pub mod mock;

pub use mock::{MockAligner, RecordedCall};
