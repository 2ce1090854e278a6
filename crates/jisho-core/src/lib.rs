//! Shared vocabulary types for Japanese deinflection.
//!
//! - [`word_class`] -- Conjugation class bitmask (`WordClass`)
//! - [`reason`] -- Grammatical operations a rewrite undoes (`Reason`)
//! - [`candidate`] -- Recovered dictionary-form candidates (`Candidate`)
//!
//! These types are the contract between the deinflection engine and its
//! consumers: the dictionary lookup filters entries by `Candidate::class`,
//! the UI explains a match through `Candidate::reasons`.

pub mod candidate;
pub mod reason;
pub mod word_class;

pub use candidate::{Candidate, DerivationPath};
pub use reason::Reason;
pub use word_class::WordClass;
