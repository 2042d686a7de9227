//! Host registry domain types and ranking for hostbook.
//!
//! This crate is the pure side of the pipeline: the [`HostEntry`] domain
//! type, the fuzzy subsequence scorer, query ranking, and mutation-path
//! field validation. Nothing here touches the filesystem.

pub mod entry;
pub mod fuzzy;
pub mod rank;
pub mod validate;

pub use entry::HostEntry;
pub use fuzzy::fuzzy_score;
pub use rank::rank;
pub use validate::{validate_entry, ValidateError};
