#![no_std] // Data model only needs alloc

extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(feature = "std")]
extern crate std;

pub mod ids;
pub mod ngram;

// Re-export core types for convenience
pub use ids::DocumentId;
pub use ngram::{ArchivedNGram, NGram};

pub mod model;
pub use model::*;
