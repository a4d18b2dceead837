//! unique-words-util - helpers shared by the unique-words workspace.
//!
//! Word splitting for text key sources and a seeded random generator used by
//! synthetic key sources and by the tree tests.

pub mod fuzzer;
pub mod strings;

// Re-exports for convenience
pub use fuzzer::Fuzzer;
pub use strings::{is_apostrophe, is_letter, is_word_char, words, Words};
