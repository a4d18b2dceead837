//! Character classes and word splitting.

mod chars;
mod words;

pub use chars::{is_apostrophe, is_letter, is_word_char};
pub use words::{words, Words};
