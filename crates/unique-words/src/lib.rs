//! Counts the unique words of a text two ways and reports what each cost.
//!
//! The text comes from a [`KeySource`]: a [`BookReader`] over a file, or
//! [`RandomWords`] for generated input. [`count_with_list`] runs the linear
//! [`CursorList`] baseline; [`count_with_avl`] runs an
//! [`AvlSet`](balanced_set::AvlSet), balanced or not.
//!
//! ```
//! use balanced_set::AvlConfig;
//! use unique_words::{count_with_avl, BookReader};
//!
//! let book = BookReader::from_text("inline", "to be or not to be");
//! let report = count_with_avl(&book, AvlConfig::default());
//! assert_eq!(report.total_words, 6);
//! assert_eq!(report.unique_words, 4);
//! ```

pub mod cli;
pub mod cursor_list;
pub mod error;
pub mod report;
pub mod source;

pub use cursor_list::CursorList;
pub use error::{Error, Result};
pub use report::{count_with_avl, count_with_list, Report, Structure};
pub use source::{BookReader, KeySource, RandomWords};
