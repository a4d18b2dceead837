//! Runs a key source through a counting structure and reports what it cost.

use std::fmt;
use std::time::Instant;

use balanced_set::{AvlConfig, AvlSet};
use log::{debug, info};
use serde::Serialize;

use crate::cursor_list::CursorList;
use crate::source::KeySource;

/// Which structure a [`Report`] was measured on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Structure {
    AvlTree,
    BinarySearchTree,
    LinkedList,
}

impl Structure {
    pub fn label(&self) -> &'static str {
        match self {
            Structure::AvlTree => "AVL Tree",
            Structure::BinarySearchTree => "Binary Search Tree",
            Structure::LinkedList => "Linked List",
        }
    }

    fn short(&self) -> &'static str {
        match self {
            Structure::AvlTree => "AVL tree",
            Structure::BinarySearchTree => "Binary search tree",
            Structure::LinkedList => "Linked list",
        }
    }
}

/// Size and instrumentation counters read back after one counting run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Report {
    pub structure: Structure,
    pub source: String,
    pub total_words: usize,
    pub unique_words: usize,
    /// Tree height; absent for the list.
    pub height: Option<i32>,
    pub comparisons: u64,
    /// Absent for the list.
    pub rotations: Option<u64>,
    pub build_millis: u64,
    /// Time to render the in-order snapshot; absent for the list.
    pub traversal_millis: Option<u64>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Time to add unique words using {}: {} milliseconds.",
            self.structure.label(),
            self.build_millis
        )?;
        write!(
            f,
            "{} unique words: {}",
            self.structure.short(),
            self.unique_words
        )?;
        if let (Some(height), Some(rotations)) = (self.height, self.rotations) {
            write!(
                f,
                "\nThe {} had a height of {height} , {} comparisons, and {rotations} rotations.",
                self.structure.short(),
                self.comparisons
            )?;
        } else {
            write!(
                f,
                "\nThe {} made {} comparisons.",
                self.structure.short(),
                self.comparisons
            )?;
        }
        if let Some(ms) = self.traversal_millis {
            write!(
                f,
                "\nTime to process {}: {ms} milliseconds.",
                self.structure.short()
            )?;
        }
        Ok(())
    }
}

/// Inserts every word not already found, then renders the in-order snapshot.
pub fn count_with_avl<S: KeySource + ?Sized>(source: &S, config: AvlConfig) -> Report {
    let structure = if config.balance {
        Structure::AvlTree
    } else {
        Structure::BinarySearchTree
    };
    info!("counting {} with {}", source.name(), structure.label());

    let start = Instant::now();
    let mut set = AvlSet::with_config(config);
    let mut total_words = 0;
    for word in source.words() {
        total_words += 1;
        if set.find(&word).is_none() {
            set.insert(word);
        }
    }
    let build_millis = start.elapsed().as_millis() as u64;

    let start = Instant::now();
    let rendered = set.to_string();
    let traversal_millis = start.elapsed().as_millis() as u64;
    debug!("rendered snapshot of {} bytes", rendered.len());

    Report {
        structure,
        source: source.name().to_string(),
        total_words,
        unique_words: set.size(),
        height: Some(set.height()),
        comparisons: set.comparison_count(),
        rotations: Some(set.rotation_count()),
        build_millis,
        traversal_millis: Some(traversal_millis),
    }
}

/// Appends every word the list does not contain yet.
pub fn count_with_list<S: KeySource + ?Sized>(source: &S) -> Report {
    info!("counting {} with {}", source.name(), Structure::LinkedList.label());

    let start = Instant::now();
    let mut list = CursorList::new();
    let mut total_words = 0;
    for word in source.words() {
        total_words += 1;
        if list.contains(&word) {
            continue;
        }
        if list.is_empty() {
            list.add_before(word);
            list.first();
        } else {
            list.add_after(word);
            list.next();
        }
    }
    let build_millis = start.elapsed().as_millis() as u64;

    Report {
        structure: Structure::LinkedList,
        source: source.name().to_string(),
        total_words,
        unique_words: list.len(),
        height: None,
        comparisons: list.comparison_count(),
        rotations: None,
        build_millis,
        traversal_millis: None,
    }
}
