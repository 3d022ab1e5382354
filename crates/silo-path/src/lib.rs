//! Pure path functions for the silo bucket store.
//!
//! Bucket keys are `/`-separated strings with no explicit directory
//! entries: a trailing separator (or the empty root marker) makes a path
//! directory-shaped, everything else is file-shaped. This crate owns the
//! canonicalization, classification, and segment arithmetic the storage
//! engine builds on.
//!
//! # Key Functions
//!
//! - [`to_unix`] — backslash-to-forward-slash canonicalization
//! - [`is_directory`] / [`is_file`] — shape classification
//! - [`normalize`] — `.`/`..` resolution against the root
//! - [`split`] / [`combine`] / [`parent`] — segment arithmetic
//! - [`compare`] — semantic path equality
//!
//! All functions are total except [`normalize_part`], which requires a
//! present segment.

pub mod error;
mod norm;

pub use error::{PathError, Result};
pub use norm::{
    add_trailing_separator, combine, compare, is_directory, is_file, is_root, normalize,
    normalize_part, parent, split, to_unix, SEPARATOR,
};
