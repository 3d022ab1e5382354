//! In-memory bucket storage emulating a hierarchical filesystem.
//!
//! This crate implements a flat key-value store that behaves like a file
//! tree: every stored object lives under a file-shaped canonical path, and
//! directories are never stored — a directory exists exactly while at
//! least one key carries its prefix. One [`StorageEngine`] owns at most
//! one named [`Bucket`] and exposes the seven storage verbs: create,
//! write, read, delete, exist, list, purge.
//!
//! # Units of Storage
//!
//! - [`ObjectRecord`] — a canonical path plus its payload bytes
//! - [`Content`] — an incoming write item (identifier, raw and/or text)
//! - [`WriteData`] — the three supported write payload shapes
//!
//! # Design Rules
//!
//! 1. Every stored key is file-shaped and `.`/`..`-resolved.
//! 2. Directory existence is derived from key prefixes, never stored.
//! 3. The bucket is allocated lazily and dropped only by a root purge.
//! 4. All state sits behind one `RwLock`; each verb is atomic with
//!    respect to other callers sharing the engine.
//! 5. Every verb checks its cancellation token before doing work, and
//!    multi-key removals re-check between keys.
//! 6. Delete of a missing target is logged, not an error; everything
//!    else surfaces as a distinct [`StoreError`].

pub mod bucket;
pub mod cancel;
pub mod encoding;
pub mod engine;
pub mod error;
pub mod record;

// Re-export primary types at crate root for ergonomic imports.
pub use bucket::Bucket;
pub use cancel::{CancellationSource, CancellationToken};
pub use engine::StorageEngine;
pub use error::{StoreError, StoreResult};
pub use record::{Content, ObjectRecord, WriteData};
