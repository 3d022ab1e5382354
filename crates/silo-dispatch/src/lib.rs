//! Thin dispatcher in front of one silo storage engine.
//!
//! Maps an operation name — `create`, `delete`, `exist`, `list`, `purge`,
//! `read`, `write`, matched case-insensitively — to the corresponding
//! engine call, decoding a generic JSON parameter bag into the
//! operation's parameter shape and surfacing the result as a typed
//! [`Outcome`]. The engine stays a pure library boundary; this crate is
//! the glue a host embeds.

pub mod dispatch;
pub mod error;
pub mod params;

pub use dispatch::{Dispatcher, Operation, Outcome};
pub use error::{DispatchError, DispatchResult};
pub use params::{PathParameters, WriteParameters};

// Re-export key types
pub use silo_store::{CancellationSource, CancellationToken, ObjectRecord, StorageEngine};
