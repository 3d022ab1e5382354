//! Case-insensitive mapping from operation names to engine calls.

use serde_json::Value;

use silo_store::{CancellationToken, ObjectRecord, StorageEngine, WriteData};

use crate::error::{DispatchError, DispatchResult};
use crate::params::{decode, PathParameters, WriteParameters};

/// The seven storage verbs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Create,
    Delete,
    Exist,
    List,
    Purge,
    Read,
    Write,
}

impl Operation {
    /// Every supported operation, in canonical order.
    pub const ALL: [Operation; 7] = [
        Operation::Create,
        Operation::Delete,
        Operation::Exist,
        Operation::List,
        Operation::Purge,
        Operation::Read,
        Operation::Write,
    ];

    /// Parse an operation name, ignoring ASCII case.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|op| name.eq_ignore_ascii_case(op.name()))
    }

    /// Canonical lower-case name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Delete => "delete",
            Self::Exist => "exist",
            Self::List => "list",
            Self::Purge => "purge",
            Self::Read => "read",
            Self::Write => "write",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Result surface of a dispatched operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The operation completed with nothing to return.
    Done,
    /// Result of `exist`.
    Exists(bool),
    /// Result of `read`.
    Record(ObjectRecord),
    /// Result of `list`.
    Records(Vec<ObjectRecord>),
}

/// Thin dispatcher owning one [`StorageEngine`].
pub struct Dispatcher {
    engine: StorageEngine,
}

impl Dispatcher {
    /// Wrap an engine.
    pub fn new(engine: StorageEngine) -> Self {
        Self { engine }
    }

    /// Borrow the underlying engine.
    pub fn engine(&self) -> &StorageEngine {
        &self.engine
    }

    /// Execute an operation by name against the engine.
    pub fn execute(
        &self,
        operation: &str,
        params: &Value,
        token: &CancellationToken,
    ) -> DispatchResult<Outcome> {
        let op = Operation::parse(operation).ok_or_else(|| DispatchError::UnsupportedOperation {
            name: operation.to_string(),
        })?;

        match op {
            Operation::Create => {
                let p: PathParameters = decode(params)?;
                self.engine.create(p.path(), token)?;
                Ok(Outcome::Done)
            }
            Operation::Delete => {
                let p: PathParameters = decode(params)?;
                self.engine.delete(p.path(), token)?;
                Ok(Outcome::Done)
            }
            Operation::Exist => {
                let p: PathParameters = decode(params)?;
                Ok(Outcome::Exists(self.engine.exist(p.path(), token)?))
            }
            Operation::List => {
                let p: PathParameters = decode(params)?;
                Ok(Outcome::Records(self.engine.list(p.path(), token)?))
            }
            Operation::Purge => {
                let p: PathParameters = decode(params)?;
                self.engine.purge(p.path(), token)?;
                Ok(Outcome::Done)
            }
            Operation::Read => {
                let p: PathParameters = decode(params)?;
                Ok(Outcome::Record(self.engine.read(p.path(), token)?))
            }
            Operation::Write => {
                let p: WriteParameters = decode(params)?;
                let data = WriteData::from_value(p.data.clone().unwrap_or(Value::Null))?;
                self.engine.write(p.path(), data, p.overwrite, token)?;
                Ok(Outcome::Done)
            }
        }
    }
}
