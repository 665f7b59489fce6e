//! SnapshotRepository port - abstraction for ledger persistence
//!
//! The registry's state lives in memory for the process lifetime; a snapshot
//! repository lets embedders persist it across restarts without the domain
//! layer knowing the storage format.

use std::path::PathBuf;

use crate::domain::entities::Ledger;
use crate::domain::value_objects::RegistryInfo;

/// Result type for snapshot operations
pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Snapshot persistence errors
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// Underlying storage could not be read or written
    #[error("failed to access snapshot: {message}")]
    Access { message: String },

    /// The ledger could not be encoded
    #[error("failed to serialize snapshot: {message}")]
    Serialization { message: String },

    /// The stored snapshot is unreadable
    #[error("snapshot file corrupted: {path}: {message}")]
    Corrupted { path: PathBuf, message: String },

    /// The stored snapshot was written by an incompatible version
    #[error("snapshot version mismatch: found {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },
}

/// Abstract repository for ledger snapshots
pub trait SnapshotRepository {
    /// Load the stored ledger, or `None` if no snapshot exists yet
    fn load(&self) -> SnapshotResult<Option<Ledger>>;

    /// Load the stored ledger, falling back to an empty one under `info`
    /// when no snapshot exists yet
    fn load_or_new(&self, info: RegistryInfo) -> SnapshotResult<Ledger> {
        self.load()
            .map(|stored| stored.unwrap_or_else(|| Ledger::new(info)))
    }

    /// Persist the ledger, replacing any prior snapshot
    fn save(&self, ledger: &Ledger) -> SnapshotResult<()>;
}
