//! JSON Snapshot Repository
//!
//! Persists the ledger as a versioned JSON document. Saves take an exclusive
//! advisory lock on a sibling `.lock` file so two processes sharing a
//! snapshot path cannot interleave writes.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Ledger, Star};
use crate::domain::ports::{SnapshotError, SnapshotRepository, SnapshotResult};
use crate::domain::value_objects::{AccountId, AssetId, Money, RegistryInfo};

/// Snapshot document version; bump on incompatible layout changes
const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct JsonStar {
    name: String,
    owner: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sale_price: Option<u128>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct JsonSnapshot {
    version: u32,
    name: String,
    symbol: String,
    #[serde(default)]
    stars: BTreeMap<u64, JsonStar>,
}

/// JSON-file-backed snapshot repository
pub struct JsonSnapshotRepository {
    path: PathBuf,
}

impl JsonSnapshotRepository {
    /// Create a repository persisting at `path`
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Where this repository persists
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn save_to_disk(&self, ledger: &Ledger) -> SnapshotResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SnapshotError::Access {
                message: e.to_string(),
            })?;
        }

        let snapshot = to_snapshot(ledger);
        let content =
            serde_json::to_string_pretty(&snapshot).map_err(|e| SnapshotError::Serialization {
                message: e.to_string(),
            })?;

        fs::write(&self.path, content).map_err(|e| SnapshotError::Access {
            message: e.to_string(),
        })?;

        Ok(())
    }
}

impl SnapshotRepository for JsonSnapshotRepository {
    fn load(&self) -> SnapshotResult<Option<Ledger>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).map_err(|e| SnapshotError::Access {
            message: e.to_string(),
        })?;

        let snapshot: JsonSnapshot =
            serde_json::from_str(&content).map_err(|e| SnapshotError::Corrupted {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::VersionMismatch {
                found: snapshot.version,
                expected: SNAPSHOT_VERSION,
            });
        }

        Ok(Some(from_snapshot(snapshot)))
    }

    fn save(&self, ledger: &Ledger) -> SnapshotResult<()> {
        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent).map_err(|e| SnapshotError::Access {
                message: e.to_string(),
            })?;
        }

        let lock_file = fs::File::create(&lock_path).map_err(|e| SnapshotError::Access {
            message: e.to_string(),
        })?;
        lock_file
            .lock_exclusive()
            .map_err(|e| SnapshotError::Access {
                message: e.to_string(),
            })?;

        let result = self.save_to_disk(ledger);

        let _ = lock_file.unlock();
        result
    }
}

fn to_snapshot(ledger: &Ledger) -> JsonSnapshot {
    JsonSnapshot {
        version: SNAPSHOT_VERSION,
        name: ledger.info().name().to_string(),
        symbol: ledger.info().symbol().to_string(),
        stars: ledger
            .iter()
            .map(|(id, star)| {
                (
                    id.value(),
                    JsonStar {
                        name: star.name().to_string(),
                        owner: star.owner().as_str().to_string(),
                        sale_price: star.sale_price().map(Money::base_units),
                    },
                )
            })
            .collect(),
    }
}

fn from_snapshot(snapshot: JsonSnapshot) -> Ledger {
    let info = RegistryInfo::new(snapshot.name, snapshot.symbol);
    let stars = snapshot
        .stars
        .into_iter()
        .map(|(id, star)| {
            (
                AssetId::new(id),
                Star::from_parts(
                    star.name,
                    AccountId::new(star.owner),
                    star.sale_price.map(Money::new),
                ),
            )
        })
        .collect();
    Ledger::from_parts(info, stars)
}
