//! File-backed `Store` adapter using `sled` as the embedded KV engine.
//!
//! One of the two required adapters (§9 design note). Each logical
//! table from §4.2 maps to a `sled` tree; rows are serialized as JSON,
//! matching the `value_json`-as-a-string-column approach the design
//! notes call out as acceptable for the `Value` tagged union.

use std::collections::HashSet;
use std::path::Path;

use crate::enums::FactorCode;
use crate::model::{Event, Factor, PendingFollowUp};
use crate::store::{skip_write, StorageError, Store};

const TREE_EVENTS: &str = "events";
const TREE_FACTORS: &str = "factors";
const TREE_SUPPRESSED: &str = "suppressed_factor_codes";
const TREE_PENDING: &str = "pending_followups";
const TREE_CONTROLS: &str = "user_controls";
const PENDING_KEY: &[u8] = b"singleton";

/// A `Store` backed by an on-disk `sled` database.
pub struct SledStore {
    db: sled::Db,
}

impl SledStore {
    /// Opens (or creates) a `sled` database at `path`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the database cannot be opened.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let db = sled::open(path).map_err(|e| StorageError::new("open", e.to_string()))?;
        Ok(SledStore { db })
    }

    fn tree(&self, name: &str) -> Result<sled::Tree, StorageError> {
        self.db.open_tree(name).map_err(|e| StorageError::new("open_tree", e.to_string()))
    }
}

impl Store for SledStore {
    fn save_event_and_factors(&self, event: &Event, factors: &[Factor]) -> Result<(), StorageError> {
        if skip_write(event.save_mode()) {
            return Ok(());
        }
        let events = self.tree(TREE_EVENTS)?;
        let factors_tree = self.tree(TREE_FACTORS)?;

        let event_json = serde_json::to_vec(event)
            .map_err(|e| StorageError::new("save_event_and_factors", e.to_string()))?;
        events
            .insert(event.id().as_str().as_bytes(), event_json)
            .map_err(|e| StorageError::new("save_event_and_factors", e.to_string()))?;

        for factor in factors {
            let factor_json = serde_json::to_vec(factor)
                .map_err(|e| StorageError::new("save_event_and_factors", e.to_string()))?;
            factors_tree
                .insert(factor.id().as_str().as_bytes(), factor_json)
                .map_err(|e| StorageError::new("save_event_and_factors", e.to_string()))?;
        }

        self.db.flush().map_err(|e| StorageError::new("save_event_and_factors", e.to_string()))?;
        Ok(())
    }

    fn load_all_factors(&self) -> Result<Vec<Factor>, StorageError> {
        let tree = self.tree(TREE_FACTORS)?;
        let mut out = Vec::new();
        for entry in tree.iter() {
            let (_, value) = entry.map_err(|e| StorageError::new("load_all_factors", e.to_string()))?;
            match serde_json::from_slice::<Factor>(&value) {
                Ok(factor) => out.push(factor),
                Err(e) => {
                    tracing::debug!(error = %e, "skipping corrupt factor row");
                }
            }
        }
        Ok(out)
    }

    fn suppress(&self, code: FactorCode) -> Result<(), StorageError> {
        let tree = self.tree(TREE_SUPPRESSED)?;
        tree.insert(code.code().as_bytes(), b"1".as_ref())
            .map_err(|e| StorageError::new("suppress", e.to_string()))?;
        Ok(())
    }

    fn unsuppress(&self, code: FactorCode) -> Result<(), StorageError> {
        let tree = self.tree(TREE_SUPPRESSED)?;
        tree.remove(code.code().as_bytes())
            .map_err(|e| StorageError::new("unsuppress", e.to_string()))?;
        Ok(())
    }

    fn suppressed_set(&self) -> Result<HashSet<FactorCode>, StorageError> {
        let tree = self.tree(TREE_SUPPRESSED)?;
        let mut out = HashSet::new();
        for entry in tree.iter() {
            let (key, _) = entry.map_err(|e| StorageError::new("suppressed_set", e.to_string()))?;
            let code_str = String::from_utf8_lossy(&key);
            match FactorCode::from_code(&code_str) {
                Some(code) => {
                    out.insert(code);
                }
                None => {
                    tracing::debug!(code = %code_str, "skipping unknown suppressed factor code");
                }
            }
        }
        Ok(out)
    }

    fn set_pending(&self, pending: PendingFollowUp) -> Result<(), StorageError> {
        let tree = self.tree(TREE_PENDING)?;
        let json = serde_json::to_vec(&pending)
            .map_err(|e| StorageError::new("set_pending", e.to_string()))?;
        tree.insert(PENDING_KEY, json).map_err(|e| StorageError::new("set_pending", e.to_string()))?;
        Ok(())
    }

    fn get_pending(&self) -> Result<Option<PendingFollowUp>, StorageError> {
        let tree = self.tree(TREE_PENDING)?;
        let Some(bytes) = tree.get(PENDING_KEY).map_err(|e| StorageError::new("get_pending", e.to_string()))?
        else {
            return Ok(None);
        };
        match serde_json::from_slice::<PendingFollowUp>(&bytes) {
            Ok(pending) => Ok(Some(pending)),
            Err(e) => {
                tracing::debug!(error = %e, "skipping corrupt pending follow-up row");
                Ok(None)
            }
        }
    }

    fn clear_pending(&self) -> Result<(), StorageError> {
        let tree = self.tree(TREE_PENDING)?;
        tree.remove(PENDING_KEY).map_err(|e| StorageError::new("clear_pending", e.to_string()))?;
        Ok(())
    }

    fn get_control(&self, key: &str, default: &str) -> Result<String, StorageError> {
        let tree = self.tree(TREE_CONTROLS)?;
        let Some(bytes) = tree.get(key.as_bytes()).map_err(|e| StorageError::new("get_control", e.to_string()))?
        else {
            return Ok(default.to_string());
        };
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn set_control(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let tree = self.tree(TREE_CONTROLS)?;
        tree.insert(key.as_bytes(), value.as_bytes())
            .map_err(|e| StorageError::new("set_control", e.to_string()))?;
        Ok(())
    }
}
