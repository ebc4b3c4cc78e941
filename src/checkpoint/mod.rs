//! Durable scan checkpoint
//!
//! Persists the full `{checked, available}` record after every handle so an
//! interrupted run loses at most the in-flight handle. Two artifacts are
//! written on each flush:
//!
//! - the checkpoint itself (full record, used for resumption)
//! - the available-only projection (the externally consumed result)
//!
//! Loading is deliberately tolerant: a missing or corrupt checkpoint
//! degrades to an empty state and the run starts fresh. Writes go through
//! a temp file and rename so a crash mid-write cannot corrupt the prior
//! record.

use crate::config::OutputConfig;
use crate::state::ScanState;
use crate::{Result, ScoutError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The durable serialization of [`ScanState`] plus provenance fields.
#[derive(Debug, Serialize, Deserialize)]
struct CheckpointRecord {
    #[serde(flatten)]
    state: ScanState,

    /// Hash of the config the record was written under; a mismatch on
    /// resume is logged but does not invalidate the record.
    #[serde(rename = "config-hash", default, skip_serializing_if = "Option::is_none")]
    config_hash: Option<String>,

    #[serde(rename = "updated-at", default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

/// Handle to the checkpoint artifacts on disk.
#[derive(Debug, Clone)]
pub struct Checkpoint {
    checkpoint_path: PathBuf,
    available_path: PathBuf,
    config_hash: String,
}

impl Checkpoint {
    pub fn new(output: &OutputConfig, config_hash: &str) -> Self {
        Self {
            checkpoint_path: PathBuf::from(&output.checkpoint_path),
            available_path: PathBuf::from(&output.available_path),
            config_hash: config_hash.to_string(),
        }
    }

    /// Path of the available-only artifact, for user-facing reporting.
    pub fn available_path(&self) -> &Path {
        &self.available_path
    }

    /// Loads the prior scan state, or an empty state if there is none.
    ///
    /// Read and parse failures never propagate: a corrupt checkpoint is
    /// reported and treated as absent.
    pub fn load(&self) -> ScanState {
        let content = match std::fs::read_to_string(&self.checkpoint_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(
                    "No checkpoint at {}, starting fresh",
                    self.checkpoint_path.display()
                );
                return ScanState::new();
            }
            Err(e) => {
                tracing::warn!(
                    "Could not read checkpoint {}: {}; starting fresh",
                    self.checkpoint_path.display(),
                    e
                );
                return ScanState::new();
            }
        };

        match serde_json::from_str::<CheckpointRecord>(&content) {
            Ok(record) => {
                if let Some(prior_hash) = &record.config_hash {
                    if *prior_hash != self.config_hash {
                        tracing::warn!(
                            "Configuration changed since checkpoint was written; \
                             prior verdicts are kept as-is"
                        );
                    }
                }
                record.state
            }
            Err(e) => {
                tracing::warn!(
                    "Checkpoint {} is corrupt ({}); starting fresh",
                    self.checkpoint_path.display(),
                    e
                );
                ScanState::new()
            }
        }
    }

    /// State to start a run from: empty when `fresh` was requested,
    /// otherwise the prior record. A fresh start does not touch the
    /// on-disk artifacts; they are only overwritten by the first flush.
    pub fn initial_state(&self, fresh: bool) -> ScanState {
        if fresh {
            tracing::info!("Starting fresh scan (ignoring previous checkpoint)");
            ScanState::new()
        } else {
            self.load()
        }
    }

    /// Overwrites both artifacts with the current state.
    ///
    /// Blocking on purpose: the engine must not pace into the next handle
    /// until the just-completed handle is durable.
    pub fn flush(&self, state: &ScanState) -> Result<()> {
        let record = CheckpointRecord {
            state: state.clone(),
            config_hash: Some(self.config_hash.clone()),
            updated_at: Some(Utc::now()),
        };

        let checkpoint_json = serde_json::to_string_pretty(&record)?;
        write_atomic(&self.checkpoint_path, &checkpoint_json)?;

        let available_json = serde_json::to_string_pretty(&state.available)?;
        write_atomic(&self.available_path, &available_json)?;

        Ok(())
    }
}

/// Writes via a sibling temp file and rename, so an interrupted write
/// leaves the previous artifact intact.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let tmp = path.with_extension("tmp");

    let io_err = |source: std::io::Error| ScoutError::CheckpointWrite {
        path: path.display().to_string(),
        source,
    };

    std::fs::write(&tmp, content).map_err(io_err)?;
    std::fs::rename(&tmp, path).map_err(io_err)?;

    Ok(())
}
