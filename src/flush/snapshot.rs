use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::model::Campaign;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot is not valid campaign JSON: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Serialize the whole campaign to a JSON string.
pub fn to_json(campaign: &Campaign) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string(campaign)?)
}

pub fn from_json(json: &str) -> Result<Campaign, SnapshotError> {
    Ok(serde_json::from_str(json)?)
}

/// Write the campaign to `path`, creating parent directories as needed.
pub fn save_snapshot(campaign: &Campaign, path: &Path) -> Result<(), SnapshotError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, campaign)?;
    writer.flush()?;
    tracing::debug!("saved snapshot of '{}' to {}", campaign.name, path.display());
    Ok(())
}

/// Read a campaign previously written by [`save_snapshot`].
pub fn load_snapshot(path: &Path) -> Result<Campaign, SnapshotError> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}
