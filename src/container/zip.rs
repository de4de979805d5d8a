//! ZIP container walking.

use std::io::{Cursor, Read};

use tracing::{debug, warn};
use zip::ZipArchive;

use crate::container::{self, CandidateSet};
use crate::error::InstallError;

/// Walk every entry of a ZIP archive. A damaged central directory is
/// fatal for the source; individual unreadable entries are skipped.
pub fn walk(data: &[u8], source_name: &str) -> Result<CandidateSet, InstallError> {
    let mut archive =
        ZipArchive::new(Cursor::new(data)).map_err(|error| InstallError::Archive {
            kind: "zip",
            file_name: source_name.to_string(),
            message: error.to_string(),
        })?;

    debug!("walking zip archive {source_name} ({} entries)", archive.len());

    let mut candidates = CandidateSet::new();
    for index in 0..archive.len() {
        let mut entry = match archive.by_index(index) {
            Ok(entry) => entry,
            Err(error) => {
                warn!("unreadable entry #{index} in {source_name}: {error}");
                continue;
            }
        };
        if entry.is_dir() {
            continue;
        }
        let entry_name = entry.name().to_string();
        let mut bytes = Vec::with_capacity(entry.size() as usize);
        if let Err(error) = entry.read_to_end(&mut bytes) {
            warn!("failed to read entry {entry_name}: {error}");
            continue;
        }
        container::offer_entry(&mut candidates, &entry_name, bytes);
    }
    Ok(candidates)
}
