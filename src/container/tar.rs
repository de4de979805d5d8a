//! TAR and gzip container walking.

use std::io::Read;

use flate2::read::GzDecoder;
use tar::Archive;
use tracing::{debug, warn};

use crate::container::{self, CandidateSet};
use crate::error::InstallError;
use crate::font;

/// Walk a TAR archive: sequential header reads until the end-of-archive
/// sentinel. Malformed headers are fatal for the source; entries whose
/// contents cannot be read are skipped.
pub fn walk(data: &[u8], source_name: &str) -> Result<CandidateSet, InstallError> {
    let mut archive = Archive::new(data);
    let entries = archive.entries().map_err(|error| InstallError::Archive {
        kind: "tar",
        file_name: source_name.to_string(),
        message: error.to_string(),
    })?;

    debug!("walking tar archive {source_name}");

    let mut candidates = CandidateSet::new();
    for entry in entries {
        let mut entry = entry.map_err(|error| InstallError::Archive {
            kind: "tar",
            file_name: source_name.to_string(),
            message: error.to_string(),
        })?;
        if !entry.header().entry_type().is_file() {
            continue;
        }
        let entry_name = match entry.path() {
            Ok(path) => path.to_string_lossy().into_owned(),
            Err(error) => {
                warn!("entry with an unreadable path in {source_name}: {error}");
                continue;
            }
        };
        let mut bytes = Vec::with_capacity(entry.size() as usize);
        if let Err(error) = entry.read_to_end(&mut bytes) {
            warn!("failed to read entry {entry_name}: {error}");
            continue;
        }
        container::offer_entry(&mut candidates, &entry_name, bytes);
    }
    Ok(candidates)
}

/// Unpack a gzip blob. Gzip wraps exactly one logical stream: when the
/// inner name is a tarball the TAR walker takes over, otherwise the
/// decompressed payload is offered as a single font candidate.
pub fn walk_gzip(data: &[u8], source_name: &str) -> Result<CandidateSet, InstallError> {
    let mut decoder = GzDecoder::new(data);
    let mut payload = Vec::new();
    decoder
        .read_to_end(&mut payload)
        .map_err(|error| InstallError::Archive {
            kind: "gzip",
            file_name: source_name.to_string(),
            message: error.to_string(),
        })?;

    let inner_name = inner_name(source_name);
    if font::extension_of(&inner_name).as_deref() == Some("tar") {
        debug!("{source_name} decompressed to a tarball");
        return walk(&payload, source_name);
    }

    debug!("{source_name} decompressed to a single file {inner_name}");
    let mut candidates = CandidateSet::new();
    container::offer_entry(&mut candidates, &inner_name, payload);
    Ok(candidates)
}

/// Name of the decompressed payload: the compression suffix is
/// stripped, with `.tgz` rewriting to `.tar`.
fn inner_name(source_name: &str) -> String {
    let lower = source_name.to_ascii_lowercase();
    for suffix in [".gz", ".gzip"] {
        if lower.ends_with(suffix) {
            return source_name[..source_name.len() - suffix.len()].to_string();
        }
    }
    if lower.ends_with(".tgz") {
        return format!("{}.tar", &source_name[..source_name.len() - 4]);
    }
    source_name.to_string()
}
