//! Container classification and walking.
//!
//! A fetched byte blob is classified by its leading magic bytes, then
//! walked into a [`CandidateSet`] of fonts. Classification is total:
//! anything that is not a recognized archive is treated as a single
//! font file and left for the metadata extractor to accept or reject.

pub mod candidates;
pub mod tar;
pub mod zip;

pub use candidates::CandidateSet;

use tracing::debug;

use crate::error::InstallError;
use crate::font::{self, FontData};

/// How a fetched byte blob should be unpacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Zip,
    Gzip,
    /// Content sniffing was inconclusive but the filename hint ends in
    /// `.tar`. Real tarballs have no leading magic, so the extension is
    /// the only reliable signal.
    TarByExtension,
    SingleFile,
}

const ZIP_MAGIC: [&[u8]; 3] = [b"PK\x03\x04", b"PK\x05\x06", b"PK\x07\x08"];
const GZIP_MAGIC: &[u8] = &[0x1f, 0x8b];

/// Classify a byte blob. Total: every input maps to a kind. A `.tar`
/// file misnamed or corrupted past recognition falls through to
/// `SingleFile` and surfaces later as a per-file skip, not a crash.
pub fn classify(data: &[u8], file_name_hint: &str) -> ContainerKind {
    if ZIP_MAGIC.iter().any(|magic| data.starts_with(magic)) {
        return ContainerKind::Zip;
    }
    if data.starts_with(GZIP_MAGIC) {
        return ContainerKind::Gzip;
    }
    if font::extension_of(file_name_hint).as_deref() == Some("tar") {
        return ContainerKind::TarByExtension;
    }
    ContainerKind::SingleFile
}

/// Walk an archive into a candidate set. `SingleFile` blobs never reach
/// this point; the orchestrator installs them directly.
pub fn walk(
    kind: ContainerKind,
    data: &[u8],
    source_name: &str,
) -> Result<CandidateSet, InstallError> {
    match kind {
        ContainerKind::Zip => zip::walk(data, source_name),
        ContainerKind::Gzip => tar::walk_gzip(data, source_name),
        ContainerKind::TarByExtension => tar::walk(data, source_name),
        ContainerKind::SingleFile => {
            unreachable!("single files are installed without a container walk")
        }
    }
}

/// Offer one archive entry to the candidate set. Entries that are not
/// valid fonts are logged and skipped; the walk continues.
pub(crate) fn offer_entry(candidates: &mut CandidateSet, entry_name: &str, bytes: Vec<u8>) {
    match FontData::new(entry_name, bytes) {
        Ok(font) => {
            debug!("found font \"{}\" in entry {entry_name}", font.name);
            candidates.offer(font);
        }
        Err(skip) => debug!("skipping entry: {skip}"),
    }
}


#[cfg(test)]
mod tests {
    use super::test_archives::{gzip_bytes, zip_bytes};
    use super::*;

    #[test]
    fn zip_bytes_classify_as_zip() {
        let data = zip_bytes(&[("a.txt", b"hello")]);
        assert_eq!(classify(&data, "fonts.zip"), ContainerKind::Zip);
    }

    #[test]
    fn gzip_bytes_classify_as_gzip() {
        let data = gzip_bytes(b"payload");
        assert_eq!(classify(&data, "font.ttf.gz"), ContainerKind::Gzip);
    }

    #[test]
    fn plain_text_classifies_as_single_file() {
        assert_eq!(
            classify(b"SIL Open Font License", "OFL.txt"),
            ContainerKind::SingleFile
        );
    }

    #[test]
    fn unrecognized_content_with_tar_extension_uses_the_hint() {
        // Tar headers carry no leading magic; a zeroed block is what an
        // ambiguous sniff looks like.
        let data = [0u8; 512];
        assert_eq!(classify(&data, "fonts.TAR"), ContainerKind::TarByExtension);
        assert_eq!(classify(&data, "fonts.bin"), ContainerKind::SingleFile);
    }

    #[test]
    fn empty_input_classifies_as_single_file() {
        assert_eq!(classify(&[], "empty"), ContainerKind::SingleFile);
    }
}
