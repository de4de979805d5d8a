//! Font metadata extraction.
//!
//! Wraps `ttf-parser` to turn raw bytes from a container entry into a
//! [`FontData`] descriptor. Construction is gated twice: the entry must
//! carry a recognized font extension, and the bytes must parse with a
//! non-empty name table. Anything else is rejected as "not a font" and
//! skipped by the caller.

use std::path::Path;

use tracing::error;
use ttf_parser::name_id;

use crate::error::InstallError;

/// File extensions recognized as installable fonts (lower-cased,
/// without the dot).
pub const FONT_EXTENSIONS: [&str; 2] = ["otf", "ttf"];

/// A font ready to install: the exact uncompressed bytes plus the
/// names extracted from its name table.
#[derive(Debug, Clone)]
pub struct FontData {
    /// Full display name. Never empty: falls back to the file name when
    /// the name table has no full-name entry.
    pub name: String,
    /// Family name; empty when the font carries no family metadata.
    pub family: String,
    /// Base name of the originating entry, used for the install path
    /// and for extension comparisons.
    pub file_name: String,
    /// Raw font bytes, written verbatim at install time.
    pub data: Vec<u8>,
}

impl FontData {
    /// Extract metadata from one container entry.
    pub fn new(entry_name: &str, data: Vec<u8>) -> Result<Self, InstallError> {
        let file_name = base_name(entry_name);
        if !has_font_extension(&file_name) {
            return Err(InstallError::NotAFont {
                file_name,
                reason: "unrecognized extension".to_string(),
            });
        }

        let face = ttf_parser::Face::parse(&data, 0).map_err(|parse_error| {
            InstallError::NotAFont {
                file_name: file_name.clone(),
                reason: parse_error.to_string(),
            }
        })?;

        let names = face.names();
        if names.len() == 0 {
            return Err(InstallError::NotAFont {
                file_name,
                reason: "font has no name table".to_string(),
            });
        }

        let family = name_string(names, name_id::TYPOGRAPHIC_FAMILY)
            .or_else(|| name_string(names, name_id::FAMILY))
            .unwrap_or_default();

        let name = match name_string(names, name_id::FULL_NAME) {
            Some(full_name) if !full_name.is_empty() => full_name,
            _ => {
                error!("font {file_name} has no full name, using the file name");
                file_name.clone()
            }
        };

        if family.is_empty() {
            error!("font \"{name}\" has no font family");
        }

        Ok(Self {
            name,
            family,
            file_name,
            data,
        })
    }

    /// Lower-cased extension of the originating file name, without the
    /// dot. Empty when the name has no extension.
    pub fn extension(&self) -> String {
        extension_of(&self.file_name).unwrap_or_default()
    }
}

/// First name-table entry with the given ID that decodes to a string.
fn name_string(names: ttf_parser::name::Names<'_>, id: u16) -> Option<String> {
    names
        .into_iter()
        .filter(|name| name.name_id == id)
        .find_map(|name| name.to_string())
}

/// Base name of an archive entry or path ("fonts/Foo.ttf" -> "Foo.ttf").
pub fn base_name(entry_name: &str) -> String {
    Path::new(entry_name)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| entry_name.to_string())
}

/// Lower-cased extension of a file name, without the dot.
pub fn extension_of(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .map(|extension| extension.to_string_lossy().to_lowercase())
}

/// Whether the file name carries a recognized font extension.
pub fn has_font_extension(file_name: &str) -> bool {
    extension_of(file_name)
        .is_some_and(|extension| FONT_EXTENSIONS.contains(&extension.as_str()))
}
