//! Linux/Unix installer.

use std::path::PathBuf;

use tracing::debug;

use crate::error::InstallError;
use crate::font::FontData;
use crate::install::{write_font, PlatformInstaller};

/// Installs into the user's font directory with a subdirectory per
/// family. Fontconfig understands subdirectories, so this keeps the
/// font directory tidy; fonts with no family metadata go in flat.
pub struct UnixInstaller {
    font_dir: PathBuf,
}

impl UnixInstaller {
    pub fn new(font_dir: PathBuf) -> Self {
        Self { font_dir }
    }
}

impl PlatformInstaller for UnixInstaller {
    fn install(&self, font: &FontData) -> Result<PathBuf, InstallError> {
        let dir = if font.family.is_empty() {
            self.font_dir.clone()
        } else {
            self.font_dir.join(family_dir_name(&font.family))
        };
        debug!("installing \"{}\" to {}", font.name, dir.display());
        write_font(&dir, &font.file_name, &font.data)
    }
}

/// Family subdirectory name: spaces become hyphens, lower-cased.
fn family_dir_name(family: &str) -> String {
    family.replace(' ', "-").to_lowercase()
}
