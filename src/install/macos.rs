//! macOS installer.

use std::path::PathBuf;

use tracing::debug;

use crate::error::InstallError;
use crate::font::FontData;
use crate::install::{write_font, PlatformInstaller};

/// Installs directly into `~/Library/Fonts`. Unlike fontconfig, the
/// macOS font machinery does not scan subdirectories, so fonts are
/// written flat.
pub struct MacInstaller {
    font_dir: PathBuf,
}

impl MacInstaller {
    pub fn new(font_dir: PathBuf) -> Self {
        Self { font_dir }
    }
}

impl PlatformInstaller for MacInstaller {
    fn install(&self, font: &FontData) -> Result<PathBuf, InstallError> {
        debug!("installing \"{}\" to {}", font.name, self.font_dir.display());
        write_font(&self.font_dir, &font.file_name, &font.data)
    }
}
