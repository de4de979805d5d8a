//! Windows installer.
//!
//! Installing a font on Windows takes two ordered steps: copy the file
//! into the system font directory, then register it under
//! `HKLM\SOFTWARE\Microsoft\Windows NT\CurrentVersion\Fonts`. If the
//! registry write fails the file is deleted again so no unregistered
//! font is left behind; a failed delete is surfaced instead of the
//! registry error.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::error::InstallError;
use crate::font::FontData;
use crate::install::{write_font, PlatformInstaller};

/// Registry key holding the font list, relative to HKEY_LOCAL_MACHINE.
pub const FONTS_KEY: &str = r"SOFTWARE\Microsoft\Windows NT\CurrentVersion\Fonts";

/// The side-effecting registry step, split out so the write/rollback
/// sequence can be exercised with a failing fake.
pub trait FontRegistry {
    /// Map a font's display name to its registry value.
    fn register(&self, font_name: &str, value: &str) -> Result<(), InstallError>;
}

/// Installs into the system font directory and registers each font.
pub struct WindowsInstaller<R> {
    font_dir: PathBuf,
    registry: R,
}

impl<R: FontRegistry> WindowsInstaller<R> {
    pub fn new(font_dir: PathBuf, registry: R) -> Self {
        Self { font_dir, registry }
    }
}

impl<R: FontRegistry> PlatformInstaller for WindowsInstaller<R> {
    fn install(&self, font: &FontData) -> Result<PathBuf, InstallError> {
        debug!("installing \"{}\" to {}", font.name, self.font_dir.display());
        let path = write_font(&self.font_dir, &font.file_name, &font.data)?;

        // The registry labels every font "(TrueType)", OpenType
        // included; that matches what Windows itself writes.
        let value = format!("{} (TrueType)", font.file_name);
        if let Err(registry_error) = self.registry.register(&font.name, &value) {
            if let Err(remove_error) = fs::remove_file(&path) {
                return Err(InstallError::Rollback {
                    path,
                    source: remove_error,
                });
            }
            return Err(registry_error);
        }
        Ok(path)
    }

    fn is_windows(&self) -> bool {
        true
    }
}

/// The real registry, available only when built for Windows.
#[cfg(windows)]
pub struct SystemFontRegistry;

#[cfg(windows)]
impl FontRegistry for SystemFontRegistry {
    fn register(&self, font_name: &str, value: &str) -> Result<(), InstallError> {
        use winreg::enums::{HKEY_LOCAL_MACHINE, KEY_SET_VALUE};
        use winreg::RegKey;

        let hklm = RegKey::predef(HKEY_LOCAL_MACHINE);
        let key = hklm
            .open_subkey_with_flags(FONTS_KEY, KEY_SET_VALUE)
            .map_err(|error| InstallError::Registry {
                name: font_name.to_string(),
                message: error.to_string(),
            })?;
        key.set_value(font_name, &value.to_string())
            .map_err(|error| InstallError::Registry {
                name: font_name.to_string(),
                message: error.to_string(),
            })
    }
}
