//! Platform-specific font installation.
//!
//! Each platform has its own destination policy: macOS installs flat
//! into the user's font directory, Linux/Unix adds a per-family
//! subdirectory, and Windows writes into the system font directory and
//! registers the font in the registry. The orchestrator only sees the
//! [`PlatformInstaller`] trait, selected once at startup.

pub mod macos;
pub mod paths;
pub mod unix;
pub mod windows;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::InstallError;
use crate::font::FontData;

/// Display-name marker for glyph-substituted variants bundled for
/// cross-platform archives. Matched case-insensitively.
const WINDOWS_COMPATIBLE_MARKER: &str = "windows compatible";

/// Writes one font to its platform-specific destination.
pub trait PlatformInstaller {
    /// Install the font, returning the path it was written to.
    fn install(&self, font: &FontData) -> Result<PathBuf, InstallError>;

    /// Whether this installer targets Windows. Drives the
    /// "Windows compatible" variant filter and the final logon note.
    fn is_windows(&self) -> bool {
        false
    }
}

/// The installer for the platform this binary was built for.
#[cfg(target_os = "macos")]
pub fn default_installer() -> Box<dyn PlatformInstaller> {
    Box::new(macos::MacInstaller::new(paths::font_dir()))
}

#[cfg(all(unix, not(target_os = "macos")))]
pub fn default_installer() -> Box<dyn PlatformInstaller> {
    Box::new(unix::UnixInstaller::new(paths::font_dir()))
}

#[cfg(windows)]
pub fn default_installer() -> Box<dyn PlatformInstaller> {
    Box::new(windows::WindowsInstaller::new(
        paths::font_dir(),
        windows::SystemFontRegistry,
    ))
}

/// Whether a resolved candidate should be installed on this platform.
/// "Windows compatible" variants are redundant everywhere but Windows.
pub fn should_install(font: &FontData, installer: &dyn PlatformInstaller) -> bool {
    if installer.is_windows() {
        return true;
    }
    !font
        .name
        .to_lowercase()
        .contains(WINDOWS_COMPATIBLE_MARKER)
}

/// Write font bytes under `dir`, creating directories as needed.
/// Directories are owner-only; files are world-readable.
pub(crate) fn write_font(
    dir: &Path,
    file_name: &str,
    data: &[u8],
) -> Result<PathBuf, InstallError> {
    create_dirs(dir).map_err(|source| InstallError::Write {
        path: dir.to_path_buf(),
        source,
    })?;
    let path = dir.join(file_name);
    write_file(&path, data).map_err(|source| InstallError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

#[cfg(unix)]
fn create_dirs(dir: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new().recursive(true).mode(0o700).create(dir)
}

#[cfg(not(unix))]
fn create_dirs(dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dir)
}

#[cfg(unix)]
fn write_file(path: &Path, data: &[u8]) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::OpenOptionsExt;
    let mut file = fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .mode(0o644)
        .open(path)?;
    file.write_all(data)
}

#[cfg(not(unix))]
fn write_file(path: &Path, data: &[u8]) -> std::io::Result<()> {
    fs::write(path, data)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::test_fonts;

    fn named(name: &str) -> FontData {
        FontData::new("sample.ttf", test_fonts::ttf(name, "Sample")).unwrap()
    }

    #[test]
    fn windows_compatible_variants_are_filtered_off_windows() {
        let installer = testing::RecordingInstaller::default();
        let font = named("Foo Windows Compatible");
        assert!(!should_install(&font, &installer));
    }

    #[test]
    fn windows_compatible_variants_install_on_windows() {
        let installer = testing::RecordingInstaller::windows();
        let font = named("Foo Windows Compatible");
        assert!(should_install(&font, &installer));
    }

    #[test]
    fn the_marker_is_matched_case_insensitively() {
        let installer = testing::RecordingInstaller::default();
        assert!(!should_install(&named("Foo WINDOWS COMPATIBLE Bold"), &installer));
        assert!(should_install(&named("Foo Regular"), &installer));
    }
}
