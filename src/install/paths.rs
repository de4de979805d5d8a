//! Per-platform font directory resolution.

use std::path::PathBuf;

/// The user's font directory on macOS: `~/Library/Fonts`.
#[cfg(target_os = "macos")]
pub fn font_dir() -> PathBuf {
    dirs::font_dir()
        .unwrap_or_else(|| PathBuf::from("Library/Fonts"))
}

/// The user's font directory on Linux and other Unix systems:
/// `$XDG_DATA_HOME/fonts`, typically `~/.local/share/fonts`.
#[cfg(all(unix, not(target_os = "macos")))]
pub fn font_dir() -> PathBuf {
    dirs::font_dir().unwrap_or_else(|| {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".local/share/fonts")
    })
}

/// The system-wide font directory on Windows, `%WINDIR%\Fonts` by
/// default. Windows has no durable per-user font store, so all fonts
/// land in the system directory.
#[cfg(windows)]
pub fn font_dir() -> PathBuf {
    let windir = std::env::var_os("WINDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(r"C:\Windows"));
    windir.join("Fonts")
}
