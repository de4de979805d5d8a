//! Pipeline orchestration
//!
//! Runs the install pipeline for every requested source: acquire bytes,
//! classify the container, walk it into candidates, filter, install.
//! A failing source is logged and the batch moves on; only a usage
//! error (nothing to install) aborts the whole run.

use anyhow::{Context, Result};
use std::fs;
use tracing::{debug, error, info};

use crate::container::{self, ContainerKind};
use crate::core::cli::CliArgs;
use crate::error::InstallError;
use crate::fetch;
use crate::font::FontData;
use crate::install::{self, PlatformInstaller};

/// Run the installer over every source from the CLI.
pub fn run(args: CliArgs) -> Result<()> {
    init_logging(args.debug);
    args.validate().map_err(|message| anyhow::anyhow!(message))?;

    let sources = collect_sources(&args)?;
    let installer = install::default_installer();

    let mut installed = 0usize;
    for source in &sources {
        if args.dry_run {
            info!("would install font(s) from {source}");
            continue;
        }
        debug!("installing font(s) from {source}");
        if let Err(failure) = install_from(source, installer.as_ref(), &mut installed) {
            error!("{source}: {failure}");
        }
    }

    info!("installed {installed} fonts");
    if installer.is_windows() {
        info!("you will need to log off and back on before the installed fonts are available");
    }
    Ok(())
}

/// Install every font found in one source reference, adding each
/// success to `installed`. The count survives a mid-batch failure so
/// the final summary reflects what actually landed on disk.
pub fn install_from(
    source: &str,
    installer: &dyn PlatformInstaller,
    installed: &mut usize,
) -> Result<(), InstallError> {
    let (data, file_name) = fetch::fetch(source)?;
    let kind = container::classify(&data, &file_name);
    debug!("{file_name} classified as {kind:?}");

    match kind {
        ContainerKind::SingleFile => {
            let font = FontData::new(&file_name, data)?;
            install_candidates(std::iter::once(font), installer, installed)
        }
        _ => {
            let candidates = container::walk(kind, &data, &file_name)?;
            install_candidates(candidates.into_fonts(), installer, installed)
        }
    }
}

fn install_candidates(
    fonts: impl Iterator<Item = FontData>,
    installer: &dyn PlatformInstaller,
    installed: &mut usize,
) -> Result<(), InstallError> {
    for font in fonts {
        if !install::should_install(&font, installer) {
            debug!(
                "skipping \"{}\": Windows compatible variant on a non-Windows platform",
                font.name
            );
            continue;
        }
        info!("installing {}", font.name);
        let path = installer.install(&font)?;
        debug!("installed \"{}\" to {}", font.name, path.display());
        *installed += 1;
    }
    Ok(())
}

/// Sources from the list file (if any) followed by positional sources.
fn collect_sources(args: &CliArgs) -> Result<Vec<String>> {
    let mut sources = Vec::new();
    if let Some(path) = &args.from_file {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read source list {}", path.display()))?;
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            sources.push(line.to_string());
        }
    }
    sources.extend(args.sources.iter().cloned());
    Ok(sources)
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::test_archives::{gzip_bytes, tar_bytes, zip_bytes};
    use crate::font::test_fonts;
    use crate::install::testing::RecordingInstaller;
    use crate::install::unix::UnixInstaller;
    use clap::Parser;
    use std::path::Path;

    fn write_source(dir: &Path, name: &str, data: &[u8]) -> String {
        let path = dir.join(name);
        fs::write(&path, data).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn zip_with_a_license_installs_exactly_one_font() {
        let dir = tempfile::TempDir::new().unwrap();
        let font = test_fonts::ttf("Sample Regular", "Sample");
        let archive = zip_bytes(&[
            ("Font-Regular.ttf", font.as_slice()),
            ("LICENSE.txt", b"SIL Open Font License"),
        ]);
        let source = write_source(dir.path(), "sample.zip", &archive);

        let installer = RecordingInstaller::default();
        let mut installed = 0;
        install_from(&source, &installer, &mut installed).unwrap();

        assert_eq!(installed, 1);
        assert_eq!(installer.installed.borrow().as_slice(), &["Sample Regular"]);
    }

    #[test]
    fn tar_gz_name_collision_keeps_only_the_opentype_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let ttf = test_fonts::ttf("Sample", "Sample");
        let otf = test_fonts::otf("Sample", "Sample");
        let tarball = tar_bytes(&[
            ("Sample.ttf", ttf.as_slice()),
            ("Sample.otf", otf.as_slice()),
        ]);
        let source = write_source(dir.path(), "sample.tar.gz", &gzip_bytes(&tarball));

        let destination = tempfile::TempDir::new().unwrap();
        let installer = UnixInstaller::new(destination.path().to_path_buf());
        let mut installed = 0;
        install_from(&source, &installer, &mut installed).unwrap();

        assert_eq!(installed, 1);
        let family_dir = destination.path().join("sample");
        assert!(family_dir.join("Sample.otf").exists());
        assert!(!family_dir.join("Sample.ttf").exists());
    }

    #[test]
    fn a_bare_font_file_installs_without_a_container_walk() {
        let dir = tempfile::TempDir::new().unwrap();
        let font = test_fonts::ttf("Sample Regular", "Sample");
        let source = write_source(dir.path(), "Sample-Regular.ttf", &font);

        let installer = RecordingInstaller::default();
        let mut installed = 0;
        install_from(&source, &installer, &mut installed).unwrap();

        assert_eq!(installed, 1);
    }

    #[test]
    fn windows_compatible_variants_are_filtered_from_archives() {
        let dir = tempfile::TempDir::new().unwrap();
        let regular = test_fonts::ttf("Sample Regular", "Sample");
        let compatible = test_fonts::ttf("Sample Regular Windows Compatible", "Sample");
        let archive = zip_bytes(&[
            ("Sample-Regular.ttf", regular.as_slice()),
            ("Sample-Regular-WinCompat.ttf", compatible.as_slice()),
        ]);
        let source = write_source(dir.path(), "sample.zip", &archive);

        let installer = RecordingInstaller::default();
        let mut installed = 0;
        install_from(&source, &installer, &mut installed).unwrap();
        assert_eq!(installer.installed.borrow().as_slice(), &["Sample Regular"]);

        let windows = RecordingInstaller::windows();
        let mut installed = 0;
        install_from(&source, &windows, &mut installed).unwrap();
        assert_eq!(installed, 2);
    }

    #[test]
    fn a_non_font_single_file_fails_for_that_source() {
        let dir = tempfile::TempDir::new().unwrap();
        let source = write_source(dir.path(), "README.txt", b"not a font at all");

        let installer = RecordingInstaller::default();
        let mut installed = 0;
        let result = install_from(&source, &installer, &mut installed);
        assert!(matches!(result, Err(InstallError::NotAFont { .. })));
        assert_eq!(installed, 0);
    }

    #[test]
    fn source_lists_skip_blanks_and_comments() {
        let dir = tempfile::TempDir::new().unwrap();
        let list = dir.path().join("fonts.txt");
        fs::write(&list, "# fonts to install\n\nfirst.ttf\n  second.ttf  \n").unwrap();

        let args = CliArgs::parse_from([
            "font-install",
            "--from-file",
            list.to_str().unwrap(),
            "third.ttf",
        ]);
        let sources = collect_sources(&args).unwrap();
        assert_eq!(sources, ["first.ttf", "second.ttf", "third.ttf"]);
    }
}
