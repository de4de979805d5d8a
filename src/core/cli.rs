//! Command line interface for font-install
//!
//! Handles parsing command line arguments and provides
//! validation for user inputs.

use clap::Parser;
use std::path::PathBuf;

/// font-install CLI arguments
///
/// Examples:
///   font-install Inconsolata-Medium.ttf       # Install a local font file
///   font-install https://example.com/font.zip # Install from a URL
///   font-install --from-file fonts.txt        # Install every source listed in a file
///   font-install --dry-run fonts.tar.gz       # Show what would be installed
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "font-install",
    version,
    about = "Install OpenType/TrueType fonts from local files, URLs, and archives",
    long_about = "font-install downloads or reads font sources and installs every font it finds into the platform's font directory. A source may be a bare .otf/.ttf file or a ZIP, TAR, or gzip archive mixing fonts with licenses and readmes."
)]
pub struct CliArgs {
    /// Font sources to install
    ///
    /// Each source is a filesystem path or a URL with scheme
    /// file, http, or https.
    #[clap(
        value_name = "SOURCE",
        help = "Font sources (paths or file/http/https URLs)"
    )]
    pub sources: Vec<String>,

    /// Read additional sources from a text file
    ///
    /// One source per line; blank lines and lines starting with '#'
    /// are ignored.
    #[clap(
        long = "from-file",
        short = 'f',
        value_name = "FILE",
        help = "Text file containing fonts to install, one per line"
    )]
    pub from_file: Option<PathBuf>,

    /// Enable debug logging
    #[clap(long = "debug", short = 'd', help = "Enable debug logging")]
    pub debug: bool,

    /// Don't actually download or install anything
    #[clap(
        long = "dry-run",
        short = 'n',
        help = "Log intended actions without downloading or installing"
    )]
    pub dry_run: bool,
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    ///
    /// Running with nothing to install is the one unrecoverable usage
    /// error; everything else is reported per source at runtime.
    pub fn validate(&self) -> Result<(), String> {
        if self.sources.is_empty() && self.from_file.is_none() {
            return Err(
                "no font sources specified\nPass one or more sources, or --from-file <FILE>."
                    .to_string(),
            );
        }

        if let Some(path) = &self.from_file {
            if !path.exists() {
                return Err(format!(
                    "source list does not exist: {}\nMake sure the path is correct and the file exists.",
                    path.display()
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_sources_is_a_usage_error() {
        let args = CliArgs::parse_from(["font-install"]);
        assert!(args.validate().is_err());
    }

    #[test]
    fn positional_sources_are_accepted() {
        let args = CliArgs::parse_from(["font-install", "a.ttf", "https://example.com/b.zip"]);
        assert!(args.validate().is_ok());
        assert_eq!(args.sources.len(), 2);
    }

    #[test]
    fn missing_source_list_fails_validation() {
        let args = CliArgs::parse_from(["font-install", "--from-file", "/no/such/list.txt"]);
        assert!(args.validate().is_err());
    }
}
