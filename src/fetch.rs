//! Source acquisition.
//!
//! A source reference is either a filesystem path or a URL with scheme
//! `file`, `http`, or `https`. Remote fetches are a single blocking GET
//! with a fixed timeout; nothing is retried.

use std::io::Read;
use std::path::Path;
use std::time::Duration;

use tracing::debug;

use crate::error::InstallError;

/// How long a download may take before it is abandoned.
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// Acquire the bytes behind a source reference, returning them together
/// with a filename hint (the last path segment) used later for
/// container sniffing and extension checks.
pub fn fetch(reference: &str) -> Result<(Vec<u8>, String), InstallError> {
    match reference.split_once("://") {
        Some(("http", _)) | Some(("https", _)) => fetch_url(reference),
        Some(("file", rest)) => read_local(Path::new(rest)),
        Some((scheme, _)) => Err(InstallError::UnsupportedScheme {
            scheme: scheme.to_string(),
            reference: reference.to_string(),
        }),
        None => read_local(Path::new(reference)),
    }
}

fn read_local(path: &Path) -> Result<(Vec<u8>, String), InstallError> {
    debug!("reading local file {}", path.display());
    let data = std::fs::read(path).map_err(|source| InstallError::ReadSource {
        path: path.to_path_buf(),
        source,
    })?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok((data, file_name))
}

fn fetch_url(url: &str) -> Result<(Vec<u8>, String), InstallError> {
    debug!("downloading {url}");
    // ureq turns any non-2xx status into an error from call().
    let response = ureq::get(url)
        .timeout(DOWNLOAD_TIMEOUT)
        .call()
        .map_err(|error| InstallError::Download {
            url: url.to_string(),
            message: error.to_string(),
        })?;

    let mut data = Vec::new();
    response
        .into_reader()
        .read_to_end(&mut data)
        .map_err(|error| InstallError::Download {
            url: url.to_string(),
            message: error.to_string(),
        })?;

    Ok((data, remote_file_name(url)))
}

/// Last path segment of a URL, with any query or fragment stripped.
fn remote_file_name(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.rsplit('/').next().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn unknown_scheme_is_a_configuration_error() {
        let result = fetch("ftp://example.com/fonts.zip");
        assert!(matches!(
            result,
            Err(InstallError::UnsupportedScheme { ref scheme, .. }) if scheme == "ftp"
        ));
    }

    #[test]
    fn local_path_and_file_url_both_read_from_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("sample.ttf");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"not really a font").unwrap();

        let (data, name) = fetch(path.to_str().unwrap()).unwrap();
        assert_eq!(data, b"not really a font");
        assert_eq!(name, "sample.ttf");

        let url = format!("file://{}", path.display());
        let (data, name) = fetch(&url).unwrap();
        assert_eq!(data, b"not really a font");
        assert_eq!(name, "sample.ttf");
    }

    #[test]
    fn missing_local_file_is_an_error() {
        assert!(matches!(
            fetch("/definitely/not/here.ttf"),
            Err(InstallError::ReadSource { .. })
        ));
    }

    #[test]
    fn remote_file_name_strips_query_and_fragment() {
        assert_eq!(
            remote_file_name("https://example.com/dl/fonts.zip?token=abc"),
            "fonts.zip"
        );
        assert_eq!(
            remote_file_name("https://example.com/dl/fonts.tar.gz#latest"),
            "fonts.tar.gz"
        );
    }
}
