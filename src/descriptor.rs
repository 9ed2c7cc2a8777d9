//! Package descriptor rendering and writing
//!
//! A descriptor is a small text file at `<home>/<name>.pkg` holding the package
//! name, version and the script body. It is only an input for `pkgbuild`,
//! which is never run from here.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use thiserror::Error;

use crate::config;
use crate::platform::{Host, PlatformFamily};

/// What to put in the descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRequest {
    /// Script body, embedded verbatim
    pub script_content: String,
    /// Package name, also the file stem
    pub name: String,
    /// Package version
    pub version: String,
}

impl PackageRequest {
    /// Request with the default name and version
    pub fn new(script_content: impl Into<String>) -> Self {
        Self {
            script_content: script_content.into(),
            name: config::DEFAULT_PKG_NAME.to_string(),
            version: config::DEFAULT_PKG_VERSION.to_string(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}

#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("This code is intended for macOS (running on {found})")]
    UnsupportedPlatform { found: PlatformFamily },

    #[error("Could not determine home directory")]
    NoHomeDirectory,

    #[error("Failed to write: {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Render the descriptor text. Values are interpolated without escaping.
pub fn render_descriptor(request: &PackageRequest) -> String {
    format!(
        "# Package metadata\n\
         pkgName={}\n\
         pkgVersion={}\n\
         \n\
         # Package contents\n\
         source = {}\n",
        request.name, request.version, request.script_content
    )
}

/// Fail with `UnsupportedPlatform` unless the host is macOS
pub fn check_platform(host: &impl Host) -> Result<(), DescriptorError> {
    match host.platform_family() {
        PlatformFamily::MacOs => Ok(()),
        found => Err(DescriptorError::UnsupportedPlatform { found }),
    }
}

/// Resolve where the descriptor for `request` would be written
///
/// Checks the platform before touching the home directory.
pub fn resolve_path(
    host: &impl Host,
    request: &PackageRequest,
) -> Result<PathBuf, DescriptorError> {
    check_platform(host)?;

    let home = host.home_dir().ok_or(DescriptorError::NoHomeDirectory)?;
    Ok(config::descriptor_path(&home, &request.name))
}

/// Write the descriptor, replacing any existing file, and return its path
pub fn write_descriptor(
    host: &impl Host,
    request: &PackageRequest,
) -> Result<PathBuf, DescriptorError> {
    let path = resolve_path(host, request)?;
    let content = render_descriptor(request);

    File::create(&path)
        .and_then(|mut file| file.write_all(content.as_bytes()))
        .map_err(|source| DescriptorError::Io {
            path: path.clone(),
            source,
        })?;

    Ok(path)
}
