//! Output paths

use std::path::{Path, PathBuf};

/// Package name used when none is given
pub const DEFAULT_PKG_NAME: &str = "PanelDemo";

/// Package version used when none is given
pub const DEFAULT_PKG_VERSION: &str = "1.0";

/// Extension of the descriptor file
pub const DESCRIPTOR_EXTENSION: &str = "pkg";

/// Get the descriptor path for a package (<home>/<name>.pkg)
///
/// The name is appended as-is, so an empty name yields `<home>/.pkg`.
pub fn descriptor_path(home: &Path, pkg_name: &str) -> PathBuf {
    home.join(format!("{}.{}", pkg_name, DESCRIPTOR_EXTENSION))
}
