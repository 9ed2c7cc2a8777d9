//! Create command - Write the package descriptor to the home directory

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use super::demo_script::DEMO_SCRIPT;
use pkg_descriptor::descriptor::{self, DescriptorError, PackageRequest};
use pkg_descriptor::platform::{Host, PlatformFamily};

/// Options for the create command
#[derive(Debug)]
pub struct CreateOptions {
    pub name: String,
    pub version: String,
    /// Script file to embed; `-` reads stdin, `None` uses the demo script
    pub script: Option<PathBuf>,
    pub dry_run: bool,
}

/// Load the script body for the descriptor
pub fn load_script(script: Option<&Path>) -> Result<String> {
    match script {
        None => Ok(DEMO_SCRIPT.to_string()),
        Some(path) if path == Path::new("-") => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read script from stdin")?;
            Ok(content)
        }
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read script: {}", path.display())),
    }
}

/// Lines printed after a descriptor is written
pub fn created_lines(path: &Path) -> Vec<String> {
    vec![
        format!("Package created at: {}", path.display()),
        "To build the actual .pkg file, you need to use the `pkgbuild` command:".to_string(),
        pkgbuild_hint(path),
        "Note: This is a simplified approach and might require further adjustments for a production-ready package."
            .to_string(),
    ]
}

/// The command that turns the descriptor into a real installer
pub fn pkgbuild_hint(path: &Path) -> String {
    format!("`sudo pkgbuild {}`", path.display())
}

/// Lines printed when the host is not macOS
pub fn unsupported_lines(found: &PlatformFamily) -> Vec<String> {
    vec![
        "This code is intended for macOS.".to_string(),
        format!("  Detected platform: {}", found),
        "Failed to create package.".to_string(),
    ]
}

/// Execute the create command
///
/// Returns `Ok(None)` when the host is not macOS; that case is reported on
/// stdout and is not treated as an error. The platform is checked before the
/// script is read.
pub fn execute(host: &impl Host, options: CreateOptions) -> Result<Option<PathBuf>> {
    if let Err(DescriptorError::UnsupportedPlatform { found }) = descriptor::check_platform(host)
    {
        let lines = unsupported_lines(&found);
        println!("{}", lines[0]);
        println!("{}", lines[1]);
        println!("{}", lines[2].red());
        return Ok(None);
    }

    let request = PackageRequest::new(load_script(options.script.as_deref())?)
        .with_name(options.name)
        .with_version(options.version);

    if options.dry_run {
        let path = descriptor::resolve_path(host, &request)
            .context("Failed to resolve descriptor path")?;
        println!("Would write: {}", path.display());
        println!();
        print!("{}", descriptor::render_descriptor(&request));
        return Ok(Some(path));
    }

    let path =
        descriptor::write_descriptor(host, &request).context("Failed to create package")?;

    let lines = created_lines(&path);
    println!("{} {}", "Package created at:".green(), path.display());
    println!("{}", lines[1]);
    println!("  {}", lines[2].yellow());
    println!("{}", lines[3].dimmed());

    Ok(Some(path))
}
