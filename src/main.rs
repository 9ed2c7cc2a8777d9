//! pkg-descriptor: write a macOS package descriptor and print the pkgbuild step
//!
//! Nothing here builds an installer. The descriptor is a plain text file in
//! the home directory; `pkgbuild` has to be run by hand afterwards.

use anyhow::Result;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::PathBuf;

use pkg_descriptor::config;
use pkg_descriptor::platform::SystemHost;

mod commands;

#[derive(Parser)]
#[command(name = "pkg-descriptor")]
#[command(about = "Write a macOS package descriptor to the home directory", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write <home>/<name>.pkg embedding a script
    Create {
        /// Package name (also the file name)
        #[arg(long, default_value = config::DEFAULT_PKG_NAME)]
        name: String,

        /// Package version
        #[arg(long = "pkg-version", default_value = config::DEFAULT_PKG_VERSION)]
        pkg_version: String,

        /// Script file to embed, `-` for stdin (defaults to the demo script)
        #[arg(long, short)]
        script: Option<PathBuf>,

        /// Show what would be written without touching the filesystem
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Print the built-in demo script
    DemoScript,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Create {
            name,
            pkg_version,
            script,
            dry_run,
        } => {
            if dry_run {
                println!("{}", "(DRY-RUN MODE - no changes will be made)".blue());
            }
            let options = commands::create::CreateOptions {
                name,
                version: pkg_version,
                script,
                dry_run,
            };
            if let Some(path) = commands::create::execute(&SystemHost, options)? {
                if !dry_run {
                    println!();
                    println!(
                        "{} {}",
                        "Successfully created package at:".green(),
                        path.display()
                    );
                    println!("Now, build the package: sudo pkgbuild {}", path.display());
                }
            }
        }

        Commands::DemoScript => {
            commands::demo_script::execute();
        }
    }

    Ok(())
}
