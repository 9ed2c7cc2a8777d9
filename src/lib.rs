//! pkg-descriptor library
//!
//! Writes a small macOS package descriptor (`<home>/<name>.pkg`) embedding a
//! script body. Building the real installer is left to `pkgbuild`, which this
//! crate only suggests and never runs.

pub mod config;
pub mod descriptor;
pub mod platform;
