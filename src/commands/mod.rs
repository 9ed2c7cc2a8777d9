//! CLI commands

pub mod create;
pub mod demo_script;
