//! Command-line interface

use std::path::PathBuf;

use clap::Parser;

/// Terminal page viewer with tooltips and smooth anchor scrolling
#[derive(Debug, Parser)]
#[command(name = "navpage", version, about)]
pub struct Cli {
    /// Page description file (JSON). Reads stdin when omitted.
    pub file: Option<PathBuf>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
