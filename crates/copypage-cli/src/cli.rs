//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Copies a rendered page as AI-ready Markdown (front matter + links).
#[derive(Debug, Parser)]
#[command(name = "copypage", version, about)]
pub struct Cli {
    /// Rendered HTML page to convert; reads stdin when omitted or "-"
    pub input: Option<PathBuf>,

    /// TOML file with formatting and marker options
    #[arg(short, long, env = "COPYPAGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write the Markdown to this file instead of the clipboard
    #[arg(short, long, conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Print the Markdown instead of copying it
    #[arg(long)]
    pub stdout: bool,

    /// Treat the input as a fragment: no landmark selection, no
    /// exclusion pre-pass, no include extraction
    #[arg(long)]
    pub fragment: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The input path, or `None` for stdin
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_os_str() != "-")
    }

    /// Default log filter for the chosen verbosity
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
