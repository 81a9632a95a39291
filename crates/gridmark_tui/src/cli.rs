//! Command-line interface for the gridmark TUI.

use clap::Parser;
use std::path::PathBuf;

/// Play tic-tac-toe in the terminal.
#[derive(Parser, Debug)]
#[command(name = "gridmark_tui")]
#[command(about = "Tic-tac-toe in the terminal - click a cell or use the keyboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// File to write diagnostic logs to (the TUI owns the screen, so logs
    /// never go to stdout). Level is controlled via RUST_LOG.
    #[arg(long, default_value = "gridmark_tui.log")]
    pub log_file: PathBuf,
}
