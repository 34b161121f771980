use clap::Parser;
use path_size::TraversalPolicy;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "path-size")]
#[command(author = "Path Size Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Print the size of a file or directory", long_about = None)]
pub struct Cli {
    /// File or directory to measure
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Descend into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Human-readable sizes (auto-select unit)
    #[arg(short = 'H', long)]
    pub human: bool,

    /// Include hidden files and directories
    #[arg(short, long)]
    pub all: bool,

    /// Log skipped entries to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn policy(&self) -> TraversalPolicy {
        TraversalPolicy::new(self.recursive, self.all)
    }

    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
