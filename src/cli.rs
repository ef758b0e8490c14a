use crate::render::OutputFormat;
use crate::walk::SnapshotConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "treesnap",
    version,
    about = "Copy a directory tree snapshot to the clipboard"
)]
pub struct Args {
    /// Directory to snapshot (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Apply the root's .gitignore on top of the built-in ignore list
    #[arg(short = 'g', long = "gitignore")]
    pub use_git_ignore: bool,

    /// Output layout
    #[arg(short = 'f', long = "format", value_enum, default_value = "tree")]
    pub format: OutputFormat,

    /// Max display depth
    #[arg(short = 'L', long = "level")]
    pub max_depth: Option<usize>,

    /// Include files (only directories are shown by default)
    #[arg(short = 'F', long = "files")]
    pub include_files: bool,

    /// Annotate files with their size in KB
    #[arg(short = 's', long = "size")]
    pub show_size: bool,

    /// Extra glob patterns to exclude (repeatable)
    #[arg(short = 'I', long = "ignore", action = clap::ArgAction::Append)]
    pub ignore: Vec<String>,

    /// Print the snapshot to stdout instead of copying it
    #[arg(long = "stdout")]
    pub to_stdout: bool,

    /// Suppress progress messages
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Snapshot options derived from the command line.
    pub fn snapshot_config(&self) -> SnapshotConfig {
        SnapshotConfig {
            use_git_ignore: self.use_git_ignore,
            output_format: self.format,
            max_depth: self.max_depth,
            exclude_files: !self.include_files,
            show_size: self.show_size,
        }
    }
}
