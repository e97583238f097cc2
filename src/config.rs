use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_DATA_DIR: &str = ".data";
pub const DEFAULT_FILE_NAME: &str = "addressbook.db";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Command-line arguments of the `addressbook` binary.
#[derive(Debug, Parser)]
#[command(name = "addressbook", version, about = "Personal contact registry with birthday reminders")]
pub struct Args {
    /// Address book state file (default: .data/addressbook.db)
    #[arg(short = 'f', long = "file", env = "ADDRESSBOOK_FILE")]
    pub file: Option<PathBuf>,

    /// Import contacts from a JSON file into the state file, then exit
    #[arg(long, value_name = "JSON_PATH", conflicts_with = "export")]
    pub import: Option<PathBuf>,

    /// Export the saved contacts to a JSON file, then exit
    #[arg(long, value_name = "JSON_PATH")]
    pub export: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

/// What the binary should do after start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    Import(PathBuf),
    Export(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub log_level: String,
    pub mode: Mode,
}

impl Config {
    pub fn from_args(args: Args) -> Self {
        let mode = match (args.import, args.export) {
            (Some(path), _) => Mode::Import(path),
            (None, Some(path)) => Mode::Export(path),
            (None, None) => Mode::Interactive,
        };
        Self {
            db_path: args.file.unwrap_or_else(default_db_path),
            log_level: args.log_level,
            mode,
        }
    }
}

pub fn default_db_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR).join(DEFAULT_FILE_NAME)
}
