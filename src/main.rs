use std::process::ExitCode;

use addressbook::config::{Args, Config, Mode};
use addressbook::error::{BookError, BookResult};
use addressbook::{cli, db, logging, migrate};
use clap::Parser;
use tracing::error;

fn main() -> ExitCode {
    let config = Config::from_args(Args::parse());

    if let Err(e) = logging::init(&config.log_level) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "session ended with an error");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> BookResult<()> {
    match &config.mode {
        Mode::Interactive => cli::run(&config.db_path),
        Mode::Import(json_path) => {
            if config.db_path.exists() {
                return Err(BookError::Other(format!(
                    "state file {} already exists; remove it first or pass --file",
                    config.db_path.display()
                )));
            }
            println!("Importing from {}...", json_path.display());
            let (book, stats) = migrate::import_json(json_path)?;
            db::save(&book, &config.db_path)?;
            println!("Import complete!");
            println!("  Contacts: {}", stats.contacts);
            println!("  Phones: {}", stats.phones);
            println!("  Birthdays: {}", stats.birthdays);
            Ok(())
        }
        Mode::Export(json_path) => {
            let book = db::load(&config.db_path);
            migrate::export_json(&book, json_path)?;
            println!("Exported {} contacts to {}", book.len(), json_path.display());
            Ok(())
        }
    }
}
