pub mod context;
pub mod contact_commands;
pub mod birthday_commands;

use std::io::{self, Write};
use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::db;
use crate::error::BookResult;
use crate::model::AddressBook;
use context::{CliContext, Input};

/// Result of executing one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Message(String),
    Exit,
}

/// Run an interactive session against the book stored at `db_path`.
/// The book is loaded before the first prompt and saved when the loop ends,
/// whether by `exit`, end of input or Ctrl+C.
pub fn run(db_path: &Path) -> BookResult<()> {
    let mut book = db::load(db_path);

    let mut ctx = CliContext::new(io::stdout());
    let interrupts = ctx.sender();
    if let Err(e) = ctrlc::set_handler(move || {
        let _ = interrupts.send(Input::Interrupted);
    }) {
        warn!(error = %e, "could not install Ctrl+C handler");
    }
    ctx.spawn_reader(|| io::stdin().lock());

    repl_loop(&mut ctx, &mut book, context::today);

    db::save(&book, db_path)?;
    if let Err(e) = ctx.say("Address book saved. Bye!") {
        warn!(error = %e, "could not print farewell");
    }
    Ok(())
}

/// Read commands until `close`/`exit`, end of input or an interrupt.
/// `today` is asked for the current date each time `birthdays` runs.
/// A failed write to the output also ends the loop, so the caller still
/// gets to save the book.
pub fn repl_loop<W, F>(ctx: &mut CliContext<W>, book: &mut AddressBook, today: F)
where
    W: Write,
    F: Fn() -> NaiveDate,
{
    if let Err(e) = ctx.say("Welcome to the assistant bot!") {
        warn!(error = %e, "output closed, ending session");
        return;
    }
    loop {
        let (message, stop) = match ctx.read_line("Enter a command: ") {
            Input::Closed => break,
            Input::Interrupted => ("Ctrl+c".to_string(), true),
            Input::Line(line) => match execute(book, &line, today()) {
                Reply::Exit => break,
                Reply::Message(message) => (message, false),
            },
        };
        if let Err(e) = ctx.say(&message) {
            warn!(error = %e, "output closed, ending session");
            break;
        }
        if stop {
            break;
        }
    }
}

/// Execute one line of user input against the book.
pub fn execute(book: &mut AddressBook, input: &str, today: NaiveDate) -> Reply {
    let Some((command, args)) = parse_input(input) else {
        return Reply::Message("Command can not be blank".into());
    };
    debug!(%command, args = args.len(), "executing command");

    let message = match command.as_str() {
        "close" | "exit" => return Reply::Exit,
        "hello" => "How can I help you?".into(),
        "add" => contact_commands::add(book, &args),
        "change" => contact_commands::change(book, &args),
        "phone" => contact_commands::phone(book, &args),
        "all" => contact_commands::all(book),
        "delete" => contact_commands::delete(book, &args),
        "remove-phone" => contact_commands::remove_phone(book, &args),
        "add-birthday" => birthday_commands::add_birthday(book, &args),
        "show-birthday" => birthday_commands::show_birthday(book, &args),
        "birthdays" => birthday_commands::birthdays(book, today),
        _ => "Invalid command.".into(),
    };
    Reply::Message(message)
}

/// Split input into a lower-cased command and whitespace-separated args.
/// Returns None for blank input.
pub fn parse_input(input: &str) -> Option<(String, Vec<&str>)> {
    let mut parts = input.split_whitespace();
    let command = parts.next()?.to_lowercase();
    Some((command, parts.collect()))
}
