use chrono::{Local, NaiveDate};
use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use crate::error::BookError;

/// One event on the command loop's input channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    /// Ctrl+C. Ends the loop like `exit`.
    Interrupted,
    /// End of input or a read error.
    Closed,
}

/// Terminal I/O for the command loop. Lines and interrupts arrive on the
/// same channel so an interrupt is seen even while a read is blocked.
pub struct CliContext<W> {
    sender: Sender<Input>,
    receiver: Receiver<Input>,
    output: W,
}

impl<W: Write> CliContext<W> {
    pub fn new(output: W) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver,
            output,
        }
    }

    /// A sender for pushing input from elsewhere, e.g. a signal handler.
    pub fn sender(&self) -> Sender<Input> {
        self.sender.clone()
    }

    /// Read lines from the reader built by `open` on a background thread.
    /// Sends [`Input::Closed`] once the reader is exhausted.
    pub fn spawn_reader<R, F>(&self, open: F)
    where
        R: BufRead,
        F: FnOnce() -> R + Send + 'static,
    {
        let sender = self.sender();
        thread::spawn(move || {
            for line in open().lines() {
                let Ok(line) = line else { break };
                if sender.send(Input::Line(line)).is_err() {
                    return;
                }
            }
            let _ = sender.send(Input::Closed);
        });
    }

    /// Prompt and wait for the next input event.
    pub fn read_line(&mut self, prompt: &str) -> Input {
        write!(self.output, "{}", prompt).ok();
        self.output.flush().ok();
        self.receiver.recv().unwrap_or(Input::Closed)
    }

    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// User-facing text for a field format error.
pub fn error_message(e: &BookError) -> String {
    match e {
        BookError::InvalidNameFormat(_) => "Name can not be blank.".into(),
        BookError::InvalidPhoneFormat(_) => "Wrong phone format.".into(),
        BookError::InvalidDateFormat(_) => "Invalid date format. Use DD.MM.YYYY".into(),
        other => format!("Error: {}", other),
    }
}
