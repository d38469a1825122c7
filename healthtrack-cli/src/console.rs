use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::str::FromStr;

use log::debug;

use crate::{CliError, Result};

/// Line based conversation with the user.
#[mockall::automock]
pub trait Console {
    /// Shows `message` and returns the reply without its line ending.
    fn prompt(&mut self, message: &str) -> io::Result<String>;
    fn print(&mut self, text: &str) -> io::Result<()>;
}

pub struct LineConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

pub fn stdio() -> LineConsole<StdinLock<'static>, Stdout> {
    LineConsole::new(io::stdin().lock(), io::stdout())
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn prompt(&mut self, message: &str) -> io::Result<String> {
        write!(self.writer, "{}", message)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before all questions were answered",
            ));
        }
        let reply = line.trim_end_matches(['\r', '\n']).to_owned();
        debug!("{:?} -> {:?}", message.trim(), reply);
        Ok(reply)
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", text)
    }
}

pub fn ask_text(console: &mut dyn Console, message: &str) -> Result<String> {
    Ok(console.prompt(message)?.trim().to_owned())
}

/// Only "yes", in any case, counts as agreement.
pub fn ask_yes_no(console: &mut dyn Console, message: &str) -> Result<bool> {
    Ok(ask_text(console, message)?.eq_ignore_ascii_case("yes"))
}

pub fn ask_integer<T>(console: &mut dyn Console, message: &str) -> Result<T>
where
    T: FromStr,
{
    let reply = ask_text(console, message)?;
    reply
        .parse()
        .map_err(|_| CliError::Input(format!("'{}' is not a valid whole number", reply)))
}

pub fn ask_number(console: &mut dyn Console, message: &str) -> Result<f64> {
    let reply = ask_text(console, message)?;
    reply
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| CliError::Input(format!("'{}' is not a valid number", reply)))
}
