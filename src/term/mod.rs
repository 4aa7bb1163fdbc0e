/*!
## Rust Terminal Module

Runs ubasic+ programs on a PC and talks to the program store the way
the robot's PC link does.

*/

extern crate ansi_term;
extern crate chrono;
extern crate ctrlc;
extern crate linefeed;
extern crate rand;

mod console;

pub use console::Console;

use crate::error;
use crate::lang::Error;
use crate::mach::{
    Download, Event, Program, ProgramStore, Runtime, Transfer, HANDSHAKE_ACK, HANDSHAKE_REQUEST,
};
use ansi_term::Style;
use linefeed::{Interface, ReadResult};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Runs a program to the end, `steps` statements at a time.
pub fn run(program: &Program, console: Console, steps: usize) -> std::result::Result<(), Error> {
    let mut runtime = Runtime::new(program.text(), console);
    loop {
        match runtime.execute(steps.max(1)) {
            Event::Running => {}
            Event::Finished => return Ok(()),
            Event::Interrupted => return Err(error!(Break)),
            Event::Error(error) => return Err(error),
        }
    }
}

/// Prints an error in bold with the program line it happened in.
pub fn report(program: Option<&Program>, error: &(dyn std::error::Error + 'static)) {
    eprintln!("{}", Style::new().bold().paint(error.to_string()));
    let offset = error.downcast_ref::<Error>().and_then(|e| e.offset());
    if let (Some(program), Some(offset)) = (program, offset) {
        let (number, line) = program.line_at(offset);
        eprintln!("{}", Style::new().dimmed().paint(format!("{:>4} | {}", number, line)));
    }
}

/// Receives a program and saves it to the store. Lines come from
/// `from` when given, otherwise from the terminal after the PC link
/// handshake. Returns the slot written.
pub fn download(store: &ProgramStore, slot: Option<usize>, from: Option<&Path>) -> Result<usize> {
    let mut session = Download::new();
    if let Some(slot) = slot {
        store.path(slot)?;
        session.feed(&format!("%P{}\n", slot))?;
    }
    match from {
        Some(path) => download_file(&mut session, path)?,
        None => download_interactive(&mut session)?,
    }
    let (slot, program) = session.finish();
    store.save(slot, &program)?;
    Ok(slot)
}

fn download_file(session: &mut Download, path: &Path) -> Result<()> {
    let reader = match File::open(path) {
        Ok(file) => BufReader::new(file),
        Err(error) => {
            return Err(match error.kind() {
                std::io::ErrorKind::NotFound => {
                    error!(FileNotFound; path.display().to_string()).into()
                }
                _ => error.into(),
            })
        }
    };
    for line in reader.lines() {
        match session.feed(&format!("{}\n", line?))? {
            Transfer::Continue(echo) => log::debug!("{}", echo.trim_end()),
            Transfer::Complete(_) | Transfer::Truncated => break,
        }
    }
    Ok(())
}

fn download_interactive(session: &mut Download) -> Result<()> {
    let interface = Interface::new("ubasic")?;
    interface.set_prompt("")?;
    interface.write_fmt(format_args!("{}\n", HANDSHAKE_REQUEST))?;
    match interface.read_line()? {
        ReadResult::Input(reply) if Download::handshake(&reply) => {}
        _ => return Err(error!(InternalError; "NO HANDSHAKE").into()),
    }
    interface.write_fmt(format_args!("{}\n", HANDSHAKE_ACK))?;
    loop {
        let line = match interface.read_line()? {
            ReadResult::Input(line) => line,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        match session.feed(&format!("{}\n", line))? {
            Transfer::Continue(echo) => {
                interface.write_fmt(format_args!("{}\n", echo.trim_end()))?;
            }
            Transfer::Complete(echo) => {
                interface.write_fmt(format_args!("{}\n", echo.trim_end()))?;
                break;
            }
            Transfer::Truncated => break,
        }
    }
    Ok(())
}

/// Prints a stored program.
pub fn list(store: &ProgramStore, slot: usize) -> std::result::Result<(), Error> {
    let program = store.load(slot)?;
    print!("{}", program);
    Ok(())
}
