use super::program::{trim_line, LineStyle, Program, END_OF_TRANSFER, MAX_LINE_LEN};
use super::store::STORED_PROGRAMS;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Sent by the robot to open a session.
pub const HANDSHAKE_REQUEST: &str = "%";
/// Expected back from the PC.
pub const HANDSHAKE_REPLY: char = '&';
pub const HANDSHAKE_ACK: &str = "OK";
/// First column of a system command.
pub const SYS_CMD_CHAR: char = '%';

/// What to do after a line has been fed to a [`Download`](struct.Download.html).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transfer {
    /// Echo the string and keep reading.
    Continue(String),
    /// Echo the string. The program is complete.
    Complete(String),
    /// A line arrived without its terminator. Whatever was received
    /// so far is the program.
    Truncated,
}

/// ## Download session
///
/// Collects a program from the PC link a line at a time. Lines
/// starting with `%` are system commands. Everything else is trimmed
/// and stored until a line starting with `@`.
#[derive(Debug, Default)]
pub struct Download {
    slot: usize,
    program: Program,
}

impl Download {
    pub fn new() -> Download {
        Download::default()
    }

    /// Checks the PC's answer to the `%` request.
    pub fn handshake(reply: &str) -> bool {
        reply.trim_start().starts_with(HANDSHAKE_REPLY)
    }

    pub fn feed(&mut self, line: &str) -> Result<Transfer> {
        if line.trim_end_matches(|c| c == '\n' || c == '\r').len() > MAX_LINE_LEN {
            return Err(error!(LineBufferOverflow));
        }
        if line.starts_with(SYS_CMD_CHAR) {
            let echo = line.trim_end_matches(|c| c == '\n' || c == '\r');
            self.command(echo);
            return Ok(Transfer::Continue(echo.to_string()));
        }
        let (style, trimmed) = trim_line(line);
        if trimmed.starts_with(END_OF_TRANSFER) {
            return Ok(Transfer::Complete(trimmed));
        }
        match style {
            LineStyle::Blank => Ok(Transfer::Continue(trimmed)),
            LineStyle::NoTerminator => {
                log::warn!("download line without terminator");
                Ok(Transfer::Truncated)
            }
            LineStyle::Useful => {
                self.program.store_line(&trimmed)?;
                Ok(Transfer::Continue(trimmed))
            }
        }
    }

    fn command(&mut self, line: &str) {
        let mut chars = line.chars().skip(1);
        match chars.next() {
            Some('P') => {
                let slot = chars
                    .next()
                    .and_then(|c| c.to_digit(10))
                    .map(|n| n as usize)
                    .filter(|&n| n < STORED_PROGRAMS)
                    .unwrap_or(0);
                log::info!("download to store {}", slot);
                self.slot = slot;
            }
            Some(cmd @ 'B') | Some(cmd @ 'L') | Some(cmd @ 'T') | Some(cmd @ 'X')
            | Some(cmd @ 'S') => {
                log::debug!("system command {} acknowledged", cmd);
            }
            _ => log::warn!("unknown system command {:?}", line),
        }
    }

    /// Store slot chosen with `%Pn`.
    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn finish(self) -> (usize, Program) {
        (self.slot, self.program)
    }
}
