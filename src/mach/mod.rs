/*!
## Rust Machine Module

This Rust module is an interpreter for ubasic+ along with the program
memory, PC-link download session and program store that feed it.

*/

mod download;
mod hardware;
mod interpreter;
mod program;
mod runtime;
mod store;
mod var;

pub use download::{Download, Transfer, HANDSHAKE_ACK, HANDSHAKE_REQUEST};
pub use hardware::{
    Action, Direction, DisplayTarget, Flash, Hardware, Led, Motor, Recorder, Switch,
};
pub use interpreter::Interpreter;
pub use interpreter::{ADC_CHANNELS, MAX_STRINGLEN, SWITCH_CHANNELS, WHEEL_CONSTANT};
pub use program::{trim_line, LineStyle, Program, MAX_LINE_LEN, PROGRAM_SPACE};
pub use runtime::{Event, Runtime};
pub use store::{ProgramStore, STORED_PROGRAMS};
pub use var::{Var, VARIABLES};

#[cfg(test)]
mod tests;
