use super::{Direction, Hardware, Interpreter, Motor};
use crate::lang::{Error, ErrorCode};

/// ## Events
///
/// What a slice of execution ended with.
#[derive(Debug)]
pub enum Event {
    /// The step limit was reached with statements still left to run.
    Running,
    Finished,
    /// A stop was requested. Both motors have been braked.
    Interrupted,
    Error(Error),
}

/// ## Driver
///
/// Runs a program a slice at a time so the caller keeps control
/// between statements.
pub struct Runtime<'a, H: Hardware> {
    interpreter: Interpreter<'a, H>,
}

impl<'a, H: Hardware> Runtime<'a, H> {
    pub fn new(program: &'a [u8], hardware: H) -> Runtime<'a, H> {
        Runtime {
            interpreter: Interpreter::new(program, hardware),
        }
    }

    /// Starts the program over from the top.
    pub fn restart(&mut self, program: &'a [u8]) {
        self.interpreter.init(program);
    }

    /// Runs up to `steps` top level statements.
    pub fn execute(&mut self, steps: usize) -> Event {
        for _ in 0..steps {
            if self.interpreter.is_finished() {
                return Event::Finished;
            }
            if self.interpreter.hardware_mut().stop_requested() {
                return self.interrupt();
            }
            if let Err(error) = self.interpreter.run_one_statement() {
                if error.is(ErrorCode::Break) {
                    return self.interrupt();
                }
                return Event::Error(error);
            }
        }
        if self.interpreter.is_finished() {
            Event::Finished
        } else {
            Event::Running
        }
    }

    /// Halts the program and stops the vehicle.
    pub fn interrupt(&mut self) -> Event {
        log::info!("program interrupted");
        self.interpreter.halt();
        let hardware = self.interpreter.hardware_mut();
        hardware.set_motor(Motor::Left, Direction::Brake, 0);
        hardware.set_motor(Motor::Right, Direction::Brake, 0);
        Event::Interrupted
    }

    pub fn interpreter(&self) -> &Interpreter<'a, H> {
        &self.interpreter
    }

    pub fn interpreter_mut(&mut self) -> &mut Interpreter<'a, H> {
        &mut self.interpreter
    }

    pub fn hardware(&self) -> &H {
        self.interpreter.hardware()
    }

    pub fn into_hardware(self) -> H {
        self.interpreter.into_hardware()
    }
}
