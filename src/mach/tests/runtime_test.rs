use super::*;
use crate::lang::ErrorCode;
use crate::mach::{Action, Direction, Hardware, Interpreter, Motor};

#[test]
fn test_steps_statements() {
    let mut r = Runtime::new(b"a = 1; a = 2; a = 3", Recorder::new());
    assert!(matches!(r.execute(2), Event::Running));
    assert_eq!(r.interpreter().variable(0), 2);
    assert!(matches!(r.execute(2), Event::Finished));
    assert_eq!(r.interpreter().variable(0), 3);
    assert!(matches!(r.execute(2), Event::Finished));
}

#[test]
fn test_stop_brakes_motors() {
    let mut r = Runtime::new(b"speed 50 50; motors 1 1; while 1 { }", Recorder::new());
    assert!(matches!(r.execute(2), Event::Running));
    r.interpreter_mut().hardware_mut().request_stop();
    assert!(matches!(r.execute(10), Event::Interrupted));
    assert!(r.interpreter().is_finished());
    assert_eq!(
        r.hardware().actions(),
        &[
            Action::Motor(Motor::Left, Direction::Forward, 50),
            Action::Motor(Motor::Right, Direction::Forward, 50),
            Action::Motor(Motor::Left, Direction::Brake, 0),
            Action::Motor(Motor::Right, Direction::Brake, 0),
        ]
    );
}

#[test]
fn test_stop_breaks_loop() {
    let mut hardware = Recorder::new();
    hardware.request_stop();
    let mut i = Interpreter::new(b"while 1 { a = a + 1 }", hardware);
    assert!(i.run_one_statement().unwrap_err().is(ErrorCode::Break));
    assert_eq!(i.variable(0), 1);
    assert!(i.is_finished());
}

#[test]
fn test_error_halts() {
    let mut r = Runtime::new(b"motors 1 0; a = 1 / 0; print 'x'", Recorder::new());
    match r.execute(10) {
        Event::Error(error) => assert!(error.is(ErrorCode::DivisionByZero)),
        event => panic!("{:?}", event),
    }
    assert!(matches!(r.execute(10), Event::Finished));
    assert_eq!(r.hardware().output(), "");
    assert_eq!(r.hardware().actions().len(), 2);
}

#[test]
fn test_restart() {
    let program = b"a = a + 1; print a";
    let mut r = Runtime::new(program, Recorder::new());
    assert!(matches!(r.execute(10), Event::Finished));
    r.restart(program);
    assert!(matches!(r.execute(10), Event::Finished));
    assert_eq!(r.hardware().output(), "1\n1\n");
}

#[test]
fn test_wait_polls_ticks() {
    let mut i = Interpreter::new(b"wait 1", Recorder::new());
    i.run_one_statement().unwrap();
    assert_eq!(i.hardware().tick_reads(), 13);
    let mut i = Interpreter::new(b"wait 0 - 5", Recorder::new());
    i.run_one_statement().unwrap();
    assert_eq!(i.hardware_mut().ticks(), 2);
}

#[test]
fn test_host_sets_variable() {
    let mut i = Interpreter::new(b"while a < 3 { a = a + 1; print a }; print b", Recorder::new());
    i.set_variable(0, 5);
    i.set_variable(1, -7);
    i.set_variable(26, 9);
    while !i.is_finished() {
        i.run_one_statement().unwrap();
    }
    assert_eq!(i.variable(0), 5);
    assert_eq!(i.variable(26), 0);
    assert_eq!(i.hardware().output(), "-7\n");
}

#[test]
fn test_init_clears_host_variables() {
    let program = b"print a";
    let mut i = Interpreter::new(program, Recorder::new());
    i.set_variable(0, 4);
    i.init(program);
    i.run_one_statement().unwrap();
    assert_eq!(i.hardware().output(), "0\n");
}

#[test]
fn test_speed_kept_for_motors() {
    let mut i = Interpreter::new(b"speed 30 0 - 70; speed 1 + 1 2 * 3", Recorder::new());
    assert_eq!(i.speeds(), (0, 0));
    i.run_one_statement().unwrap();
    assert_eq!(i.speeds(), (30, -70));
    i.run_one_statement().unwrap();
    assert_eq!(i.speeds(), (2, 6));
}
