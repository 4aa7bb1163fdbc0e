use crate::mach::{Event, Recorder, Runtime};

mod for_test;
mod runtime_test;
mod while_test;

fn run(program: &str) -> String {
    run_with(program, Recorder::new()).0
}

fn run_with(program: &str, hardware: Recorder) -> (String, Recorder) {
    let mut runtime = Runtime::new(program.as_bytes(), hardware);
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        match runtime.execute(5000) {
            Event::Finished | Event::Interrupted => break,
            Event::Error(error) => {
                s.push_str(&format!("{}\n", error));
                break;
            }
            Event::Running => {
                if prev_running {
                    s.push_str("\nExecution steps exceeded.\n");
                    break;
                }
                prev_running = true;
            }
        }
    }
    let hardware = runtime.into_hardware();
    (hardware.output() + &s, hardware)
}
