use ubasic::mach::{Event, Recorder, Runtime};

pub fn exec(program: &str) -> String {
    exec_with(program, Recorder::new()).0
}

pub fn exec_with(program: &str, hardware: Recorder) -> (String, Recorder) {
    exec_n(program, hardware, 5000)
}

pub fn exec_n(program: &str, hardware: Recorder, steps: usize) -> (String, Recorder) {
    let mut runtime = Runtime::new(program.as_bytes(), hardware);
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        match runtime.execute(steps) {
            Event::Finished => break,
            Event::Interrupted => {
                s.push_str("BREAK\n");
                break;
            }
            Event::Error(error) => {
                s.push_str(&format!("{}\n", error));
                break;
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution steps exceeded.\n", steps));
                    break;
                }
                prev_running = true;
            }
        }
    }
    let hardware = runtime.into_hardware();
    (hardware.output() + &s, hardware)
}
