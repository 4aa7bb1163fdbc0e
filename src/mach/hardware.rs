use std::collections::HashMap;

/// ## Robot capability surface
///
/// Everything the interpreter does to the outside world goes through
/// this trait. Calls are synchronous and may block. None of them can
/// fail as far as the interpreter is concerned.
pub trait Hardware {
    fn set_motor(&mut self, motor: Motor, direction: Direction, speed: i16);
    fn set_led(&mut self, led: Led, flash: Flash);
    fn clear_led(&mut self, led: Led);
    fn adc(&mut self, channel: u8) -> i16;
    /// True while the switch is held down.
    fn switch(&mut self, switch: Switch) -> bool;
    fn play_tone(&mut self, note: u8, duration_ms: u16);
    fn display_string(&mut self, text: &str, target: DisplayTarget);
    fn clear_ticks(&mut self);
    /// 8 ms ticks since the last `clear_ticks`.
    fn ticks(&mut self) -> u16;
    fn calibrate(&mut self);
    /// Output sink for `print`.
    fn send(&mut self, text: &str);
    /// Polled from blocking statements and between loop iterations.
    fn stop_requested(&mut self) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motor {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Brake,
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Led {
    A,
    B,
    C,
    D,
}

impl Led {
    pub const ALL: [Led; 4] = [Led::A, Led::B, Led::C, Led::D];
}

/// `Off` is a steady light, `On` makes it flash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    Off,
    On,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Switch {
    A,
    B,
    C,
    D,
}

impl Switch {
    fn index(self) -> usize {
        match self {
            Switch::A => 0,
            Switch::B => 1,
            Switch::C => 2,
            Switch::D => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayTarget {
    SevenSegAb,
}

/// Capability calls seen by a [`Recorder`](struct.Recorder.html).
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Motor(Motor, Direction, i16),
    Led(Led, Option<Flash>),
    Tone(u8, u16),
    Display(String),
    Send(String),
    Calibrate,
}

/// ## Recording robot
///
/// A `Hardware` that remembers every call and serves scripted sensor
/// and switch values. The tick counter advances by one on every read
/// so `wait` always terminates.
#[derive(Debug, Default)]
pub struct Recorder {
    actions: Vec<Action>,
    adc: HashMap<u8, i16>,
    switches: [bool; 4],
    ticks: u16,
    tick_reads: usize,
    stop: bool,
}

impl Recorder {
    pub fn new() -> Recorder {
        Recorder::default()
    }

    pub fn with_adc(mut self, channel: u8, value: i16) -> Recorder {
        self.adc.insert(channel, value);
        self
    }

    pub fn with_switch(mut self, switch: Switch) -> Recorder {
        self.switches[switch.index()] = true;
        self
    }

    pub fn request_stop(&mut self) {
        self.stop = true;
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn tick_reads(&self) -> usize {
        self.tick_reads
    }

    /// Everything sent to the output sink.
    pub fn output(&self) -> String {
        self.actions
            .iter()
            .filter_map(|action| match action {
                Action::Send(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Every action except output.
    pub fn hardware_actions(&self) -> Vec<Action> {
        self.actions
            .iter()
            .filter(|action| !matches!(action, Action::Send(_)))
            .cloned()
            .collect()
    }
}

impl Hardware for Recorder {
    fn set_motor(&mut self, motor: Motor, direction: Direction, speed: i16) {
        self.actions.push(Action::Motor(motor, direction, speed));
    }

    fn set_led(&mut self, led: Led, flash: Flash) {
        self.actions.push(Action::Led(led, Some(flash)));
    }

    fn clear_led(&mut self, led: Led) {
        self.actions.push(Action::Led(led, None));
    }

    fn adc(&mut self, channel: u8) -> i16 {
        self.adc.get(&channel).copied().unwrap_or(0)
    }

    fn switch(&mut self, switch: Switch) -> bool {
        self.switches[switch.index()]
    }

    fn play_tone(&mut self, note: u8, duration_ms: u16) {
        self.actions.push(Action::Tone(note, duration_ms));
    }

    fn display_string(&mut self, text: &str, _target: DisplayTarget) {
        self.actions.push(Action::Display(text.to_string()));
    }

    fn clear_ticks(&mut self) {
        self.ticks = 0;
    }

    fn ticks(&mut self) -> u16 {
        self.tick_reads += 1;
        self.ticks = self.ticks.wrapping_add(1);
        self.ticks
    }

    fn calibrate(&mut self) {
        self.actions.push(Action::Calibrate);
    }

    fn send(&mut self, text: &str) {
        self.actions.push(Action::Send(text.to_string()));
    }

    fn stop_requested(&mut self) -> bool {
        self.stop
    }
}
