use crate::mach::{Direction, DisplayTarget, Flash, Hardware, Led, Motor, Switch};
use ansi_term::{Colour, Style};
use chrono::{DateTime, Utc};
use rand::Rng;
use std::collections::HashMap;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// ## Console robot
///
/// Stands in for the robot when a program runs on a PC. Output goes
/// to stdout, the two character display is shown in bold and every
/// other capability call is printed to stderr when tracing. Sensors
/// read pinned values or noise. CTRL-C requests a stop.
pub struct Console {
    trace: bool,
    sensors: HashMap<u8, i16>,
    cleared: DateTime<Utc>,
    interrupted: Arc<AtomicBool>,
}

impl Console {
    pub fn new() -> std::io::Result<Console> {
        let interrupted = Arc::new(AtomicBool::new(false));
        let int_moved = interrupted.clone();
        ctrlc::set_handler(move || {
            int_moved.store(true, Ordering::SeqCst);
        })
        .map_err(|error| std::io::Error::new(std::io::ErrorKind::Other, error))?;
        Ok(Console {
            trace: false,
            sensors: HashMap::new(),
            cleared: Utc::now(),
            interrupted,
        })
    }

    pub fn with_trace(mut self, trace: bool) -> Console {
        self.trace = trace;
        self
    }

    /// Pins the reading of an ADC channel.
    pub fn with_sensor(mut self, channel: u8, value: i16) -> Console {
        self.sensors.insert(channel, value);
        self
    }

    fn trace(&self, what: std::fmt::Arguments) {
        if self.trace {
            eprintln!("{}", Colour::Cyan.dimmed().paint(what.to_string()));
        }
    }
}

impl Hardware for Console {
    fn set_motor(&mut self, motor: Motor, direction: Direction, speed: i16) {
        self.trace(format_args!("motor {:?} {:?} {}", motor, direction, speed));
    }

    fn set_led(&mut self, led: Led, flash: Flash) {
        let state = match flash {
            Flash::Off => "on",
            Flash::On => "flashing",
        };
        self.trace(format_args!("led {:?} {}", led, state));
    }

    fn clear_led(&mut self, led: Led) {
        self.trace(format_args!("led {:?} off", led));
    }

    fn adc(&mut self, channel: u8) -> i16 {
        match self.sensors.get(&channel) {
            Some(&value) => value,
            None => rand::thread_rng().gen_range(0..256),
        }
    }

    fn switch(&mut self, _switch: Switch) -> bool {
        false
    }

    fn play_tone(&mut self, note: u8, duration_ms: u16) {
        self.trace(format_args!("tone {} for {} ms", note, duration_ms));
    }

    fn display_string(&mut self, text: &str, _target: DisplayTarget) {
        eprintln!("{}", Style::new().bold().paint(format!("[{}]", text)));
    }

    fn clear_ticks(&mut self) {
        self.cleared = Utc::now();
    }

    fn ticks(&mut self) -> u16 {
        std::thread::sleep(Duration::from_millis(1));
        let elapsed = Utc::now()
            .signed_duration_since(self.cleared)
            .num_milliseconds();
        (elapsed / 8).max(0).min(i64::from(u16::max_value())) as u16
    }

    fn calibrate(&mut self) {
        self.trace(format_args!("calibrate"));
    }

    fn send(&mut self, text: &str) {
        let mut stdout = std::io::stdout();
        if let Err(error) = stdout.write_all(text.as_bytes()).and_then(|_| stdout.flush()) {
            log::warn!("output lost: {}", error);
        }
    }

    fn stop_requested(&mut self) -> bool {
        self.interrupted.swap(false, Ordering::SeqCst)
    }
}
