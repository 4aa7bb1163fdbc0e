//! # ubasic+
//!
//! Runs, downloads and lists ubasic+ robot programs on a PC.
//!

use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;
use ubasic::lang::Error;
use ubasic::mach::{Program, ProgramStore};
use ubasic::term::{self, Console};

#[derive(Parser)]
#[command(name = "ubasic", version, about = "ubasic+ for small robots")]
struct Cli {
    /// More logging; repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Directory holding the program store
    #[arg(long, env = "UBASIC_STORE", default_value = "ubasic-store", global = true)]
    store_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a program from a file or a store slot
    Run {
        /// Program source file
        #[arg(required_unless_present = "slot", conflicts_with = "slot")]
        file: Option<PathBuf>,

        /// Store slot to run
        #[arg(long)]
        slot: Option<usize>,

        /// Statements executed between checks for CTRL-C
        #[arg(long, default_value_t = 100)]
        step_limit: usize,

        /// Pin an ADC channel reading, CHANNEL=VALUE
        #[arg(long, value_parser = parse_sense)]
        sense: Vec<(u8, i16)>,

        /// Print every hardware call
        #[arg(long)]
        trace: bool,
    },
    /// Receive a program over the PC link and save it
    Download {
        /// Store slot to save to
        #[arg(long)]
        slot: Option<usize>,

        /// Read the program lines from a file instead of the terminal
        #[arg(long)]
        from: Option<PathBuf>,
    },
    /// Print a stored program
    List {
        #[arg(long, default_value_t = 0)]
        slot: usize,
    },
}

fn parse_sense(s: &str) -> Result<(u8, i16), String> {
    let (channel, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected CHANNEL=VALUE, found {:?}", s))?;
    let channel = channel.trim().parse().map_err(|e| format!("{}", e))?;
    let value = value.trim().parse().map_err(|e| format!("{}", e))?;
    Ok((channel, value))
}

fn main() {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(error) = simple_logger::SimpleLogger::new().with_level(level).init() {
        eprintln!("{}", error);
    }
    let store = ProgramStore::new(&cli.store_dir);
    let code = match cli.command {
        Command::Run {
            file,
            slot,
            step_limit,
            sense,
            trace,
        } => run(&store, file, slot, step_limit, sense, trace),
        Command::Download { slot, from } => {
            match term::download(&store, slot, from.as_deref()) {
                Ok(slot) => {
                    log::info!("program saved to store {}", slot);
                    0
                }
                Err(error) => {
                    term::report(None, error.as_ref());
                    1
                }
            }
        }
        Command::List { slot } => match term::list(&store, slot) {
            Ok(()) => 0,
            Err(error) => {
                term::report(None, &error);
                1
            }
        },
    };
    std::process::exit(code);
}

fn run(
    store: &ProgramStore,
    file: Option<PathBuf>,
    slot: Option<usize>,
    step_limit: usize,
    sense: Vec<(u8, i16)>,
    trace: bool,
) -> i32 {
    let program = match load(store, file, slot) {
        Ok(program) => program,
        Err(error) => {
            term::report(None, &error);
            return 1;
        }
    };
    let mut console = match Console::new() {
        Ok(console) => console.with_trace(trace),
        Err(error) => {
            term::report(None, &error);
            return 1;
        }
    };
    for (channel, value) in sense {
        console = console.with_sensor(channel, value);
    }
    match term::run(&program, console, step_limit) {
        Ok(()) => 0,
        Err(error) => {
            term::report(Some(&program), &error);
            1
        }
    }
}

fn load(store: &ProgramStore, file: Option<PathBuf>, slot: Option<usize>) -> Result<Program, Error> {
    match file {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(source) => Program::from_source(&source),
            Err(_) => Err(ubasic::error!(FileNotFound; path.display().to_string())),
        },
        None => store.load(slot.unwrap_or(0)),
    }
}
