extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::lang::Line;
use crate::mach::{Config, Event, FileStorage, Listing, Runtime, SystemClock};
use ansi_term::Style;
use linefeed::{Completer, Completion, Interface, Prompter, ReadResult, Signal, Terminal};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Once};

static TRACING_INIT: Once = Once::new();

/// Installs a subscriber when `RUST_LOG` is set. Diagnostics go to
/// stderr so they never mix with program output.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

pub fn main() {
    init_tracing();
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        eprintln!("Error setting Ctrl-C handler: {}", error);
    }
    let dir = std::env::args().nth(1).unwrap_or_else(|| ".".to_string());
    if let Err(error) = main_loop(interrupted, &dir) {
        eprintln!("{}", error);
    }
}

fn main_loop(interrupted: Arc<AtomicBool>, dir: &str) -> std::io::Result<()> {
    let mut runtime = Runtime::with_config(
        Config::default(),
        Box::new(FileStorage::new(dir)),
        Box::new(SystemClock::default()),
    );
    let command = Interface::new("TinyBASIC")?;
    command.set_prompt("> ")?;
    let input = Interface::new("INPUT")?;
    input.set_report_signal(Signal::Interrupt, true);

    command.write_fmt(format_args!(
        "Tiny BASIC\n    {}K Memory\n",
        runtime.listing().bytes_total() / 1024
    ))?;
    let mut announce = true;

    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        };
        match runtime.execute(5000) {
            Event::Stopped => {
                if announce {
                    command.write_fmt(format_args!("READY\n"))?;
                }
                let saved_completer = command.completer();
                command.set_completer(Arc::new(LineCompleter::new(runtime.listing())));
                let string = match command.read_line()? {
                    ReadResult::Input(string) => uppercase(&string),
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
                command.set_completer(saved_completer);
                announce = !string.trim().is_empty() && Line::parse(&string).is_direct();
                if !string.trim().is_empty() {
                    command.add_history_unique(string.clone());
                }
                runtime.enter(&string);
            }
            Event::Input(prompt) => {
                input.set_prompt(&prompt)?;
                match input.read_line()? {
                    ReadResult::Input(string) => runtime.enter(&uppercase(&string)),
                    ReadResult::Signal(Signal::Interrupt) => {
                        input.set_buffer("")?;
                        input.lock_reader().cancel_read_line()?;
                        runtime.interrupt();
                    }
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
            }
            Event::Pause => {
                input.set_prompt("Pause...")?;
                match input.read_line()? {
                    ReadResult::Input(_) => {}
                    ReadResult::Signal(Signal::Interrupt) => {
                        input.set_buffer("")?;
                        input.lock_reader().cancel_read_line()?;
                        runtime.interrupt();
                    }
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
            }
            Event::Error(error) => {
                command.write_fmt(format_args!(
                    "{}\n",
                    Style::new().bold().paint(error.to_string())
                ))?;
            }
            Event::Running => {}
            Event::Print(s) => {
                command.write_fmt(format_args!("{}", s))?;
            }
            Event::Cls => mortal::Terminal::new()?.clear_screen()?,
            Event::Exit => break,
        }
    }
    Ok(())
}

/// Keywords and variables are uppercase only. Text inside string
/// literals is left alone.
fn uppercase(text: &str) -> String {
    let mut quoted = false;
    text.chars()
        .map(|ch| {
            if ch == '"' {
                quoted = !quoted;
            }
            if quoted {
                ch
            } else {
                ch.to_ascii_uppercase()
            }
        })
        .collect()
}

struct LineCompleter {
    listing: Listing,
}

impl LineCompleter {
    fn new(listing: Listing) -> LineCompleter {
        LineCompleter { listing }
    }
}

impl<Term: Terminal> Completer<Term> for LineCompleter {
    fn complete(
        &self,
        _word: &str,
        prompter: &Prompter<Term>,
        _start: usize,
        _end: usize,
    ) -> Option<Vec<Completion>> {
        if let Ok(num) = prompter.buffer().trim().parse::<usize>() {
            if let Some(s) = self.listing.line(num) {
                let mut comp = Completion::simple(s);
                comp.suffix = linefeed::complete::Suffix::None;
                return Some(vec![comp]);
            }
        }
        None
    }
}
