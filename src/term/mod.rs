use ansi_term::Style;
use linefeed::{Completer, Completion, Interface, Prompter, ReadResult, Signal, Terminal};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use zxbasic::error;
use zxbasic::lang::Error;
use zxbasic::mach::{Event, Listing, Session};

pub fn main(file: Option<&str>) {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        eprintln!("{}", error);
        return;
    }
    if let Err(error) = main_loop(interrupted, file) {
        eprintln!("{}", error);
    }
}

fn main_loop(interrupted: Arc<AtomicBool>, file: Option<&str>) -> std::io::Result<()> {
    let mut session = Session::new();
    let command = Interface::new("ZX BASIC")?;
    command.set_report_signal(Signal::Interrupt, true);
    command.write_fmt(format_args!("ZX BASIC\n"))?;

    let mut pending = file.map(|file| Event::Load(file.to_string()));
    loop {
        let event = match pending.take() {
            Some(event) => event,
            None => {
                command.set_completer(Arc::new(LineCompleter::new(session.listing().clone())));
                let string = match command.read_line()? {
                    ReadResult::Input(string) => string,
                    ReadResult::Signal(Signal::Interrupt) => {
                        command.set_buffer("")?;
                        continue;
                    }
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
                let event = session.enter(&string);
                if !matches!(event, Event::Errors(_)) {
                    command.add_history_unique(string);
                }
                event
            }
        };
        interrupted.store(false, Ordering::SeqCst);
        match event {
            Event::Stopped => {}
            Event::Errors(errors) => {
                for error in errors.iter() {
                    write_error(&command, error)?;
                }
            }
            Event::Print(s) => {
                command.write_fmt(format_args!("{}", s))?;
            }
            Event::List(lines) => {
                for line in lines {
                    if interrupted.load(Ordering::SeqCst) {
                        break;
                    }
                    command.write_fmt(format_args!("{}\n", line))?;
                }
            }
            Event::Vars(vars) => {
                for var in vars {
                    if interrupted.load(Ordering::SeqCst) {
                        break;
                    }
                    command.write_fmt(format_args!("{}\n", var))?;
                }
            }
            Event::Load(s) => match load(&s).and_then(|listing| session.set_listing(listing)) {
                Ok(_) => {}
                Err(error) => write_error(&command, &error)?,
            },
            Event::Save(s) => match save(session.listing(), &s) {
                Ok(_) => {}
                Err(error) => write_error(&command, &error)?,
            },
        }
    }
    Ok(())
}

fn write_error<T: Terminal>(command: &Interface<T>, error: &Error) -> std::io::Result<()> {
    command.write_fmt(format_args!(
        "{}\n",
        Style::new().bold().paint(error.to_string())
    ))
}

/// Tab after a line number brings back that line for editing.
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
        let num = prompter.buffer().trim().parse::<u16>().ok()?;
        let line = self.listing.line(num)?;
        let mut comp = Completion::simple(line.to_string());
        comp.suffix = linefeed::complete::Suffix::None;
        Some(vec![comp])
    }
}

pub fn load(filename: &str) -> Result<Listing, Error> {
    let mut listing = Listing::default();
    let reader = match File::open(filename) {
        Ok(file) => BufReader::new(file),
        Err(error) => {
            let msg = error.to_string();
            match error.kind() {
                ErrorKind::NotFound => return Err(error!(FileNotFound; msg.as_str())),
                _ => return Err(error!(InternalError; msg.as_str())),
            }
        }
    };
    for (index, line) in reader.lines().enumerate() {
        match line {
            Err(error) => return Err(error!(InternalError; error.to_string().as_str())),
            Ok(line) => {
                if let Err(error) = listing.load_str(&line) {
                    return Err(error.message(&format!(
                        "IN LINE {} OF THE FILE (NOT BASIC LINE NUMBER)",
                        index + 1
                    )));
                }
            }
        }
    }
    Ok(listing)
}

pub fn save(listing: &Listing, filename: &str) -> Result<(), Error> {
    if listing.is_empty() {
        return Err(error!(InternalError; "NOTHING TO SAVE"));
    }
    let mut file = match File::create(filename) {
        Ok(file) => file,
        Err(error) => return Err(error!(InvalidFileName; error.to_string().as_str())),
    };
    for line in listing.lines() {
        if let Err(error) = writeln!(file, "{}", line) {
            return Err(error!(InternalError; error.to_string().as_str()));
        }
    }
    Ok(())
}
