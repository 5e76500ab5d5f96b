//! # ZX BASIC
//!
//! Tokenize, list and inspect Sinclair BASIC memory images.
//!

mod term;

use clap::{Args, Parser, Subcommand};
use std::fs;
use std::process;
use zxbasic::lang::{auto_renumber, detokenize, renumber, tokenize, Error, LineNumber};
use zxbasic::mach::decode_variables;

#[derive(Debug, Parser)]
#[command(name = "zxbasic", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive editor
    Shell(ShellArgs),
    /// Tokenize a text program
    Tokenize(TokenizeArgs),
    /// List a tokenized program
    List(FileArgs),
    /// Show the contents of a variables area
    Vars(FileArgs),
    /// Renumber a text program
    Renum(RenumArgs),
}

#[derive(Debug, Args)]
struct ShellArgs {
    file: Option<String>,
}

#[derive(Debug, Args)]
struct FileArgs {
    file: String,
}

#[derive(Debug, Args)]
struct TokenizeArgs {
    file: String,
    /// Write the program bytes here instead of a hex dump to stdout
    #[arg(short, long)]
    output: Option<String>,
}

#[derive(Debug, Args)]
struct RenumArgs {
    file: String,
    #[arg(long, default_value_t = 10)]
    start: LineNumber,
    #[arg(long, default_value_t = 10)]
    step: LineNumber,
    /// Only move lines that collide with the line before them
    #[arg(long)]
    auto: bool,
}

fn main() {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or(Command::Shell(ShellArgs { file: None }));
    let result = match &command {
        Command::Shell(args) => {
            term::main(args.file.as_deref());
            Ok(())
        }
        Command::Tokenize(args) => tokenize_command(args),
        Command::List(args) => list_command(args),
        Command::Vars(args) => vars_command(args),
        Command::Renum(args) => renum_command(args),
    };
    if let Err(error) = result {
        eprintln!("{}", error);
        process::exit(1);
    }
}

fn read_text(file: &str) -> Result<String, Error> {
    fs::read_to_string(file).map_err(|e| io_error(e, file))
}

fn read_bytes(file: &str) -> Result<Vec<u8>, Error> {
    fs::read(file).map_err(|e| io_error(e, file))
}

fn io_error(error: std::io::Error, file: &str) -> Error {
    let msg = format!("{}: {}", file, error);
    match error.kind() {
        std::io::ErrorKind::NotFound => zxbasic::error!(FileNotFound; msg.as_str()),
        _ => zxbasic::error!(InternalError; msg.as_str()),
    }
}

fn tokenize_command(args: &TokenizeArgs) -> Result<(), Error> {
    let bytes = tokenize(&read_text(&args.file)?);
    match &args.output {
        Some(output) => fs::write(output, &bytes).map_err(|e| io_error(e, output)),
        None => {
            for chunk in bytes.chunks(16) {
                let hex: Vec<String> = chunk.iter().map(|b| format!("{:02X}", b)).collect();
                println!("{}", hex.join(" "));
            }
            Ok(())
        }
    }
}

fn list_command(args: &FileArgs) -> Result<(), Error> {
    for line in detokenize(&read_bytes(&args.file)?) {
        println!("{}", line);
    }
    Ok(())
}

fn vars_command(args: &FileArgs) -> Result<(), Error> {
    for var in decode_variables(&read_bytes(&args.file)?) {
        println!("{}", var);
    }
    Ok(())
}

fn renum_command(args: &RenumArgs) -> Result<(), Error> {
    let text = read_text(&args.file)?;
    let text = if args.auto {
        auto_renumber(&text)
    } else {
        renumber(&text, args.start, args.step)?
    };
    println!("{}", text);
    Ok(())
}
