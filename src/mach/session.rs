use super::program::{program_bytes, read_program, read_variables, write_program};
use super::sysvar::{self, read_word};
use super::{Address, Listing, Memory, Ram, Variable};
use crate::error;
use crate::lang::{Error, Line, LineNumber};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Stopped,
    List(Vec<Line>),
    Vars(Vec<Variable>),
    Print(String),
    Load(String),
    Save(String),
    Errors(Vec<Error>),
}

/// ## Editing session
///
/// Numbered lines edit the listing, which is tokenized into memory after
/// every change. `LIST` and `VARS` read back from memory.
#[derive(Debug, Default)]
pub struct Session {
    ram: Ram,
    listing: Listing,
}

impl Session {
    pub fn new() -> Session {
        Session::default()
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn memory(&self) -> &Ram {
        &self.ram
    }

    pub fn memory_mut(&mut self) -> &mut Ram {
        &mut self.ram
    }

    /// Replaces the listing and the program in memory. Nothing changes if
    /// the program does not fit.
    pub fn set_listing(&mut self, listing: Listing) -> Result<()> {
        write_program(&mut self.ram, &listing.tokenize())?;
        self.listing = listing;
        Ok(())
    }

    pub fn enter(&mut self, input: &str) -> Event {
        match self.enter_line(input.trim()) {
            Ok(event) => event,
            Err(error) => Event::Errors(vec![error]),
        }
    }

    fn enter_line(&mut self, input: &str) -> Result<Event> {
        if input.is_empty() {
            return Ok(Event::Stopped);
        }
        if input.starts_with(|c: char| c.is_ascii_digit()) {
            let mut listing = self.listing.clone();
            listing.load_str(input)?;
            self.set_listing(listing)?;
            return Ok(Event::Stopped);
        }
        let split = input
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(input.len());
        let (command, args) = input.split_at(split);
        let args = args.trim();
        match command.to_ascii_uppercase().as_str() {
            "LIST" => self.r#list(args),
            "VARS" => Ok(Event::Vars(read_variables(&self.ram))),
            "DUMP" => Ok(Event::Print(hex_dump(
                read_word(&self.ram, sysvar::PROG),
                &program_bytes(&self.ram),
            ))),
            "RENUM" => self.r#renum(args),
            "NEW" => {
                self.listing.clear();
                self.ram = Ram::new();
                Ok(Event::Stopped)
            }
            "POKE" => self.r#poke(args),
            "LOAD" => Ok(Event::Load(file_name(args)?)),
            "SAVE" => Ok(Event::Save(file_name(args)?)),
            _ => Err(error!(NonsenseInBasic; "UNKNOWN COMMAND")),
        }
    }

    fn r#list(&self, args: &str) -> Result<Event> {
        let from = if args.is_empty() {
            0
        } else {
            parse_number::<LineNumber>(args)?
        };
        Ok(Event::List(
            read_program(&self.ram)
                .into_iter()
                .filter(|line| line.number >= from)
                .collect(),
        ))
    }

    fn r#renum(&mut self, args: &str) -> Result<Event> {
        let mut start = 10;
        let mut step = 10;
        let mut parts = args.split(',').map(str::trim);
        if let Some(part) = parts.next().filter(|s| !s.is_empty()) {
            start = parse_number(part)?;
        }
        if let Some(part) = parts.next() {
            step = parse_number(part)?;
        }
        if parts.next().is_some() {
            return Err(error!(NonsenseInBasic; "RENUM [START[,STEP]]"));
        }
        let mut listing = self.listing.clone();
        listing.renum(start, 0, step)?;
        self.set_listing(listing)?;
        Ok(Event::Stopped)
    }

    fn r#poke(&mut self, args: &str) -> Result<Event> {
        let (address, value) = args
            .split_once(',')
            .ok_or_else(|| error!(NonsenseInBasic; "POKE ADDRESS,VALUE"))?;
        let address: Address = parse_number(address.trim())?;
        let value: u8 = parse_number(value.trim())?;
        self.ram.write_bytes(address, &[value]);
        Ok(Event::Stopped)
    }
}

fn parse_number<T: std::str::FromStr>(s: &str) -> Result<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(error!(NonsenseInBasic; "NUMBER EXPECTED"));
    }
    s.parse::<T>()
        .map_err(|_| error!(IntegerOutOfRange))
}

fn file_name(args: &str) -> Result<String> {
    let name = args
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .ok_or_else(|| error!(InvalidFileName; "NAME MUST BE QUOTED"))?;
    if name.is_empty() {
        return Err(error!(InvalidFileName));
    }
    Ok(name.to_string())
}

/// Sixteen bytes per row, each row prefixed with its address.
fn hex_dump(start: Address, bytes: &[u8]) -> String {
    let mut out = String::new();
    for (row, chunk) in bytes.chunks(16).enumerate() {
        let address = start.wrapping_add((row * 16) as Address);
        let hex: Vec<String> = chunk.iter().map(|b| format!("{:02X}", b)).collect();
        out.push_str(&format!("{:04X}  {}\n", address, hex.join(" ")));
    }
    out
}
