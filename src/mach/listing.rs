use crate::error;
use crate::lang::lex::line_number;
use crate::lang::renum::{assign, update_references};
use crate::lang::{tokenize, Error, Line, LineNumber};
use std::collections::BTreeMap;

type Result<T> = std::result::Result<T, Error>;

/// Source lines as entered, keyed by line number.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    source: BTreeMap<LineNumber, String>,
}

impl Listing {
    pub fn clear(&mut self) {
        self.source.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn insert(&mut self, line: Line) -> Option<Line> {
        let number = line.number;
        self.source
            .insert(number, line.text)
            .map(|text| Line { number, text })
    }

    pub fn remove(&mut self, number: LineNumber) -> Option<Line> {
        self.source
            .remove(&number)
            .map(|text| Line { number, text })
    }

    pub fn line(&self, number: LineNumber) -> Option<Line> {
        self.source.get(&number).map(|text| Line::new(number, text))
    }

    pub fn lines(&self) -> Vec<Line> {
        self.source
            .iter()
            .map(|(&number, text)| Line::new(number, text))
            .collect()
    }

    /// Adds a numbered line. A line number on its own deletes that line.
    pub fn load_str(&mut self, line: &str) -> Result<()> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }
        match line_number(line) {
            Some((number, "")) => {
                self.source.remove(&number);
                Ok(())
            }
            Some((number, body)) => {
                self.source.insert(number, body.to_string());
                Ok(())
            }
            None if line.starts_with(|c: char| c.is_ascii_digit()) => {
                Err(error!(IntegerOutOfRange; "LINE NUMBER MUST BE 0 TO 9999"))
            }
            None => Err(error!(NonsenseInBasic; "LINE NUMBER EXPECTED")),
        }
    }

    pub fn text(&self) -> String {
        self.lines()
            .iter()
            .map(Line::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn tokenize(&self) -> Vec<u8> {
        tokenize(&self.text())
    }

    /// Renumbers lines from `old_start` onwards. Lines below `old_start`
    /// must stay below `new_start`.
    pub fn renum(&mut self, new_start: LineNumber, old_start: LineNumber, step: LineNumber) -> Result<()> {
        if step == 0 {
            return Err(error!(IntegerOutOfRange; "STEP MUST NOT BE ZERO"));
        }
        if let Some((&below, _)) = self.source.range(..old_start).next_back() {
            if below >= new_start {
                return Err(error!(IntegerOutOfRange, below; "LINES WOULD OVERLAP"));
            }
        }
        let changes = assign(
            self.source.range(old_start..).map(|(&number, _)| number),
            new_start,
            step,
        )?;
        self.source = self
            .source
            .iter()
            .map(|(number, text)| {
                let number = changes.get(number).copied().unwrap_or(*number);
                (number, update_references(text, &changes))
            })
            .collect();
        Ok(())
    }
}
