//! Delimited-text rendering of fan collections.
//!
//! The document starts with the header `TIME,KIND,ID,NAME,LINK` followed by
//! one row per fan in collection order. Fields containing the delimiter, a
//! double quote, CR or LF are wrapped in double quotes with inner quotes
//! doubled. Every row, the last included, ends with `\n`.

use std::fmt;
use std::str::FromStr;

use crate::error::FanError;
use crate::fans::{Fan, FanCollection};

/// Column names of the rendered document.
pub const HEADER: [&str; 5] = ["TIME", "KIND", "ID", "NAME", "LINK"];

/// Field separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    /// Comma separated values.
    #[default]
    Comma,
    /// Tab separated values.
    Tab,
}

impl Delimiter {
    /// The separator character.
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Comma => ',',
            Self::Tab => '\t',
        }
    }

    /// Format name as accepted by [`FromStr`].
    #[must_use]
    pub fn format_name(self) -> &'static str {
        match self {
            Self::Comma => "csv",
            Self::Tab => "tsv",
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.format_name())
    }
}

impl FromStr for Delimiter {
    type Err = FanError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Comma),
            "tsv" => Ok(Self::Tab),
            other => Err(FanError::invalid_input(
                "format",
                format!("'{other}' is not one of: csv, tsv"),
            )),
        }
    }
}

/// Renders `fans` as comma separated values with a header row.
#[must_use]
pub fn render_csv(fans: &FanCollection) -> String {
    render_delimited(fans, Delimiter::Comma)
}

/// Renders `fans` with the given delimiter and a header row.
#[must_use]
pub fn render_delimited(fans: &FanCollection, delimiter: Delimiter) -> String {
    let sep = delimiter.as_char();
    let mut out = String::new();
    push_row(&mut out, HEADER.iter().copied(), sep);
    for fan in fans {
        let cells = row_cells(fan);
        push_row(&mut out, cells.iter().map(String::as_str), sep);
    }
    out
}

fn row_cells(fan: &Fan) -> [String; 5] {
    [
        fan.timestamp.to_string(),
        fan.kind.to_string(),
        fan.profile.id.clone(),
        fan.profile.name.clone(),
        fan.profile.link(),
    ]
}

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, sep: char) {
    for (index, cell) in cells.enumerate() {
        if index > 0 {
            out.push(sep);
        }
        if needs_quotes(cell, sep) {
            out.push('"');
            out.push_str(&cell.replace('"', "\"\""));
            out.push('"');
        } else {
            out.push_str(cell);
        }
    }
    out.push('\n');
}
