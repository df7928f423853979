//! Text format of a saved reading
//!
//! ```text
//! DRAFT MARK DATA
//! Reading: <note>
//!
//! FORWARD PORTSIDE: <value>
//! ...
//! AFT STARBOARD: <value>
//! ```
//!
//! The layout is positional: the note is on line 2 and values start on
//! line 4. Parsing checks those preconditions and returns an error instead
//! of indexing past the end.

use crate::reading::{Position, Reading};
use thiserror::Error;

pub const HEADER: &str = "DRAFT MARK DATA";
pub const NOTE_PREFIX: &str = "Reading:";
pub const SEPARATOR: &str = ": ";

const MIN_LINES: usize = 4;
const NOTE_LINE: usize = 1;
const FIRST_VALUE_LINE: usize = 3;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected at least 4 lines, found {0}")]
    TooFewLines(usize),
    #[error("line 2 does not start with \"Reading:\"")]
    MissingNote,
    #[error("line {line}: expected \"LABEL: value\", found {text:?}")]
    MalformedLine { line: usize, text: String },
}

pub fn serialize(reading: &Reading) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');
    out.push_str(&format!("{} {}\n\n", NOTE_PREFIX, reading.note));
    for (position, value) in reading.measurements.iter() {
        out.push_str(&format!("{}{}{}\n", position.label(), SEPARATOR, value));
    }
    out
}

/// Result of parsing a saved file. Only positions whose label was
/// recognised are present, in the order they appeared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReading {
    pub note: String,
    pub values: Vec<(Position, String)>,
}

impl ParsedReading {
    /// Overwrite the note and every recognised position. Positions not
    /// present in the file keep their current value.
    pub fn apply_to(self, reading: &mut Reading) {
        reading.note = self.note;
        for (position, value) in self.values {
            reading.measurements.set(position, value);
        }
    }
}

pub fn parse(text: &str) -> Result<ParsedReading, ParseError> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() < MIN_LINES {
        return Err(ParseError::TooFewLines(lines.len()));
    }

    let note = lines[NOTE_LINE]
        .strip_prefix(NOTE_PREFIX)
        .ok_or(ParseError::MissingNote)?
        .trim()
        .to_string();

    let mut values = Vec::new();
    for (idx, line) in lines.iter().enumerate().skip(FIRST_VALUE_LINE) {
        let parts: Vec<&str> = line.split(SEPARATOR).collect();
        let [label, value] = parts[..] else {
            return Err(ParseError::MalformedLine {
                line: idx + 1,
                text: line.to_string(),
            });
        };
        match Position::from_label(label) {
            Some(position) => values.push((position, value.trim().to_string())),
            None => log::debug!("ignoring unknown label {:?} on line {}", label, idx + 1),
        }
    }

    Ok(ParsedReading { note, values })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Reading {
        let mut reading = Reading::new();
        reading.note = "2024-05-01 14:30 : hull check".into();
        for (i, p) in Position::ALL.into_iter().enumerate() {
            reading.measurements.set(p, format!("{}.{}", 5 + i, i));
        }
        reading
    }

    #[test]
    fn test_serialize_layout() {
        let mut reading = Reading::new();
        reading.note = "hull check".into();
        reading.measurements.set(Position::MidshipPortside, "6.25");
        let text = serialize(&reading);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "DRAFT MARK DATA");
        assert_eq!(lines[1], "Reading: hull check");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "FORWARD PORTSIDE: ");
        assert_eq!(lines[5], "MIDSHIP PORTSIDE: 6.25");
        assert_eq!(lines[8], "AFT STARBOARD: ");
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_parse_restores_every_position() {
        let original = sample();
        let parsed = parse(&serialize(&original)).unwrap();
        assert_eq!(parsed.note, original.note);

        let mut restored = Reading::new();
        parsed.apply_to(&mut restored);
        for p in Position::ALL {
            assert_eq!(restored.measurements.get(p), original.measurements.get(p));
        }
    }

    #[test]
    fn test_too_few_lines() {
        assert_eq!(parse(""), Err(ParseError::TooFewLines(0)));
        assert_eq!(
            parse("DRAFT MARK DATA\nReading: x\n"),
            Err(ParseError::TooFewLines(2))
        );
        assert_eq!(
            parse("DRAFT MARK DATA\nReading: x\n\n"),
            Err(ParseError::TooFewLines(3))
        );
    }

    #[test]
    fn test_missing_note_prefix() {
        let text = "DRAFT MARK DATA\nnote: x\n\nAFT PORTSIDE: 1\n";
        assert_eq!(parse(text), Err(ParseError::MissingNote));
    }

    #[test]
    fn test_split_arity() {
        let no_sep = "DRAFT MARK DATA\nReading: x\n\nAFT PORTSIDE 1\n";
        assert_eq!(
            parse(no_sep),
            Err(ParseError::MalformedLine { line: 4, text: "AFT PORTSIDE 1".into() })
        );

        let two_seps = "DRAFT MARK DATA\nReading: x\n\nAFT PORTSIDE: 1: 2\n";
        assert!(matches!(parse(two_seps), Err(ParseError::MalformedLine { line: 4, .. })));
    }

    #[test]
    fn test_blank_value_line_is_malformed() {
        assert_eq!(
            parse("DRAFT MARK DATA\nReading: x\n\n\n"),
            Err(ParseError::MalformedLine { line: 4, text: String::new() })
        );

        let trailing = format!("{}   \n", serialize(&sample()));
        assert_eq!(
            parse(&trailing),
            Err(ParseError::MalformedLine { line: 10, text: "   ".into() })
        );
    }

    #[test]
    fn test_unknown_label_is_skipped() {
        let text = "DRAFT MARK DATA\nReading: x\n\nBOW: 9.9\nAFT PORTSIDE: 4.2\n";
        let parsed = parse(text).unwrap();
        assert_eq!(parsed.values, vec![(Position::AftPortside, "4.2".to_string())]);

        let mut reading = Reading::new();
        reading.measurements.set(Position::ForwardPortside, "3.0");
        parsed.apply_to(&mut reading);
        assert_eq!(reading.measurements.get(Position::ForwardPortside), "3.0");
        assert_eq!(reading.measurements.get(Position::AftPortside), "4.2");
        assert_eq!(reading.note, "x");
    }

    #[test]
    fn test_crlf_and_blank_note() {
        let text = "DRAFT MARK DATA\r\nReading:  \r\n\r\nAFT STARBOARD: 5\r\n";
        let parsed = parse(text).unwrap();
        assert_eq!(parsed.note, "");
        assert_eq!(parsed.values, vec![(Position::AftStarboard, "5".to_string())]);
    }
}
