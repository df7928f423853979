//! On-screen numeric keypad for the measurement fields

use crate::reading::{Measurements, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadKey {
    Digit(char),
    Decimal,
    Delete,
    Ok,
}

impl KeypadKey {
    /// Keys in grid order, three per row.
    pub const LAYOUT: [KeypadKey; 13] = [
        KeypadKey::Digit('1'),
        KeypadKey::Digit('2'),
        KeypadKey::Digit('3'),
        KeypadKey::Digit('4'),
        KeypadKey::Digit('5'),
        KeypadKey::Digit('6'),
        KeypadKey::Digit('7'),
        KeypadKey::Digit('8'),
        KeypadKey::Digit('9'),
        KeypadKey::Decimal,
        KeypadKey::Digit('0'),
        KeypadKey::Ok,
        KeypadKey::Delete,
    ];

    pub fn label(self) -> String {
        match self {
            KeypadKey::Digit(c) => c.to_string(),
            KeypadKey::Decimal => ".".to_string(),
            KeypadKey::Delete => "DEL".to_string(),
            KeypadKey::Ok => "OK".to_string(),
        }
    }
}

/// Keypad bound to one position while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericKeypad {
    pub target: Position,
}

impl NumericKeypad {
    pub fn open(target: Position) -> Self {
        Self { target }
    }

    /// Apply a key to the bound value. Returns `false` once the keypad
    /// should close.
    pub fn press(&self, key: KeypadKey, values: &mut Measurements) -> bool {
        let value = values.get_mut(self.target);
        match key {
            KeypadKey::Digit(c) if c.is_ascii_digit() => value.push(c),
            KeypadKey::Digit(_) => {}
            KeypadKey::Decimal => {
                if !value.contains('.') {
                    value.push('.');
                }
            }
            KeypadKey::Delete => {
                value.pop();
            }
            KeypadKey::Ok => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_a_value() {
        let mut values = Measurements::default();
        let pad = NumericKeypad::open(Position::MidshipStarboard);
        for key in [KeypadKey::Digit('6'), KeypadKey::Decimal, KeypadKey::Digit('4'), KeypadKey::Digit('5')] {
            assert!(pad.press(key, &mut values));
        }
        assert_eq!(values.get(Position::MidshipStarboard), "6.45");
        assert_eq!(values.get(Position::MidshipPortside), "");
    }

    #[test]
    fn test_single_decimal_point() {
        let mut values = Measurements::default();
        let pad = NumericKeypad::open(Position::AftPortside);
        pad.press(KeypadKey::Decimal, &mut values);
        pad.press(KeypadKey::Digit('5'), &mut values);
        pad.press(KeypadKey::Decimal, &mut values);
        assert_eq!(values.get(Position::AftPortside), ".5");
    }

    #[test]
    fn test_delete_and_ok() {
        let mut values = Measurements::default();
        values.set(Position::ForwardPortside, "12");
        let pad = NumericKeypad::open(Position::ForwardPortside);
        pad.press(KeypadKey::Delete, &mut values);
        pad.press(KeypadKey::Delete, &mut values);
        pad.press(KeypadKey::Delete, &mut values);
        assert_eq!(values.get(Position::ForwardPortside), "");
        assert!(!pad.press(KeypadKey::Ok, &mut values));
    }

    #[test]
    fn test_layout_labels() {
        let labels: Vec<String> = KeypadKey::LAYOUT.iter().map(|k| k.label()).collect();
        assert_eq!(labels[9], ".");
        assert_eq!(labels[11], "OK");
        assert_eq!(labels[12], "DEL");
    }
}
