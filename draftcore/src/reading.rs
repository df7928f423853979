//! Reading model: one draft-mark observation held in memory until saved

/// The six hull positions a draft mark is read at, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    ForwardPortside,
    ForwardStarboard,
    MidshipPortside,
    MidshipStarboard,
    AftPortside,
    AftStarboard,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::ForwardPortside,
        Position::ForwardStarboard,
        Position::MidshipPortside,
        Position::MidshipStarboard,
        Position::AftPortside,
        Position::AftStarboard,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Position::ForwardPortside => "FORWARD PORTSIDE",
            Position::ForwardStarboard => "FORWARD STARBOARD",
            Position::MidshipPortside => "MIDSHIP PORTSIDE",
            Position::MidshipStarboard => "MIDSHIP STARBOARD",
            Position::AftPortside => "AFT PORTSIDE",
            Position::AftStarboard => "AFT STARBOARD",
        }
    }

    /// Exact, case-sensitive label lookup.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Measured values keyed by position. Always holds all six entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Measurements {
    values: [String; 6],
}

impl Measurements {
    pub fn get(&self, position: Position) -> &str {
        &self.values[position.index()]
    }

    pub fn get_mut(&mut self, position: Position) -> &mut String {
        &mut self.values[position.index()]
    }

    pub fn set(&mut self, position: Position, value: impl Into<String>) {
        self.values[position.index()] = value.into();
    }

    /// Iterate in fixed file order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &str)> + '_ {
        Position::ALL.into_iter().map(move |p| (p, self.get(p)))
    }
}

/// Note, optional picked date/time and the six measurements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub note: String,
    /// `YYYY-MM-DD`, set through the date picker
    pub date: Option<String>,
    /// `HH:MM`, set through the time picker
    pub time: Option<String>,
    pub measurements: Measurements,
}

impl Default for Reading {
    fn default() -> Self {
        Self {
            note: " ".to_string(),
            date: None,
            time: None,
            measurements: Measurements::default(),
        }
    }
}

impl Reading {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewrite the note as `"{date} {time} : {rest}"` after a pick.
    ///
    /// Only the parts that have been picked are included. `rest` is the text
    /// after the first `": "` of the current note, or the whole note if there
    /// is none, so stamping twice replaces the old stamp.
    pub fn stamp_note(&mut self) {
        let stamp: Vec<&str> = [self.date.as_deref(), self.time.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        let rest = match self.note.split_once(": ") {
            Some((_, rest)) => rest,
            None => self.note.as_str(),
        };
        self.note = format!("{} : {}", stamp.join(" "), rest);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for p in Position::ALL {
            assert_eq!(Position::from_label(p.label()), Some(p));
        }
        assert_eq!(Position::from_label("forward portside"), None);
        assert_eq!(Position::from_label("BOW"), None);
    }

    #[test]
    fn test_measurements_keep_order() {
        let mut m = Measurements::default();
        m.set(Position::AftStarboard, "4.1");
        m.get_mut(Position::ForwardPortside).push_str("3.9");

        let labels: Vec<&str> = m.iter().map(|(p, _)| p.label()).collect();
        assert_eq!(labels[0], "FORWARD PORTSIDE");
        assert_eq!(labels[5], "AFT STARBOARD");
        assert_eq!(m.get(Position::ForwardPortside), "3.9");
        assert_eq!(m.get(Position::AftStarboard), "4.1");
        assert_eq!(m.get(Position::MidshipPortside), "");
    }

    #[test]
    fn test_default_note_is_single_space() {
        let reading = Reading::new();
        assert_eq!(reading.note, " ");
        assert!(reading.date.is_none());
        assert!(reading.time.is_none());
    }

    #[test]
    fn test_stamp_note() {
        let mut reading = Reading::new();
        reading.note = "hull check".into();
        reading.date = Some("2024-05-01".into());
        reading.stamp_note();
        assert_eq!(reading.note, "2024-05-01 : hull check");

        reading.time = Some("14:30".into());
        reading.stamp_note();
        assert_eq!(reading.note, "2024-05-01 14:30 : hull check");
    }
}
