//! File naming for saved readings
//!
//! `{date}_{time}_{note}.txt`, or `{date}_{time}.txt` when the note is blank.
//! Only spaces in the note are replaced; other characters, path separators
//! included, pass through untouched.

use chrono::NaiveDateTime;
use std::path::Path;

pub const EXTENSION: &str = "txt";

/// Date used when none was picked: `YYYY-MM-DD`.
pub fn default_date(now: NaiveDateTime) -> String {
    now.format("%Y-%m-%d").to_string()
}

/// Time used when none was picked: `HH-MM`.
pub fn default_time(now: NaiveDateTime) -> String {
    now.format("%H-%M").to_string()
}

pub fn sanitize_note(note: &str) -> String {
    note.trim().replace(' ', "_")
}

pub fn file_name(date: &str, time: &str, note: &str) -> String {
    let note = sanitize_note(note);
    if note.is_empty() {
        format!("{}_{}.{}", date, time, EXTENSION)
    } else {
        format!("{}_{}_{}.{}", date, time, note, EXTENSION)
    }
}

/// Name to prefill when a proposed name collides again: `<stem>_new<ext>`.
pub fn suggest_alternate(name: &str) -> String {
    let path = Path::new(name);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    match path.extension() {
        Some(ext) => format!("{}_new.{}", stem, ext.to_string_lossy()),
        None => format!("{}_new", stem),
    }
}
