//! Reading store: saves readings into the reading directory and loads
//! them back.
//!
//! Saving never replaces an existing file. A name that is already taken
//! comes back as [`SaveOutcome::Collision`] and the caller asks the user
//! for another one.

use crate::format::{self, ParseError, ParsedReading};
use crate::naming;
use crate::reading::Reading;
use chrono::NaiveDateTime;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid reading file: {0}")]
    Parse(#[from] ParseError),
    #[error("file name is empty")]
    EmptyName,
    #[error("no file selected")]
    NoSelection,
}

impl StoreError {
    fn from_io(err: std::io::Error, path: &Path) -> Self {
        if err.kind() == std::io::ErrorKind::PermissionDenied {
            StoreError::PermissionDenied(path.to_path_buf())
        } else {
            StoreError::Io(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(PathBuf),
    /// `path` exists; `suggested` is the name to prefill in the prompt
    Collision { path: PathBuf, suggested: String },
}

#[derive(Debug, Clone)]
pub struct ReadingStore {
    dir: PathBuf,
}

impl ReadingStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Name derived from the picked date/time, or from `now` for the parts
    /// that were never picked.
    pub fn file_name_for(reading: &Reading, now: NaiveDateTime) -> String {
        let date = reading.date.clone().unwrap_or_else(|| naming::default_date(now));
        let time = reading.time.clone().unwrap_or_else(|| naming::default_time(now));
        naming::file_name(&date, &time, &reading.note)
    }

    /// Save under the derived name. On a collision the prompt is prefilled
    /// with the colliding name itself.
    pub fn save(&self, reading: &Reading, now: NaiveDateTime) -> Result<SaveOutcome> {
        self.ensure_dir()?;
        let name = Self::file_name_for(reading, now);
        let path = self.dir.join(&name);
        if path.exists() {
            log::info!("{} already exists, asking for a new name", path.display());
            return Ok(SaveOutcome::Collision { path, suggested: name });
        }
        self.write_new(reading, path, &name)
    }

    /// Save under a name typed by the user. Existence is checked again; a
    /// colliding name yields the `_new` suggestion.
    pub fn save_as(&self, reading: &Reading, name: &str) -> Result<SaveOutcome> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        self.ensure_dir()?;
        let path = self.dir.join(name);
        if path.exists() {
            return Ok(SaveOutcome::Collision {
                path,
                suggested: naming::suggest_alternate(name),
            });
        }
        self.write_new(reading, path, name)
    }

    /// Read errors of every kind, permission included, come back as
    /// [`StoreError::Io`]; `PermissionDenied` is reserved for writes.
    pub fn load(path: &Path) -> Result<ParsedReading> {
        let text = std::fs::read_to_string(path)?;
        let parsed = format::parse(&text)?;
        log::info!("File {} loaded", path.display());
        Ok(parsed)
    }

    fn ensure_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| StoreError::from_io(e, &self.dir))
    }

    fn write_new(&self, reading: &Reading, path: PathBuf, name: &str) -> Result<SaveOutcome> {
        // create_new: a file that appeared since the exists() check is a collision too
        let file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                return Ok(SaveOutcome::Collision {
                    path,
                    suggested: naming::suggest_alternate(name),
                });
            }
            Err(e) => return Err(StoreError::from_io(e, &path)),
        };
        fill(file, &path, &format::serialize(reading))?;
        log::info!("Data saved to {}", path.display());
        Ok(SaveOutcome::Saved(path))
    }
}

/// Write `text` into the file just created at `path`. On failure the file
/// is removed so the name does not stay taken by a partial reading.
fn fill<W: Write>(mut out: W, path: &Path, text: &str) -> Result<()> {
    if let Err(e) = out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
        drop(out);
        if let Err(remove_err) = std::fs::remove_file(path) {
            log::warn!("cannot remove partial {}: {}", path.display(), remove_err);
        }
        return Err(StoreError::from_io(e, path));
    }
    Ok(())
}
