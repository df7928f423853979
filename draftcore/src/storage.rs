//! Storage utilities
//!
//! Reading directory resolution, persisted settings and the file browser
//! used by the open dialog.

use crate::naming;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_NAME: &str = "draftlog";
const READING_DIR_NAME: &str = "draft readings";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// User settings, stored as JSON in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Overrides the default reading directory when set
    pub reading_dir: Option<PathBuf>,
    /// File name last loaded through the open dialog
    pub last_opened: Option<String>,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Load from the default location, falling back to defaults.
    pub fn load_or_default() -> Self {
        let path = settings_path();
        match Self::load(&path) {
            Ok(settings) => settings,
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                log::warn!("ignoring unreadable settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let contents = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn reading_dir(&self) -> PathBuf {
        self.reading_dir.clone().unwrap_or_else(default_reading_dir)
    }
}

pub fn config_dir() -> PathBuf {
    directories::ProjectDirs::from("org", "draftlog", APP_NAME)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn settings_path() -> PathBuf {
    config_dir().join(SETTINGS_FILE)
}

/// Shared storage on a handset, the documents folder elsewhere.
#[cfg(target_os = "android")]
pub fn default_reading_dir() -> PathBuf {
    PathBuf::from("/storage/emulated/0").join(READING_DIR_NAME)
}

#[cfg(not(target_os = "android"))]
pub fn default_reading_dir() -> PathBuf {
    directories::UserDirs::new()
        .and_then(|dirs| dirs.document_dir().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(READING_DIR_NAME)
}

#[derive(Debug, Clone)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_directory: bool,
}

/// What activating a browser row did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Moved into a subdirectory (or back up)
    Entered,
    /// A reading file was chosen
    Open(PathBuf),
    /// Nothing was selected
    Nothing,
}

/// Lists reading files under the reading directory. Navigation never
/// leaves that directory.
#[derive(Debug, Clone)]
pub struct FileBrowser {
    root: PathBuf,
    current_dir: PathBuf,
    entries: Vec<FileEntry>,
    selected_index: Option<usize>,
}

impl FileBrowser {
    pub fn new(root: PathBuf) -> Self {
        let mut browser = Self {
            current_dir: root.clone(),
            root,
            entries: Vec::new(),
            selected_index: None,
        };
        browser.refresh();
        browser
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn select(&mut self, index: usize) {
        if index < self.entries.len() {
            self.selected_index = Some(index);
        }
    }

    pub fn refresh(&mut self) {
        self.entries.clear();
        self.selected_index = None;

        if self.current_dir != self.root {
            if let Some(parent) = self.current_dir.parent() {
                self.entries.push(FileEntry {
                    name: "..".to_string(),
                    path: parent.to_path_buf(),
                    is_directory: true,
                });
            }
        }

        let read_dir = match std::fs::read_dir(&self.current_dir) {
            Ok(read_dir) => read_dir,
            Err(e) => {
                log::warn!("cannot list {}: {}", self.current_dir.display(), e);
                return;
            }
        };

        let (mut dirs, mut files): (Vec<FileEntry>, Vec<FileEntry>) = read_dir
            .flatten()
            .map(|entry| FileEntry {
                name: entry.file_name().to_string_lossy().to_string(),
                is_directory: entry.path().is_dir(),
                path: entry.path(),
            })
            .filter(|e| !e.name.starts_with('.'))
            .filter(|e| e.is_directory || is_reading_file(&e.path))
            .partition(|e| e.is_directory);

        dirs.sort_by_key(|e| e.name.to_lowercase());
        files.sort_by_key(|e| e.name.to_lowercase());
        self.entries.extend(dirs);
        self.entries.extend(files);
    }

    /// Move into `path` if it is a directory inside the reading directory.
    pub fn navigate_to(&mut self, path: PathBuf) {
        if path.is_dir() && path.starts_with(&self.root) {
            self.current_dir = path;
            self.refresh();
        }
    }

    /// Enter a directory row or choose a file row.
    pub fn activate(&mut self, index: usize) -> Activation {
        match self.entries.get(index).cloned() {
            Some(entry) if entry.is_directory => {
                self.navigate_to(entry.path);
                Activation::Entered
            }
            Some(entry) => Activation::Open(entry.path),
            None => Activation::Nothing,
        }
    }

    pub fn activate_selected(&mut self) -> Activation {
        match self.selected_index {
            Some(index) => self.activate(index),
            None => Activation::Nothing,
        }
    }

    pub fn selected_entry(&self) -> Option<&FileEntry> {
        self.selected_index.and_then(|i| self.entries.get(i))
    }

    /// Preselect a previously opened file, if it is listed.
    pub fn select_by_name(&mut self, name: &str) {
        self.selected_index = self.entries.iter().position(|e| e.name == name);
    }
}

fn is_reading_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(naming::EXTENSION))
        .unwrap_or(false)
}
