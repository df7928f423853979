//! Form controller: owns the reading being edited and turns every save or
//! load into either new state or a [`Notice`] for the user.

use crate::reading::Reading;
use crate::store::{ReadingStore, SaveOutcome, StoreError};
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Modal message shown after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn saved(path: &Path) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: "Success".into(),
            message: format!("Data saved to {}", path.display()),
        }
    }

    pub fn from_error(err: &StoreError) -> Self {
        let (title, message) = match err {
            StoreError::PermissionDenied(_) => {
                ("Permission Denied", "Cannot save file. Permission denied.".to_string())
            }
            StoreError::NoSelection => ("Error", "No file selected".to_string()),
            other => ("Error", format!("An error occurred: {}", other)),
        };
        Self { kind: NoticeKind::Error, title: title.into(), message }
    }
}

/// Shown while the derived file name is taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePrompt {
    pub existing: PathBuf,
    /// Editable name, prefilled with the colliding name or its `_new` variant
    pub name: String,
}

pub struct FormController {
    pub reading: Reading,
    store: ReadingStore,
    pub rename: Option<RenamePrompt>,
    pub notice: Option<Notice>,
}

impl FormController {
    pub fn new(store: ReadingStore) -> Self {
        Self {
            reading: Reading::new(),
            store,
            rename: None,
            notice: None,
        }
    }

    pub fn store(&self) -> &ReadingStore {
        &self.store
    }

    pub fn set_date(&mut self, date: String) {
        self.reading.date = Some(date);
        self.reading.stamp_note();
    }

    pub fn set_time(&mut self, time: String) {
        self.reading.time = Some(time);
        self.reading.stamp_note();
    }

    pub fn save(&mut self, now: NaiveDateTime) {
        match self.store.save(&self.reading, now) {
            Ok(SaveOutcome::Saved(path)) => self.notice = Some(Notice::saved(&path)),
            Ok(SaveOutcome::Collision { path, suggested }) => {
                self.rename = Some(RenamePrompt { existing: path, name: suggested });
            }
            Err(e) => self.report(e),
        }
    }

    /// Retry the save with the name in the rename prompt. The prompt stays
    /// open until a free name is used.
    pub fn submit_rename(&mut self) {
        let name = match &self.rename {
            Some(prompt) => prompt.name.clone(),
            None => return,
        };
        match self.store.save_as(&self.reading, &name) {
            Ok(SaveOutcome::Saved(path)) => {
                self.rename = None;
                self.notice = Some(Notice::saved(&path));
            }
            Ok(SaveOutcome::Collision { path, suggested }) => {
                self.rename = Some(RenamePrompt { existing: path, name: suggested });
            }
            Err(e) => self.report(e),
        }
    }

    pub fn cancel_rename(&mut self) {
        self.rename = None;
    }

    /// Returns `true` when the file was applied to the form. A file that
    /// fails to parse leaves the reading untouched.
    pub fn load(&mut self, path: &Path) -> bool {
        match ReadingStore::load(path) {
            Ok(parsed) => {
                parsed.apply_to(&mut self.reading);
                true
            }
            Err(e) => {
                self.report(e);
                false
            }
        }
    }

    pub fn load_selection(&mut self, selection: Option<&Path>) -> bool {
        match selection {
            Some(path) => self.load(path),
            None => {
                self.report(StoreError::NoSelection);
                false
            }
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    fn report(&mut self, err: StoreError) {
        log::error!("{}", err);
        self.notice = Some(Notice::from_error(&err));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::Position;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .and_then(|d| d.and_hms_opt(14, 30, 0))
            .unwrap()
    }

    fn controller(tmp: &TempDir) -> FormController {
        FormController::new(ReadingStore::new(tmp.path().join("draft readings")))
    }

    #[test]
    fn test_save_reports_path() {
        let tmp = TempDir::new().unwrap();
        let mut form = controller(&tmp);
        form.reading.measurements.set(Position::AftPortside, "5.1");
        form.save(now());

        let notice = form.notice.clone().unwrap();
        assert_eq!(notice.kind, NoticeKind::Info);
        assert!(notice.message.starts_with("Data saved to "));
        assert!(notice.message.ends_with("2024-05-01_14-30.txt"));
        assert!(form.rename.is_none());
    }

    #[test]
    fn test_collision_flow() {
        let tmp = TempDir::new().unwrap();
        let mut form = controller(&tmp);
        form.save(now());
        form.dismiss_notice();

        form.save(now());
        assert!(form.notice.is_none());
        let prompt = form.rename.clone().unwrap();
        assert_eq!(prompt.name, "2024-05-01_14-30.txt");

        // unchanged name collides again; prompt now suggests _new
        form.submit_rename();
        assert_eq!(form.rename.as_ref().unwrap().name, "2024-05-01_14-30_new.txt");
        assert!(form.notice.is_none());

        form.submit_rename();
        assert!(form.rename.is_none());
        assert!(form.notice.unwrap().message.ends_with("2024-05-01_14-30_new.txt"));
    }

    #[test]
    fn test_picks_stamp_note_and_name() {
        let tmp = TempDir::new().unwrap();
        let mut form = controller(&tmp);
        form.set_date("2024-06-02".into());
        form.set_time("09:45".into());
        assert_eq!(form.reading.note, "2024-06-02 09:45 :  ");
        assert_eq!(
            ReadingStore::file_name_for(&form.reading, now()),
            "2024-06-02_09:45_2024-06-02_09:45_:.txt"
        );
    }

    #[test]
    fn test_load_round_trip() {
        let tmp = TempDir::new().unwrap();
        let mut form = controller(&tmp);
        for (i, p) in Position::ALL.into_iter().enumerate() {
            form.reading.measurements.set(p, format!("{}", 3 + i));
        }
        form.reading.note = "after loading".into();
        form.save(now());
        let path = form.store().dir().join("2024-05-01_14-30_after_loading.txt");

        let mut fresh = controller(&tmp);
        assert!(fresh.load_selection(Some(&path)));
        assert_eq!(fresh.reading.note, "after loading");
        assert_eq!(fresh.reading.measurements, form.reading.measurements);
        assert!(fresh.notice.is_none());
    }

    #[test]
    fn test_failed_load_keeps_state() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("foreign.txt");
        std::fs::write(&path, "just one line").unwrap();

        let mut form = controller(&tmp);
        form.reading.measurements.set(Position::ForwardStarboard, "7.7");
        assert!(!form.load(&path));
        assert_eq!(form.reading.measurements.get(Position::ForwardStarboard), "7.7");
        assert_eq!(form.reading.note, " ");

        let notice = form.notice.unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.title, "Error");
        assert!(notice.message.starts_with("An error occurred: "));
    }

    #[test]
    fn test_no_selection() {
        let tmp = TempDir::new().unwrap();
        let mut form = controller(&tmp);
        assert!(!form.load_selection(None));
        assert_eq!(form.notice.unwrap().message, "No file selected");
    }

    #[test]
    fn test_permission_notice() {
        let err = StoreError::PermissionDenied(PathBuf::from("/readings"));
        let notice = Notice::from_error(&err);
        assert_eq!(notice.title, "Permission Denied");
        assert_eq!(notice.message, "Cannot save file. Permission denied.");
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_file_is_not_a_save_error() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("locked.txt");
        std::fs::write(&path, "DRAFT MARK DATA\nReading: x\n\nAFT PORTSIDE: 1\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o000)).unwrap();
        if std::fs::read(&path).is_ok() {
            // running with privileges that ignore file modes
            return;
        }

        let mut form = controller(&tmp);
        assert!(!form.load(&path));
        let notice = form.notice.unwrap();
        assert_eq!(notice.title, "Error");
        assert!(notice.message.starts_with("An error occurred: IO error:"));
    }

    #[test]
    fn test_read_permission_error_shows_underlying_text() {
        let denied = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
        let notice = Notice::from_error(&StoreError::Io(denied));
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.title, "Error");
        assert!(notice.message.starts_with("An error occurred: IO error:"));
    }
}
