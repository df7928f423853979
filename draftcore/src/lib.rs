//! draftcore: reading model, file format and form logic for the draft
//! mark logger

pub mod form;
pub mod format;
pub mod keypad;
pub mod naming;
pub mod picker;
pub mod reading;
pub mod storage;
pub mod store;
pub mod theme;
pub mod widgets;

pub use form::{FormController, Notice, NoticeKind};
pub use reading::{Measurements, Position, Reading};
pub use store::{ReadingStore, SaveOutcome, StoreError};
pub use theme::DraftTheme;
