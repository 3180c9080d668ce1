//! Append-only file journal.
//!
//! One timestamped, level-tagged line per control event:
//!
//! ```text
//! 2026-08-06 07:12:03 LOG temperature: 21.5°C (70.7°F), humidity: 45.2%RH
//! ```
//!
//! The file is only ever opened in append mode and is never read, rotated,
//! or truncated by this process. Events that carry a reading are stamped
//! with its capture time; lifecycle events are stamped at append time.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use chrono::Local;

use crate::app::events::ControlEvent;
use crate::app::ports::EventSink;
use crate::error::JournalError;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Durable journal sink backed by a local file.
pub struct FileJournal {
    file: File,
}

impl FileJournal {
    /// Open (or create) the journal for appending.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, JournalError> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file })
    }
}

impl EventSink for FileJournal {
    fn emit(&mut self, event: &ControlEvent) -> Result<(), JournalError> {
        let stamp = event.timestamp().unwrap_or_else(Local::now);
        let line = format!(
            "{} {} {}\n",
            stamp.format(TIMESTAMP_FORMAT),
            event.level(),
            event.message()
        );
        self.file.write_all(line.as_bytes())?;
        Ok(())
    }
}
