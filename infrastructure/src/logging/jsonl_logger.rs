//! Conversation transcript as JSON Lines.
//!
//! One line per [`ConversationEvent`], stamped with the time it was written:
//!
//! ```text
//! {"timestamp":"2024-05-01T10:00:00.123Z","type":"user_message","request_id":1,"text":"What is 2+2?"}
//! {"timestamp":"2024-05-01T10:00:01.456Z","type":"assistant_message","request_id":1,"model":"gemini-1.5-flash","text":"4"}
//! ```

use askai_application::{ConversationEvent, ConversationLogger};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{self, LineWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// A conversation event as it appears on disk
#[derive(Serialize)]
struct TranscriptLine<'a> {
    timestamp: DateTime<Utc>,
    #[serde(flatten)]
    event: &'a ConversationEvent,
}

/// Appends conversation events to a `.jsonl` file
pub struct JsonlConversationLogger {
    file: Mutex<LineWriter<File>>,
    path: PathBuf,
}

impl JsonlConversationLogger {
    /// Open `path` for appending, creating it and its parent directories.
    /// Earlier sessions in the same file are kept.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            file: Mutex::new(LineWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_event(&self, event: &ConversationEvent) -> io::Result<()> {
        let line = TranscriptLine {
            timestamp: Utc::now(),
            event,
        };
        let json = serde_json::to_string(&line).map_err(io::Error::other)?;

        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::other("conversation log lock poisoned"))?;
        writeln!(file, "{}", json)
    }
}

impl ConversationLogger for JsonlConversationLogger {
    fn log(&self, event: ConversationEvent) {
        if let Err(e) = self.write_event(&event) {
            warn!(
                "Could not write {} to {}: {}",
                event.kind,
                self.path.display(),
                e
            );
        }
    }
}
