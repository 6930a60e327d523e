use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_SCHEDULE_FILE: &str = "schedule.json";

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid schedule JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub date: String,
    pub event: String,
}

impl ScheduleEntry {
    pub fn new(date: impl Into<String>, event: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            event: event.into(),
        }
    }
}

/// Date-ordered list of events, stored on disk as a JSON array.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Schedule {
    entries: Vec<ScheduleEntry>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the schedule at `path`. A missing file is an empty schedule.
    pub fn load(path: &Path) -> Result<Self, ScheduleError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No schedule at {}, starting empty", path.display());
                return Ok(Self::new());
            }
            Err(source) => {
                return Err(ScheduleError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let entries: Vec<ScheduleEntry> =
            serde_json::from_str(&content).map_err(|source| ScheduleError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        log::debug!("Loaded {} events from {}", entries.len(), path.display());
        Ok(Self { entries })
    }

    pub fn save(&self, path: &Path) -> Result<(), ScheduleError> {
        let io_err = |source| ScheduleError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let body = serde_json::to_string_pretty(&self.entries).map_err(|source| {
            ScheduleError::Json {
                path: path.to_path_buf(),
                source,
            }
        })?;
        fs::write(path, body).map_err(io_err)?;
        log::debug!("Saved {} events to {}", self.entries.len(), path.display());
        Ok(())
    }

    /// Appends the entry and re-sorts by date. The sort is stable, so events
    /// on the same day keep the order they were added in.
    pub fn insert(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
        self.entries.sort_by(|a, b| a.date.cmp(&b.date));
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn format(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("- {}: {}", entry.date, entry.event))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<Vec<ScheduleEntry>> for Schedule {
    fn from(entries: Vec<ScheduleEntry>) -> Self {
        let mut schedule = Schedule::new();
        for entry in entries {
            schedule.insert(entry);
        }
        schedule
    }
}
