use std::path::{Path, PathBuf};

use crate::models::schedule::{Schedule, ScheduleEntry, ScheduleError};

pub const INVALID_DATE_MESSAGE: &str =
    "❌ Could not understand the date. Please use 'Month Day' format (e.g. July 9).";

/// The schedule in memory together with the file it is persisted to.
pub struct ScheduleService {
    schedule: Schedule,
    path: PathBuf,
}

impl ScheduleService {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ScheduleError> {
        let path = path.into();
        let schedule = Schedule::load(&path)?;
        Ok(Self { schedule, path })
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Inserts the entry and writes the schedule back to disk. The in-memory
    /// schedule only changes once the file has been written.
    pub fn add(&mut self, entry: ScheduleEntry) -> Result<String, ScheduleError> {
        let confirmation = format!("✅ Event added: {}: {}", entry.date, entry.event);
        let mut updated = self.schedule.clone();
        updated.insert(entry);
        updated.save(&self.path)?;
        self.schedule = updated;
        log::info!("{}", confirmation);
        Ok(confirmation)
    }

    pub fn invalid_date_message(&self) -> &'static str {
        INVALID_DATE_MESSAGE
    }

    pub fn render(&self) -> String {
        format!("📅 Your Schedule:\n{}", self.schedule.format())
    }

    pub fn system_message(&self) -> String {
        build_system_message(&self.schedule.format())
    }
}

pub fn build_system_message(schedule: &str) -> String {
    format!(
        "You are a smart productivity assistant. Here is the user's monthly schedule:\n\
         \n\
         {schedule}\n\
         \n\
         The user will now ask questions about their time, availability, and how to approach tasks.\n\
         Answer with specific references to their schedule and give helpful advice when possible.\n"
    )
}
