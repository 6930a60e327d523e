use chrono_tz::Tz;
use std::sync::Arc;

use crate::service::chat_service::ChatClient;
use crate::service::event_parser::{current_year, ParsedEvent};
use crate::service::routing::{route_command, Command};
use crate::service::schedule_service::ScheduleService;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    Exit,
    Skip,
    Reply(String),
}

pub struct Session {
    schedule: ScheduleService,
    chat: Arc<dyn ChatClient>,
    timezone: Tz,
}

impl Session {
    pub fn new(schedule: ScheduleService, chat: Arc<dyn ChatClient>, timezone: Tz) -> Self {
        Self {
            schedule,
            chat,
            timezone,
        }
    }

    pub fn schedule(&self) -> &ScheduleService {
        &self.schedule
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub async fn handle_line(&mut self, line: &str) -> Turn {
        match route_command(line, current_year(self.timezone)) {
            Command::Empty => Turn::Skip,
            Command::Exit => Turn::Exit,
            Command::ShowSchedule => Turn::Reply(self.schedule.render()),
            Command::AddEvent(parsed) => Turn::Reply(self.add_event(parsed)),
            Command::Ask(question) => Turn::Reply(self.ask(&question).await),
        }
    }

    pub fn add_event(&mut self, parsed: ParsedEvent) -> String {
        match parsed {
            ParsedEvent::Valid(entry) => match self.schedule.add(entry) {
                Ok(confirmation) => confirmation,
                Err(e) => {
                    log::error!("Failed to save schedule: {}", e);
                    format!("⚠️ Could not save schedule: {}", e)
                }
            },
            ParsedEvent::InvalidDate => self.schedule.invalid_date_message().to_string(),
        }
    }

    pub async fn ask(&self, question: &str) -> String {
        let system_message = self.schedule.system_message();
        match self.chat.chat(&system_message, question).await {
            Ok(answer) => format!("🤖 Assistant: {}", answer),
            Err(e) => {
                log::warn!("Chat request failed: {}", e);
                format!("⚠️ Assistant unavailable: {}", e)
            }
        }
    }
}
