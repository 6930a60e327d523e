use crate::service::event_parser::{parse_add_command, ParsedEvent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Empty,
    Exit,
    ShowSchedule,
    AddEvent(ParsedEvent),
    Ask(String),
}

/// Decides what a line typed at the prompt asks for. `year` fills in
/// dates given as month and day only.
pub fn route_command(text: &str, year: i32) -> Command {
    let normalized = text.trim();
    if normalized.is_empty() {
        return Command::Empty;
    }

    let lower = normalized.to_lowercase();
    if lower == "exit" || lower == "quit" {
        return Command::Exit;
    }
    if lower == "show schedule" {
        return Command::ShowSchedule;
    }

    match parse_add_command(normalized, year) {
        Some(parsed) => Command::AddEvent(parsed),
        None => Command::Ask(normalized.to_string()),
    }
}
