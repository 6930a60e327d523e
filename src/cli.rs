use clap::{Parser, Subcommand};
use inquire::{InquireError, Text};
use std::path::PathBuf;

use crate::service::event_parser::{current_year, parse_add_command};
use crate::session::{Session, Turn};

#[derive(Parser)]
#[command(about = "Chat with a local model about your schedule")]
pub struct Cli {
    /// Schedule file to read and update.
    #[arg(long, global = true)]
    pub schedule_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive assistant (default).
    Chat,
    /// Add an event, e.g. `add dentist on July 9 at 2pm`.
    Add {
        #[arg(required = true, trailing_var_arg = true)]
        text: Vec<String>,
    },
    /// Print every event in date order.
    Show,
    /// Ask the assistant a single question.
    Ask {
        #[arg(required = true, trailing_var_arg = true)]
        text: Vec<String>,
    },
}

const GREETING: &str = "🤖 Assistant is ready! Ask about your schedule, or add events (e.g. 'Add dentist appointment on July 9 at 2pm').\n\
Type 'show schedule' to view current events, or 'exit' to quit.\n";

pub async fn cli(cli: Cli, mut session: Session) {
    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => chat_loop(&mut session).await,
        Commands::Add { text } => println!("{}", add_from_args(&mut session, &text)),
        Commands::Show => println!("{}", session.schedule().render()),
        Commands::Ask { text } => println!("{}", session.ask(&text.join(" ")).await),
    }
}

pub const NOT_AN_EVENT: &str = "Not an event. Use: add <event> on <Month> <day> [at <time>]";

/// `scheduleBot add dentist on July 9` runs the same parser as typing
/// `add dentist on July 9` at the prompt. Text that is not an add command
/// is never forwarded to the model.
pub fn add_from_args(session: &mut Session, text: &[String]) -> String {
    let line = format!("add {}", text.join(" "));
    match parse_add_command(&line, current_year(session.timezone())) {
        Some(parsed) => session.add_event(parsed),
        None => NOT_AN_EVENT.to_string(),
    }
}

async fn chat_loop(session: &mut Session) {
    println!("{}", GREETING);
    loop {
        let line = match Text::new("🧑 You:").prompt() {
            Ok(line) => line,
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => break,
            Err(e) => {
                eprintln!("Failed to read input: {}", e);
                break;
            }
        };
        match session.handle_line(&line).await {
            Turn::Exit => break,
            Turn::Skip => continue,
            Turn::Reply(reply) => println!("\n{}\n", reply),
        }
    }
}
