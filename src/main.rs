#![allow(non_snake_case)]

use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;

use scheduleBot::cli::{self, Cli};
use scheduleBot::config::{AppConfig, Settings};
use scheduleBot::service::chat_service::OllamaService;
use scheduleBot::service::schedule_service::ScheduleService;
use scheduleBot::session::Session;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = AppConfig::from_env();
    let mut settings = Settings::resolve(&config);
    if let Some(path) = &cli.schedule_file {
        settings.schedule_file = path.clone();
    }

    let schedule = match ScheduleService::open(&settings.schedule_file) {
        Ok(schedule) => schedule,
        Err(e) => {
            eprintln!("Unable to load schedule: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let chat = match OllamaService::new(&settings) {
        Ok(chat) => chat,
        Err(e) => {
            eprintln!("Unable to create chat client: {}", e);
            return ExitCode::FAILURE;
        }
    };
    log::debug!(
        "Using schedule {} and model {} at {}",
        schedule.path().display(),
        settings.model,
        settings.ollama_url
    );

    let session = Session::new(schedule, Arc::new(chat), settings.timezone);
    cli::cli(cli, session).await;
    ExitCode::SUCCESS
}
