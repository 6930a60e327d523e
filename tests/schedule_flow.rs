use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::{Datelike, Utc};
use chrono_tz::Tz;
use scheduleBot::models::schedule::{Schedule, ScheduleEntry};
use scheduleBot::service::chat_service::ChatClient;
use scheduleBot::service::schedule_service::{ScheduleService, INVALID_DATE_MESSAGE};
use scheduleBot::session::{Session, Turn};

struct FakeChat;

#[async_trait::async_trait]
impl ChatClient for FakeChat {
    async fn chat(
        &self,
        _system_message: &str,
        _user_message: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        Ok("ok".to_string())
    }
}

fn temp_schedule_path(test_name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("schedulebot_{}_{}", test_name, uuid::Uuid::new_v4()))
        .join("schedule.json")
}

fn open_session(path: &PathBuf) -> Session {
    let service = ScheduleService::open(path).unwrap();
    Session::new(service, Arc::new(FakeChat), Tz::UTC)
}

#[tokio::test]
async fn add_command_appends_current_year_event() {
    let path = temp_schedule_path("add");
    let mut session = open_session(&path);

    let turn = session.handle_line("add dentist on July 9 at 2pm").await;
    let year = Utc::now().year();
    assert_eq!(
        turn,
        Turn::Reply(format!("✅ Event added: {}-07-09: Dentist at 2pm", year))
    );
    assert_eq!(
        session.schedule().schedule().entries(),
        &[ScheduleEntry::new(format!("{}-07-09", year), "Dentist at 2pm")]
    );
}

#[tokio::test]
async fn schedule_survives_reload() {
    let path = temp_schedule_path("reload");
    {
        let mut session = open_session(&path);
        session.handle_line("schedule haircut on March 3").await;
        session.handle_line("add rent on January 1").await;
    }

    let reloaded = Schedule::load(&path).unwrap();
    let events: Vec<&str> = reloaded.entries().iter().map(|e| e.event.as_str()).collect();
    assert_eq!(events, vec!["Rent", "Haircut"]);

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert!(raw.is_array());
    assert_eq!(raw[0]["event"], "Rent");
}

#[tokio::test]
async fn show_schedule_lists_events_sorted_by_date() {
    let path = temp_schedule_path("show");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(
        &path,
        r#"[{"date":"2026-09-01","event":"Conference"},{"date":"2026-02-14","event":"Dinner"}]"#,
    )
    .unwrap();
    let mut session = open_session(&path);
    session.handle_line("add gym on december 31").await;

    let Turn::Reply(shown) = session.handle_line("show schedule").await else {
        panic!("show schedule should reply");
    };
    let lines: Vec<&str> = shown.lines().collect();
    assert_eq!(lines[0], "📅 Your Schedule:");
    assert_eq!(lines.len(), 4);
    let dates: Vec<&str> = lines[1..]
        .iter()
        .map(|l| l.trim_start_matches("- ").split(':').next().unwrap())
        .collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
}

#[tokio::test]
async fn invalid_date_leaves_schedule_untouched() {
    let path = temp_schedule_path("invalid");
    let mut session = open_session(&path);
    session.handle_line("add lunch on May 2").await;
    let before = fs::read_to_string(&path).unwrap();

    let turn = session.handle_line("add party on Smarch 13").await;
    assert_eq!(turn, Turn::Reply(INVALID_DATE_MESSAGE.to_string()));
    assert_eq!(session.schedule().schedule().len(), 1);
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[tokio::test]
async fn failed_save_is_reported_and_not_kept() {
    let path = temp_schedule_path("save_fails");
    let mut session = open_session(&path);
    // Occupy the schedule's directory with a regular file so the write fails.
    fs::write(path.parent().unwrap(), "").unwrap();

    let Turn::Reply(reply) = session.handle_line("add dentist on July 9 at 2pm").await else {
        panic!("add should reply");
    };
    assert!(reply.starts_with("⚠️ Could not save schedule: "));
    assert_eq!(session.schedule().schedule().len(), 0);

    let Turn::Reply(shown) = session.handle_line("show schedule").await else {
        panic!("show schedule should reply");
    };
    assert!(!shown.contains("Dentist"));
    assert_eq!(shown, "📅 Your Schedule:\n");

    let _ = fs::remove_file(path.parent().unwrap());
}

#[test]
fn missing_file_is_empty_and_malformed_file_is_an_error() {
    let path = temp_schedule_path("missing");
    assert!(Schedule::load(&path).unwrap().is_empty());

    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "{not json").unwrap();
    assert!(Schedule::load(&path).is_err());
}
