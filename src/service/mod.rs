pub mod chat_service;
pub mod event_parser;
pub mod routing;
pub mod schedule_service;
