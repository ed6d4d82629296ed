//! Use cases (application services)

pub mod load_bank;
pub mod quiz_controller;
pub mod quiz_session;
