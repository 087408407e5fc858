//! Core library modules for the manabi application.
//!
//! The rule layer (`settings`, `columns`, `validation`, `stats`) is pure:
//! everything takes its inputs as parameters and returns plain `Result`s or
//! values. I/O lives in `db`, presentation in `view`, and user-facing text
//! in `messages`.

pub mod activity;
pub mod columns;
pub mod config;
pub mod dashboard;
pub mod data_storage;
pub mod messages;
pub mod settings;
pub mod stats;
pub mod user;
pub mod validation;
pub mod view;
