//! # Manabi - Student Learning Log
//!
//! A command-line companion for a classroom learning log: students record
//! daily study sessions, teachers review per-student summaries.
//!
//! ## Features
//!
//! - **Settings-Driven Forms**: Each deployment decides which fields
//!   (score, mood, memo, study time, activity list) are collected
//! - **Validation Gate**: Every submission is checked against the
//!   deployment settings before it reaches the store
//! - **Statistics**: Streaks, averages, best scores and weekly counts per
//!   student
//! - **Workbook Storage**: A directory of header-checked sheets, rows as
//!   records, with a health check for hand-edited schemas
//!
//! ## Usage
//!
//! ```rust,no_run
//! use manabi::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
