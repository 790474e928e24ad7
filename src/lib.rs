//! redboard — Redmine dashboard data engine and CLI.
//!
//! Fetches the issues assigned to a configured user from a Redmine
//! instance, derives dashboard aggregates from the in-memory issue
//! sequence, and renders them as text or JSON. Without a usable
//! connection the dashboard runs on locally generated demo data, so
//! every command works offline.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface using clap
//! - [`model`] - Issue/Project wire types
//! - [`config`] - Persisted connection settings with change notification
//! - [`api`] - Redmine REST client and the paginated fetch loop
//! - [`sync`] - Refresh orchestration with the stale-response guard
//! - [`analytics`] - Pure aggregation (stats, breakdowns, trend)
//! - [`list`] - Issue list filter/sort/group transforms
//! - [`demo`] - Synthetic data generator for demo mode
//! - [`error`] - Error types and handling

pub mod analytics;
pub mod api;
pub mod cli;
pub mod config;
pub mod demo;
pub mod error;
pub mod list;
pub mod logging;
pub mod model;
pub mod output;
pub mod sync;

pub use error::{BoardError, Result};
