//! CLI definitions and entry point.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub mod commands;

/// Terminal dashboard for Redmine
#[derive(Parser, Debug)]
#[command(name = "rb", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Force demo data even when a connection is configured
    #[arg(long, global = true)]
    pub demo: bool,

    /// Config file path (defaults to the platform config dir)
    #[arg(long, global = true, env = "REDBOARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Dashboard overview: summary, breakdowns, 30-day trend
    Board,

    /// Summary statistics with optional breakdowns
    Stats(StatsArgs),

    /// List assigned issues with filters
    Issues(IssuesArgs),

    /// List projects with per-project issue counts
    Projects,

    /// 30-day created/closed/open trend
    Trend,

    /// Manage connection settings
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Break down by status
    #[arg(long)]
    pub by_status: bool,

    /// Break down by priority
    #[arg(long)]
    pub by_priority: bool,

    /// Break down by assignee (with open/closed split)
    #[arg(long)]
    pub by_assignee: bool,

    /// Break down by project
    #[arg(long)]
    pub by_project: bool,

    /// Break down by tracker
    #[arg(long)]
    pub by_tracker: bool,

    /// All breakdowns
    #[arg(long)]
    pub all: bool,
}

#[derive(Args, Debug)]
pub struct IssuesArgs {
    /// Search subject, id, project, or assignee
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Filter by project name or id
    #[arg(long)]
    pub project: Option<String>,

    /// Status filter: all, open, closed, or a status name
    #[arg(long, default_value = "all")]
    pub status: String,

    /// Filter by priority name
    #[arg(long)]
    pub priority: Option<String>,

    /// Sort order
    #[arg(long, value_enum, default_value_t = SortField::Updated)]
    pub sort: SortField,

    /// Grouping dimension
    #[arg(long, value_enum, default_value_t = GroupField::None)]
    pub group_by: GroupField,

    /// Maximum issues to print
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Updated,
    Created,
    Priority,
    Due,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupField {
    None,
    Status,
    Priority,
    Project,
    Assignee,
    Tracker,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current settings (API key redacted)
    Show,

    /// Save connection settings
    Set {
        /// Redmine base URL (e.g. https://tracker.example)
        #[arg(long, env = "REDMINE_URL")]
        base_url: Option<String>,

        /// API key, from your Redmine account page
        #[arg(long, env = "REDMINE_API_KEY")]
        api_key: Option<String>,

        /// Numeric user id whose assigned issues to fetch
        #[arg(long, env = "REDMINE_USER_ID")]
        user_id: Option<String>,
    },

    /// Remove saved settings
    Clear,

    /// Print the config file path
    Path,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
