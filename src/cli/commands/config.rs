//! Config command: show/set/clear the connection record.

use crate::cli::{Cli, ConfigCommand};
use crate::error::{BoardError, Result};
use serde::Serialize;

#[derive(Serialize)]
struct ShowReport<'a> {
    configured: bool,
    usable: bool,
    base_url: &'a str,
    api_key: String,
    user_id: &'a str,
    path: String,
}

fn redact(api_key: &str) -> String {
    let key = api_key.trim();
    if key.is_empty() {
        return String::new();
    }
    if key.chars().count() <= 4 {
        return "****".to_string();
    }
    let prefix: String = key.chars().take(4).collect();
    format!("{prefix}****")
}

/// Execute a config subcommand.
///
/// # Errors
///
/// Returns an error if the config file cannot be read or written, or
/// if `set` is invoked without any field.
pub fn execute(command: &ConfigCommand, cli: &Cli) -> Result<()> {
    let store = super::store(cli)?;

    match command {
        ConfigCommand::Show => {
            let conn = store.load()?;
            let configured = conn.is_some();
            let conn = conn.unwrap_or_default();
            if cli.json {
                let report = ShowReport {
                    configured,
                    usable: conn.is_usable(),
                    base_url: &conn.base_url,
                    api_key: redact(&conn.api_key),
                    user_id: &conn.user_id,
                    path: store.path().display().to_string(),
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else if configured {
                println!("Base URL:  {}", conn.base_url);
                println!("API key:   {}", redact(&conn.api_key));
                println!("User id:   {}", conn.user_id);
                if !conn.is_usable() {
                    println!("\nAPI key and user id are both required for live data.");
                }
            } else {
                println!("Not configured. Run `rb config set` to connect.");
            }
            Ok(())
        }

        ConfigCommand::Set {
            base_url,
            api_key,
            user_id,
        } => {
            if base_url.is_none() && api_key.is_none() && user_id.is_none() {
                return Err(BoardError::Config(
                    "nothing to set: pass --base-url, --api-key, or --user-id".to_string(),
                ));
            }
            let mut conn = store.load()?.unwrap_or_default();
            if let Some(base_url) = base_url {
                conn.base_url = base_url.clone();
            }
            if let Some(api_key) = api_key {
                conn.api_key = api_key.clone();
            }
            if let Some(user_id) = user_id {
                conn.user_id = user_id.clone();
            }
            store.save(&conn)?;
            println!("Saved to {}", store.path().display());
            if !conn.is_usable() {
                println!("API key and user id are both required before live data is fetched.");
            }
            Ok(())
        }

        ConfigCommand::Clear => {
            store.clear()?;
            println!("Cleared {}", store.path().display());
            Ok(())
        }

        ConfigCommand::Path => {
            println!("{}", store.path().display());
            Ok(())
        }
    }
}
