//! Command-line and environment configuration

use std::path::PathBuf;

use clap::Parser;
use todo_core::todo::StoreBackend;

/// Directory name used under the platform data directory
const APP_DIR_NAME: &str = "todo";

/// Used when the platform has no data directory
const FALLBACK_DATA_DIR: &str = ".todo-data";

const DATA_DIR_ENV: &str = "TODO_DATA_DIR";
const IN_MEMORY_ENV: &str = "TODO_IN_MEMORY";

#[derive(Debug, Parser)]
#[command(name = "todo")]
#[command(about = "Interactive todo list manager")]
#[command(version)]
pub struct Cli {
    /// Directory holding todos.json [env: TODO_DATA_DIR] (defaults to the platform data directory)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Keep todos in memory only; nothing is written to disk [env: TODO_IN_MEMORY]
    #[arg(long)]
    pub in_memory: bool,
}

impl Cli {
    /// Resolve the storage backend from flags and the process environment
    pub fn backend(&self) -> StoreBackend {
        self.backend_with_env(|name| std::env::var(name).ok())
    }

    /// Resolve the storage backend, reading variables through `env`
    ///
    /// Flags win over environment variables.
    fn backend_with_env(&self, env: impl Fn(&str) -> Option<String>) -> StoreBackend {
        if self.in_memory || env_flag(&env, IN_MEMORY_ENV, false) {
            return StoreBackend::Memory;
        }
        StoreBackend::file_in(self.resolve_data_dir(&env))
    }

    fn resolve_data_dir(&self, env: impl Fn(&str) -> Option<String>) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(|| {
                env(DATA_DIR_ENV)
                    .filter(|raw| !raw.trim().is_empty())
                    .map(PathBuf::from)
            })
            .unwrap_or_else(default_data_dir)
    }
}

/// Platform data directory for the app, e.g. `~/.local/share/todo` on Linux
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_DIR))
}

fn env_flag(env: impl Fn(&str) -> Option<String>, name: &str, default: bool) -> bool {
    match env(name) {
        Some(raw) => parse_flag(&raw).unwrap_or(default),
        None => default,
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
