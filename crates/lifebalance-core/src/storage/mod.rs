mod config;
mod profile_store;

pub use config::{Config, HydrationConfig, SuggestionsConfig, TimerConfig};
pub use profile_store::{MemoryProfileStore, TomlProfileStore};

use std::path::PathBuf;

/// Returns `~/.config/lifebalance[-dev]/` based on LIFEBALANCE_ENV.
///
/// Set LIFEBALANCE_ENV=dev to use the development data directory.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("LIFEBALANCE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("lifebalance-dev")
    } else {
        base_dir.join("lifebalance")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
