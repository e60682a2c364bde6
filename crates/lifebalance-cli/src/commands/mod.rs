pub mod auth;
pub mod config;
pub mod suggest;
pub mod task;
pub mod timer;
pub mod water;

use std::sync::Arc;

use lifebalance_core::{
    Config, Event, GeminiService, SessionCoordinator, TomlProfileStore,
};

/// Build a session over the on-disk profile store and mount it. The
/// mount runs the one-time hydration day-boundary check; if that reset
/// fired, its event is printed before the command's own output.
pub(crate) fn open_session() -> Result<SessionCoordinator, Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let store = Arc::new(TomlProfileStore::open()?);
    let profile = store.load()?;
    let service = Arc::new(GeminiService::new(config.suggestions.model.as_str()));

    let mut session = SessionCoordinator::new(profile, store, service, &config);
    if let Some(event) = session.mount()? {
        tracing::info!("hydration counter reset at day boundary");
        print_event(&event)?;
    }
    Ok(session)
}

pub(crate) fn print_event(event: &Event) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(event)?);
    Ok(())
}
