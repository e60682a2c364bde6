//! # Life Balance Core Library
//!
//! Core session logic for the Life Balance wellbeing hub: a set of small
//! independent widgets (task list, countdown timer, hydration counter,
//! breathing cue, two AI suggestion panels) composed over one mutable
//! user profile. Shells -- the bundled CLI, or a GUI -- are thin layers
//! over this crate.
//!
//! ## Architecture
//!
//! - **Session Coordinator**: the only component that writes to the
//!   external profile store; merges widget events into profile forwards
//! - **Timer Engine**: a caller-ticked countdown state machine with an
//!   owned, cancel-before-reschedule tick handle
//! - **Task Store**: ordered task collection with snapshot semantics
//! - **Hydration Tracker**: bounded daily counter with a date-keyed,
//!   once-per-session reset
//! - **Suggestion Requester**: sequence-id-gated async request wrapper
//!   shared by the meal and life-hack panels
//!
//! ## Key Components
//!
//! - [`SessionCoordinator`]: session composition and profile mediation
//! - [`TimerEngine`]: countdown state machine
//! - [`TaskStore`]: task sequence with category filtering
//! - [`GeminiService`]: suggestion backend client
//! - [`Config`]: application configuration management

pub mod error;
pub mod events;
pub mod hydration;
pub mod profile;
pub mod session;
pub mod storage;
pub mod suggest;
pub mod task;
pub mod timer;

pub use error::{ConfigError, CoreError, ProfileError, SuggestionError};
pub use events::{Event, Panel};
pub use hydration::{DayBoundary, HydrationTracker};
pub use profile::{HydrationRecord, ProfileStore, UserProfile};
pub use session::SessionCoordinator;
pub use storage::{Config, MemoryProfileStore, TomlProfileStore};
pub use suggest::{
    GeminiService, HackCategory, SuggestionRequester, SuggestionService, SuggestionStatus,
    TimeBudget,
};
pub use task::{TaskCategory, TaskFilter, TaskItem, TaskStore};
pub use timer::{TickHandle, TimerDefaults, TimerEngine, TimerMode};
