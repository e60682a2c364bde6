//! The externally owned user profile and the store interface it flows
//! through.
//!
//! The profile is the single source of truth for everything the session
//! persists. Widget-local state (the hydration mirror, the task snapshot)
//! is derived cache, reinitialized at mount and refreshed after every
//! write. Only the [`SessionCoordinator`](crate::session::SessionCoordinator)
//! calls [`ProfileStore::update_user`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ProfileError;
use crate::task::TaskItem;

/// Daily hydration record.
///
/// `count` is only meaningful relative to `last_updated`'s calendar date;
/// a record from an earlier day reads as count 0 (see
/// [`day_boundary`](crate::hydration::day_boundary)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydrationRecord {
    pub count: u32,
    pub goal: u32,
    pub last_updated: DateTime<Utc>,
}

impl HydrationRecord {
    /// A record stamped now with the given count and the daily goal.
    pub fn fresh(count: u32, goal: u32) -> Self {
        Self {
            count,
            goal,
            last_updated: Utc::now(),
        }
    }
}

/// The user profile, owned externally and referenced by the core.
///
/// Tasks are stored newest-first; insertion order is display order.
/// A missing hydration record reads as defaults (count 0, goal 8), not
/// an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub tasks: Vec<TaskItem>,
    #[serde(default)]
    pub hydration: Option<HydrationRecord>,
}

/// The consumed profile-store interface.
///
/// Synchronous from the caller's perspective; durability is the
/// collaborator's concern. Every user action yields exactly one call --
/// the coordinator neither retries nor debounces, and each call is a
/// point-in-time overwrite (last-writer-wins, single in-process writer).
pub trait ProfileStore: Send + Sync {
    fn update_user(&self, profile: &UserProfile) -> Result<(), ProfileError>;
}
