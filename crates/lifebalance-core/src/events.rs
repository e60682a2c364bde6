use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task::TaskCategory;
use crate::timer::TimerMode;

/// Which suggestion panel an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    Meal,
    LifeHack,
}

/// Every state change in the session produces an Event.
/// Shells print or subscribe to these; the core never renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        mode: TimerMode,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    /// Countdown reached zero; running was forced off. The engine does not
    /// auto-advance to the other mode.
    TimerCompleted {
        mode: TimerMode,
        at: DateTime<Utc>,
    },
    TimerReset {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    ModeSwitched {
        mode: TimerMode,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerSnapshot {
        mode: TimerMode,
        running: bool,
        remaining_secs: u32,
        display: String,
        at: DateTime<Utc>,
    },
    TaskAdded {
        id: String,
        category: TaskCategory,
        at: DateTime<Utc>,
    },
    TaskToggled {
        id: String,
        completed: bool,
        at: DateTime<Utc>,
    },
    TaskRemoved {
        id: String,
        at: DateTime<Utc>,
    },
    HydrationAdjusted {
        count: u32,
        goal: u32,
        at: DateTime<Utc>,
    },
    /// Day-boundary reset: the stored record was from an earlier calendar
    /// day and was overwritten with a zeroed record stamped today.
    HydrationReset {
        at: DateTime<Utc>,
    },
    SuggestionReady {
        panel: Panel,
        seq: u64,
        at: DateTime<Utc>,
    },
    SuggestionFailed {
        panel: Panel,
        seq: u64,
        at: DateTime<Utc>,
    },
    BreathingToggled {
        active: bool,
        at: DateTime<Utc>,
    },
}
