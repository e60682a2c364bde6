//! Countdown timer state machine.
//!
//! Two dimensions: `mode ∈ {Focus, Break}` × `running ∈ {true, false}`.
//! The engine holds no timing source of its own -- the caller delivers
//! `tick()` once per wall-clock second while running (see
//! [`TickHandle`](super::TickHandle) for the scheduling discipline).
//! Timer state is not persisted; every session starts at the mode's
//! default duration.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerMode {
    Focus,
    Break,
}

/// Mode-default durations, in seconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TimerDefaults {
    pub focus_secs: u32,
    pub break_secs: u32,
}

impl Default for TimerDefaults {
    fn default() -> Self {
        Self {
            focus_secs: 25 * 60,
            break_secs: 5 * 60,
        }
    }
}

impl TimerDefaults {
    pub fn secs_for(&self, mode: TimerMode) -> u32 {
        match mode {
            TimerMode::Focus => self.focus_secs,
            TimerMode::Break => self.break_secs,
        }
    }
}

/// Core countdown engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerEngine {
    mode: TimerMode,
    remaining_secs: u32,
    running: bool,
    defaults: TimerDefaults,
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new(TimerDefaults::default())
    }
}

impl TimerEngine {
    /// Fresh engine in Focus mode at the default duration, stopped.
    pub fn new(defaults: TimerDefaults) -> Self {
        Self {
            mode: TimerMode::Focus,
            remaining_secs: defaults.secs_for(TimerMode::Focus),
            running: false,
            defaults,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// `MM:SS` rendering of the remaining time.
    pub fn format_remaining(&self) -> String {
        let m = self.remaining_secs / 60;
        let s = self.remaining_secs % 60;
        format!("{m:02}:{s:02}")
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::TimerSnapshot {
            mode: self.mode,
            running: self.running,
            remaining_secs: self.remaining_secs,
            display: self.format_remaining(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin counting down. No-op while already running or at zero.
    pub fn start(&mut self) -> Option<Event> {
        if self.running || self.remaining_secs == 0 {
            return None;
        }
        self.running = true;
        Some(Event::TimerStarted {
            mode: self.mode,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    pub fn pause(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.running = false;
        Some(Event::TimerPaused {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// One-second decrement. Fires only while running; a tick at zero is
    /// a no-op (the count can never go negative), and running is forced
    /// off in that case. Reaching zero stops the timer without advancing
    /// the mode.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        if self.remaining_secs == 0 {
            self.running = false;
            return None;
        }

        self.remaining_secs -= 1;
        if self.remaining_secs == 0 {
            self.running = false;
            return Some(Event::TimerCompleted {
                mode: self.mode,
                at: Utc::now(),
            });
        }
        None
    }

    /// Stop and set the countdown to `minutes`, regardless of prior state.
    pub fn reset(&mut self, minutes: u32) -> Event {
        self.running = false;
        self.remaining_secs = minutes * 60;
        Event::TimerReset {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        }
    }

    /// Change mode, stop, and reset to that mode's default duration.
    pub fn switch_mode(&mut self, mode: TimerMode) -> Event {
        self.mode = mode;
        self.running = false;
        self.remaining_secs = self.defaults.secs_for(mode);
        Event::ModeSwitched {
            mode,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        }
    }
}
