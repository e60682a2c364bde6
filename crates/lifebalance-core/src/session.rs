//! Session coordinator: merges the widgets into one view and mediates
//! every write to the externally owned user profile.
//!
//! Data flows one way in (widget events) and one way out (profile
//! forwards); widgets never talk to each other. On every mutation from
//! the task store or hydration tracker the coordinator shallow-merges
//! the changed field into a new profile value and makes exactly one
//! `update_user` call -- no retry, no debounce. It also owns the
//! one-time day-boundary hydration check, run at mount.

use std::sync::Arc;

use chrono::{Local, Utc};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::error::{CoreError, SuggestionError};
use crate::events::{Event, Panel};
use crate::hydration::{day_boundary, DayBoundary, HydrationTracker};
use crate::profile::{HydrationRecord, ProfileStore, UserProfile};
use crate::storage::Config;
use crate::suggest::{
    HackCategory, SuggestionRequester, SuggestionService, SuggestionStatus, Ticket, TimeBudget,
};
use crate::task::{default_category_for, TaskCategory, TaskFilter, TaskItem, TaskStore};
use crate::timer::{TickHandle, TimerEngine, TimerMode};

pub struct SessionCoordinator {
    /// Source of truth for everything persisted. Widget state below is
    /// derived cache, refreshed after every successful forward.
    profile: UserProfile,
    store: Arc<dyn ProfileStore>,
    service: Arc<dyn SuggestionService>,

    tasks: TaskStore,
    filter: TaskFilter,
    new_task_category: TaskCategory,

    hydration: HydrationTracker,

    timer: TimerEngine,
    tick: TickHandle,
    tick_tx: UnboundedSender<()>,
    tick_rx: UnboundedReceiver<()>,

    meal: SuggestionRequester,
    hack: SuggestionRequester,

    breathing: bool,
    mounted: bool,
}

impl SessionCoordinator {
    pub fn new(
        profile: UserProfile,
        store: Arc<dyn ProfileStore>,
        service: Arc<dyn SuggestionService>,
        config: &Config,
    ) -> Self {
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();
        let tasks = TaskStore::from_items(profile.tasks.clone());
        Self {
            profile,
            store,
            service,
            tasks,
            filter: TaskFilter::All,
            new_task_category: TaskCategory::default(),
            hydration: HydrationTracker::new(config.hydration.goal),
            timer: TimerEngine::new(config.timer_defaults()),
            tick: TickHandle::new(),
            tick_tx,
            tick_rx,
            meal: SuggestionRequester::new(),
            hack: SuggestionRequester::quote_stripping(),
            breathing: false,
            mounted: false,
        }
    }

    /// One-time session initialization: the day-boundary hydration check
    /// runs here, before any other read, and never again for the life of
    /// the session. A stale record is overwritten with a zeroed one
    /// stamped today.
    pub fn mount(&mut self) -> Result<Option<Event>, CoreError> {
        if self.mounted {
            return Ok(None);
        }
        self.mounted = true;

        match day_boundary(self.profile.hydration.as_ref(), Local::now().date_naive()) {
            DayBoundary::Stale(fresh) => {
                let at = fresh.last_updated;
                self.hydration.resync(Some(&fresh));
                self.forward_hydration(fresh)?;
                Ok(Some(Event::HydrationReset { at }))
            }
            DayBoundary::Current(count) => {
                let record = HydrationRecord::fresh(count, self.hydration.goal());
                self.hydration.resync(Some(&record));
                Ok(None)
            }
            DayBoundary::Missing => Ok(None),
        }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    // ── Profile forwarding ───────────────────────────────────────────

    fn forward_tasks(&mut self, items: Vec<TaskItem>) -> Result<(), CoreError> {
        let next = UserProfile {
            tasks: items,
            ..self.profile.clone()
        };
        if let Err(e) = self.store.update_user(&next) {
            // The store kept the old sequence; fall back to it so the
            // widget never diverges from the source of truth.
            self.tasks.reset_items(self.profile.tasks.clone());
            return Err(e.into());
        }
        self.profile = next;
        Ok(())
    }

    fn forward_hydration(&mut self, record: HydrationRecord) -> Result<(), CoreError> {
        let next = UserProfile {
            hydration: Some(record),
            ..self.profile.clone()
        };
        if let Err(e) = self.store.update_user(&next) {
            self.hydration.resync(self.profile.hydration.as_ref());
            return Err(e.into());
        }
        self.profile = next;
        Ok(())
    }

    // ── Tasks ────────────────────────────────────────────────────────

    /// Add a task with the current default category. Blank text is
    /// silently refused: no state change, no forward.
    pub fn add_task(&mut self, text: &str) -> Result<Option<Event>, CoreError> {
        let category = self.new_task_category;
        let Some(snapshot) = self.tasks.add(text, category) else {
            return Ok(None);
        };
        let id = snapshot[0].id.clone();
        self.forward_tasks(snapshot.to_vec())?;
        Ok(Some(Event::TaskAdded {
            id,
            category,
            at: Utc::now(),
        }))
    }

    /// Flip completion for a task. Absent ids are a no-op with no forward.
    pub fn toggle_task(&mut self, id: &str) -> Result<Option<Event>, CoreError> {
        let Some(snapshot) = self.tasks.toggle(id) else {
            return Ok(None);
        };
        let completed = snapshot
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.completed)
            .unwrap_or_default();
        self.forward_tasks(snapshot.to_vec())?;
        Ok(Some(Event::TaskToggled {
            id: id.to_string(),
            completed,
            at: Utc::now(),
        }))
    }

    /// Remove a task. Absent ids are a no-op with no forward.
    pub fn remove_task(&mut self, id: &str) -> Result<Option<Event>, CoreError> {
        let Some(snapshot) = self.tasks.remove(id) else {
            return Ok(None);
        };
        self.forward_tasks(snapshot.to_vec())?;
        Ok(Some(Event::TaskRemoved {
            id: id.to_string(),
            at: Utc::now(),
        }))
    }

    /// Change the active filter. A non-`All` filter also becomes the
    /// default category for new tasks.
    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.filter = filter;
        if let Some(category) = default_category_for(filter) {
            self.new_task_category = category;
        }
    }

    pub fn set_new_task_category(&mut self, category: TaskCategory) {
        self.new_task_category = category;
    }

    pub fn filter(&self) -> TaskFilter {
        self.filter
    }

    pub fn new_task_category(&self) -> TaskCategory {
        self.new_task_category
    }

    /// Tasks visible under the active filter, order preserved.
    pub fn visible_tasks(&self) -> Vec<TaskItem> {
        self.tasks.filter(self.filter)
    }

    // ── Hydration ────────────────────────────────────────────────────

    pub fn hydration_count(&self) -> u32 {
        self.hydration.count()
    }

    pub fn hydration_goal(&self) -> u32 {
        self.hydration.goal()
    }

    /// Apply a delta and forward the resulting record as a point-in-time
    /// overwrite.
    pub fn adjust_hydration(&mut self, delta: i32) -> Result<Event, CoreError> {
        let record = self.hydration.adjust(delta);
        let (count, goal, at) = (record.count, record.goal, record.last_updated);
        self.forward_hydration(record)?;
        Ok(Event::HydrationAdjusted { count, goal, at })
    }

    // ── Timer ────────────────────────────────────────────────────────

    pub fn timer(&self) -> &TimerEngine {
        &self.timer
    }

    /// Whether a tick callback is currently armed.
    pub fn tick_armed(&self) -> bool {
        self.tick.is_armed()
    }

    /// Cancel the pending callback and drain any signal it managed to
    /// queue before cancellation, so a stale tick can never be applied
    /// after a state change.
    fn cancel_tick(&mut self) {
        self.tick.cancel();
        while self.tick_rx.try_recv().is_ok() {}
    }

    pub fn start_timer(&mut self) -> Option<Event> {
        self.cancel_tick();
        let event = self.timer.start();
        if self.timer.running() {
            self.tick.schedule(self.tick_tx.clone());
        }
        event
    }

    pub fn pause_timer(&mut self) -> Option<Event> {
        self.cancel_tick();
        self.timer.pause()
    }

    pub fn reset_timer(&mut self, minutes: u32) -> Event {
        self.cancel_tick();
        self.timer.reset(minutes)
    }

    pub fn switch_mode(&mut self, mode: TimerMode) -> Event {
        self.cancel_tick();
        self.timer.switch_mode(mode)
    }

    /// Apply a delivered tick: decrement once, then re-arm only if the
    /// countdown is still running. The spent callback is cancelled first
    /// so exactly one remains outstanding at any moment.
    pub fn on_tick(&mut self) -> Option<Event> {
        self.cancel_tick();
        let event = self.timer.tick();
        if self.timer.running() {
            self.tick.schedule(self.tick_tx.clone());
        }
        event
    }

    /// Wait for the armed tick callback to fire and apply it. Returns
    /// immediately with `None` when nothing is armed.
    pub async fn await_tick(&mut self) -> Option<Event> {
        if !self.tick.is_armed() {
            return None;
        }
        self.tick_rx.recv().await?;
        self.on_tick()
    }

    // ── Suggestions ──────────────────────────────────────────────────

    pub fn meal_status(&self) -> SuggestionStatus {
        self.meal.status()
    }

    pub fn meal_result(&self) -> Option<&str> {
        self.meal.result()
    }

    pub fn hack_status(&self) -> SuggestionStatus {
        self.hack.status()
    }

    pub fn hack_result(&self) -> Option<&str> {
        self.hack.result()
    }

    /// Gate and issue a meal request. Returns `None` -- silently, no
    /// state change -- for blank ingredients or while a request is
    /// already pending (single-flight per panel).
    pub fn begin_meal(&mut self, ingredients: &str) -> Option<Ticket> {
        if ingredients.trim().is_empty() || self.meal.is_pending() {
            return None;
        }
        Some(self.meal.begin())
    }

    /// Issue a life-hack request. The category selector is never empty,
    /// so only the single-flight gate applies.
    pub fn begin_hack(&mut self) -> Option<Ticket> {
        if self.hack.is_pending() {
            return None;
        }
        Some(self.hack.begin())
    }

    /// Apply a meal resolution; stale tickets are discarded.
    pub fn resolve_meal(
        &mut self,
        ticket: Ticket,
        outcome: Result<String, SuggestionError>,
    ) -> Option<Event> {
        if !self.meal.resolve(ticket, outcome) {
            return None;
        }
        Some(Self::resolution_event(Panel::Meal, ticket, self.meal.status()))
    }

    /// Apply a life-hack resolution; stale tickets are discarded.
    pub fn resolve_hack(
        &mut self,
        ticket: Ticket,
        outcome: Result<String, SuggestionError>,
    ) -> Option<Event> {
        if !self.hack.resolve(ticket, outcome) {
            return None;
        }
        Some(Self::resolution_event(
            Panel::LifeHack,
            ticket,
            self.hack.status(),
        ))
    }

    fn resolution_event(panel: Panel, ticket: Ticket, status: SuggestionStatus) -> Event {
        match status {
            SuggestionStatus::Ready => Event::SuggestionReady {
                panel,
                seq: ticket.0,
                at: Utc::now(),
            },
            _ => Event::SuggestionFailed {
                panel,
                seq: ticket.0,
                at: Utc::now(),
            },
        }
    }

    /// Issue a meal request and await the service inline.
    pub async fn request_meal(
        &mut self,
        ingredients: &str,
        time_budget: TimeBudget,
    ) -> Result<Option<Event>, CoreError> {
        let Some(ticket) = self.begin_meal(ingredients) else {
            return Ok(None);
        };
        let service = Arc::clone(&self.service);
        let outcome = service.generate_meal_ideas(ingredients, time_budget).await;
        Ok(self.resolve_meal(ticket, outcome))
    }

    /// Issue a life-hack request and await the service inline.
    pub async fn request_hack(
        &mut self,
        category: HackCategory,
    ) -> Result<Option<Event>, CoreError> {
        let Some(ticket) = self.begin_hack() else {
            return Ok(None);
        };
        let service = Arc::clone(&self.service);
        let outcome = service.generate_life_hack(category).await;
        Ok(self.resolve_hack(ticket, outcome))
    }

    /// View cleared: panel back to Idle, prior result dropped.
    pub fn clear_meal(&mut self) {
        self.meal.clear();
    }

    pub fn clear_hack(&mut self) {
        self.hack.clear();
    }

    // ── Breathing cue ────────────────────────────────────────────────

    pub fn breathing(&self) -> bool {
        self.breathing
    }

    /// Session-local toggle; never persisted.
    pub fn toggle_breathing(&mut self) -> Event {
        self.breathing = !self.breathing;
        Event::BreathingToggled {
            active: self.breathing,
            at: Utc::now(),
        }
    }
}
