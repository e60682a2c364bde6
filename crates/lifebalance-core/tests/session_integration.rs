//! Integration tests for the session coordinator over an in-memory
//! profile store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use lifebalance_core::{
    Config, Event, HackCategory, HydrationRecord, MemoryProfileStore, SessionCoordinator,
    SuggestionError, SuggestionService, TaskCategory, TaskFilter, TimeBudget, UserProfile,
};

struct StubService;

#[async_trait]
impl SuggestionService for StubService {
    async fn generate_meal_ideas(
        &self,
        _ingredients: &str,
        _time_budget: TimeBudget,
    ) -> Result<String, SuggestionError> {
        Ok("- stub meal".to_string())
    }

    async fn generate_life_hack(
        &self,
        _category: HackCategory,
    ) -> Result<String, SuggestionError> {
        Ok("stub hack".to_string())
    }
}

fn session_with(profile: UserProfile) -> (SessionCoordinator, Arc<MemoryProfileStore>) {
    let store = Arc::new(MemoryProfileStore::new());
    let session = SessionCoordinator::new(
        profile,
        store.clone(),
        Arc::new(StubService),
        &Config::default(),
    );
    (session, store)
}

#[test]
fn task_lifecycle_end_to_end() {
    let (mut session, store) = session_with(UserProfile::default());
    session.mount().unwrap();

    session.set_new_task_category(TaskCategory::Home);
    session.add_task("Buy milk").unwrap().unwrap();
    let id = session.profile().tasks[0].id.clone();

    session.set_filter(TaskFilter::Category(TaskCategory::Home));
    let home = session.visible_tasks();
    assert_eq!(home.len(), 1);
    assert_eq!(home[0].text, "Buy milk");

    session.set_filter(TaskFilter::Category(TaskCategory::Work));
    assert!(session.visible_tasks().is_empty());

    session.toggle_task(&id).unwrap().unwrap();
    session.set_filter(TaskFilter::Category(TaskCategory::Home));
    let home = session.visible_tasks();
    assert_eq!(home.len(), 1);
    assert!(home[0].completed);

    session.remove_task(&id).unwrap().unwrap();
    session.set_filter(TaskFilter::All);
    assert!(session.visible_tasks().is_empty());

    // One forward per action: add, toggle, remove.
    assert_eq!(store.write_count(), 3);
    assert!(store.latest().unwrap().tasks.is_empty());
}

#[test]
fn hydration_day_cycle_end_to_end() {
    // Session one: count up through the day.
    let (mut session, store) = session_with(UserProfile::default());
    session.mount().unwrap();
    for _ in 0..7 {
        session.adjust_hydration(1).unwrap();
    }
    assert_eq!(session.hydration_count(), 7);
    session.adjust_hydration(1).unwrap();
    assert_eq!(session.hydration_count(), 8);
    session.adjust_hydration(-1).unwrap();
    assert_eq!(session.hydration_count(), 7);
    assert_eq!(store.write_count(), 9);

    // Session two, next day: the stored record is stale and resets.
    let mut carried = store.latest().unwrap();
    if let Some(record) = carried.hydration.as_mut() {
        record.last_updated = record.last_updated - Duration::days(1);
    }
    let (mut session, store) = session_with(carried);
    let event = session.mount().unwrap();
    assert!(matches!(event, Some(Event::HydrationReset { .. })));
    assert_eq!(session.hydration_count(), 0);
    assert_eq!(store.latest().unwrap().hydration.unwrap().count, 0);
}

#[test]
fn session_restores_persisted_tasks() {
    let profile = UserProfile {
        tasks: Vec::new(),
        hydration: Some(HydrationRecord {
            count: 3,
            goal: 8,
            last_updated: Utc::now(),
        }),
    };
    let (mut session, store) = session_with(profile);
    session.mount().unwrap();
    session.add_task("stretch").unwrap().unwrap();
    session.add_task("call home").unwrap().unwrap();

    // Reload from the store's latest value, as a fresh session would.
    let (mut next_session, _) = session_with(store.latest().unwrap());
    next_session.mount().unwrap();

    let tasks = next_session.visible_tasks();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].text, "call home");
    assert_eq!(tasks[1].text, "stretch");
    assert_eq!(next_session.hydration_count(), 3);

    // Timer state never survives a reload.
    assert!(!next_session.timer().running());
    assert_eq!(next_session.timer().remaining_secs(), 1500);
}

#[tokio::test]
async fn suggestion_flow_reaches_ready() {
    let (mut session, _) = session_with(UserProfile::default());
    let event = session
        .request_meal("eggs, kale", TimeBudget::Min15)
        .await
        .unwrap();
    assert!(matches!(event, Some(Event::SuggestionReady { .. })));
    assert_eq!(session.meal_result(), Some("- stub meal"));

    let event = session.request_hack(HackCategory::default()).await.unwrap();
    assert!(matches!(event, Some(Event::SuggestionReady { .. })));
    assert_eq!(session.hack_result(), Some("stub hack"));
}
