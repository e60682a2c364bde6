//! Property tests for the task store: any sequence of add/toggle/remove
//! operations yields exactly the items implied by replaying them in
//! order against a naive model.

use lifebalance_core::{TaskCategory, TaskItem, TaskStore};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add(String, usize),
    Toggle(usize),
    Remove(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        ("[a-z ]{0,12}", any::<usize>()).prop_map(|(text, c)| Op::Add(text, c)),
        any::<usize>().prop_map(Op::Toggle),
        any::<usize>().prop_map(Op::Remove),
    ]
}

proptest! {
    #[test]
    fn replay_matches_model(ops in proptest::collection::vec(op_strategy(), 0..40)) {
        let mut store = TaskStore::default();
        let mut model: Vec<TaskItem> = Vec::new();

        for op in ops {
            match op {
                Op::Add(text, c) => {
                    let category = TaskCategory::ALL[c % TaskCategory::ALL.len()];
                    match store.add(&text, category) {
                        Some(snapshot) => {
                            prop_assert!(!text.trim().is_empty());
                            model.insert(0, snapshot[0].clone());
                        }
                        None => prop_assert!(text.trim().is_empty()),
                    }
                }
                Op::Toggle(i) => {
                    if model.is_empty() {
                        prop_assert!(store.toggle("task-0-absent").is_none());
                    } else {
                        let idx = i % model.len();
                        let id = model[idx].id.clone();
                        prop_assert!(store.toggle(&id).is_some());
                        model[idx].completed = !model[idx].completed;
                    }
                }
                Op::Remove(i) => {
                    if model.is_empty() {
                        prop_assert!(store.remove("task-0-absent").is_none());
                    } else {
                        let idx = i % model.len();
                        let id = model.remove(idx).id;
                        prop_assert!(store.remove(&id).is_some());
                    }
                }
            }
        }

        prop_assert_eq!(store.snapshot().to_vec(), model);
    }

    #[test]
    fn length_tracks_effective_operations(texts in proptest::collection::vec("[a-z ]{0,8}", 0..20)) {
        let mut store = TaskStore::default();
        let expected = texts.iter().filter(|t| !t.trim().is_empty()).count();
        for text in &texts {
            store.add(text, TaskCategory::Personal);
        }
        prop_assert_eq!(store.len(), expected);
    }
}
