//! Tests for the in-memory task store

use std::collections::HashSet;

use taskscribe::models::Priority;
use taskscribe::parser::parse_transcript;
use taskscribe::storage::{MemoryTaskStore, NewTask, StoreError, TaskStore};

use crate::common::{SAMPLE_TRANSCRIPT, STANDUP_TRANSCRIPT};

fn manual(assignee: &str, description: &str, deadline: &str) -> NewTask {
    NewTask {
        assignee: assignee.to_string(),
        description: description.to_string(),
        deadline: deadline.to_string(),
        priority: Priority::default(),
    }
}

#[test]
fn test_parsed_batch_lands_in_order() {
    let mut store = MemoryTaskStore::new();
    let added = store.add_parsed(parse_transcript(SAMPLE_TRANSCRIPT));

    let ids: Vec<_> = added.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["TSK-1", "TSK-2", "TSK-3"]);
    assert_eq!(store.all().len(), 3);
    assert_eq!(store.get("TSK-3").unwrap().assignee, "Shreya");
}

#[test]
fn test_repeated_batches_never_collide() {
    let mut store = MemoryTaskStore::new();
    for _ in 0..20 {
        store.add_parsed(parse_transcript(STANDUP_TRANSCRIPT));
    }
    let ids: HashSet<_> = store.all().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids.len(), 60);
}

#[test]
fn test_manual_and_parsed_share_id_sequence() {
    let mut store = MemoryTaskStore::with_prefix("MTG");
    store.add(manual("Aman", "draft agenda", "Monday")).unwrap();
    let added = store.add_parsed(parse_transcript("Kim review the report by Friday."));
    assert_eq!(added[0].id, "MTG-2");
}

#[test]
fn test_manual_add_rejects_each_empty_field() {
    let mut store = MemoryTaskStore::new();
    assert_eq!(store.add(manual(" ", "x", "y")).unwrap_err(), StoreError::EmptyField("assignee"));
    assert_eq!(store.add(manual("a", "", "y")).unwrap_err(), StoreError::EmptyField("description"));
    assert_eq!(store.add(manual("a", "x", "\t")).unwrap_err(), StoreError::EmptyField("deadline"));
    assert!(store.all().is_empty());
}

#[test]
fn test_list_by_partitions_board() {
    let mut store = MemoryTaskStore::new();
    store.add_parsed(parse_transcript(SAMPLE_TRANSCRIPT));
    store.toggle_complete("TSK-1").unwrap();
    store.toggle_complete("TSK-3").unwrap();

    let done: Vec<_> = store.list_by(true).iter().map(|t| t.id.clone()).collect();
    let open: Vec<_> = store.list_by(false).iter().map(|t| t.id.clone()).collect();
    assert_eq!(done, vec!["TSK-1", "TSK-3"]);
    assert_eq!(open, vec!["TSK-2"]);
    assert_eq!(done.len() + open.len(), store.all().len());
}

#[test]
fn test_delete_then_toggle_is_not_found() {
    let mut store = MemoryTaskStore::new();
    store.add_parsed(parse_transcript(SAMPLE_TRANSCRIPT));
    let removed = store.delete("TSK-2").unwrap();
    assert_eq!(removed.assignee, "Rajeev");

    let err = store.toggle_complete("TSK-2").unwrap_err();
    assert_eq!(err.to_string(), "task not found: TSK-2");
    assert_eq!(store.stats().total, 2);
}

#[test]
fn test_stats_track_toggles() {
    let mut store = MemoryTaskStore::new();
    store.add_parsed(parse_transcript(STANDUP_TRANSCRIPT));
    assert_eq!(store.stats().active, 3);

    store.toggle_complete("TSK-2").unwrap();
    let stats = store.stats();
    assert_eq!((stats.total, stats.active, stats.completed), (3, 2, 1));

    store.toggle_complete("TSK-2").unwrap();
    assert_eq!(store.stats().completed, 0);
}
