//! Tests for the board session interpreter

use taskscribe::models::Priority;
use taskscribe::session::{ListFilter, Reply, Session, SessionCommand, SessionError};
use taskscribe::storage::{StoreError, TaskStore};

use crate::common::STANDUP_TRANSCRIPT;

fn run(session: &mut Session, line: &str) -> Reply {
    session
        .handle_line(line)
        .unwrap_or_else(|e| panic!("{line:?} failed: {e}"))
        .unwrap_or_else(|| panic!("{line:?} gave no reply"))
}

#[test]
fn test_load_transcript_fills_board() {
    let mut session = Session::new("TSK");
    let Reply::Parsed { outcome, added } = session.load_transcript(STANDUP_TRANSCRIPT) else {
        panic!("expected parsed reply");
    };
    assert_eq!(outcome.sentences, 7);
    assert_eq!(added.len(), 3);
    assert_eq!(session.store().stats().total, 3);
}

#[test]
fn test_parse_without_tasks_adds_nothing() {
    let mut session = Session::new("TSK");
    let Reply::Parsed { outcome, added } = run(&mut session, "parse The weather was nice today.")
    else {
        panic!("expected parsed reply");
    };
    assert_eq!(outcome.sentences, 1);
    assert!(added.is_empty());
    assert!(session.store().all().is_empty());
}

#[test]
fn test_toggle_reports_completed_then_reopened() {
    let mut session = Session::new("TSK");
    run(&mut session, "add Aman | write the brief | Friday | P2");

    let Reply::Changed { action, task } = run(&mut session, "toggle TSK-1") else {
        panic!("expected change");
    };
    assert_eq!(action, "completed");
    assert!(task.completed);
    assert_eq!(task.priority, Priority::P2);

    let Reply::Changed { action, .. } = run(&mut session, "done TSK-1") else {
        panic!("expected change");
    };
    assert_eq!(action, "reopened");
}

#[test]
fn test_list_filters() {
    let mut session = Session::new("TSK");
    session.load_transcript(STANDUP_TRANSCRIPT);
    run(&mut session, "toggle TSK-1");

    let ids = |reply: Reply| match reply {
        Reply::Listed { tasks, .. } => tasks.into_iter().map(|t| t.id).collect::<Vec<_>>(),
        other => panic!("expected listing, got {other:?}"),
    };

    assert_eq!(ids(run(&mut session, "list active")), vec!["TSK-2", "TSK-3"]);
    assert_eq!(ids(run(&mut session, "list completed")), vec!["TSK-1"]);
    assert_eq!(ids(run(&mut session, "list all")), vec!["TSK-1", "TSK-2", "TSK-3"]);
    assert_eq!(ids(run(&mut session, "list")), vec!["TSK-2", "TSK-3", "TSK-1"]);
}

#[test]
fn test_custom_prefix() {
    let mut session = Session::new("MTG");
    let Reply::Changed { task, .. } = run(&mut session, "add Aman | draft agenda | Monday") else {
        panic!("expected change");
    };
    assert_eq!(task.id, "MTG-1");
}

#[test]
fn test_errors_leave_board_unchanged() {
    let mut session = Session::new("TSK");
    session.load_transcript(STANDUP_TRANSCRIPT);

    assert_eq!(
        session.handle_line("delete TSK-99").unwrap_err(),
        SessionError::Store(StoreError::NotFound("TSK-99".to_string()))
    );
    assert!(matches!(session.handle_line("list sideways"), Err(SessionError::UnknownCommand(_))));
    assert!(matches!(session.handle_line("add | x | y"), Err(SessionError::MissingArgument("assignee"))));
    assert_eq!(session.store().stats().total, 3);
}

#[test]
fn test_command_parsing_is_case_insensitive() {
    assert_eq!("LIST Active".parse::<SessionCommand>().unwrap(), SessionCommand::List(ListFilter::Active));
    assert_eq!("Help".parse::<SessionCommand>().unwrap(), SessionCommand::Help);
    assert_eq!("quit".parse::<SessionCommand>().unwrap(), SessionCommand::Quit);
}
