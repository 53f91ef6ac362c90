//! Full board lifecycle tests
//!
//! Simulates a meeting follow-up: tasks arrive from two transcripts, get
//! worked through, and the board is checked at each step.

use predicates::prelude::*;
use tempfile::TempDir;

use super::{MEETING, taskscribe};

#[test]
fn test_full_board_lifecycle() {
    let home = TempDir::new().unwrap();

    let script = format!(
        "# first meeting\n\
         parse {MEETING}\n\
         toggle TSK-1\n\
         toggle TSK-2\n\
         delete TSK-4\n\
         \n\
         # follow-up meeting\n\
         parse Maya is responsible for the budget review by Monday.\n\
         toggle TSK-2\n\
         list completed\n\
         list active\n\
         quit\n\
         stats\n"
    );

    let assert = taskscribe(&home).arg("board").write_stdin(script).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    assert!(stdout.contains("Task completed: TSK-1"));
    assert!(stdout.contains("Task deleted: TSK-4"));
    assert!(stdout.contains("Task reopened: TSK-2"));
    // ids are never reused after a delete
    assert!(stdout.contains("Added to board: TSK-5"));
    assert!(stdout.contains("Completed Tasks (1)"));
    assert!(stdout.contains("Active Tasks (3)"));
    // nothing runs after quit
    assert!(!stdout.contains("Total Tasks:"));
}

#[test]
fn test_board_parse_without_tasks() {
    let home = TempDir::new().unwrap();

    taskscribe(&home)
        .arg("board")
        .write_stdin("parse Thanks everyone, see you next week.\nlist\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks found."))
        .stdout(predicate::str::contains("No tasks on the board."));
}

#[test]
fn test_help_lists_commands() {
    let home = TempDir::new().unwrap();

    taskscribe(&home)
        .arg("board")
        .write_stdin("help\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("toggle <id>"))
        .stdout(predicate::str::contains("list [active|completed|all]"));
}
