use twodo_core::{AppConfig, CommandError, InputRecall, LogicError};
use twodo_domain::*;

type TaskState = Vec<(String, Option<String>, bool, Vec<String>)>;

fn logic() -> Logic {
    Logic::new(&AppConfig::default())
}

fn state(logic: &Logic) -> TaskState {
    logic
        .model()
        .tasks()
        .iter()
        .map(|t| {
            (
                t.name.clone(),
                t.description.clone(),
                t.completed,
                t.tags.iter().cloned().collect(),
            )
        })
        .collect()
}

fn depths(logic: &Logic) -> (usize, usize) {
    (
        logic.undo_history().undo_depth(),
        logic.undo_history().redo_depth(),
    )
}

#[test]
fn test_undo_all_then_redo_all_restores_state() {
    let mut logic = logic();
    let inputs = [
        "add n/Alpha",
        "add n/Beta t/work",
        "edit 2 d/notes t/work t/home",
        "mark 1",
        "delete 1",
        "add n/Gamma e/2026-10-30",
        "clear",
    ];
    let mut states = vec![state(&logic)];
    for input in inputs {
        logic.execute(input).unwrap();
        states.push(state(&logic));
    }
    assert_eq!(depths(&logic), (inputs.len(), 0));

    // Each undo walks back exactly one step
    for expected in states.iter().rev().skip(1) {
        logic.execute("undo").unwrap();
        assert_eq!(&state(&logic), expected);
    }
    assert_eq!(depths(&logic), (0, inputs.len()));

    for expected in states.iter().skip(1) {
        logic.execute("redo").unwrap();
        assert_eq!(&state(&logic), expected);
    }
    assert_eq!(depths(&logic), (inputs.len(), 0));
}

#[test]
fn test_undo_redo_scenario_two_commands() {
    let mut logic = logic();

    logic.execute("add n/A").unwrap();
    assert_eq!(depths(&logic), (1, 0));

    logic.execute("add n/B").unwrap();
    assert_eq!(depths(&logic), (2, 0));

    let undone = logic.execute("undo").unwrap();
    assert_eq!(undone.feedback(), "Undo successful: Undid add: B");
    assert_eq!(depths(&logic), (1, 1));
    assert_eq!(state(&logic).len(), 1);

    let redone = logic.execute("redo").unwrap();
    assert_eq!(redone.feedback(), "Redo successful: New task added: B");
    assert_eq!(depths(&logic), (2, 0));
    assert_eq!(state(&logic).len(), 2);
}

#[test]
fn test_new_command_after_undo_clears_redo() {
    let mut logic = logic();
    logic.execute("add n/A").unwrap();
    logic.execute("undo").unwrap();
    assert_eq!(depths(&logic), (0, 1));

    logic.execute("add n/B").unwrap();
    assert_eq!(depths(&logic), (1, 0));
    assert_eq!(
        logic.execute("redo").unwrap_err(),
        LogicError::Command(CommandError::NothingToRedo)
    );
}

#[test]
fn test_read_only_command_after_undo_keeps_redo() {
    let mut logic = logic();
    logic.execute("add n/A").unwrap();
    logic.execute("undo").unwrap();

    logic.execute("list all").unwrap();
    logic.execute("history").unwrap();
    assert_eq!(depths(&logic), (0, 1));
    assert!(logic.execute("redo").is_ok());
}

#[test]
fn test_empty_stacks() {
    let mut logic = logic();
    assert_eq!(
        logic.execute("undo").unwrap_err(),
        LogicError::Command(CommandError::NothingToUndo)
    );
    assert_eq!(
        logic.execute("redo").unwrap_err(),
        LogicError::Command(CommandError::NothingToRedo)
    );
    assert_eq!(logic.command_history().get_history(), vec!["undo", "redo"]);
}

#[test]
fn test_failed_input_leaves_undo_stacks_alone() {
    let mut logic = logic();
    logic.execute("add n/A").unwrap();
    logic.execute("add n/B").unwrap();
    logic.execute("undo").unwrap();
    let before = depths(&logic);

    for input in ["delete 9", "bogus", "add n/A", "edit 1", "mark 5"] {
        assert!(logic.execute(input).is_err(), "{input} should fail");
        assert_eq!(depths(&logic), before);
    }
    assert_eq!(logic.command_history().len(), 8);

    // The branch is still intact
    logic.execute("redo").unwrap();
    assert_eq!(state(&logic).len(), 2);
}

#[test]
fn test_every_input_is_recorded_once() {
    let mut logic = logic();
    let inputs = ["add n/A", "nope", "delete 4", "undo", "undo", "list"];
    for (n, input) in inputs.iter().enumerate() {
        let _ = logic.execute(input);
        assert_eq!(logic.command_history().len(), n + 1);
    }
    assert_eq!(logic.command_history().get_history(), inputs);
}

#[test]
fn test_history_command_lists_newest_first() {
    let mut logic = logic();
    logic.execute("add n/A").unwrap();
    logic.execute("oops").unwrap_err();

    let result = logic.execute("history").unwrap();
    match result.payload() {
        Some(Payload::History(entries)) => assert_eq!(entries, &["oops", "add n/A"]),
        other => panic!("unexpected payload: {other:?}"),
    }
}

#[test]
fn test_recall_over_executed_input() {
    let mut logic = logic();
    logic.execute("add n/Buy milk").unwrap();
    logic.execute("list").unwrap();

    let mut recall = InputRecall::new(logic.command_history().get_history());
    assert_eq!(recall.index(), 2);
    assert_eq!(recall.previous(), Some("list"));
    assert_eq!(recall.index(), 1);
    assert_eq!(recall.previous(), Some("add n/Buy milk"));
    assert_eq!(recall.index(), 0);
    assert_eq!(recall.previous(), None);
    assert_eq!(recall.index(), 0);
}

#[test]
fn test_categories_follow_undo_and_redo() {
    let mut logic = logic();
    logic.execute("add n/Report t/work").unwrap();
    logic.execute("add n/Slides t/work t/urgent").unwrap();

    let categories = logic.categories().unwrap();
    assert_eq!(categories.task_count("work"), 2);
    assert_eq!(categories.task_count("urgent"), 1);

    logic.execute("undo").unwrap();
    let categories = logic.categories().unwrap();
    assert_eq!(categories.task_count("work"), 1);
    assert_eq!(categories.task_count("urgent"), 0);

    logic.execute("redo").unwrap();
    assert_eq!(logic.categories().unwrap().task_count("urgent"), 1);

    let result = logic.execute("category").unwrap();
    assert_eq!(result.feedback(), "Categories:\nurgent (1)\nwork (2)");
}

#[test]
fn test_undo_after_view_change_targets_same_task() {
    let mut logic = logic();
    logic.execute("add n/Apple").unwrap();
    logic.execute("add n/Banana").unwrap();
    logic.execute("delete 1").unwrap();
    logic.execute("find banana").unwrap();

    logic.execute("undo").unwrap();
    let names: Vec<_> = state(&logic).into_iter().map(|(name, ..)| name).collect();
    assert_eq!(names, vec!["Apple", "Banana"]);
}

#[test]
fn test_exit_requests_shutdown() {
    let mut logic = logic();
    let result = logic.execute("exit").unwrap();
    assert!(result.is_exit());
    assert_eq!(depths(&logic), (0, 0));
}
