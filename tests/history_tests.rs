use form_builder::history::timeline::History;

// =========================================================================
// Boundaries
// =========================================================================

#[test]
fn new_history_starts_at_the_initial_snapshot() {
    let history: History<Vec<u32>> = History::new(vec![]);

    assert_eq!(history.current(), &Vec::<u32>::new());
    assert_eq!(history.cursor(), 0);
    assert_eq!(history.len(), 1);
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn undo_at_oldest_is_a_noop() {
    let mut history = History::new(vec![1]);

    assert_eq!(history.undo(), &vec![1]);
    assert_eq!(history.cursor(), 0);
    assert_eq!(history.undo(), &vec![1]);
}

#[test]
fn redo_at_newest_is_a_noop() {
    let mut history = History::new(vec![1]);
    history.commit(vec![1, 2]);

    assert_eq!(history.redo(), &vec![1, 2]);
    assert_eq!(history.cursor(), 1);
}

// =========================================================================
// Commit / undo / redo walk
// =========================================================================

#[test]
fn undo_redo_walk_the_timeline() {
    let mut history = History::new(vec![]);
    history.commit(vec![1]);
    history.commit(vec![1, 2]);

    assert_eq!(history.current(), &vec![1, 2]);
    assert!(history.can_undo());

    assert_eq!(history.undo(), &vec![1]);
    assert_eq!(history.undo(), &Vec::<i32>::new());
    assert!(!history.can_undo());
    assert!(history.can_redo());

    assert_eq!(history.redo(), &vec![1]);
    assert_eq!(history.redo(), &vec![1, 2]);
    assert!(!history.can_redo());
}

#[test]
fn commit_advances_cursor_to_the_new_snapshot() {
    let mut history = History::new(0);
    history.commit(1);
    history.commit(2);

    assert_eq!(history.cursor(), 2);
    assert_eq!(history.len(), 3);
    assert_eq!(history.current(), &2);
}

// =========================================================================
// Branch pruning
// =========================================================================

#[test]
fn commit_after_undo_discards_the_redo_tail() {
    // add X, add Y, undo, add Z: Y's state is pruned for good
    let mut history = History::new(vec![]);
    history.commit(vec!["X"]);
    history.commit(vec!["X", "Y"]);

    history.undo();
    history.commit(vec!["X", "Z"]);

    // redo is a no-op even though redo was possible before the commit
    assert!(!history.can_redo());
    assert_eq!(history.redo(), &vec!["X", "Z"]);
    assert_eq!(history.current(), &vec!["X", "Z"]);

    // the pruned state is not reachable by undoing either
    assert_eq!(history.undo(), &vec!["X"]);
    assert_eq!(history.undo(), &Vec::<&str>::new());
    assert_eq!(history.len(), 3);
}

#[test]
fn pruning_from_the_oldest_state_keeps_only_the_new_branch() {
    let mut history = History::new(vec![0]);
    history.commit(vec![0, 1]);
    history.commit(vec![0, 1, 2]);

    history.undo();
    history.undo();
    assert_eq!(history.cursor(), 0);

    history.commit(vec![0, 9]);

    assert_eq!(history.len(), 2);
    assert_eq!(history.current(), &vec![0, 9]);
    assert!(!history.can_redo());
}
