use egui::pos2;
use sticker_sketchpad::{CommandLog, Drawable, Sticker, Stroke};

fn stroke_at(x: f32, y: f32) -> Drawable {
    Drawable::Stroke(Stroke::new(pos2(x, y), 1.0))
}

#[test]
fn undo_then_redo_restores_the_log() {
    let mut log = CommandLog::new();
    log.commit(stroke_at(1.0, 1.0));
    log.commit(stroke_at(2.0, 2.0));
    let before = log.clone();

    assert!(log.undo());
    assert_ne!(log, before);
    assert!(log.redo());
    assert_eq!(log, before);
}

#[test]
fn undo_moves_the_newest_drawable() {
    let mut log = CommandLog::new();
    log.commit(stroke_at(1.0, 1.0));
    log.commit(Drawable::Sticker(Sticker::new(pos2(5.0, 5.0), '👍')));

    assert!(log.undo());
    assert_eq!(log.committed().len(), 1);
    assert_eq!(log.redoable().len(), 1);
    // The stroke stayed committed; the sticker went to the redo stack.
    assert!(matches!(log.committed()[0], Drawable::Stroke(_)));
    assert!(matches!(log.redoable()[0], Drawable::Sticker(_)));
}

#[test]
fn undo_on_empty_log_is_a_noop() {
    let mut log = CommandLog::new();
    assert!(!log.undo());
    assert!(log.committed().is_empty());
    assert!(log.redoable().is_empty());
}

#[test]
fn redo_with_nothing_undone_is_a_noop() {
    let mut log = CommandLog::new();
    log.commit(stroke_at(1.0, 1.0));
    assert!(!log.redo());
    assert_eq!(log.committed().len(), 1);
}

#[test]
fn commit_discards_the_redo_stack() {
    let mut log = CommandLog::new();
    log.commit(stroke_at(1.0, 1.0));
    log.commit(stroke_at(2.0, 2.0));
    assert!(log.undo());
    assert!(log.can_redo());

    log.commit(stroke_at(3.0, 3.0));
    assert!(!log.can_redo());
    assert_eq!(log.committed().len(), 2);
}

#[test]
fn three_commits_two_undos_one_commit() {
    let mut log = CommandLog::new();
    log.commit(stroke_at(1.0, 1.0));
    log.commit(stroke_at(2.0, 2.0));
    log.commit(stroke_at(3.0, 3.0));
    assert!(log.undo());
    assert!(log.undo());
    log.commit(stroke_at(4.0, 4.0));

    assert_eq!(log.committed().len(), 2);
    assert_eq!(log.committed()[0], stroke_at(1.0, 1.0));
    assert_eq!(log.committed()[1], stroke_at(4.0, 4.0));
    // Redo was invalidated by the new commit.
    assert!(!log.redo());
    assert_eq!(log.committed().len(), 2);
}

#[test]
fn clear_is_not_undoable() {
    let mut log = CommandLog::new();
    log.commit(stroke_at(1.0, 1.0));
    log.commit(stroke_at(2.0, 2.0));

    log.clear();
    assert!(log.committed().is_empty());
    // Nothing went to the redo stack; the drawing is simply gone.
    assert!(!log.undo());
    assert!(!log.redo());
    assert!(log.committed().is_empty());
}

#[test]
fn clear_leaves_earlier_undos_redoable() {
    let mut log = CommandLog::new();
    log.commit(stroke_at(1.0, 1.0));
    log.commit(stroke_at(2.0, 2.0));
    assert!(log.undo());

    log.clear();
    assert!(log.committed().is_empty());
    // The drawable undone before the clear survives on the redo stack.
    assert!(log.redo());
    assert_eq!(log.committed().len(), 1);
    assert_eq!(log.committed()[0], stroke_at(2.0, 2.0));
}
