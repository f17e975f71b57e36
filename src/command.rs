use serde::{Deserialize, Serialize};

use crate::element::Drawable;

/// The drawing's history: every committed drawable in insertion order, plus
/// the stack of undone drawables that can still be redone.
///
/// The two sequences are disjoint; a drawable lives in exactly one of them
/// or in neither (after a clear).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandLog {
    committed: Vec<Drawable>,
    redoable: Vec<Drawable>,
}

impl CommandLog {
    /// Creates a new empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a drawable to the committed sequence.
    ///
    /// Committing invalidates everything that was undone: branching history
    /// is not supported, so the redo stack is emptied.
    pub fn commit(&mut self, drawable: Drawable) {
        self.committed.push(drawable);
        self.redoable.clear();
    }

    /// Undo the most recent committed drawable.
    ///
    /// Returns false (and changes nothing) when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(drawable) => {
                self.redoable.push(drawable);
                true
            }
            None => false,
        }
    }

    /// Redo the most recently undone drawable.
    ///
    /// Returns false (and changes nothing) when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.redoable.pop() {
            Some(drawable) => {
                self.committed.push(drawable);
                true
            }
            None => false,
        }
    }

    /// Wipe the committed sequence.
    ///
    /// Clearing is not undoable: the wiped drawables are gone rather than
    /// moved to the redo stack. Drawables that were already on the redo
    /// stack stay there and can still be redone afterwards.
    pub fn clear(&mut self) {
        self.committed.clear();
    }

    /// Returns true if there are drawables that can be undone.
    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    /// Returns true if there are drawables that can be redone.
    pub fn can_redo(&self) -> bool {
        !self.redoable.is_empty()
    }

    /// The committed drawables, oldest first — the replay order.
    pub fn committed(&self) -> &[Drawable] {
        &self.committed
    }

    /// The undone drawables, oldest undo last.
    pub fn redoable(&self) -> &[Drawable] {
        &self.redoable
    }

    /// Mutable access to the newest committed drawable.
    ///
    /// An actively drawn stroke or sticker lives in the log from the moment
    /// of pointer-down; this is how the input controller keeps extending it.
    pub fn last_mut(&mut self) -> Option<&mut Drawable> {
        self.committed.last_mut()
    }
}
