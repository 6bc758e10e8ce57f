//! Snapshot-based undo history and unsaved-change detection.
//!
//! Every committed mutation pushes an immutable snapshot of the full
//! editing state (scene, background, scale). `undo` pops back one
//! committed state; `rollback` restores the last committed state
//! without touching the stack, discarding in-progress drawing only.
//!
//! A content hash of the current snapshot is compared against the hash
//! recorded at the last successful save to answer "has this plan
//! changed since it was saved". Selection and derived back-references
//! are excluded from serialization, so selecting elements never marks
//! the plan dirty.

use plankit_core::constants::MAX_HISTORY_DEPTH;
use serde::Serialize;
use std::collections::hash_map::DefaultHasher;
use std::hash::Hasher;

use crate::model::{Background, Scene};
use crate::scale::Scale;

/// An immutable snapshot of the editing state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub scene: Scene,
    pub background: Background,
    pub scale: Scale,
}

impl Snapshot {
    /// Content fingerprint of this snapshot.
    pub fn hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        match serde_json::to_vec(self) {
            Ok(bytes) => hasher.write(&bytes),
            // Serialization of plain data cannot fail in practice; fall
            // back to a constant so the dirty flag errs on "changed".
            Err(_) => hasher.write_u8(0),
        }
        hasher.finish()
    }
}

/// Committed-state stack with a bounded depth.
#[derive(Debug, Clone)]
pub struct History {
    stack: Vec<Snapshot>,
    saved_hash: Option<u64>,
}

impl History {
    /// Starts history at the loaded (or empty) state.
    pub fn new(initial: Snapshot) -> Self {
        Self {
            stack: vec![initial],
            saved_hash: None,
        }
    }

    /// The last committed state.
    pub fn current(&self) -> &Snapshot {
        // The stack is never empty: construction seeds it and undo
        // refuses to pop the final entry.
        &self.stack[self.stack.len() - 1]
    }

    /// Number of committed snapshots, the initial state included.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn can_undo(&self) -> bool {
        self.stack.len() > 1
    }

    /// Pushes a committed state. A snapshot identical to the current
    /// one is dropped (a gesture that moved nothing is not an undo
    /// step). Oldest entries fall off beyond the depth cap.
    pub fn commit(&mut self, snapshot: Snapshot) {
        if snapshot.hash() == self.current().hash() {
            return;
        }
        self.stack.push(snapshot);
        if self.stack.len() > MAX_HISTORY_DEPTH {
            self.stack.remove(0);
        }
    }

    /// Pops to the prior committed state and returns it.
    pub fn undo(&mut self) -> Option<Snapshot> {
        if self.stack.len() <= 1 {
            return None;
        }
        self.stack.pop();
        Some(self.current().clone())
    }

    /// The last committed state, for discarding uncommitted edits.
    pub fn rollback(&self) -> Snapshot {
        self.current().clone()
    }

    /// Records the fingerprint of the state a successful save persisted.
    pub fn mark_saved(&mut self, hash: u64) {
        self.saved_hash = Some(hash);
    }

    pub fn saved_hash(&self) -> Option<u64> {
        self.saved_hash
    }

    /// True when `snapshot` differs from the last saved state. A plan
    /// that was never saved counts as changed.
    pub fn is_dirty(&self, snapshot: &Snapshot) -> bool {
        match self.saved_hash {
            Some(saved) => snapshot.hash() != saved,
            None => true,
        }
    }
}
