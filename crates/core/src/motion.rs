//! Motion-state table: which directional intents are currently latched.
//!
//! The table is enum-indexed so every state always has exactly one entry.
//! Mutation is crate-private; only command execution changes it.

use crate::types::MotionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionEntry {
    pub active: bool,
    pub caption: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotionStateTable {
    entries: [MotionEntry; MotionState::COUNT],
}

impl Default for MotionStateTable {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionStateTable {
    /// Fresh table: only `NotMoving` is active.
    pub fn new() -> Self {
        let entries = MotionState::ALL.map(|state| MotionEntry {
            active: state == MotionState::NotMoving,
            caption: state.caption(),
        });
        Self { entries }
    }

    pub fn entry(&self, state: MotionState) -> MotionEntry {
        self.entries[state.index()]
    }

    pub fn is_active(&self, state: MotionState) -> bool {
        self.entries[state.index()].active
    }

    /// Active entries in table order.
    pub fn active(&self) -> impl Iterator<Item = (MotionState, MotionEntry)> + '_ {
        MotionState::ALL
            .into_iter()
            .map(|state| (state, self.entry(state)))
            .filter(|(_, entry)| entry.active)
    }

    pub fn any_directional(&self) -> bool {
        MotionState::ALL
            .iter()
            .any(|state| state.is_directional() && self.is_active(*state))
    }

    /// Latch `state`, unlatching its opposing state.
    pub(crate) fn activate(&mut self, state: MotionState) {
        if let Some(opposing) = state.opposing() {
            self.entries[opposing.index()].active = false;
        }
        self.entries[state.index()].active = true;
        self.sync_idle();
    }

    pub(crate) fn deactivate(&mut self, state: MotionState) {
        self.entries[state.index()].active = false;
        self.sync_idle();
    }

    fn sync_idle(&mut self) {
        let idle = !self.any_directional();
        self.entries[MotionState::NotMoving.index()].active = idle;
    }
}
