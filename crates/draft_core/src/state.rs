use std::collections::HashSet;

use shared::domain::{Creature, CreatureId, GameMode, PlayerSlot};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    slots: Vec<Creature>,
}

impl Roster {
    pub const CAPACITY: usize = 6;

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() >= Self::CAPACITY
    }

    pub fn creatures(&self) -> &[Creature] {
        &self.slots
    }

    pub(crate) fn append(&mut self, creature: Creature) -> bool {
        if self.is_full() {
            return false;
        }
        self.slots.push(creature);
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftPhase {
    AwaitingMode,
    InProgress,
    Complete,
}

/// The whole observable draft session. Reset and mode selection replace the
/// value wholesale, so the rosters and the drawn-id set can never reset
/// partially.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftState {
    pub mode: Option<GameMode>,
    pub roster_a: Roster,
    pub roster_b: Roster,
    pub active_player: PlayerSlot,
    pub last_drawn: Option<Creature>,
    /// True from the moment a draw passes its preconditions until it
    /// resolves; a second draw is skipped while set.
    pub is_loading: bool,
    pub error_message: Option<String>,
    /// Ids accepted in no-duplicate mode this session. Entries never leave
    /// the set until reset.
    pub drawn_ids: HashSet<CreatureId>,
}

impl DraftState {
    pub fn new() -> Self {
        Self {
            mode: None,
            roster_a: Roster::default(),
            roster_b: Roster::default(),
            active_player: PlayerSlot::A,
            last_drawn: None,
            is_loading: false,
            error_message: None,
            drawn_ids: HashSet::new(),
        }
    }

    pub fn with_mode(mode: GameMode) -> Self {
        Self {
            mode: Some(mode),
            ..Self::new()
        }
    }

    pub fn roster(&self, player: PlayerSlot) -> &Roster {
        match player {
            PlayerSlot::A => &self.roster_a,
            PlayerSlot::B => &self.roster_b,
        }
    }

    pub(crate) fn roster_mut(&mut self, player: PlayerSlot) -> &mut Roster {
        match player {
            PlayerSlot::A => &mut self.roster_a,
            PlayerSlot::B => &mut self.roster_b,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.roster_a.is_full() && self.roster_b.is_full()
    }

    pub fn phase(&self) -> DraftPhase {
        if self.mode.is_none() {
            DraftPhase::AwaitingMode
        } else if self.is_complete() {
            DraftPhase::Complete
        } else {
            DraftPhase::InProgress
        }
    }
}

impl Default for DraftState {
    fn default() -> Self {
        Self::new()
    }
}
