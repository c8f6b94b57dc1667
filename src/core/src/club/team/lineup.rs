use crate::club::player::Player;
use crate::club::team::tactics::{BENCH_SLOTS, FormationTemplate, SlotId};
use chrono::NaiveDate;
use log::debug;
use std::collections::HashMap;

/// League cap on under-35 players fielded at once (goalkeeper excluded).
pub const MAX_UNDER_35_ON_FIELD: usize = 2;

/// League cap on under-35 players in the whole match squad, bench included
/// (goalkeeper excluded).
pub const MAX_UNDER_35_IN_SQUAD: usize = 4;

#[derive(Copy, Debug, Eq, PartialEq, Clone)]
pub enum CaptainRole {
    Captain,
    ViceCaptain,
}

#[derive(Copy, Debug, Eq, PartialEq, Clone)]
pub enum CountScope {
    /// Formation slots only.
    Field,
    /// Formation slots plus the bench.
    Total,
}

/// The team sheet being composed: a mapping from slot to player, the current
/// formation, and the captain designations.
///
/// Invariants held after every operation:
/// - a player occupies at most one slot across field and bench;
/// - captain and vice-captain, when set, reference a placed player.
///
/// Slot ids are expected to belong to the current formation or the bench;
/// passing a foreign id is a caller error and is not guarded against.
#[derive(Debug, Clone)]
pub struct LineupState {
    formation: FormationTemplate,
    assignments: HashMap<SlotId, Player>,
    captain_id: Option<u32>,
    vice_captain_id: Option<u32>,
}

impl LineupState {
    pub fn new(formation: FormationTemplate) -> Self {
        LineupState {
            formation,
            assignments: HashMap::new(),
            captain_id: None,
            vice_captain_id: None,
        }
    }

    pub fn formation(&self) -> &FormationTemplate {
        &self.formation
    }

    pub fn captain_id(&self) -> Option<u32> {
        self.captain_id
    }

    pub fn vice_captain_id(&self) -> Option<u32> {
        self.vice_captain_id
    }

    pub fn player_in(&self, slot_id: SlotId) -> Option<&Player> {
        self.assignments.get(slot_id)
    }

    pub fn placed_count(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_player_placed(&self, player_id: u32) -> bool {
        self.assignments.values().any(|player| player.id == player_id)
    }

    /// Places `player` into `slot_id`. If the player already occupies another
    /// slot this is a move: the previous slot is vacated. A previous occupant
    /// of `slot_id` is displaced out of the lineup entirely.
    pub fn assign(&mut self, slot_id: SlotId, player: Player) {
        let player_id = player.id;

        self.assignments.retain(|_, occupant| occupant.id != player_id);

        if let Some(displaced) = self.assignments.insert(slot_id, player) {
            self.clear_designations(displaced.id);
        }
    }

    /// Exchanges the occupants of two slots. With a single occupied slot this
    /// degrades to a move; with both empty it is a no-op.
    pub fn swap(&mut self, slot_a: SlotId, slot_b: SlotId) {
        let occupant_a = self.assignments.remove(slot_a);
        let occupant_b = self.assignments.remove(slot_b);

        if let Some(player) = occupant_a {
            self.assignments.insert(slot_b, player);
        }

        if let Some(player) = occupant_b {
            self.assignments.insert(slot_a, player);
        }
    }

    /// Vacates the slot, clearing any captain designation the removed player held.
    pub fn remove(&mut self, slot_id: SlotId) {
        if let Some(player) = self.assignments.remove(slot_id) {
            self.clear_designations(player.id);
        }
    }

    /// Empties the whole lineup, designations included.
    pub fn clear(&mut self) {
        self.assignments.clear();
        self.captain_id = None;
        self.vice_captain_id = None;
    }

    /// Sets or clears a captain designation. A player cannot hold both
    /// designations at once; `None` clears whichever one the player holds.
    /// Designating a player who is not placed anywhere is ignored.
    pub fn set_role(&mut self, role: Option<CaptainRole>, player_id: u32) {
        match role {
            Some(CaptainRole::Captain) => {
                if !self.is_player_placed(player_id) {
                    return;
                }

                if self.vice_captain_id == Some(player_id) {
                    self.vice_captain_id = None;
                }

                self.captain_id = Some(player_id);
            }
            Some(CaptainRole::ViceCaptain) => {
                if !self.is_player_placed(player_id) {
                    return;
                }

                if self.captain_id == Some(player_id) {
                    self.captain_id = None;
                }

                self.vice_captain_id = Some(player_id);
            }
            None => self.clear_designations(player_id),
        }
    }

    /// Switches to `formation`, remapping current field occupants by position:
    /// the goalkeeper keeps a goalkeeper slot when the new shape has one, the
    /// remaining occupants fill the new outfield slots in order, and occupants
    /// with no slot left are dropped. Bench occupants are untouched.
    pub fn change_formation(&mut self, formation: FormationTemplate) {
        let mut field_occupants = Vec::with_capacity(self.formation.slots.len());

        for slot in self.formation.slots {
            if let Some(player) = self.assignments.remove(slot.id) {
                field_occupants.push((slot.group, player));
            }
        }

        // Keep the goalkeeper on role tag, not on slot order
        if let Some(index) = field_occupants
            .iter()
            .position(|(group, _)| group.is_goalkeeper())
        {
            let (_, keeper) = field_occupants.remove(index);

            match formation.goalkeeper_slot() {
                Some(slot) => {
                    self.assignments.insert(slot.id, keeper);
                }
                None => {
                    debug!("lineup: no goalkeeper slot in {}, dropping {}", formation.name, keeper.full_name);
                    self.clear_designations(keeper.id);
                }
            }
        }

        let mut remaining = field_occupants.into_iter().map(|(_, player)| player);

        for slot in formation
            .slots
            .iter()
            .filter(|slot| !slot.group.is_goalkeeper())
        {
            match remaining.next() {
                Some(player) => {
                    self.assignments.insert(slot.id, player);
                }
                None => break,
            }
        }

        for dropped in remaining {
            debug!("lineup: {} has no slot in {}, dropped", dropped.full_name, formation.name);
            self.clear_designations(dropped.id);
        }

        self.formation = formation;
    }

    /// Under-35 occupants in the given scope, used for the eligibility
    /// warnings. The goalkeeper exclusion is configurable because the on-field
    /// and whole-squad league rules differ on it.
    pub fn count_under_35(
        &self,
        scope: CountScope,
        exclude_goalkeeper: bool,
        on: NaiveDate,
    ) -> usize {
        let mut count = 0;

        for slot in self.formation.slots {
            if exclude_goalkeeper && slot.group.is_goalkeeper() {
                continue;
            }

            if self.player_in(slot.id).is_some_and(|p| p.is_under_35(on)) {
                count += 1;
            }
        }

        if scope == CountScope::Total {
            for slot_id in BENCH_SLOTS {
                if self.player_in(slot_id).is_some_and(|p| p.is_under_35(on)) {
                    count += 1;
                }
            }
        }

        count
    }

    pub fn exceeds_under_35_limit(&self, scope: CountScope, on: NaiveDate) -> bool {
        let limit = match scope {
            CountScope::Field => MAX_UNDER_35_ON_FIELD,
            CountScope::Total => MAX_UNDER_35_IN_SQUAD,
        };

        self.count_under_35(scope, true, on) > limit
    }

    fn clear_designations(&mut self, player_id: u32) {
        if self.captain_id == Some(player_id) {
            self.captain_id = None;
        }

        if self.vice_captain_id == Some(player_id) {
            self.vice_captain_id = None;
        }
    }
}
