use crate::club::player::PlayerFieldPositionGroup;
use serde::Serialize;

/// Slots are identified by the short labels printed on the tactical board
/// ("POR", "DC1", ...). Bench slots use "P1".."P7".
pub type SlotId = &'static str;

/// Where a slot is drawn on the pitch, in percent of the board size.
/// Rendering data only; assignment logic never looks at it.
#[derive(Copy, Debug, Eq, PartialEq, Clone, Serialize)]
pub struct FieldLocation {
    pub left: u8,
    pub top: u8,
}

#[derive(Copy, Debug, Eq, PartialEq, Clone, Serialize)]
pub struct FormationSlot {
    pub id: SlotId,
    pub group: PlayerFieldPositionGroup,
    pub location: FieldLocation,
}

const fn slot(id: SlotId, group: PlayerFieldPositionGroup, left: u8, top: u8) -> FormationSlot {
    FormationSlot {
        id,
        group,
        location: FieldLocation { left, top },
    }
}

/// A tactical shape: the ordered field slots a lineup is built over.
#[derive(Copy, Debug, Eq, PartialEq, Clone, Serialize)]
pub struct FormationTemplate {
    pub name: &'static str,
    pub slots: &'static [FormationSlot],
}

impl FormationTemplate {
    pub fn goalkeeper_slot(&self) -> Option<&FormationSlot> {
        self.slots.iter().find(|slot| slot.group.is_goalkeeper())
    }

    pub fn contains(&self, slot_id: SlotId) -> bool {
        self.slots.iter().any(|slot| slot.id == slot_id)
    }
}

/// The bench is constant across formations: seven role-less slots.
pub const BENCH_SLOTS: [SlotId; 7] = ["P1", "P2", "P3", "P4", "P5", "P6", "P7"];

pub fn is_bench_slot(slot_id: SlotId) -> bool {
    BENCH_SLOTS.contains(&slot_id)
}

#[derive(Copy, Debug, Eq, PartialEq, PartialOrd, Clone, Hash)]
pub enum FormationKind {
    F442,
    F433,
    F352,
    F4231,
}

impl FormationKind {
    pub fn all() -> Vec<FormationKind> {
        vec![
            FormationKind::F442,
            FormationKind::F433,
            FormationKind::F352,
            FormationKind::F4231,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FormationKind::F442 => "4-4-2",
            FormationKind::F433 => "4-3-3",
            FormationKind::F352 => "3-5-2",
            FormationKind::F4231 => "4-2-3-1",
        }
    }

    pub fn template(&self) -> FormationTemplate {
        let slots = match self {
            FormationKind::F442 => FORMATION_442,
            FormationKind::F433 => FORMATION_433,
            FormationKind::F352 => FORMATION_352,
            FormationKind::F4231 => FORMATION_4231,
        };

        FormationTemplate {
            name: self.display_name(),
            slots,
        }
    }
}

use crate::club::player::PlayerFieldPositionGroup::{Defender, Forward, Goalkeeper, Midfielder};

pub const FORMATION_442: &[FormationSlot] = &[
    slot("POR", Goalkeeper, 50, 88),
    slot("TS", Defender, 15, 70),
    slot("DC1", Defender, 38, 70),
    slot("DC2", Defender, 62, 70),
    slot("TD", Defender, 85, 70),
    slot("ES", Midfielder, 15, 45),
    slot("CC1", Midfielder, 38, 45),
    slot("CC2", Midfielder, 62, 45),
    slot("ED", Midfielder, 85, 45),
    slot("ATT1", Forward, 35, 15),
    slot("ATT2", Forward, 65, 15),
];

pub const FORMATION_433: &[FormationSlot] = &[
    slot("POR", Goalkeeper, 50, 88),
    slot("TS", Defender, 15, 70),
    slot("DC1", Defender, 38, 70),
    slot("DC2", Defender, 62, 70),
    slot("TD", Defender, 85, 70),
    slot("CC", Midfielder, 50, 50),
    slot("MZ1", Midfielder, 30, 40),
    slot("MZ2", Midfielder, 70, 40),
    slot("AS", Forward, 20, 20),
    slot("ATT", Forward, 50, 15),
    slot("AD", Forward, 80, 20),
];

pub const FORMATION_352: &[FormationSlot] = &[
    slot("POR", Goalkeeper, 50, 88),
    slot("DC1", Defender, 30, 75),
    slot("DC2", Defender, 50, 75),
    slot("DC3", Defender, 70, 75),
    slot("MED", Midfielder, 50, 55),
    slot("ES", Midfielder, 15, 45),
    slot("CC1", Midfielder, 35, 45),
    slot("CC2", Midfielder, 65, 45),
    slot("ED", Midfielder, 85, 45),
    slot("ATT1", Forward, 40, 15),
    slot("ATT2", Forward, 60, 15),
];

pub const FORMATION_4231: &[FormationSlot] = &[
    slot("POR", Goalkeeper, 50, 90),
    slot("TS", Defender, 15, 75),
    slot("DC1", Defender, 38, 75),
    slot("DC2", Defender, 62, 75),
    slot("TD", Defender, 85, 75),
    slot("MED1", Midfielder, 35, 55),
    slot("MED2", Midfielder, 65, 55),
    slot("TRQ1", Midfielder, 20, 35),
    slot("TRQ2", Midfielder, 50, 35),
    slot("TRQ3", Midfielder, 80, 35),
    slot("ATT", Forward, 50, 15),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_formation_fields_eleven() {
        for kind in FormationKind::all() {
            assert_eq!(kind.template().slots.len(), 11, "{}", kind.display_name());
        }
    }

    #[test]
    fn test_every_formation_has_one_goalkeeper() {
        for kind in FormationKind::all() {
            let template = kind.template();

            let keepers = template
                .slots
                .iter()
                .filter(|slot| slot.group.is_goalkeeper())
                .count();

            assert_eq!(keepers, 1, "{}", kind.display_name());
            assert_eq!(template.goalkeeper_slot().unwrap().id, "POR");
        }
    }

    #[test]
    fn test_slot_ids_unique_and_disjoint_from_bench() {
        for kind in FormationKind::all() {
            let template = kind.template();

            for (index, slot) in template.slots.iter().enumerate() {
                assert!(
                    !template.slots[index + 1..].iter().any(|s| s.id == slot.id),
                    "duplicate slot {} in {}",
                    slot.id,
                    template.name
                );
                assert!(!is_bench_slot(slot.id));
            }
        }
    }
}
