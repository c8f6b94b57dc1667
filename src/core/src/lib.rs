pub mod club;
pub mod league;
pub mod shared;
pub mod utils;

// Re-export club items
pub use club::{
    // Player exports
    AvailabilityFilter, MEDICAL_NOTE_OK, Player, PlayerFieldPositionGroup, Roster, UNDER_35_AGE,
    // Team / tactics exports
    BENCH_SLOTS, FieldLocation, FormationKind, FormationSlot, FormationTemplate, SlotId, Team,
    is_bench_slot,
    // Lineup exports
    CaptainRole, CountScope, LineupState, MAX_UNDER_35_IN_SQUAD, MAX_UNDER_35_ON_FIELD,
};

// Re-export league items
pub use league::{Fixture, FixtureResult, LeagueTable, LeagueTableRow, recent_form};

pub use shared::FullName;
