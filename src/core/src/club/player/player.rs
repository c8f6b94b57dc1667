use crate::shared::FullName;
use crate::utils::DateUtils;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

/// Age threshold of the league's "under-35" eligibility rule: players younger
/// than this count against the roster caps (see `MAX_UNDER_35_ON_FIELD` and
/// `MAX_UNDER_35_IN_SQUAD`).
pub const UNDER_35_AGE: i32 = 35;

/// Sentinel medical note meaning the player is fully available.
pub const MEDICAL_NOTE_OK: &str = "OK";

#[derive(Copy, Debug, Eq, PartialEq, Clone, Hash, Serialize)]
pub enum PlayerFieldPositionGroup {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl PlayerFieldPositionGroup {
    /// Role code as stored by the roster sheet (Italian abbreviations).
    pub fn code(&self) -> &'static str {
        match self {
            PlayerFieldPositionGroup::Goalkeeper => "PT",
            PlayerFieldPositionGroup::Defender => "DIF",
            PlayerFieldPositionGroup::Midfielder => "CEN",
            PlayerFieldPositionGroup::Forward => "ATT",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "PT" => Some(PlayerFieldPositionGroup::Goalkeeper),
            "DIF" => Some(PlayerFieldPositionGroup::Defender),
            "CEN" => Some(PlayerFieldPositionGroup::Midfielder),
            "ATT" => Some(PlayerFieldPositionGroup::Forward),
            _ => None,
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, PlayerFieldPositionGroup::Goalkeeper)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub id: u32,
    pub full_name: FullName,
    pub birth_date: Option<NaiveDate>,
    pub position_group: PlayerFieldPositionGroup,
    pub squad_number: Option<u8>,
    pub avatar_url: Option<String>,
    pub captain: bool,
    pub vice_captain: bool,
    pub staff: bool,
    pub medical_note: Option<String>,
}

impl Player {
    pub fn age(&self, on: NaiveDate) -> Option<i32> {
        self.birth_date
            .map(|birth_date| DateUtils::age(birth_date, on))
    }

    /// A player with no recorded birth date does not count as under-35.
    pub fn is_under_35(&self, on: NaiveDate) -> bool {
        self.age(on).is_some_and(|age| age < UNDER_35_AGE)
    }

    /// Available unless a medical note other than the `"OK"` sentinel is set.
    pub fn is_available(&self) -> bool {
        matches!(self.medical_note.as_deref(), None | Some(MEDICAL_NOTE_OK))
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}, {}", self.full_name, self.position_group.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_born(year: i32) -> Player {
        Player {
            id: 1,
            full_name: FullName::new(String::from("Mario"), String::from("Rossi")),
            birth_date: NaiveDate::from_ymd_opt(year, 6, 1),
            position_group: PlayerFieldPositionGroup::Midfielder,
            squad_number: Some(8),
            avatar_url: None,
            captain: false,
            vice_captain: false,
            staff: false,
            medical_note: None,
        }
    }

    #[test]
    fn test_under_35_threshold() {
        let on = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();

        assert!(player_born(1995).is_under_35(on));
        assert!(!player_born(1985).is_under_35(on));
    }

    #[test]
    fn test_missing_birth_date_is_not_under_35() {
        let mut player = player_born(1995);
        player.birth_date = None;

        let on = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();

        assert_eq!(player.age(on), None);
        assert!(!player.is_under_35(on));
    }

    #[test]
    fn test_availability_sentinel() {
        let mut player = player_born(1990);
        assert!(player.is_available());

        player.medical_note = Some(String::from(MEDICAL_NOTE_OK));
        assert!(player.is_available());

        player.medical_note = Some(String::from("Stiramento, 3 settimane"));
        assert!(!player.is_available());
    }

    #[test]
    fn test_position_group_codes() {
        for group in [
            PlayerFieldPositionGroup::Goalkeeper,
            PlayerFieldPositionGroup::Defender,
            PlayerFieldPositionGroup::Midfielder,
            PlayerFieldPositionGroup::Forward,
        ] {
            assert_eq!(PlayerFieldPositionGroup::from_code(group.code()), Some(group));
        }

        assert_eq!(PlayerFieldPositionGroup::from_code("XYZ"), None);
    }
}
