use chrono::NaiveDateTime;
use serde::Serialize;

/// A league fixture as recorded on the club calendar. Teams are referenced by
/// id; a missing id means the record is incomplete and the fixture cannot be
/// counted. Goals are meaningful only when `played` is set.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Fixture {
    pub home_id: Option<u32>,
    pub away_id: Option<u32>,
    pub home_goals: Option<u8>,
    pub away_goals: Option<u8>,
    pub played: bool,
    pub date: NaiveDateTime,
}

#[derive(Copy, Debug, Eq, PartialEq, Clone, Serialize)]
pub enum FixtureResult {
    Win,
    Draw,
    Loss,
}

impl Fixture {
    pub fn involves(&self, team_id: u32) -> bool {
        self.home_id == Some(team_id) || self.away_id == Some(team_id)
    }

    /// Outcome from `team_id`'s perspective; `None` when the fixture is
    /// unplayed or does not involve the team. Missing goals count as zero.
    pub fn result_for(&self, team_id: u32) -> Option<FixtureResult> {
        if !self.played || !self.involves(team_id) {
            return None;
        }

        let home_goals = self.home_goals.unwrap_or(0);
        let away_goals = self.away_goals.unwrap_or(0);

        let (scored, conceded) = if self.home_id == Some(team_id) {
            (home_goals, away_goals)
        } else {
            (away_goals, home_goals)
        };

        Some(match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => FixtureResult::Win,
            std::cmp::Ordering::Less => FixtureResult::Loss,
            std::cmp::Ordering::Equal => FixtureResult::Draw,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixture(home_id: u32, away_id: u32, home_goals: u8, away_goals: u8) -> Fixture {
        Fixture {
            home_id: Some(home_id),
            away_id: Some(away_id),
            home_goals: Some(home_goals),
            away_goals: Some(away_goals),
            played: true,
            date: NaiveDate::from_ymd_opt(2025, 10, 5)
                .unwrap()
                .and_hms_opt(15, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_result_perspective() {
        let played = fixture(1, 2, 3, 1);

        assert_eq!(played.result_for(1), Some(FixtureResult::Win));
        assert_eq!(played.result_for(2), Some(FixtureResult::Loss));
        assert_eq!(played.result_for(3), None);
    }

    #[test]
    fn test_unplayed_has_no_result() {
        let mut unplayed = fixture(1, 2, 0, 0);
        unplayed.played = false;
        unplayed.home_goals = None;
        unplayed.away_goals = None;

        assert_eq!(unplayed.result_for(1), None);
    }

    #[test]
    fn test_missing_goals_count_as_zero() {
        let mut partial = fixture(1, 2, 2, 0);
        partial.away_goals = None;

        assert_eq!(partial.result_for(1), Some(FixtureResult::Win));
        assert_eq!(partial.result_for(2), Some(FixtureResult::Loss));
    }
}
