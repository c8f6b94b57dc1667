use crate::league::{Fixture, FixtureResult};
use itertools::Itertools;
use std::cmp::Reverse;

/// The last `limit` results for a team, most recent first. Shown next to the
/// standings as the form guide.
pub fn recent_form(team_id: u32, fixtures: &[Fixture], limit: usize) -> Vec<FixtureResult> {
    fixtures
        .iter()
        .filter(|fixture| fixture.played && fixture.involves(team_id))
        .sorted_by_key(|fixture| Reverse(fixture.date))
        .take(limit)
        .filter_map(|fixture| fixture.result_for(team_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn played_on(day: u32, home_id: u32, away_id: u32, home_goals: u8, away_goals: u8) -> Fixture {
        Fixture {
            home_id: Some(home_id),
            away_id: Some(away_id),
            home_goals: Some(home_goals),
            away_goals: Some(away_goals),
            played: true,
            date: NaiveDate::from_ymd_opt(2025, 10, day)
                .unwrap()
                .and_hms_opt(15, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_most_recent_first() {
        let fixtures = vec![
            played_on(5, 1, 2, 2, 0),
            played_on(19, 3, 1, 1, 1),
            played_on(12, 1, 4, 0, 3),
        ];

        let form = recent_form(1, &fixtures, 3);

        assert_eq!(
            form,
            vec![FixtureResult::Draw, FixtureResult::Loss, FixtureResult::Win]
        );
    }

    #[test]
    fn test_limit_and_unplayed() {
        let mut upcoming = played_on(26, 1, 2, 0, 0);
        upcoming.played = false;

        let fixtures = vec![
            played_on(5, 1, 2, 2, 0),
            played_on(12, 1, 4, 1, 0),
            played_on(19, 3, 1, 0, 2),
            upcoming,
        ];

        let form = recent_form(1, &fixtures, 2);

        assert_eq!(form, vec![FixtureResult::Win, FixtureResult::Win]);
    }

    #[test]
    fn test_other_teams_fixtures_excluded() {
        let fixtures = vec![played_on(5, 2, 3, 1, 0)];

        assert!(recent_form(1, &fixtures, 3).is_empty());
    }
}
