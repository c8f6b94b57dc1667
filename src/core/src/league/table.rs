use crate::club::Team;
use crate::league::Fixture;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct LeagueTableRow {
    pub team_id: u32,
    pub points: u16,
    pub played: u16,
    pub wins: u16,
    pub draws: u16,
    pub losses: u16,
    pub goals_for: u16,
    pub goals_against: u16,
}

impl LeagueTableRow {
    fn new(team_id: u32) -> Self {
        LeagueTableRow {
            team_id,
            points: 0,
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
        }
    }

    pub fn goal_difference(&self) -> i32 {
        self.goals_for as i32 - self.goals_against as i32
    }

    pub fn win_percentage(&self) -> u16 {
        if self.played == 0 {
            return 0;
        }

        (self.wins * 100 + self.played / 2) / self.played
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LeagueTable {
    pub rows: Vec<LeagueTableRow>,
}

impl LeagueTable {
    /// Builds the ranked table from scratch. Only fixtures that are played and
    /// reference two roster teams count; everything else is skipped without
    /// error. Ranking: points, then goal difference, then goals scored, with
    /// input order as the stable final tie-break.
    pub fn compute(teams: &[Team], fixtures: &[Fixture]) -> LeagueTable {
        let mut rows: Vec<LeagueTableRow> =
            teams.iter().map(|team| LeagueTableRow::new(team.id)).collect();

        let index: HashMap<u32, usize> = rows
            .iter()
            .enumerate()
            .map(|(idx, row)| (row.team_id, idx))
            .collect();

        for fixture in fixtures.iter().filter(|fixture| fixture.played) {
            let (Some(home_id), Some(away_id)) = (fixture.home_id, fixture.away_id) else {
                continue;
            };

            let (Some(&home), Some(&away)) = (index.get(&home_id), index.get(&away_id)) else {
                continue;
            };

            let home_goals = fixture.home_goals.unwrap_or(0) as u16;
            let away_goals = fixture.away_goals.unwrap_or(0) as u16;

            rows[home].played += 1;
            rows[away].played += 1;
            rows[home].goals_for += home_goals;
            rows[home].goals_against += away_goals;
            rows[away].goals_for += away_goals;
            rows[away].goals_against += home_goals;

            match home_goals.cmp(&away_goals) {
                std::cmp::Ordering::Greater => {
                    rows[home].points += 3;
                    rows[home].wins += 1;
                    rows[away].losses += 1;
                }
                std::cmp::Ordering::Less => {
                    rows[away].points += 3;
                    rows[away].wins += 1;
                    rows[home].losses += 1;
                }
                std::cmp::Ordering::Equal => {
                    rows[home].points += 1;
                    rows[home].draws += 1;
                    rows[away].points += 1;
                    rows[away].draws += 1;
                }
            }
        }

        // Vec::sort_by is stable, so ties beyond the three keys keep input order
        rows.sort_by(|a, b| {
            b.points
                .cmp(&a.points)
                .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
                .then_with(|| b.goals_for.cmp(&a.goals_for))
        });

        LeagueTable { rows }
    }

    pub fn position_of(&self, team_id: u32) -> Option<usize> {
        self.rows.iter().position(|row| row.team_id == team_id)
    }
}
