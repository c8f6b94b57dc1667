pub mod loaders;

use crate::loaders::{FixtureEntity, FixtureLoader, PlayerEntity, PlayerLoader, TeamEntity, TeamLoader};
use log::warn;
use matchday_core::{Fixture, FullName, Player, PlayerFieldPositionGroup, Roster, Team};

/// The raw records of the hosted backend, loaded from the embedded seeds.
pub struct DatabaseEntity {
    pub teams: Vec<TeamEntity>,
    pub fixtures: Vec<FixtureEntity>,
    pub players: Vec<PlayerEntity>,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    pub fn load() -> DatabaseEntity {
        DatabaseEntity {
            teams: TeamLoader::load(),
            fixtures: FixtureLoader::load(),
            players: PlayerLoader::load(),
        }
    }
}

impl DatabaseEntity {
    pub fn teams(&self) -> Vec<Team> {
        self.teams
            .iter()
            .map(|team| Team {
                id: team.id,
                name: team.name.clone(),
                slug: team.slug.clone(),
                crest_url: team.crest_url.clone(),
            })
            .collect()
    }

    pub fn fixtures(&self) -> Vec<Fixture> {
        self.fixtures
            .iter()
            .map(|fixture| Fixture {
                home_id: fixture.home_id,
                away_id: fixture.away_id,
                home_goals: fixture.home_goals,
                away_goals: fixture.away_goals,
                played: fixture.played,
                date: fixture.date,
            })
            .collect()
    }

    pub fn roster(&self) -> Roster {
        let players = self
            .players
            .iter()
            .map(|player| Player {
                id: player.id,
                full_name: FullName::new(player.first_name.clone(), player.last_name.clone()),
                birth_date: player.birth_date,
                position_group: PlayerFieldPositionGroup::from_code(&player.role)
                    .unwrap_or_else(|| {
                        warn!("unknown role '{}' for player {}, defaulting to CEN", player.role, player.id);
                        PlayerFieldPositionGroup::Midfielder
                    }),
                squad_number: player.squad_number,
                avatar_url: player.avatar_url.clone(),
                captain: player.captain,
                vice_captain: player.vice_captain,
                staff: player.staff,
                medical_note: player.medical_note.clone(),
            })
            .collect();

        Roster::new(players)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeds_load() {
        let database = DatabaseLoader::load();

        assert!(!database.teams.is_empty());
        assert!(!database.fixtures.is_empty());
        assert!(!database.players.is_empty());
    }

    #[test]
    fn test_fixture_ids_resolve_to_teams() {
        let database = DatabaseLoader::load();
        let teams = database.teams();

        for fixture in database.fixtures() {
            for team_id in [fixture.home_id, fixture.away_id].into_iter().flatten() {
                assert!(
                    teams.iter().any(|team| team.id == team_id),
                    "fixture references unknown team {team_id}"
                );
            }
        }
    }

    #[test]
    fn test_roster_converts_roles() {
        let database = DatabaseLoader::load();
        let roster = database.roster();

        assert!(
            roster
                .players()
                .iter()
                .any(|p| p.position_group == PlayerFieldPositionGroup::Goalkeeper)
        );
        assert!(roster.players().iter().any(|p| p.captain));
    }
}
