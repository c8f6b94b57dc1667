use env_logger::Env;
use log::info;
use matchday_core::utils::TimeEstimation;
use matchday_core::{FixtureResult, LeagueTable, recent_form};
use matchday_database::DatabaseLoader;

fn main() {
    color_eyre::install().unwrap();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let (database, estimated) = TimeEstimation::estimate(DatabaseLoader::load);

    info!("database loaded: {} ms", estimated);

    let teams = database.teams();
    let fixtures = database.fixtures();
    let roster = database.roster();

    info!(
        "{} teams, {} fixtures, {} players",
        teams.len(),
        fixtures.len(),
        roster.len()
    );

    let table = LeagueTable::compute(&teams, &fixtures);

    for (position, row) in table.rows.iter().enumerate() {
        let name = teams
            .iter()
            .find(|team| team.id == row.team_id)
            .map(|team| team.name.as_str())
            .unwrap_or("?");

        let form: String = recent_form(row.team_id, &fixtures, 3)
            .iter()
            .map(|result| match result {
                FixtureResult::Win => 'V',
                FixtureResult::Draw => 'N',
                FixtureResult::Loss => 'P',
            })
            .collect();

        info!(
            "{:>2}. {:<22} {:>3} pt  {:>2}G {:>2}V {:>2}N {:>2}P  {:>3}GF {:>3}GS {:>+4}  {}",
            position + 1,
            name,
            row.points,
            row.played,
            row.wins,
            row.draws,
            row.losses,
            row.goals_for,
            row.goals_against,
            row.goal_difference(),
            form
        );
    }
}
