use chrono::NaiveDateTime;
use serde::Deserialize;

const STATIC_FIXTURES_JSON: &str = include_str!("../data/fixtures.json");

#[derive(Deserialize)]
pub struct FixtureEntity {
    pub id: u32,
    pub home_id: Option<u32>,
    pub away_id: Option<u32>,
    pub home_goals: Option<u8>,
    pub away_goals: Option<u8>,
    pub played: bool,
    pub date: NaiveDateTime,
}

pub struct FixtureLoader;

impl FixtureLoader {
    pub fn load() -> Vec<FixtureEntity> {
        serde_json::from_str(STATIC_FIXTURES_JSON).unwrap()
    }
}
