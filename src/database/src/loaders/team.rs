use serde::Deserialize;

const STATIC_TEAMS_JSON: &str = include_str!("../data/teams.json");

#[derive(Deserialize)]
pub struct TeamEntity {
    pub id: u32,
    pub name: String,
    pub slug: Option<String>,
    pub crest_url: Option<String>,
}

pub struct TeamLoader;

impl TeamLoader {
    pub fn load() -> Vec<TeamEntity> {
        serde_json::from_str(STATIC_TEAMS_JSON).unwrap()
    }
}
