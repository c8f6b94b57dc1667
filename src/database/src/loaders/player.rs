use chrono::NaiveDate;
use serde::Deserialize;

const STATIC_PLAYERS_JSON: &str = include_str!("../data/players.json");

#[derive(Deserialize)]
pub struct PlayerEntity {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub role: String,
    pub squad_number: Option<u8>,
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub captain: bool,
    #[serde(default)]
    pub vice_captain: bool,
    #[serde(default)]
    pub staff: bool,
    pub medical_note: Option<String>,
}

pub struct PlayerLoader;

impl PlayerLoader {
    pub fn load() -> Vec<PlayerEntity> {
        serde_json::from_str(STATIC_PLAYERS_JSON).unwrap()
    }
}
