use serde::Serialize;

/// A league opponent (or our own club) as listed by the competition.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    pub slug: Option<String>,
    pub crest_url: Option<String>,
}

impl Team {
    pub fn new(id: u32, name: String) -> Self {
        Team {
            id,
            name,
            slug: None,
            crest_url: None,
        }
    }
}
