use crate::club::player::Player;

#[derive(Copy, Debug, Eq, PartialEq, Clone)]
pub enum AvailabilityFilter {
    All,
    Available,
    Injured,
}

/// The club roster, kept sorted by last name for display.
#[derive(Debug, Clone)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new(mut players: Vec<Player>) -> Self {
        players.sort_by(|a, b| a.full_name.last_name.cmp(&b.full_name.last_name));

        Roster { players }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn get(&self, player_id: u32) -> Option<&Player> {
        self.players.iter().find(|player| player.id == player_id)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Roster list filtering as exposed by the squad page: an availability
    /// toggle plus a case-insensitive substring match on first or last name.
    pub fn filter(&self, search_term: &str, availability: AvailabilityFilter) -> Vec<&Player> {
        let term = search_term.to_lowercase();

        self.players
            .iter()
            .filter(|player| match availability {
                AvailabilityFilter::All => true,
                AvailabilityFilter::Available => player.is_available(),
                AvailabilityFilter::Injured => !player.is_available(),
            })
            .filter(|player| {
                term.is_empty()
                    || player.full_name.first_name.to_lowercase().contains(&term)
                    || player.full_name.last_name.to_lowercase().contains(&term)
            })
            .collect()
    }
}
