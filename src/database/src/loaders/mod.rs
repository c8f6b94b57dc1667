pub mod fixture;
pub mod player;
pub mod team;

pub use fixture::*;
pub use player::*;
pub use team::*;
