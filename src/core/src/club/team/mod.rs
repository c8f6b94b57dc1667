pub mod lineup;
pub mod tactics;
pub mod team;

pub use lineup::*;
pub use tactics::*;
pub use team::*;
