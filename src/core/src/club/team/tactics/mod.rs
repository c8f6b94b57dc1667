pub mod formation;

pub use formation::*;
