pub mod date;
pub mod estimation;

pub use date::*;
pub use estimation::*;
