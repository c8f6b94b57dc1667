pub mod fixture;
pub mod form;
pub mod table;

pub use fixture::*;
pub use form::*;
pub use table::*;
