pub mod entities;
pub mod formatting;
