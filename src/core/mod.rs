pub mod chart;
pub mod chat;
pub mod dashboard;
pub mod derive;
pub mod filter;
pub mod grid;
pub mod map;
pub mod selection;
