pub mod chat;
pub mod event;
pub mod events;
pub mod issue;
