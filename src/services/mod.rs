pub mod chat;
pub mod market;
