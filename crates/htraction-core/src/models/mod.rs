pub mod chat;
pub mod form;
pub mod investor;
pub mod score;
pub mod thesis;
