pub mod chat;
pub mod invitation;
