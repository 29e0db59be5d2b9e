pub mod extraction;
pub mod invitation;
pub mod responder;
