mod message;
mod shared;

pub use message::Message;
pub use shared::entity::{Entity, ID};
