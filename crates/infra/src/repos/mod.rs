mod message;
mod shared;

use message::InMemoryMessageRepo;
pub use message::IMessageRepo;
use std::sync::Arc;

#[derive(Clone)]
pub struct Repos {
    pub messages: Arc<dyn IMessageRepo>,
}

impl Repos {
    pub fn create_inmemory() -> Self {
        Self {
            messages: Arc::new(InMemoryMessageRepo::new()),
        }
    }
}
