use crate::shared::entity::{Entity, ID};

/// The payload served by the message endpoint. Messages live in memory
/// for the lifetime of the process and are seeded at startup.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: ID,
    pub content: String,
    /// Creation timestamp in millis
    pub created_at: i64,
}

impl Message {
    pub fn new(content: String, created_at: i64) -> Self {
        Self {
            id: Default::default(),
            content,
            created_at,
        }
    }
}

impl Entity<ID> for Message {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
