use super::IMessageRepo;
use crate::repos::shared::inmemory_repo::*;
use postbox_domain::{Message, ID};

pub struct InMemoryMessageRepo {
    messages: std::sync::Mutex<Vec<Message>>,
}

impl InMemoryMessageRepo {
    pub fn new() -> Self {
        Self {
            messages: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IMessageRepo for InMemoryMessageRepo {
    async fn insert(&self, message: &Message) -> anyhow::Result<()> {
        insert(message, &self.messages);
        Ok(())
    }

    async fn find(&self, message_id: &ID) -> Option<Message> {
        find(message_id, &self.messages)
    }

    async fn find_latest(&self) -> Option<Message> {
        let messages = find_by(&self.messages, |_| true);
        messages.into_iter().last()
    }

    async fn delete(&self, message_id: &ID) -> Option<Message> {
        delete(message_id, &self.messages)
    }
}
