mod inmemory;

pub use inmemory::InMemoryMessageRepo;
use postbox_domain::{Message, ID};

#[async_trait::async_trait]
pub trait IMessageRepo: Send + Sync {
    async fn insert(&self, message: &Message) -> anyhow::Result<()>;
    async fn find(&self, message_id: &ID) -> Option<Message>;
    /// The most recently inserted message, which is the one served by the
    /// message endpoint.
    async fn find_latest(&self) -> Option<Message>;
    async fn delete(&self, message_id: &ID) -> Option<Message>;
}

#[cfg(test)]
mod tests {
    use crate::PostboxContext;
    use postbox_domain::Message;

    #[tokio::test]
    async fn create_and_delete() {
        let ctx = PostboxContext::create_inmemory();
        let message = Message::new("Hello".into(), 0);

        // Insert
        assert!(ctx.repos.messages.insert(&message).await.is_ok());

        // Find
        let res = ctx.repos.messages.find(&message.id).await.unwrap();
        assert_eq!(res.id, message.id);
        assert_eq!(res.content, message.content);

        // Delete
        let res = ctx.repos.messages.delete(&message.id).await;
        assert!(res.is_some());
        assert_eq!(res.unwrap().id, message.id);

        // Find after delete
        assert!(ctx.repos.messages.find(&message.id).await.is_none());
    }

    #[tokio::test]
    async fn latest_is_the_last_inserted() {
        let ctx = PostboxContext::create_inmemory();
        assert!(ctx.repos.messages.find_latest().await.is_none());

        let first = Message::new("First".into(), 0);
        let second = Message::new("Second".into(), 1);
        ctx.repos.messages.insert(&first).await.unwrap();
        ctx.repos.messages.insert(&second).await.unwrap();

        let latest = ctx.repos.messages.find_latest().await.unwrap();
        assert_eq!(latest.id, second.id);
        assert_eq!(latest.content, "Second");
    }
}
