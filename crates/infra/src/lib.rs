mod config;
mod repos;
mod system;

pub use config::Config;
use postbox_domain::Message;
use repos::Repos;
pub use repos::IMessageRepo;
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;

#[derive(Clone)]
pub struct PostboxContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

impl PostboxContext {
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
        }
    }
}

/// Will setup the infrastructure context given the environment and seed
/// the message store with the configured message.
pub async fn setup_context() -> PostboxContext {
    let ctx = PostboxContext::create_inmemory();
    let message = Message::new(ctx.config.message.clone(), ctx.sys.get_timestamp_millis());
    ctx.repos
        .messages
        .insert(&message)
        .await
        .expect("The configured message to be seeded");
    ctx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeds_configured_message() {
        let ctx = setup_context().await;
        let message = ctx.repos.messages.find_latest().await;
        assert!(message.is_some());
        assert_eq!(message.unwrap().content, ctx.config.message);
    }
}
