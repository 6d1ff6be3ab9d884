mod base;
mod message;
mod status;

pub use base::{APIError, APIResponse};
pub(crate) use base::BaseClient;
use message::MessageClient;
use status::StatusClient;
use std::sync::Arc;

/// Postbox Server SDK
///
/// The SDK contains methods for interacting with the Postbox server
/// API.
#[derive(Clone)]
pub struct PostboxSDK {
    pub message: MessageClient,
    pub status: StatusClient,
}

impl PostboxSDK {
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(address));
        let message = MessageClient::new(base.clone());
        let status = StatusClient::new(base);

        Self { message, status }
    }
}
