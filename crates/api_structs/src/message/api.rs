use postbox_domain::Message;
use serde::{Deserialize, Serialize};

pub mod get_message {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub message: String,
    }

    impl APIResponse {
        pub fn new(message: Message) -> Self {
            Self {
                message: message.content,
            }
        }
    }
}
