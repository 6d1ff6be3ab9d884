use crate::base::{APIResponse, BaseClient};
use postbox_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct MessageClient {
    base: Arc<BaseClient>,
}

impl MessageClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get(&self) -> APIResponse<get_message::APIResponse> {
        self.base.get("api/message".into(), StatusCode::OK).await
    }
}
