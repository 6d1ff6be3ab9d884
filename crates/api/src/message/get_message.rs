use crate::{
    error::PostboxError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use postbox_api_structs::get_message::*;
use postbox_domain::Message;
use postbox_infra::PostboxContext;

pub async fn get_message_controller(
    ctx: web::Data<PostboxContext>,
) -> Result<HttpResponse, PostboxError> {
    let usecase = GetMessageUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|usecase_res| HttpResponse::Ok().json(APIResponse::new(usecase_res.message)))
        .map_err(PostboxError::from)
}

#[derive(Debug)]
struct GetMessageUseCase {}

#[derive(Debug)]
struct UseCaseRes {
    pub message: Message,
}

#[derive(Debug)]
enum UseCaseError {
    MessageNotFound,
}

impl From<UseCaseError> for PostboxError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::MessageNotFound => {
                Self::NotFound("No message has been configured.".into())
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetMessageUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    const NAME: &'static str = "GetMessage";

    async fn execute(&mut self, ctx: &PostboxContext) -> Result<Self::Response, Self::Error> {
        let message = ctx
            .repos
            .messages
            .find_latest()
            .await
            .ok_or(UseCaseError::MessageNotFound)?;

        Ok(UseCaseRes { message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postbox_infra::setup_context;

    #[actix_web::test]
    async fn returns_the_seeded_message() {
        let ctx = setup_context().await;

        let mut usecase = GetMessageUseCase {};
        let res = usecase.execute(&ctx).await;

        assert!(res.is_ok());
        assert_eq!(res.unwrap().message.content, ctx.config.message);
    }

    #[actix_web::test]
    async fn fails_when_no_message_is_seeded() {
        let ctx = PostboxContext::create_inmemory();

        let mut usecase = GetMessageUseCase {};
        let res = usecase.execute(&ctx).await;

        assert!(matches!(res, Err(UseCaseError::MessageNotFound)));
    }
}
