use crate::error::ApiError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use remind_anyone_api_structs::dtos::UserDTO;
use remind_anyone_api_structs::set_device_token::*;
use remind_anyone_domain::User;
use remind_anyone_infra::Context;

pub async fn set_device_token_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ApiError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = SetDeviceTokenUseCase {
        user,
        token: body.0.token,
    };

    execute(usecase, &ctx)
        .await
        .map(|user| HttpResponse::Ok().json(UserDTO::new(user)))
        .map_err(ApiError::from)
}

#[derive(Debug)]
pub struct SetDeviceTokenUseCase {
    pub user: User,
    pub token: String,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for ApiError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SetDeviceTokenUseCase {
    type Response = User;

    type Error = UseCaseError;

    const NAME: &'static str = "SetDeviceToken";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        // The latest registered device wins, there is no token list.
        self.user.expo_push_token = Some(self.token.clone());

        ctx.repos
            .users
            .save(&self.user)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(self.user.clone())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use remind_anyone_infra::setup_context;

    #[tokio::test]
    async fn stores_and_overwrites_device_token() {
        let ctx = setup_context().await;
        let user = User::new("test@example.com", "testuser");
        ctx.repos.users.insert(&user).await.unwrap();

        let updated = execute(
            SetDeviceTokenUseCase {
                user: user.clone(),
                token: "ExponentPushToken[aaa]".into(),
            },
            &ctx,
        )
        .await
        .unwrap();
        assert_eq!(
            updated.expo_push_token.as_deref(),
            Some("ExponentPushToken[aaa]")
        );

        let updated = execute(
            SetDeviceTokenUseCase {
                user: updated,
                token: "ExponentPushToken[bbb]".into(),
            },
            &ctx,
        )
        .await
        .unwrap();

        let stored = ctx.repos.users.find(&user.id).await.unwrap();
        assert_eq!(
            stored.expo_push_token.as_deref(),
            Some("ExponentPushToken[bbb]")
        );
        assert_eq!(updated.expo_push_token, stored.expo_push_token);
    }
}
