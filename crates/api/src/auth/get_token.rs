use crate::error::ApiError;
use crate::shared::{
    auth::create_access_token,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use remind_anyone_api_structs::dtos::TokenDTO;
use remind_anyone_api_structs::get_token::*;
use remind_anyone_domain::User;
use remind_anyone_infra::Context;

/// OAuth2 compatible password login used by the interactive docs and
/// local clients. Accepts any password and auto-provisions the user
/// on first use: a development convenience, not a real credential
/// check.
pub async fn get_token_controller(
    body: web::Form<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ApiError> {
    let usecase = DevLoginUseCase {
        username: body.0.username,
    };

    let user = execute(usecase, &ctx).await.map_err(ApiError::from)?;
    let token = create_access_token(&user.id, &ctx.config).map_err(|_| ApiError::InternalError)?;
    Ok(HttpResponse::Ok().json(TokenDTO::new(token)))
}

#[derive(Debug)]
pub struct DevLoginUseCase {
    pub username: String,
}

#[derive(Debug)]
pub enum UseCaseError {
    Conflict,
    StorageError,
}

impl From<UseCaseError> for ApiError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::Conflict => {
                Self::Conflict("A user with that email or username already exists".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DevLoginUseCase {
    type Response = User;

    type Error = UseCaseError;

    const NAME: &'static str = "DevLogin";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        if let Some(user) = ctx.repos.users.find_by_username(&self.username).await {
            return Ok(user);
        }

        let mut user = User::new(format!("{}@example.com", self.username), self.username.clone());
        user.full_name = Some(format!("Dev User {}", self.username));

        ctx.repos
            .users
            .insert(&user)
            .await
            .map_err(|_| UseCaseError::Conflict)?;

        Ok(user)
    }
}
