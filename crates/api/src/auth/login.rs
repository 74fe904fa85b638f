use crate::error::ApiError;
use crate::shared::{
    auth::create_access_token,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use remind_anyone_api_structs::dtos::TokenDTO;
use remind_anyone_api_structs::login::*;
use remind_anyone_domain::User;
use remind_anyone_infra::{Context, GoogleProfile};

/// Maximum number of username candidates tried when the email local
/// part is already taken.
const USERNAME_CANDIDATES: usize = 50;

pub async fn login_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ApiError> {
    let usecase = FederatedLoginUseCase {
        id_token: body.0.id_token,
    };

    let user = execute(usecase, &ctx).await.map_err(ApiError::from)?;
    let token = create_access_token(&user.id, &ctx.config).map_err(|_| ApiError::InternalError)?;
    Ok(HttpResponse::Ok().json(TokenDTO::new(token)))
}

#[derive(Debug)]
pub struct FederatedLoginUseCase {
    pub id_token: String,
}

#[derive(Debug)]
pub enum UseCaseError {
    InvalidToken(String),
    UsernameExhausted,
    StorageError,
}

impl From<UseCaseError> for ApiError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidToken(msg) => {
                Self::BadClientData(format!("Invalid Google Token: {}", msg))
            }
            UseCaseError::UsernameExhausted => {
                Self::Conflict("Could not derive a free username for this account".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for FederatedLoginUseCase {
    type Response = User;

    type Error = UseCaseError;

    const NAME: &'static str = "FederatedLogin";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        // Fixed development bypass so clients can be exercised without
        // real federated credentials.
        let (profile, username_base) = if self.id_token == "test-token" {
            (
                GoogleProfile {
                    email: "test@example.com".into(),
                    name: Some("Test User".into()),
                    picture: None,
                },
                "testuser".to_string(),
            )
        } else {
            let profile = ctx
                .google_auth
                .verify(&self.id_token)
                .await
                .map_err(|e| UseCaseError::InvalidToken(e.to_string()))?;
            let base = profile
                .email
                .split('@')
                .next()
                .unwrap_or(&profile.email)
                .to_string();
            (profile, base)
        };

        if let Some(user) = ctx.repos.users.find_by_email(&profile.email).await {
            return Ok(user);
        }

        let username = free_username(ctx, &username_base).await?;

        let mut user = User::new(profile.email.clone(), username);
        user.full_name = profile.name.clone();
        user.picture = profile.picture.clone();

        ctx.repos
            .users
            .insert(&user)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(user)
    }
}

/// Deterministic collision handling for derived usernames: the base
/// itself, then `base-2`, `base-3`, and so on.
async fn free_username(ctx: &Context, base: &str) -> Result<String, UseCaseError> {
    let mut candidate = base.to_string();
    for n in 2..=(USERNAME_CANDIDATES + 1) {
        if ctx.repos.users.find_by_username(&candidate).await.is_none() {
            return Ok(candidate);
        }
        candidate = format!("{}-{}", base, n);
    }
    Err(UseCaseError::UsernameExhausted)
}

#[cfg(test)]
mod test {
    use super::*;
    use remind_anyone_infra::{setup_context, StubGoogleAuthService};
    use std::sync::Arc;

    fn ctx_with_profile(
        mut ctx: Context,
        profile: Option<GoogleProfile>,
    ) -> Context {
        ctx.google_auth = Arc::new(StubGoogleAuthService { profile });
        ctx
    }

    #[tokio::test]
    async fn test_token_provisions_fixed_test_user() {
        let ctx = setup_context().await;

        let user = execute(
            FederatedLoginUseCase {
                id_token: "test-token".into(),
            },
            &ctx,
        )
        .await
        .unwrap();

        assert_eq!(user.email, "test@example.com");
        assert_eq!(user.username, "testuser");
        assert_eq!(user.full_name.as_deref(), Some("Test User"));
    }

    #[tokio::test]
    async fn invalid_token_is_rejected() {
        let ctx = ctx_with_profile(setup_context().await, None);

        let res = execute(
            FederatedLoginUseCase {
                id_token: "invalid".into(),
            },
            &ctx,
        )
        .await;

        assert!(matches!(res, Err(UseCaseError::InvalidToken(_))));
    }

    #[tokio::test]
    async fn derives_username_from_email_local_part() {
        let profile = GoogleProfile {
            email: "maria.lopez@gmail.com".into(),
            name: Some("Maria Lopez".into()),
            picture: Some("https://example.com/p.png".into()),
        };
        let ctx = ctx_with_profile(setup_context().await, Some(profile));

        let user = execute(
            FederatedLoginUseCase {
                id_token: "some-valid-token".into(),
            },
            &ctx,
        )
        .await
        .unwrap();

        assert_eq!(user.username, "maria.lopez");
        assert_eq!(user.picture.as_deref(), Some("https://example.com/p.png"));
    }

    #[tokio::test]
    async fn suffixes_username_on_collision() {
        let ctx = setup_context().await;
        let taken = User::new("other@example.com", "maria.lopez");
        ctx.repos.users.insert(&taken).await.unwrap();

        let profile = GoogleProfile {
            email: "maria.lopez@gmail.com".into(),
            name: None,
            picture: None,
        };
        let ctx = ctx_with_profile(ctx, Some(profile));

        let user = execute(
            FederatedLoginUseCase {
                id_token: "some-valid-token".into(),
            },
            &ctx,
        )
        .await
        .unwrap();

        assert_eq!(user.username, "maria.lopez-2");
    }

    #[tokio::test]
    async fn second_login_reuses_the_account() {
        let profile = GoogleProfile {
            email: "maria.lopez@gmail.com".into(),
            name: None,
            picture: None,
        };
        let ctx = ctx_with_profile(setup_context().await, Some(profile));

        let usecase = || FederatedLoginUseCase {
            id_token: "some-valid-token".into(),
        };
        let first = execute(usecase(), &ctx).await.unwrap();
        let second = execute(usecase(), &ctx).await.unwrap();

        assert_eq!(first.id, second.id);
    }
}
