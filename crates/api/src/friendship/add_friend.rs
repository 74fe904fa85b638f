use crate::error::ApiError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use remind_anyone_api_structs::add_friend::*;
use remind_anyone_api_structs::dtos::UserDTO;
use remind_anyone_domain::{Friendship, User};
use remind_anyone_infra::Context;

pub async fn add_friend_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ApiError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = AddFriendUseCase {
        user,
        friend_email_or_username: body.0.friend_email_or_username,
    };

    execute(usecase, &ctx)
        .await
        .map(|friend| HttpResponse::Ok().json(UserDTO::new(friend)))
        .map_err(ApiError::from)
}

#[derive(Debug)]
pub struct AddFriendUseCase {
    pub user: User,
    pub friend_email_or_username: String,
}

#[derive(Debug)]
pub enum UseCaseError {
    UserNotFound,
    SelfFriendship,
    AlreadyFriends,
}

impl From<UseCaseError> for ApiError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::UserNotFound => Self::NotFound("User not found".into()),
            UseCaseError::SelfFriendship => {
                Self::BadClientData("Cannot add yourself as friend".into())
            }
            UseCaseError::AlreadyFriends => Self::BadClientData("Already friends".into()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for AddFriendUseCase {
    type Response = User;

    type Error = UseCaseError;

    const NAME: &'static str = "AddFriend";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let friend = ctx
            .repos
            .users
            .find_by_email_or_username(&self.friend_email_or_username)
            .await
            .ok_or(UseCaseError::UserNotFound)?;

        if friend.id == self.user.id {
            return Err(UseCaseError::SelfFriendship);
        }
        if ctx
            .repos
            .friendships
            .exists(&self.user.id, &friend.id)
            .await
        {
            return Err(UseCaseError::AlreadyFriends);
        }

        let (edge, mirror) = Friendship::symmetric_pair(
            self.user.id.clone(),
            friend.id.clone(),
            ctx.sys.get_utc_datetime(),
        );

        // Two requests racing on the same pair both pass the exists
        // check. The storage level unique constraint settles it and the
        // loser reports the pair as already friends.
        ctx.repos
            .friendships
            .insert_pair(&edge, &mirror)
            .await
            .map_err(|_| UseCaseError::AlreadyFriends)?;

        Ok(friend)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use remind_anyone_infra::setup_context;

    async fn setup_users(ctx: &Context) -> (User, User) {
        let alice = User::new("alice@example.com", "alice");
        let bob = User::new("bob@example.com", "bob");
        ctx.repos.users.insert(&alice).await.unwrap();
        ctx.repos.users.insert(&bob).await.unwrap();
        (alice, bob)
    }

    #[tokio::test]
    async fn creates_friendship_in_both_directions() {
        let ctx = setup_context().await;
        let (alice, bob) = setup_users(&ctx).await;

        let friend = execute(
            AddFriendUseCase {
                user: alice.clone(),
                friend_email_or_username: "bob".into(),
            },
            &ctx,
        )
        .await
        .unwrap();

        assert_eq!(friend.id, bob.id);
        assert!(ctx.repos.friendships.exists(&alice.id, &bob.id).await);
        assert!(ctx.repos.friendships.exists(&bob.id, &alice.id).await);
    }

    #[tokio::test]
    async fn resolves_friend_by_email_too() {
        let ctx = setup_context().await;
        let (alice, bob) = setup_users(&ctx).await;

        let friend = execute(
            AddFriendUseCase {
                user: alice,
                friend_email_or_username: "bob@example.com".into(),
            },
            &ctx,
        )
        .await
        .unwrap();

        assert_eq!(friend.id, bob.id);
    }

    #[tokio::test]
    async fn rejects_unknown_friend() {
        let ctx = setup_context().await;
        let (alice, _bob) = setup_users(&ctx).await;

        let res = execute(
            AddFriendUseCase {
                user: alice,
                friend_email_or_username: "nobody".into(),
            },
            &ctx,
        )
        .await;

        assert!(matches!(res, Err(UseCaseError::UserNotFound)));
    }

    #[tokio::test]
    async fn rejects_self_friendship() {
        let ctx = setup_context().await;
        let (alice, _bob) = setup_users(&ctx).await;

        let res = execute(
            AddFriendUseCase {
                user: alice.clone(),
                friend_email_or_username: alice.username.clone(),
            },
            &ctx,
        )
        .await;

        assert!(matches!(res, Err(UseCaseError::SelfFriendship)));
    }

    #[tokio::test]
    async fn rejects_duplicate_friendship_from_either_side() {
        let ctx = setup_context().await;
        let (alice, bob) = setup_users(&ctx).await;

        execute(
            AddFriendUseCase {
                user: alice.clone(),
                friend_email_or_username: "bob".into(),
            },
            &ctx,
        )
        .await
        .unwrap();

        let repeat = execute(
            AddFriendUseCase {
                user: alice.clone(),
                friend_email_or_username: "bob".into(),
            },
            &ctx,
        )
        .await;
        assert!(matches!(repeat, Err(UseCaseError::AlreadyFriends)));

        let reverse = execute(
            AddFriendUseCase {
                user: bob,
                friend_email_or_username: "alice".into(),
            },
            &ctx,
        )
        .await;
        assert!(matches!(reverse, Err(UseCaseError::AlreadyFriends)));
    }
}
