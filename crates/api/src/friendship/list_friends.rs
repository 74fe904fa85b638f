use crate::error::ApiError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use remind_anyone_api_structs::dtos::UserDTO;
use remind_anyone_domain::User;
use remind_anyone_infra::Context;

pub async fn list_friends_controller(
    http_req: HttpRequest,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ApiError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = ListFriendsUseCase { user };

    execute(usecase, &ctx)
        .await
        .map(|friends| {
            HttpResponse::Ok().json(friends.into_iter().map(UserDTO::new).collect::<Vec<_>>())
        })
        .map_err(ApiError::from)
}

#[derive(Debug)]
pub struct ListFriendsUseCase {
    pub user: User,
}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for ApiError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ListFriendsUseCase {
    type Response = Vec<User>;

    type Error = UseCaseError;

    const NAME: &'static str = "ListFriends";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let friend_ids = ctx.repos.friendships.find_friends_of(&self.user.id).await;
        Ok(ctx.repos.users.find_many(&friend_ids).await)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use remind_anyone_domain::Friendship;
    use remind_anyone_infra::setup_context;

    #[tokio::test]
    async fn lists_only_own_friends() {
        let ctx = setup_context().await;
        let alice = User::new("alice@example.com", "alice");
        let bob = User::new("bob@example.com", "bob");
        let carol = User::new("carol@example.com", "carol");
        for user in [&alice, &bob, &carol] {
            ctx.repos.users.insert(user).await.unwrap();
        }

        let (edge, mirror) = Friendship::symmetric_pair(
            alice.id.clone(),
            bob.id.clone(),
            ctx.sys.get_utc_datetime(),
        );
        ctx.repos.friendships.insert_pair(&edge, &mirror).await.unwrap();

        let friends = execute(ListFriendsUseCase { user: alice }, &ctx)
            .await
            .unwrap();
        assert_eq!(friends.len(), 1);
        assert_eq!(friends[0].id, bob.id);

        let friends = execute(ListFriendsUseCase { user: carol }, &ctx)
            .await
            .unwrap();
        assert!(friends.is_empty());
    }
}
