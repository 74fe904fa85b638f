use crate::error::ApiError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use remind_anyone_api_structs::dtos::ReminderDTO;
use remind_anyone_domain::{Reminder, User};
use remind_anyone_infra::Context;

pub async fn list_reminders_controller(
    http_req: HttpRequest,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ApiError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = ListRemindersUseCase { user };

    execute(usecase, &ctx)
        .await
        .map(|reminders| {
            HttpResponse::Ok().json(
                reminders
                    .into_iter()
                    .map(ReminderDTO::new)
                    .collect::<Vec<_>>(),
            )
        })
        .map_err(ApiError::from)
}

#[derive(Debug)]
pub struct ListRemindersUseCase {
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
impl UseCase for ListRemindersUseCase {
    type Response = Vec<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "ListReminders";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        Ok(ctx.repos.reminders.find_for_user(&self.user.id).await)
    }
}
