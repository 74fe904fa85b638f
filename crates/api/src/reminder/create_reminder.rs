use super::subscribers::SendPushOnReminderCreated;
use crate::error::ApiError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, Subscriber, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::{DateTime, Utc};
use remind_anyone_api_structs::create_reminder::*;
use remind_anyone_api_structs::dtos::ReminderDTO;
use remind_anyone_domain::{policy, Reminder, Severity, User, ID};
use remind_anyone_infra::Context;

pub async fn create_reminder_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ApiError> {
    let user = protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = CreateReminderUseCase {
        user,
        title: body.title,
        description: body.description,
        due_date: body.due_date,
        severity: body.severity.unwrap_or_default(),
        recipient_id: body.recipient_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(ReminderDTO::new(reminder)))
        .map_err(ApiError::from)
}

#[derive(Debug)]
pub struct CreateReminderUseCase {
    pub user: User,
    pub title: String,
    pub description: Option<String>,
    pub due_date: DateTime<Utc>,
    pub severity: Severity,
    pub recipient_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    RecipientNotFound,
    NotFriends,
    StorageError,
}

impl From<UseCaseError> for ApiError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::RecipientNotFound => Self::NotFound("User not found".into()),
            UseCaseError::NotFriends => {
                Self::BadClientData("You can only send reminders to friends".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateReminder";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        if ctx.repos.users.find(&self.recipient_id).await.is_none() {
            return Err(UseCaseError::RecipientNotFound);
        }

        let are_friends = ctx
            .repos
            .friendships
            .exists(&self.user.id, &self.recipient_id)
            .await;
        if !policy::can_create_reminder(&self.user.id, &self.recipient_id, are_friends) {
            return Err(UseCaseError::NotFriends);
        }

        let reminder = Reminder {
            id: Default::default(),
            title: self.title.clone(),
            description: self.description.clone(),
            due_date: self.due_date,
            severity: self.severity,
            status: Default::default(),
            creator_id: self.user.id.clone(),
            recipient_id: self.recipient_id.clone(),
            created_at: ctx.sys.get_utc_datetime(),
        };

        ctx.repos
            .reminders
            .insert(&reminder)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(reminder)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(SendPushOnReminderCreated)]
    }
}
