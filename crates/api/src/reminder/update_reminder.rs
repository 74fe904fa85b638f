use crate::error::ApiError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use remind_anyone_api_structs::dtos::ReminderDTO;
use remind_anyone_api_structs::update_reminder::*;
use remind_anyone_domain::{
    policy::{self, ReminderField},
    Reminder, ReminderPatch, User, ID,
};
use remind_anyone_infra::Context;

pub async fn update_reminder_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ApiError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = UpdateReminderUseCase {
        user,
        reminder_id: path_params.reminder_id.clone(),
        patch: body.0.into(),
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(ReminderDTO::new(reminder)))
        .map_err(ApiError::from)
}

#[derive(Debug)]
pub struct UpdateReminderUseCase {
    pub user: User,
    pub reminder_id: ID,
    pub patch: ReminderPatch,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound,
    NotViewer,
    NotRecipient,
    NotCreator,
    StorageError,
}

impl From<UseCaseError> for ApiError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound => Self::NotFound("Reminder not found".into()),
            UseCaseError::NotViewer => {
                Self::Forbidden("You do not have access to this reminder".into())
            }
            UseCaseError::NotRecipient => {
                Self::Forbidden("Only the recipient can change the status".into())
            }
            UseCaseError::NotCreator => {
                Self::Forbidden("Only the creator can update reminder details".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateReminder";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let mut reminder = ctx
            .repos
            .reminders
            .find(&self.reminder_id)
            .await
            .ok_or(UseCaseError::NotFound)?;

        if !policy::can_view(&self.user.id, &reminder) {
            return Err(UseCaseError::NotViewer);
        }

        // A status equal to the stored one is a no-op and bypasses the
        // recipient-only rule.
        let status_changes = self
            .patch
            .status
            .map(|status| status != reminder.status)
            .unwrap_or(false);
        if status_changes
            && !policy::can_mutate_field(&self.user.id, &reminder, ReminderField::Status)
        {
            return Err(UseCaseError::NotRecipient);
        }

        if self.patch.touches_details()
            && !policy::can_mutate_field(&self.user.id, &reminder, ReminderField::Title)
        {
            return Err(UseCaseError::NotCreator);
        }

        reminder.apply(&self.patch);

        ctx.repos
            .reminders
            .save(&reminder)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(reminder)
    }
}
