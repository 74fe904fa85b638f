use super::create_reminder::CreateReminderUseCase;
use crate::shared::usecase::Subscriber;
use remind_anyone_domain::Reminder;
use remind_anyone_infra::{Context, ExpoPushMessage};
use tracing::warn;

/// Pushes a device notification to the recipient after a reminder is
/// created. Delivery is best-effort and never fails the request.
pub struct SendPushOnReminderCreated;

#[async_trait::async_trait(?Send)]
impl Subscriber<CreateReminderUseCase> for SendPushOnReminderCreated {
    async fn notify(&self, reminder: &Reminder, ctx: &Context) {
        let recipient = match ctx.repos.users.find(&reminder.recipient_id).await {
            Some(recipient) => recipient,
            None => {
                warn!(
                    "Skipping push notification. Recipient not found: {}",
                    reminder.recipient_id
                );
                return;
            }
        };
        let push_token = match recipient.expo_push_token {
            Some(token) => token,
            // Recipient has not registered a device.
            None => return,
        };
        let creator = match ctx.repos.users.find(&reminder.creator_id).await {
            Some(creator) => creator,
            None => {
                warn!(
                    "Skipping push notification. Creator not found: {}",
                    reminder.creator_id
                );
                return;
            }
        };

        let message = ExpoPushMessage {
            to: push_token,
            title: format!("New Reminder from {}", creator.username),
            body: reminder.title.clone(),
        };
        if let Err(e) = ctx.push.send(&message).await {
            warn!("Failed to deliver push notification: {:?}", e);
        }
    }
}
