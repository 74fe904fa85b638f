use crate::shared::entity::{Entity, ID};

/// A registered identity. Users are provisioned on first successful
/// login and never deleted. `email` and `username` are unique,
/// enforced by the storage layer.
#[derive(Debug, Clone)]
pub struct User {
    pub id: ID,
    pub email: String,
    pub username: String,
    pub full_name: Option<String>,
    pub picture: Option<String>,
    /// Expo push token of the user's device, if registered.
    /// Overwritten wholesale on update, no history kept.
    pub expo_push_token: Option<String>,
}

impl User {
    pub fn new(email: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: Default::default(),
            email: email.into(),
            username: username.into(),
            full_name: None,
            picture: None,
            expo_push_token: None,
        }
    }
}

impl Entity<ID> for User {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
