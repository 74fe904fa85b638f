use remind_anyone_domain::{User, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserDTO {
    pub id: ID,
    pub email: String,
    pub username: String,
    pub full_name: Option<String>,
    pub picture: Option<String>,
    pub expo_push_token: Option<String>,
}

impl UserDTO {
    pub fn new(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
            full_name: user.full_name,
            picture: user.picture,
            expo_push_token: user.expo_push_token,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct TokenDTO {
    pub access_token: String,
    pub token_type: String,
}

impl TokenDTO {
    pub fn new(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".into(),
        }
    }
}
