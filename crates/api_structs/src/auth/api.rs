use crate::dtos::{TokenDTO, UserDTO};
use serde::{Deserialize, Serialize};

pub mod get_token {
    use super::*;

    /// OAuth2 password grant form fields. The password is accepted
    /// but ignored by the dev login flow.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct RequestBody {
        pub username: String,
        pub password: String,
    }

    pub type APIResponse = TokenDTO;
}

pub mod login {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct RequestBody {
        pub id_token: String,
    }

    pub type APIResponse = TokenDTO;
}

pub mod get_me {
    use super::*;

    pub type APIResponse = UserDTO;
}

pub mod set_device_token {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct RequestBody {
        pub token: String,
    }

    pub type APIResponse = UserDTO;
}
