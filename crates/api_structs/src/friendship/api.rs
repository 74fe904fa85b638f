use crate::dtos::UserDTO;
use serde::{Deserialize, Serialize};

pub mod add_friend {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct RequestBody {
        /// Email or username of the user to befriend; whichever field
        /// matches first wins.
        pub friend_email_or_username: String,
    }

    pub type APIResponse = UserDTO;
}

pub mod list_friends {
    use super::*;

    pub type APIResponse = Vec<UserDTO>;
}
