use serde::{Deserialize, Serialize};

pub mod get_status {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub message: String,
    }
}
