mod auth;
mod friendship;
mod reminder;
mod status;

pub mod dtos {
    pub use crate::auth::dtos::*;
    pub use crate::reminder::dtos::*;
}

pub use crate::auth::api::*;
pub use crate::friendship::api::*;
pub use crate::reminder::api::*;
pub use crate::status::api::*;
