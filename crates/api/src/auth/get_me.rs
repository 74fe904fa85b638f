use crate::error::ApiError;
use crate::shared::auth::protect_route;
use actix_web::{web, HttpRequest, HttpResponse};
use remind_anyone_api_structs::dtos::UserDTO;
use remind_anyone_infra::Context;

pub async fn get_me_controller(
    http_req: HttpRequest,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ApiError> {
    let user = protect_route(&http_req, &ctx).await?;

    Ok(HttpResponse::Ok().json(UserDTO::new(user)))
}
