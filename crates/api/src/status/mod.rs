use actix_web::{web, HttpResponse};
use serde_json::json;

async fn status() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": "Welcome to Remind Anyone API"
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(status));
}
