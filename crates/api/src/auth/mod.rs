mod get_me;
mod get_token;
mod login;
mod set_device_token;

use actix_web::web;
use get_me::get_me_controller;
use get_token::get_token_controller;
use login::login_controller;
use set_device_token::set_device_token_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/auth/token", web::post().to(get_token_controller));
    cfg.route("/auth/login", web::post().to(login_controller));
    cfg.route("/auth/me", web::get().to(get_me_controller));
    cfg.route(
        "/auth/me/device-token",
        web::put().to(set_device_token_controller),
    );
}
