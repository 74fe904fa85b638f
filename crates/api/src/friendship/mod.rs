mod add_friend;
mod list_friends;

use actix_web::web;
use add_friend::add_friend_controller;
use list_friends::list_friends_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/friends/", web::post().to(add_friend_controller));
    cfg.route("/friends/", web::get().to(list_friends_controller));
}
