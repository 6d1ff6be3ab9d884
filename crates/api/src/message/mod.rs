mod get_message;

use actix_web::web;
use get_message::get_message_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/message", web::get().to(get_message_controller));
}
