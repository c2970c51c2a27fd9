//! Posting comments on behalf of the signed-in user.

use actix_web::web::{post, resource, ServiceConfig};

pub mod forms;
pub mod views;

pub fn configure(config: &mut ServiceConfig) {
    config.service(resource("/comment").route(post().to(views::post_comment)));
}
