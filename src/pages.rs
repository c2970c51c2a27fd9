use actix_web::http::header::ContentType;
use actix_web::web::{resource, ServiceConfig};
use actix_web::HttpResponse;

pub async fn homepage() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(include_str!("../static/index.html"))
}

pub fn configure(config: &mut ServiceConfig) {
    config.service(resource("/").to(homepage));
}
