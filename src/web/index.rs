use actix_web::{get, HttpResponse, Responder};
use serde_json::json;

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    conf.service(view_index);
}

#[get("/")]
async fn view_index() -> impl Responder {
    HttpResponse::Ok().json(json!({ "message": "Survey API is working!" }))
}
