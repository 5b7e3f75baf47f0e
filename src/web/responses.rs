//! Survey response endpoints
//!
//! A response points at a survey link by id only; links themselves are not
//! stored by this service.

use crate::clock::Clock;
use crate::orm::responses;
use crate::web::body::{present, RequestBody};
use crate::web::error::ApiError;
use actix_web::{delete, get, post, web, HttpResponse};
use chrono::NaiveDateTime;
use sea_orm::{entity::*, query::*, DatabaseConnection};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    conf.service(list_responses)
        .service(create_response)
        .service(view_response)
        .service(delete_response);
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResponseView {
    id: i32,
    submission_date: NaiveDateTime,
    is_complete: bool,
    survey_link_id: i32,
}

impl From<responses::Model> for ResponseView {
    fn from(r: responses::Model) -> Self {
        Self {
            id: r.id,
            submission_date: r.submission_date,
            is_complete: r.is_complete,
            survey_link_id: r.survey_link_id,
        }
    }
}

/// Body for `POST /responses`. `submissionDate` is always the time of the
/// request.
#[derive(Deserialize, Validate)]
pub struct ResponseForm {
    #[validate(required)]
    #[serde(rename = "isComplete")]
    pub is_complete: Option<bool>,
    #[validate(required)]
    #[serde(rename = "surveyLinkId")]
    pub survey_link_id: Option<i32>,
}

#[get("/responses")]
async fn list_responses(db: web::Data<DatabaseConnection>) -> Result<HttpResponse, ApiError> {
    let views: Vec<ResponseView> = responses::Entity::find()
        .order_by_asc(responses::Column::Id)
        .all(db.get_ref())
        .await?
        .into_iter()
        .map(ResponseView::from)
        .collect();

    Ok(HttpResponse::Ok().json(views))
}

#[post("/responses")]
async fn create_response(
    db: web::Data<DatabaseConnection>,
    clock: web::Data<Arc<dyn Clock>>,
    body: RequestBody<ResponseForm>,
) -> Result<HttpResponse, ApiError> {
    let form = body.validated()?;

    let response = responses::ActiveModel {
        submission_date: Set(clock.now()),
        is_complete: Set(present(form.is_complete)),
        survey_link_id: Set(present(form.survey_link_id)),
        ..Default::default()
    }
    .insert(db.get_ref())
    .await?;

    log::debug!("Created response {}", response.id);

    Ok(HttpResponse::Created().json(json!({
        "message": "Response created",
        "id": response.id,
    })))
}

#[get("/responses/{response_id}")]
async fn view_response(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let response_id = path.into_inner();
    let response = responses::Entity::find_by_id(response_id)
        .one(db.get_ref())
        .await?
        .ok_or_else(|| ApiError::not_found("Response", response_id))?;

    Ok(HttpResponse::Ok().json(ResponseView::from(response)))
}

#[delete("/responses/{response_id}")]
async fn delete_response(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let response_id = path.into_inner();
    let result = responses::Entity::delete_by_id(response_id)
        .exec(db.get_ref())
        .await?;

    if result.rows_affected == 0 {
        return Err(ApiError::not_found("Response", response_id));
    }

    log::debug!("Deleted response {}", response_id);

    Ok(HttpResponse::Ok().json(json!({ "message": "Response deleted" })))
}
