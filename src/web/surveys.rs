//! Survey endpoints

use crate::clock::Clock;
use crate::orm::surveys;
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
    conf.service(list_surveys)
        .service(create_survey)
        .service(view_survey)
        .service(delete_survey);
}

/// Collection entry; the list omits description and dates.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SurveySummary {
    id: i32,
    title: String,
    status: String,
    user_id: i32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SurveyDetail {
    id: i32,
    title: String,
    description: Option<String>,
    status: String,
    creation_date: NaiveDateTime,
    close_date: Option<NaiveDateTime>,
    user_id: i32,
}

impl From<surveys::Model> for SurveySummary {
    fn from(s: surveys::Model) -> Self {
        Self {
            id: s.id,
            title: s.title,
            status: s.status,
            user_id: s.user_id,
        }
    }
}

impl From<surveys::Model> for SurveyDetail {
    fn from(s: surveys::Model) -> Self {
        Self {
            id: s.id,
            title: s.title,
            description: s.description,
            status: s.status,
            creation_date: s.creation_date,
            close_date: s.close_date,
            user_id: s.user_id,
        }
    }
}

/// Body for `POST /surveys`. `creationDate` is stamped by the server and
/// ignored if sent.
#[derive(Deserialize, Validate)]
pub struct SurveyForm {
    #[validate(required)]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(required)]
    pub status: Option<String>,
    #[serde(rename = "closeDate")]
    pub close_date: Option<NaiveDateTime>,
    #[validate(required)]
    #[serde(rename = "userId")]
    pub user_id: Option<i32>,
}

#[get("/surveys")]
async fn list_surveys(db: web::Data<DatabaseConnection>) -> Result<HttpResponse, ApiError> {
    let summaries: Vec<SurveySummary> = surveys::Entity::find()
        .order_by_asc(surveys::Column::Id)
        .all(db.get_ref())
        .await?
        .into_iter()
        .map(SurveySummary::from)
        .collect();

    Ok(HttpResponse::Ok().json(summaries))
}

#[post("/surveys")]
async fn create_survey(
    db: web::Data<DatabaseConnection>,
    clock: web::Data<Arc<dyn Clock>>,
    body: RequestBody<SurveyForm>,
) -> Result<HttpResponse, ApiError> {
    let form = body.validated()?;

    let survey = surveys::ActiveModel {
        title: Set(present(form.title)),
        description: Set(form.description),
        status: Set(present(form.status)),
        creation_date: Set(clock.now()),
        close_date: Set(form.close_date),
        user_id: Set(present(form.user_id)),
        ..Default::default()
    }
    .insert(db.get_ref())
    .await?;

    log::debug!("Created survey {}", survey.id);

    Ok(HttpResponse::Created().json(json!({
        "message": "Survey created",
        "id": survey.id,
    })))
}

#[get("/surveys/{survey_id}")]
async fn view_survey(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let survey_id = path.into_inner();
    let survey = surveys::Entity::find_by_id(survey_id)
        .one(db.get_ref())
        .await?
        .ok_or_else(|| ApiError::not_found("Survey", survey_id))?;

    Ok(HttpResponse::Ok().json(SurveyDetail::from(survey)))
}

#[delete("/surveys/{survey_id}")]
async fn delete_survey(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let survey_id = path.into_inner();
    let result = surveys::Entity::delete_by_id(survey_id)
        .exec(db.get_ref())
        .await?;

    if result.rows_affected == 0 {
        return Err(ApiError::not_found("Survey", survey_id));
    }

    log::debug!("Deleted survey {}", survey_id);

    Ok(HttpResponse::Ok().json(json!({ "message": "Survey deleted" })))
}
