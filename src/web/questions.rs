//! Question endpoints

use crate::orm::questions;
use crate::web::body::{present, RequestBody};
use crate::web::error::ApiError;
use actix_web::{delete, get, post, web, HttpResponse};
use sea_orm::{entity::*, query::*, DatabaseConnection};
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    conf.service(list_questions)
        .service(create_question)
        .service(view_question)
        .service(delete_question);
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QuestionView {
    id: i32,
    text: String,
    #[serde(rename = "type")]
    type_: String,
    is_required: bool,
    order: i32,
    survey_id: i32,
}

impl From<questions::Model> for QuestionView {
    fn from(q: questions::Model) -> Self {
        Self {
            id: q.id,
            text: q.text,
            type_: q.type_,
            is_required: q.is_required,
            order: q.order,
            survey_id: q.survey_id,
        }
    }
}

#[derive(Deserialize, Validate)]
pub struct QuestionForm {
    #[validate(required)]
    pub text: Option<String>,
    #[validate(required)]
    #[serde(rename = "type")]
    pub type_: Option<String>,
    #[validate(required)]
    #[serde(rename = "isRequired")]
    pub is_required: Option<bool>,
    #[validate(required)]
    pub order: Option<i32>,
    #[validate(required)]
    #[serde(rename = "surveyId")]
    pub survey_id: Option<i32>,
}

#[get("/questions")]
async fn list_questions(db: web::Data<DatabaseConnection>) -> Result<HttpResponse, ApiError> {
    let views: Vec<QuestionView> = questions::Entity::find()
        .order_by_asc(questions::Column::Id)
        .all(db.get_ref())
        .await?
        .into_iter()
        .map(QuestionView::from)
        .collect();

    Ok(HttpResponse::Ok().json(views))
}

#[post("/questions")]
async fn create_question(
    db: web::Data<DatabaseConnection>,
    body: RequestBody<QuestionForm>,
) -> Result<HttpResponse, ApiError> {
    let form = body.validated()?;

    let question = questions::ActiveModel {
        text: Set(present(form.text)),
        type_: Set(present(form.type_)),
        is_required: Set(present(form.is_required)),
        order: Set(present(form.order)),
        survey_id: Set(present(form.survey_id)),
        ..Default::default()
    }
    .insert(db.get_ref())
    .await?;

    log::debug!("Created question {}", question.id);

    Ok(HttpResponse::Created().json(json!({
        "message": "Question created",
        "id": question.id,
    })))
}

#[get("/questions/{question_id}")]
async fn view_question(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let question_id = path.into_inner();
    let question = questions::Entity::find_by_id(question_id)
        .one(db.get_ref())
        .await?
        .ok_or_else(|| ApiError::not_found("Question", question_id))?;

    Ok(HttpResponse::Ok().json(QuestionView::from(question)))
}

#[delete("/questions/{question_id}")]
async fn delete_question(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let question_id = path.into_inner();
    let result = questions::Entity::delete_by_id(question_id)
        .exec(db.get_ref())
        .await?;

    if result.rows_affected == 0 {
        return Err(ApiError::not_found("Question", question_id));
    }

    log::debug!("Deleted question {}", question_id);

    Ok(HttpResponse::Ok().json(json!({ "message": "Question deleted" })))
}
