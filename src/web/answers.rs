//! Answer endpoints

use crate::orm::answers;
use crate::web::body::{present, RequestBody};
use crate::web::error::ApiError;
use actix_web::{delete, get, post, web, HttpResponse};
use sea_orm::{entity::*, query::*, DatabaseConnection};
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    conf.service(list_answers)
        .service(create_answer)
        .service(view_answer)
        .service(delete_answer);
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnswerView {
    id: i32,
    value: String,
    response_id: i32,
    question_id: i32,
}

impl From<answers::Model> for AnswerView {
    fn from(a: answers::Model) -> Self {
        Self {
            id: a.id,
            value: a.value,
            response_id: a.response_id,
            question_id: a.question_id,
        }
    }
}

#[derive(Deserialize, Validate)]
pub struct AnswerForm {
    #[validate(required)]
    pub value: Option<String>,
    #[validate(required)]
    #[serde(rename = "responseId")]
    pub response_id: Option<i32>,
    #[validate(required)]
    #[serde(rename = "questionId")]
    pub question_id: Option<i32>,
}

#[get("/answers")]
async fn list_answers(db: web::Data<DatabaseConnection>) -> Result<HttpResponse, ApiError> {
    let views: Vec<AnswerView> = answers::Entity::find()
        .order_by_asc(answers::Column::Id)
        .all(db.get_ref())
        .await?
        .into_iter()
        .map(AnswerView::from)
        .collect();

    Ok(HttpResponse::Ok().json(views))
}

#[post("/answers")]
async fn create_answer(
    db: web::Data<DatabaseConnection>,
    body: RequestBody<AnswerForm>,
) -> Result<HttpResponse, ApiError> {
    let form = body.validated()?;

    let answer = answers::ActiveModel {
        value: Set(present(form.value)),
        response_id: Set(present(form.response_id)),
        question_id: Set(present(form.question_id)),
        ..Default::default()
    }
    .insert(db.get_ref())
    .await?;

    log::debug!("Created answer {}", answer.id);

    Ok(HttpResponse::Created().json(json!({
        "message": "Answer created",
        "id": answer.id,
    })))
}

#[get("/answers/{answer_id}")]
async fn view_answer(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let answer_id = path.into_inner();
    let answer = answers::Entity::find_by_id(answer_id)
        .one(db.get_ref())
        .await?
        .ok_or_else(|| ApiError::not_found("Answer", answer_id))?;

    Ok(HttpResponse::Ok().json(AnswerView::from(answer)))
}

#[delete("/answers/{answer_id}")]
async fn delete_answer(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let answer_id = path.into_inner();
    let result = answers::Entity::delete_by_id(answer_id)
        .exec(db.get_ref())
        .await?;

    if result.rows_affected == 0 {
        return Err(ApiError::not_found("Answer", answer_id));
    }

    log::debug!("Deleted answer {}", answer_id);

    Ok(HttpResponse::Ok().json(json!({ "message": "Answer deleted" })))
}
