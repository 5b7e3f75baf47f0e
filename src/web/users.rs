//! User endpoints

use crate::orm::users;
use crate::web::body::{present, RequestBody};
use crate::web::error::ApiError;
use actix_web::{delete, get, post, web, HttpResponse};
use sea_orm::{entity::*, query::*, DatabaseConnection};
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    conf.service(list_users)
        .service(create_user)
        .service(view_user)
        .service(delete_user);
}

#[derive(Serialize)]
struct UserView {
    id: i32,
    name: String,
    email: String,
}

impl From<users::Model> for UserView {
    fn from(u: users::Model) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
        }
    }
}

/// Body for `POST /users`. The email is stored as given.
#[derive(Deserialize, Validate)]
pub struct UserForm {
    #[validate(required)]
    pub name: Option<String>,
    #[validate(required)]
    pub email: Option<String>,
}

#[get("/users")]
async fn list_users(db: web::Data<DatabaseConnection>) -> Result<HttpResponse, ApiError> {
    let views: Vec<UserView> = users::Entity::find()
        .order_by_asc(users::Column::Id)
        .all(db.get_ref())
        .await?
        .into_iter()
        .map(UserView::from)
        .collect();

    Ok(HttpResponse::Ok().json(views))
}

#[post("/users")]
async fn create_user(
    db: web::Data<DatabaseConnection>,
    body: RequestBody<UserForm>,
) -> Result<HttpResponse, ApiError> {
    let form = body.validated()?;

    let user = users::ActiveModel {
        name: Set(present(form.name)),
        email: Set(present(form.email)),
        ..Default::default()
    }
    .insert(db.get_ref())
    .await?;

    log::debug!("Created user {}", user.id);

    Ok(HttpResponse::Created().json(json!({
        "message": "User created",
        "id": user.id,
    })))
}

#[get("/users/{user_id}")]
async fn view_user(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    let user = users::Entity::find_by_id(user_id)
        .one(db.get_ref())
        .await?
        .ok_or_else(|| ApiError::not_found("User", user_id))?;

    Ok(HttpResponse::Ok().json(UserView::from(user)))
}

#[delete("/users/{user_id}")]
async fn delete_user(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    let result = users::Entity::delete_by_id(user_id)
        .exec(db.get_ref())
        .await?;

    if result.rows_affected == 0 {
        return Err(ApiError::not_found("User", user_id));
    }

    log::debug!("Deleted user {}", user_id);

    Ok(HttpResponse::Ok().json(json!({ "message": "User deleted" })))
}
