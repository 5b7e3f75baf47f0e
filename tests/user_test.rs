//! Integration tests for /users

mod common;

use actix_web::{http::StatusCode, test};
use common::{database::*, fixtures::*, init_app};
use sea_orm::EntityTrait;
use serde_json::{json, Value};
use survey_api::orm::{surveys, users};

#[actix_rt::test]
async fn test_create_and_get_user() {
    let db = setup_test_database().await.unwrap();
    let app = init_app!(db);

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "name": "Ada", "email": "ada@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "message": "User created", "id": 1 }));

    let req = test::TestRequest::get().uri("/users/1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body,
        json!({ "id": 1, "name": "Ada", "email": "ada@example.com" })
    );
}

#[actix_rt::test]
async fn test_create_user_requires_email() {
    let db = setup_test_database().await.unwrap();
    let app = init_app!(db);

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "name": "Nobody" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({ "message": { "email": "Missing required parameter" } })
    );
    assert!(users::Entity::find().all(&db).await.unwrap().is_empty());
}

#[actix_rt::test]
async fn test_list_users() {
    let db = setup_test_database().await.unwrap();
    create_test_user(&db, "alice").await.unwrap();
    create_test_user(&db, "bob").await.unwrap();
    let app = init_app!(db);

    let req = test::TestRequest::get().uri("/users").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        body,
        json!([
            { "id": 1, "name": "alice", "email": "alice@test.com" },
            { "id": 2, "name": "bob", "email": "bob@test.com" },
        ])
    );
}

#[actix_rt::test]
async fn test_delete_user_keeps_their_surveys() {
    let db = setup_test_database().await.unwrap();
    let user = create_test_user(&db, "leaver").await.unwrap();
    let survey = create_test_survey(&db, user.id, "Left behind").await.unwrap();
    let app = init_app!(db);

    let req = test::TestRequest::delete()
        .uri(&format!("/users/{}", user.id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "message": "User deleted" }));

    let req = test::TestRequest::get()
        .uri(&format!("/users/{}", user.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let survey = surveys::Entity::find_by_id(survey.id)
        .one(&db)
        .await
        .unwrap();
    assert!(survey.is_some());
}

#[actix_rt::test]
async fn test_get_missing_user() {
    let db = setup_test_database().await.unwrap();
    let app = init_app!(db);

    let req = test::TestRequest::get().uri("/users/99999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "message": "User 99999 not found" }));
}
