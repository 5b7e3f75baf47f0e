//! Test fixtures for creating test data

use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::{entity::*, ActiveValue::Set, DatabaseConnection, DbErr};
use std::sync::Arc;
use survey_api::clock::{Clock, FixedClock};
use survey_api::orm::{answers, questions, responses, surveys, users};

/// Instant every test app reports as "now"
pub fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(12, 30, 0)
        .unwrap()
}

/// `fixed_now()` as rendered in JSON bodies
pub const FIXED_NOW_JSON: &str = "2024-05-01T12:30:00";

pub fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(fixed_now()))
}

pub async fn create_test_user(
    db: &DatabaseConnection,
    name: &str,
) -> Result<users::Model, DbErr> {
    users::ActiveModel {
        name: Set(name.to_string()),
        email: Set(format!("{}@test.com", name)),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_test_survey(
    db: &DatabaseConnection,
    user_id: i32,
    title: &str,
) -> Result<surveys::Model, DbErr> {
    surveys::ActiveModel {
        title: Set(title.to_string()),
        description: Set(None),
        status: Set("open".to_string()),
        creation_date: Set(fixed_now()),
        close_date: Set(None),
        user_id: Set(user_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_test_question(
    db: &DatabaseConnection,
    survey_id: i32,
    order: i32,
) -> Result<questions::Model, DbErr> {
    questions::ActiveModel {
        text: Set(format!("Question {}", order)),
        type_: Set("text".to_string()),
        is_required: Set(true),
        order: Set(order),
        survey_id: Set(survey_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_test_response(
    db: &DatabaseConnection,
    survey_link_id: i32,
) -> Result<responses::Model, DbErr> {
    responses::ActiveModel {
        submission_date: Set(fixed_now()),
        is_complete: Set(false),
        survey_link_id: Set(survey_link_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_test_answer(
    db: &DatabaseConnection,
    response_id: i32,
    question_id: i32,
    value: &str,
) -> Result<answers::Model, DbErr> {
    answers::ActiveModel {
        value: Set(value.to_string()),
        response_id: Set(response_id),
        question_id: Set(question_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
