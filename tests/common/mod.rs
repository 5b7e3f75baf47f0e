#![allow(dead_code)]

pub mod database;
pub mod fixtures;

/// Build an in-process service over `$db` with the clock pinned to
/// `fixtures::fixed_now()`.
macro_rules! init_app {
    ($db:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($db.clone()))
                .app_data(actix_web::web::Data::new($crate::common::fixtures::fixed_clock()))
                .configure(survey_api::web::configure),
        )
        .await
    };
}

pub(crate) use init_app;
