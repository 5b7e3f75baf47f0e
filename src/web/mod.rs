pub mod answers;
pub mod body;
pub mod error;
pub mod index;
pub mod questions;
pub mod responses;
pub mod surveys;
pub mod users;

use actix_web::web;
use error::ApiError;

/// Configures the web app by adding services from each web file.
///
/// Handlers expect `web::Data<DatabaseConnection>` and
/// `web::Data<Arc<dyn Clock>>` to be registered on the `App`.
///
/// @see https://docs.rs/actix-web/4/actix_web/struct.App.html#method.configure
pub fn configure(conf: &mut web::ServiceConfig) {
    conf.app_data(
        web::FormConfig::default()
            .error_handler(|err, _req| ApiError::MalformedBody(err.to_string()).into()),
    )
    // Non-integer ids never match a row.
    .app_data(
        web::PathConfig::default().error_handler(|_err, _req| ApiError::RouteNotFound.into()),
    )
    .default_service(web::to(error::not_found));

    index::configure(conf);
    answers::configure(conf);
    questions::configure(conf);
    responses::configure(conf);
    surveys::configure(conf);
    users::configure(conf);
}
