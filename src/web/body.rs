//! Request body extractor for the create endpoints.
//!
//! Accepts a JSON object or an url-encoded form. An empty body reads as `{}`
//! so every missing field is reported by name instead of as a parse error.

use crate::web::error::ApiError;
use actix_web::dev::Payload;
use actix_web::{web, Error, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::LocalBoxFuture;
use serde::de::DeserializeOwned;
use validator::Validate;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

pub struct RequestBody<T>(T);

impl<T: Validate> RequestBody<T> {
    /// Check field presence and hand back the form.
    ///
    /// This is the only presence check; take required fields out of the
    /// returned form with [`present`].
    pub fn validated(self) -> Result<T, ApiError> {
        self.0.validate()?;
        Ok(self.0)
    }
}

impl<T> FromRequest for RequestBody<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        if req.content_type().eq_ignore_ascii_case(FORM_CONTENT_TYPE) {
            let form = web::Form::<T>::from_request(req, payload);
            return Box::pin(async move {
                let form = form.await?;
                Ok::<_, Error>(RequestBody(form.into_inner()))
            });
        }

        let bytes = web::Bytes::from_request(req, payload);
        Box::pin(async move {
            let bytes = bytes.await?;
            let json: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
                &b"{}"[..]
            } else {
                &bytes[..]
            };

            serde_json::from_slice(json)
                .map(RequestBody)
                .map_err(|err| Error::from(ApiError::MalformedBody(err.to_string())))
        })
    }
}

/// Take a field that [`RequestBody::validated`] marked `required`.
pub fn present<T: Default>(value: Option<T>) -> T {
    value.unwrap_or_default()
}
