use actix_web::dev::Payload;
use actix_web::{web, Error as ActixError, FromRequest, HttpRequest};
use std::future::{ready, Ready};

use crate::auth::token::verify_token;
use crate::config::Config;
use crate::error::AppError;

/// Extracts and verifies the bearer token, yielding the authenticated user's
/// id. Declaring this as a handler argument is what makes a route protected;
/// there is no separate middleware layer.
///
/// Fails with `TokenMissing` when the `Authorization` header is absent or not
/// a `Bearer` scheme, and with `TokenExpired`/`TokenInvalid` from
/// verification.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUserId(pub i32);

impl FromRequest for AuthenticatedUserId {
    type Error = ActixError; // AppError converts via ResponseError
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract(req).map(AuthenticatedUserId).map_err(Into::into))
    }
}

fn extract(req: &HttpRequest) -> Result<i32, AppError> {
    let token = req
        .headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(AppError::TokenMissing)?;

    let config = req
        .app_data::<web::Data<Config>>()
        .ok_or_else(|| AppError::Storage("Config not registered in app data".into()))?;

    verify_token(token, &config.jwt_secret)
}
