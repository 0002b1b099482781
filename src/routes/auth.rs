use crate::{
    auth::{issue_token, LoginRequest, LoginResponse, MessageResponse, SignupRequest},
    config::Config,
    db,
    error::AppError,
};
use actix_web::{post, web, HttpResponse, Responder};
use sqlx::PgPool;
use validator::Validate;

/// Login
///
/// Verifies the credentials and returns a one-hour bearer token. Unknown
/// usernames and wrong passwords get the same 401.
#[post("/")]
pub async fn login(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    login_data.validate()?;

    let user_id =
        db::users::verify_credentials(&pool, &login_data.username, &login_data.password).await?;

    let token = issue_token(user_id, &config.jwt_secret)?;
    log::info!("user {} logged in", user_id);

    Ok(HttpResponse::Ok().json(LoginResponse {
        message: "login successful".to_string(),
        token,
    }))
}

/// Signup
///
/// Creates a new user account. A taken username is a 409, decided at the
/// storage layer's unique constraint.
#[post("/Signup")]
pub async fn signup(
    pool: web::Data<PgPool>,
    signup_data: web::Json<SignupRequest>,
) -> Result<impl Responder, AppError> {
    signup_data.validate()?;

    let user_id = db::users::register(&pool, &signup_data.username, &signup_data.password).await?;
    log::info!("registered user {}", user_id);

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "signup complete".to_string(),
    }))
}
