use actix_web::{web, HttpResponse, Responder, ResponseError};

use crate::config::AppConfig;
use crate::db::{self, DbPool};
use crate::errors::ServiceError;
use crate::handlers::{required, required_secret};
use crate::models::user_models::{AuthResponse, LoginRequest, SignupRequest};
use crate::queries::user_queries::{self, CredentialCheck};

pub async fn get_user(pool: web::Data<DbPool>, user_id_param: web::Path<i32>) -> impl Responder {
    let user_id = user_id_param.into_inner();

    match db::run(&pool, move |conn| user_queries::get_user(conn, user_id)).await {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(e) => e.respond("Failed to fetch user"),
    }
}

pub async fn login(
    pool: web::Data<DbPool>,
    config: web::Data<AppConfig>,
    payload: web::Json<LoginRequest>,
) -> impl Responder {
    let data = payload.into_inner();
    let (email, password) = match (required(data.email), required_secret(data.password)) {
        (Some(e), Some(p)) => (e, p),
        _ => return ServiceError::bad_request("Email and password required").error_response(),
    };

    let check = if config.legacy_login {
        CredentialCheck::Legacy
    } else {
        CredentialCheck::Verify
    };

    match db::run(&pool, move |conn| user_queries::login(conn, &email, &password, check)).await {
        Ok(user) => HttpResponse::Ok().json(AuthResponse {
            success: true,
            user,
            message: "Login successful",
        }),
        Err(e) => e.respond("Login failed"),
    }
}

pub async fn signup(pool: web::Data<DbPool>, payload: web::Json<SignupRequest>) -> impl Responder {
    let data = payload.into_inner();
    let (email, username, password) = match (required(data.email), required(data.username), required_secret(data.password)) {
        (Some(e), Some(u), Some(p)) => (e, u, p),
        _ => return ServiceError::bad_request("Email, username and password required").error_response(),
    };

    match db::run(&pool, move |conn| user_queries::create_user(conn, &email, &username, &password)).await {
        Ok(user) => HttpResponse::Created().json(AuthResponse {
            success: true,
            user,
            message: "Account created successfully",
        }),
        Err(e) => e.respond("Signup failed"),
    }
}
