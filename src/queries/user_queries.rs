use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::SqliteConnection;

use crate::errors::{ServiceError, ServiceResult};
use crate::models::user_models::{NewUser, User, UserResponse};
use crate::schema::users;
use crate::utils::auth_utils::{hash_password, normalize_email, verify_password};

/// How `login` treats the password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialCheck {
    /// Verify against the stored bcrypt hash.
    Verify,
    /// Accept any password for a known email.
    Legacy,
}

pub fn get_user(conn: &mut SqliteConnection, user_id: i32) -> ServiceResult<UserResponse> {
    users::table
        .find(user_id)
        .select(UserResponse::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| ServiceError::not_found("User not found"))
}

pub fn create_user(conn: &mut SqliteConnection, email: &str, username: &str, password: &str) -> ServiceResult<UserResponse> {
    let email = normalize_email(email);

    let taken: bool = diesel::select(diesel::dsl::exists(users::table.filter(users::email.eq(&email))))
        .get_result(conn)?;
    if taken {
        return Err(ServiceError::Conflict("This email is already registered".into()));
    }

    let new_user = NewUser {
        email,
        username: username.trim().to_string(),
        password_hash: hash_password(password)?,
    };

    let created = diesel::insert_into(users::table)
        .values(&new_user)
        .returning(UserResponse::as_returning())
        .get_result(conn);

    match created {
        Ok(user) => {
            log::debug!("registered user {}", user.id);
            Ok(user)
        }
        Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
            Err(ServiceError::Conflict("This email is already registered".into()))
        }
        Err(e) => Err(e.into()),
    }
}

pub fn login(conn: &mut SqliteConnection, email: &str, password: &str, check: CredentialCheck) -> ServiceResult<UserResponse> {
    let email = normalize_email(email);

    let user = users::table
        .filter(users::email.eq(&email))
        .select(User::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| ServiceError::Unauthorized("Invalid credentials".into()))?;

    match check {
        CredentialCheck::Legacy => {
            log::warn!("legacy login for user {}: password not verified", user.id);
        }
        CredentialCheck::Verify => {
            if !verify_password(password, &user.password_hash) {
                return Err(ServiceError::Unauthorized("Invalid credentials".into()));
            }
        }
    }

    Ok(UserResponse::from(user))
}
