use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use password_hash::rand_core::OsRng;
use sea_orm::ActiveValue::Set;
use uuid::Uuid;

use crate::{
    audit::record,
    dto::accounts::{
        ChangePasswordRequest, Claims, LoginRequest, LoginResponse, RegisterRequest,
        UpdateProfileRequest,
    },
    entity::users,
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, USER_ROLE},
    models::User,
    repositories::users::UsersRepository,
    response::{ApiResponse, Meta},
    services::required,
    state::AppState,
};

const MIN_PASSWORD_LEN: usize = 6;

pub async fn register_user(
    state: &AppState,
    payload: RegisterRequest,
) -> AppResult<ApiResponse<User>> {
    let users = UsersRepository::new(state.orm.clone());
    let email = normalize_email(&payload.email)?;

    if users.find_by_email(&email).await?.is_some() {
        return Err(AppError::BadRequest("Email is already taken".to_string()));
    }
    check_password(&payload.password)?;

    let user = users
        .add(users::ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(email),
            password_hash: Set(hash_password(&payload.password)?),
            first_name: Set(required(payload.first_name, "First name")?),
            last_name: Set(required(payload.last_name, "Last name")?),
            phone_number: Set(payload.phone_number),
            photo: Set(None),
            role: Set(USER_ROLE.to_string()),
            country_id: Set(payload.country_id),
            profile_id: Set(payload.profile_id),
            reputation_id: Set(None),
            created_at: Set(Utc::now()),
        })
        .await?;

    record(
        &state.orm,
        user.id,
        "user_register",
        "users",
        serde_json::json!({ "user_id": user.id }),
    )
    .await;

    Ok(ApiResponse::success("User created", user.into(), None))
}

pub async fn login_user(
    state: &AppState,
    payload: LoginRequest,
) -> AppResult<ApiResponse<LoginResponse>> {
    let users = UsersRepository::new(state.orm.clone());
    let email = payload.email.trim().to_lowercase();

    let user = users
        .find_by_email(&email)
        .await?
        .ok_or_else(|| AppError::BadRequest("Invalid email or password".into()))?;

    if !verify_password(&payload.password, &user.password_hash)? {
        return Err(AppError::BadRequest("Invalid email or password".into()));
    }

    let resp = issue_token(state, &user)?;

    record(
        &state.orm,
        user.id,
        "user_login",
        "users",
        serde_json::json!({ "user_id": user.id }),
    )
    .await;

    Ok(ApiResponse::success("Logged in", resp, Some(Meta::empty())))
}

pub async fn current_user(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<User>> {
    let found = UsersRepository::new(state.orm.clone()).get(user.user_id).await?;
    Ok(ApiResponse::success("User", found.into(), Some(Meta::empty())))
}

pub async fn update_profile(
    state: &AppState,
    user: &AuthUser,
    payload: UpdateProfileRequest,
) -> AppResult<ApiResponse<User>> {
    let users = UsersRepository::new(state.orm.clone());
    let mut active: users::ActiveModel = users.get(user.user_id).await?.into();

    if let Some(first_name) = payload.first_name {
        active.first_name = Set(required(first_name, "First name")?);
    }
    if let Some(last_name) = payload.last_name {
        active.last_name = Set(required(last_name, "Last name")?);
    }
    if let Some(phone_number) = payload.phone_number {
        active.phone_number = Set(Some(phone_number));
    }
    if let Some(photo) = payload.photo {
        active.photo = Set(Some(photo));
    }
    if let Some(country_id) = payload.country_id {
        active.country_id = Set(Some(country_id));
    }
    if let Some(profile_id) = payload.profile_id {
        active.profile_id = Set(Some(profile_id));
    }

    let updated = users.update(active).await?;
    record(
        &state.orm,
        user.user_id,
        "user_update",
        "users",
        serde_json::json!({ "user_id": user.user_id }),
    )
    .await;

    Ok(ApiResponse::success("Updated", updated.into(), Some(Meta::empty())))
}

pub async fn change_password(
    state: &AppState,
    user: &AuthUser,
    payload: ChangePasswordRequest,
) -> AppResult<ApiResponse<User>> {
    let users = UsersRepository::new(state.orm.clone());
    let existing = users.get(user.user_id).await?;

    if !verify_password(&payload.current_password, &existing.password_hash)? {
        return Err(AppError::BadRequest("Current password is incorrect".into()));
    }
    check_password(&payload.new_password)?;

    let mut active: users::ActiveModel = existing.into();
    active.password_hash = Set(hash_password(&payload.new_password)?);
    let updated = users.update(active).await?;

    record(
        &state.orm,
        user.user_id,
        "user_change_password",
        "users",
        serde_json::json!({ "user_id": user.user_id }),
    )
    .await;

    Ok(ApiResponse::success("Password changed", updated.into(), Some(Meta::empty())))
}

pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))
}

fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Invalid password hash")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

fn issue_token(state: &AppState, user: &users::Model) -> AppResult<LoginResponse> {
    let expires_at = Utc::now()
        .checked_add_signed(Duration::hours(state.config.jwt_ttl_hours))
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to set expiration")))?;

    let claims = Claims {
        sub: user.id.to_string(),
        role: user.role.clone(),
        exp: expires_at.timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(state.config.jwt_secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?;

    Ok(LoginResponse {
        token: format!("Bearer {}", token),
        expires_at,
    })
}

fn normalize_email(email: &str) -> AppResult<String> {
    let email = email.trim().to_lowercase();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(email),
        _ => Err(AppError::BadRequest("Email is invalid".into())),
    }
}

fn check_password(password: &str) -> AppResult<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emails_are_lowercased_and_checked() {
        assert_eq!(normalize_email(" Ana@Example.COM ").unwrap(), "ana@example.com");
        assert!(normalize_email("no-at-sign").is_err());
        assert!(normalize_email("@example.com").is_err());
    }

    #[test]
    fn hashed_password_verifies() {
        let hash = hash_password("reelbuy1").unwrap();
        assert!(verify_password("reelbuy1", &hash).unwrap());
        assert!(!verify_password("wrong-pass", &hash).unwrap());
    }

    #[test]
    fn short_password_is_rejected() {
        assert!(check_password("12345").is_err());
        assert!(check_password("123456").is_ok());
    }
}
