use actix_web::{web, HttpResponse};
use chrono::Utc;
use mongodb::bson::doc;
use mongodb::error::{ErrorKind, WriteError, WriteFailure};
use mongodb::Client;
use serde_json::json;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::db::mongo::USERS_COLLECTION;
use crate::error::ApiError;
use crate::middleware::auth::generate_token;
use crate::models::user::{RegisterRequest, SigninRequest, TokenResponse, User, UserSummary};

const MIN_PASSWORD_LENGTH: usize = 6;
const DUPLICATE_KEY: i32 = 11000;

fn users(client: &Client, config: &AppConfig) -> mongodb::Collection<User> {
    client
        .database(&config.mongodb_database)
        .collection(USERS_COLLECTION)
}

/*
    POST /api/auth/register
*/
pub async fn register(
    data: web::Data<Arc<Client>>,
    config: web::Data<AppConfig>,
    input: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    let input = input.into_inner();
    let (email, password) = validate_registration(&input)?;

    let collection = users(&data, &config);
    if collection.find_one(doc! { "email": &email }).await?.is_some() {
        return Err(ApiError::conflict("User already exists"));
    }

    let now = Utc::now();
    let user = User {
        id: None,
        email,
        name: input
            .name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty()),
        image: None,
        password: bcrypt::hash(password, bcrypt::DEFAULT_COST)?,
        created_at: Some(now),
        updated_at: Some(now),
    };

    let result = collection.insert_one(&user).await.map_err(|err| {
        if is_duplicate_key(&err) {
            ApiError::conflict("User already exists")
        } else {
            ApiError::from(err)
        }
    })?;

    let id = result
        .inserted_id
        .as_object_id()
        .map(|id| id.to_hex())
        .unwrap_or_default();
    log::info!("Registered user {}", id);

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "user": UserSummary {
            id,
            email: user.email,
            name: user.name,
        },
    })))
}

/*
    POST /api/auth/signin
*/
pub async fn signin(
    data: web::Data<Arc<Client>>,
    config: web::Data<AppConfig>,
    input: web::Json<SigninRequest>,
) -> Result<HttpResponse, ApiError> {
    let input = input.into_inner();
    let email = input.email.trim().to_lowercase();
    if email.is_empty() || input.password.is_empty() {
        return Err(ApiError::validation("Email and password are required"));
    }

    let user = match users(&data, &config)
        .find_one(doc! { "email": &email })
        .await?
    {
        Some(user) => user,
        None => {
            log::warn!("Sign-in failed: user not found for {}", email);
            return Err(ApiError::Unauthorized);
        }
    };

    if !bcrypt::verify(&input.password, &user.password).unwrap_or(false) {
        log::warn!("Sign-in failed: invalid password for {}", email);
        return Err(ApiError::Unauthorized);
    }

    let user_id = user.id.map(|id| id.to_hex()).ok_or(ApiError::Unauthorized)?;
    let token = generate_token(&user.email, &user_id, &config.jwt_secret)?;

    Ok(HttpResponse::Ok().json(TokenResponse { auth_token: token }))
}

/// Normalised email and password, or the first validation failure.
fn validate_registration(input: &RegisterRequest) -> Result<(String, String), ApiError> {
    let email = input
        .email
        .as_deref()
        .map(|email| email.trim().to_lowercase())
        .unwrap_or_default();
    let password = input.password.clone().unwrap_or_default();

    if email.is_empty() || password.is_empty() {
        return Err(ApiError::validation("Email and password are required"));
    }
    if !is_valid_email(&email) {
        return Err(ApiError::validation("Invalid email address"));
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ApiError::validation(
            "Password must be at least 6 characters",
        ));
    }

    Ok((email, password))
}

fn is_valid_email(email: &str) -> bool {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?)*$",
    )
    .map(|re| re.is_match(email))
    .unwrap_or(false)
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(WriteError { code, .. })) if *code == DUPLICATE_KEY
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: Option<&str>, password: Option<&str>) -> RegisterRequest {
        RegisterRequest {
            name: None,
            email: email.map(str::to_string),
            password: password.map(str::to_string),
        }
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("traveler@example.com"));
        assert!(!is_valid_email("invalid-email"));
        assert!(!is_valid_email("two@@example.com"));
    }

    #[test]
    fn test_registration_normalises_email() {
        let (email, password) =
            validate_registration(&request(Some("  Ana@Example.COM "), Some("secret1"))).unwrap();
        assert_eq!(email, "ana@example.com");
        assert_eq!(password, "secret1");
    }

    #[test]
    fn test_registration_rejects_missing_fields() {
        assert!(validate_registration(&request(None, Some("secret1"))).is_err());
        assert!(validate_registration(&request(Some("ana@example.com"), None)).is_err());
    }

    #[test]
    fn test_registration_rejects_short_password() {
        let err = validate_registration(&request(Some("ana@example.com"), Some("12345")))
            .unwrap_err();
        assert_eq!(err.to_string(), "Password must be at least 6 characters");
    }
}
