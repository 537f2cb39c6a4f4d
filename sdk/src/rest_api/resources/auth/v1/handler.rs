// Copyright 2024 HerbsTrace Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Arc;

use chrono::Utc;

use crate::rest_api::resources::error::ErrorResponse;
use crate::users::store::{NewUserBuilder, UserStore, UserStoreError, UserType};

use super::payloads::{AuthResponse, LoginRequest, SignupRequest, UserSlice};

const DUPLICATE_EMAIL: &str = "User already exists with this email";
const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Registers a user, storing a bcrypt hash of the password computed with `hash_cost`.
pub async fn signup(
    store: Arc<dyn UserStore>,
    hash_cost: u32,
    request: SignupRequest,
) -> Result<AuthResponse, ErrorResponse> {
    let (name, email, password, user_type) = match (
        non_empty(request.name),
        non_empty(request.email),
        non_empty(request.password),
        non_empty(request.user_type),
    ) {
        (Some(name), Some(email), Some(password), Some(user_type)) => {
            (name, email, password, user_type)
        }
        _ => return Err(ErrorResponse::new(400, "All fields are required")),
    };

    let user_type = user_type
        .parse::<UserType>()
        .map_err(|err| ErrorResponse::new(400, &err.to_string()))?;

    match store.fetch_user_by_email(&email) {
        Ok(Some(_)) => return Err(ErrorResponse::new(400, DUPLICATE_EMAIL)),
        Ok(None) => (),
        Err(err) => return Err(user_store_error_response(err)),
    }

    let password_hash = bcrypt::hash(password, hash_cost)
        .map_err(|err| ErrorResponse::internal_error(Box::new(err)))?;

    let mut builder = NewUserBuilder::new()
        .with_name(name)
        .with_email(email)
        .with_password_hash(password_hash)
        .with_user_type(user_type)
        .with_created_at(Utc::now().naive_utc());
    if let Some(phone) = non_empty(request.phone) {
        builder = builder.with_phone(phone);
    }
    if let Some(address) = non_empty(request.address) {
        builder = builder.with_address(address);
    }
    if let Some(wallet_address) = non_empty(request.wallet_address) {
        builder = builder.with_wallet_address(wallet_address);
    }
    let new_user = builder
        .build()
        .map_err(|err| ErrorResponse::internal_error(Box::new(err)))?;

    let user = store.add_user(new_user).map_err(|err| match err {
        UserStoreError::ConstraintViolationError(_) => ErrorResponse::new(400, DUPLICATE_EMAIL),
        err => user_store_error_response(err),
    })?;

    info!("Registered {} user {}", user.user_type, user.id);

    Ok(AuthResponse {
        success: true,
        user: UserSlice::from(user),
    })
}

pub async fn login(
    store: Arc<dyn UserStore>,
    request: LoginRequest,
) -> Result<AuthResponse, ErrorResponse> {
    let (email, password) = match (non_empty(request.email), non_empty(request.password)) {
        (Some(email), Some(password)) => (email, password),
        _ => return Err(ErrorResponse::new(400, "Email and password are required")),
    };

    let user = store
        .fetch_user_by_email(&email)
        .map_err(user_store_error_response)?
        .ok_or_else(|| ErrorResponse::new(401, INVALID_CREDENTIALS))?;

    let verified = bcrypt::verify(password, &user.password_hash)
        .map_err(|err| ErrorResponse::internal_error(Box::new(err)))?;
    if !verified {
        debug!("Rejected login for user {}", user.id);
        return Err(ErrorResponse::new(401, INVALID_CREDENTIALS));
    }

    Ok(AuthResponse {
        success: true,
        user: UserSlice::from(user),
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

fn user_store_error_response(err: UserStoreError) -> ErrorResponse {
    match err {
        UserStoreError::NotFoundError(_) => ErrorResponse::new(401, INVALID_CREDENTIALS),
        UserStoreError::ConstraintViolationError(err) => {
            ErrorResponse::new(409, &format!("User could not be stored: {}", err))
        }
        UserStoreError::ResourceTemporarilyUnavailableError(err) => {
            ErrorResponse::service_unavailable(Box::new(err))
        }
        UserStoreError::InternalError(err) => ErrorResponse::internal_error(Box::new(err)),
    }
}

#[cfg(all(test, feature = "sqlite"))]
mod tests {
    use super::*;

    use crate::migrations::run_sqlite_migrations;
    use crate::store::sqlite::create_sqlite_pool;
    use crate::users::store::DieselUserStore;

    const TEST_COST: u32 = 4;

    fn user_store() -> Result<Arc<dyn UserStore>, Box<dyn std::error::Error>> {
        let pool = create_sqlite_pool(":memory:")?;
        run_sqlite_migrations(&*pool.get()?)?;
        Ok(Arc::new(DieselUserStore::new(pool)))
    }

    fn signup_request(email: &str) -> SignupRequest {
        SignupRequest {
            name: Some("Asha".to_string()),
            email: Some(email.to_string()),
            password: Some("s3cret".to_string()),
            user_type: Some("farmer".to_string()),
            ..SignupRequest::default()
        }
    }

    fn login_request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[actix_rt::test]
    async fn test_signup_then_login() -> Result<(), Box<dyn std::error::Error>> {
        let store = user_store()?;

        let registered = signup(store.clone(), TEST_COST, signup_request("asha@example.com"))
            .await
            .map_err(|err| err.message().to_string())?;
        assert!(registered.success);
        assert_eq!(registered.user.user_type, "farmer");

        let logged_in = login(store, login_request("asha@example.com", "s3cret"))
            .await
            .map_err(|err| err.message().to_string())?;
        assert_eq!(logged_in.user, registered.user);

        Ok(())
    }

    #[actix_rt::test]
    async fn test_signup_duplicate_email() -> Result<(), Box<dyn std::error::Error>> {
        let store = user_store()?;
        signup(store.clone(), TEST_COST, signup_request("asha@example.com"))
            .await
            .map_err(|err| err.message().to_string())?;

        let err = signup(store, TEST_COST, signup_request("asha@example.com"))
            .await
            .err()
            .ok_or("expected an error")?;
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.message(), "User already exists with this email");

        Ok(())
    }

    #[actix_rt::test]
    async fn test_signup_validation() -> Result<(), Box<dyn std::error::Error>> {
        let store = user_store()?;

        let mut missing_password = signup_request("asha@example.com");
        missing_password.password = None;
        let err = signup(store.clone(), TEST_COST, missing_password)
            .await
            .err()
            .ok_or("expected an error")?;
        assert_eq!(err.message(), "All fields are required");

        let mut bad_type = signup_request("asha@example.com");
        bad_type.user_type = Some("admin".to_string());
        let err = signup(store, TEST_COST, bad_type)
            .await
            .err()
            .ok_or("expected an error")?;
        assert_eq!(err.status_code(), 400);

        Ok(())
    }

    #[actix_rt::test]
    async fn test_login_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let store = user_store()?;
        signup(store.clone(), TEST_COST, signup_request("asha@example.com"))
            .await
            .map_err(|err| err.message().to_string())?;

        let wrong_password = login(store.clone(), login_request("asha@example.com", "guess"))
            .await
            .err()
            .ok_or("expected an error")?;
        assert_eq!(wrong_password.status_code(), 401);
        assert_eq!(wrong_password.message(), "Invalid email or password");

        let unknown = login(store.clone(), login_request("nobody@example.com", "s3cret"))
            .await
            .err()
            .ok_or("expected an error")?;
        assert_eq!(unknown.status_code(), 401);

        let missing = login(store, LoginRequest::default())
            .await
            .err()
            .ok_or("expected an error")?;
        assert_eq!(missing.status_code(), 400);

        Ok(())
    }
}
