use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use std::future::Future;
use std::pin::Pin;

use crate::models::User;
use crate::routes::{error::ApiError, AppState};

/// Header carrying the caller's user id
pub const USER_ID_HEADER: &str = "user-id";

/// Caller identified by the `user-id` header
///
/// Rejects with 401 when the header is missing or names no known user.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

impl FromRequest for AuthenticatedUser {
    type Error = ApiError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let header = req
            .headers()
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        Box::pin(async move {
            let raw = header
                .ok_or_else(|| ApiError::Unauthorized("Authentication required".to_string()))?;
            let state = state.ok_or_else(|| {
                ApiError::Internal("Application state is not configured".to_string())
            })?;

            let user = match raw.trim().parse::<u64>() {
                Ok(id) => state.repo.get_user(id).await?,
                Err(_) => None,
            };

            user.map(AuthenticatedUser)
                .ok_or_else(|| ApiError::Unauthorized("Invalid user".to_string()))
        })
    }
}

/// Require a shelter admin or site admin
pub fn require_shelter_admin(user: &User) -> Result<(), ApiError> {
    if user.is_shelter_admin || user.is_admin {
        Ok(())
    } else {
        Err(ApiError::Forbidden("Shelter admin access required".to_string()))
    }
}

/// Require a site admin
pub fn require_admin(user: &User) -> Result<(), ApiError> {
    if user.is_admin {
        Ok(())
    } else {
        Err(ApiError::Forbidden("Admin access required".to_string()))
    }
}
