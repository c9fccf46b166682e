use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::models::{LoginRequest, LoginResponse, NewPreferences, NewUser};
use crate::routes::{ApiError, AppState, AuthenticatedUser};
use crate::services::Upsert;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/users/register", web::post().to(register))
        .route("/users/login", web::post().to(login))
        .service(
            web::resource("/users/preferences")
                .route(web::get().to(get_preferences))
                .route(web::post().to(save_preferences)),
        );
}

/// Register a new user
///
/// POST /api/users/register
async fn register(
    state: web::Data<AppState>,
    body: web::Json<NewUser>,
) -> Result<HttpResponse, ApiError> {
    let new_user = body.into_inner();
    new_user.validate()?;

    let user = state.repo.create_user(new_user).await?;
    tracing::info!("Registered user {} ({})", user.id, user.username);

    Ok(HttpResponse::Created().json(user))
}

/// Check credentials and return the account
///
/// POST /api/users/login
async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate()
        .map_err(|_| ApiError::BadRequest("Username and password required".to_string()))?;

    let user = state
        .repo
        .get_user_by_username(&body.username)
        .await?
        .filter(|user| user.password == body.password)
        .ok_or_else(|| {
            tracing::warn!("Failed login attempt for {}", body.username);
            ApiError::Unauthorized("Invalid username or password".to_string())
        })?;

    Ok(HttpResponse::Ok().json(LoginResponse { user }))
}

/// Get the caller's preference profile
///
/// GET /api/users/preferences
async fn get_preferences(
    state: web::Data<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<HttpResponse, ApiError> {
    let preferences = state
        .repo
        .get_preferences(user.id)
        .await?
        .ok_or_else(|| ApiError::not_found("Preferences not found"))?;

    Ok(HttpResponse::Ok().json(preferences))
}

/// Create or replace the caller's preference profile
///
/// POST /api/users/preferences
///
/// Responds 201 on first save and 200 on replacement. Cached
/// recommendations for the caller are dropped either way.
async fn save_preferences(
    state: web::Data<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    body: web::Json<NewPreferences>,
) -> Result<HttpResponse, ApiError> {
    let new_preferences = body.into_inner();
    new_preferences.validate()?;

    let (preferences, outcome) = state
        .repo
        .upsert_preferences(user.id, new_preferences)
        .await?;
    state.cache.invalidate_user(user.id).await;

    tracing::info!("Saved preferences for user {} ({:?})", user.id, outcome);

    Ok(match outcome {
        Upsert::Created => HttpResponse::Created().json(preferences),
        Upsert::Updated => HttpResponse::Ok().json(preferences),
    })
}
