use actix_web::{web, HttpResponse};

use crate::models::{AddFavoriteRequest, FavoriteStatusResponse};
use crate::routes::{ApiError, AppState, AuthenticatedUser};
use crate::services::StoreError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/favorites")
            .route(web::get().to(list_favorites))
            .route(web::post().to(add_favorite)),
    )
    .service(
        web::resource("/favorites/{dog_id}")
            .route(web::get().to(favorite_status))
            .route(web::delete().to(remove_favorite)),
    );
}

/// GET /api/favorites
async fn list_favorites(
    state: web::Data<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(state.repo.list_favorites(user.id).await?))
}

/// POST /api/favorites
async fn add_favorite(
    state: web::Data<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    body: web::Json<AddFavoriteRequest>,
) -> Result<HttpResponse, ApiError> {
    let favorite = state
        .repo
        .add_favorite(user.id, body.dog_id)
        .await
        .map_err(|err| match err {
            StoreError::NotFound(_) => ApiError::not_found("Dog not found"),
            other => other.into(),
        })?;

    Ok(HttpResponse::Created().json(favorite))
}

/// GET /api/favorites/{dog_id}
async fn favorite_status(
    state: web::Data<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    dog_id: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let is_favorite = state.repo.is_favorite(user.id, *dog_id).await?;
    Ok(HttpResponse::Ok().json(FavoriteStatusResponse { is_favorite }))
}

/// DELETE /api/favorites/{dog_id}
async fn remove_favorite(
    state: web::Data<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    dog_id: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    state
        .repo
        .remove_favorite(user.id, *dog_id)
        .await
        .map_err(|err| match err {
            StoreError::NotFound(_) => ApiError::not_found("Dog not found in favorites"),
            other => other.into(),
        })?;

    Ok(HttpResponse::NoContent().finish())
}
