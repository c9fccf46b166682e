use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::core::nearby_shelters;
use crate::models::{NearbySheltersQuery, NewShelter, ShelterPatch};
use crate::routes::auth::require_admin;
use crate::routes::{ApiError, AppState, AuthenticatedUser};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/shelters")
            .route(web::get().to(list_shelters))
            .route(web::post().to(create_shelter)),
    )
    // Must precede /shelters/{id}
    .route("/shelters/nearby", web::get().to(list_nearby_shelters))
    .service(
        web::resource("/shelters/{id}")
            .route(web::get().to(get_shelter))
            .route(web::put().to(update_shelter)),
    )
    .route("/shelters/{id}/dogs", web::get().to(list_shelter_dogs));
}

/// GET /api/shelters
async fn list_shelters(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(state.repo.list_shelters().await?))
}

/// Shelters near a point, nearest first
///
/// GET /api/shelters/nearby?lat=&lon=&radiusKm=
async fn list_nearby_shelters(
    state: web::Data<AppState>,
    query: web::Query<NearbySheltersQuery>,
) -> Result<HttpResponse, ApiError> {
    query.validate()?;

    let shelters = state.repo.list_shelters().await?;
    let nearby = nearby_shelters(shelters, query.lat, query.lon, query.radius_km);

    tracing::debug!(
        "Found {} shelters within {}km of ({}, {})",
        nearby.len(),
        query.radius_km,
        query.lat,
        query.lon
    );

    Ok(HttpResponse::Ok().json(nearby))
}

/// GET /api/shelters/{id}
async fn get_shelter(
    state: web::Data<AppState>,
    id: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let shelter = state
        .repo
        .get_shelter(*id)
        .await?
        .ok_or_else(|| ApiError::not_found("Shelter not found"))?;

    Ok(HttpResponse::Ok().json(shelter))
}

/// GET /api/shelters/{id}/dogs
async fn list_shelter_dogs(
    state: web::Data<AppState>,
    id: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    if state.repo.get_shelter(*id).await?.is_none() {
        return Err(ApiError::not_found("Shelter not found"));
    }

    Ok(HttpResponse::Ok().json(state.repo.list_dogs_by_shelter(*id).await?))
}

/// POST /api/shelters (admin only)
async fn create_shelter(
    state: web::Data<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    body: web::Json<NewShelter>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&user)?;

    let new_shelter = body.into_inner();
    new_shelter.validate()?;

    let shelter = state.repo.create_shelter(new_shelter).await?;
    tracing::info!("Created shelter {} ({})", shelter.id, shelter.name);

    Ok(HttpResponse::Created().json(shelter))
}

/// PUT /api/shelters/{id} (admin, or the shelter's own admin)
async fn update_shelter(
    state: web::Data<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    id: web::Path<u64>,
    body: web::Json<ShelterPatch>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    if !user.manages_shelter(id) {
        return Err(ApiError::Forbidden(
            "You can only update your own shelter".to_string(),
        ));
    }

    if state.repo.get_shelter(id).await?.is_none() {
        return Err(ApiError::not_found("Shelter not found"));
    }

    let patch = body.into_inner();
    patch.validate()?;

    Ok(HttpResponse::Ok().json(state.repo.update_shelter(id, patch).await?))
}
