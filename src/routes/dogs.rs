use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::core::apply_filter;
use crate::models::{DogFilter, DogPatch, NewDog};
use crate::routes::auth::require_shelter_admin;
use crate::routes::{ApiError, AppState, AuthenticatedUser};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/dogs")
            .route(web::get().to(list_dogs))
            .route(web::post().to(create_dog)),
    )
    // Must precede /dogs/{id}
    .route("/dogs/available", web::get().to(list_available_dogs))
    .service(
        web::resource("/dogs/{id}")
            .route(web::get().to(get_dog))
            .route(web::put().to(update_dog))
            .route(web::delete().to(delete_dog)),
    );
}

/// List the catalog, optionally filtered
///
/// GET /api/dogs?breed=&size=&gender=&activityLevel=&goodWithKids=&goodWithDogs=&goodWithCats=
async fn list_dogs(
    state: web::Data<AppState>,
    filter: web::Query<DogFilter>,
) -> Result<HttpResponse, ApiError> {
    let dogs = apply_filter(state.repo.list_dogs().await?, &filter);
    Ok(HttpResponse::Ok().json(dogs))
}

/// GET /api/dogs/available
async fn list_available_dogs(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(state.repo.list_available_dogs().await?))
}

/// GET /api/dogs/{id}
async fn get_dog(
    state: web::Data<AppState>,
    id: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let dog = state
        .repo
        .get_dog(*id)
        .await?
        .ok_or_else(|| ApiError::not_found("Dog not found"))?;

    Ok(HttpResponse::Ok().json(dog))
}

/// List a dog under the caller's shelter
///
/// POST /api/dogs
async fn create_dog(
    state: web::Data<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    body: web::Json<NewDog>,
) -> Result<HttpResponse, ApiError> {
    require_shelter_admin(&user)?;

    let shelter_id = user
        .shelter_id
        .ok_or_else(|| ApiError::BadRequest("Account is not linked to a shelter".to_string()))?;

    let new_dog = body.into_inner();
    new_dog.validate()?;

    let dog = state.repo.create_dog(shelter_id, new_dog).await?;
    state.cache.invalidate_all();

    tracing::info!("Shelter {} listed dog {} ({})", shelter_id, dog.id, dog.name);
    Ok(HttpResponse::Created().json(dog))
}

/// PUT /api/dogs/{id}
async fn update_dog(
    state: web::Data<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    id: web::Path<u64>,
    body: web::Json<DogPatch>,
) -> Result<HttpResponse, ApiError> {
    require_shelter_admin(&user)?;

    let dog = state
        .repo
        .get_dog(*id)
        .await?
        .ok_or_else(|| ApiError::not_found("Dog not found"))?;

    if !user.manages_shelter(dog.shelter_id) {
        return Err(ApiError::Forbidden(
            "You can only update dogs from your shelter".to_string(),
        ));
    }

    let patch = body.into_inner();
    patch.validate()?;

    let updated = state.repo.update_dog(dog.id, patch).await?;
    state.cache.invalidate_all();

    tracing::debug!("Updated dog {}", updated.id);
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/dogs/{id}
async fn delete_dog(
    state: web::Data<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    id: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    require_shelter_admin(&user)?;

    let dog = state
        .repo
        .get_dog(*id)
        .await?
        .ok_or_else(|| ApiError::not_found("Dog not found"))?;

    if !user.manages_shelter(dog.shelter_id) {
        return Err(ApiError::Forbidden(
            "You can only delete dogs from your shelter".to_string(),
        ));
    }

    state.repo.delete_dog(dog.id).await?;
    state.cache.invalidate_all();

    tracing::info!("Deleted dog {}", dog.id);
    Ok(HttpResponse::NoContent().finish())
}
