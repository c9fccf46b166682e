use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::models::{RecommendationsQuery, ScoredDog};
use crate::routes::{ApiError, AppState, AuthenticatedUser};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/recommendations", web::get().to(get_recommendations));
}

/// Rank available dogs against the caller's preference profile
///
/// GET /api/recommendations?limit=20
///
/// Responds with dogs ordered by `matchPercentage`, best first. 404 when
/// the caller has no preference profile or no dog is available.
async fn get_recommendations(
    state: web::Data<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    query: web::Query<RecommendationsQuery>,
) -> Result<HttpResponse, ApiError> {
    let limit = state.recommendations.effective_limit(query.limit);

    let ranking = match state.cache.get(user.id).await {
        Some(cached) => cached,
        None => {
            let generation = state.cache.generation();
            let preferences = state.repo.get_preferences(user.id).await?;
            let candidates = match preferences {
                Some(_) => state.repo.list_available_dogs().await?,
                None => Vec::new(),
            };

            let ranked = Arc::new(state.matcher.rank(&candidates, preferences.as_ref())?);
            if !ranked.is_empty() {
                state
                    .cache
                    .insert(user.id, generation, Arc::clone(&ranked))
                    .await;
            }
            ranked
        }
    };

    if ranking.is_empty() {
        return Err(ApiError::not_found("No available dogs found"));
    }

    let top: Vec<ScoredDog> = ranking.iter().take(limit).cloned().collect();

    tracing::info!(
        "Returning {} recommendations for user {} (from {} candidates)",
        top.len(),
        user.id,
        ranking.len()
    );

    Ok(HttpResponse::Ok().json(top))
}
