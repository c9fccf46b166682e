// Route exports
pub mod auth;
pub mod dogs;
pub mod error;
pub mod favorites;
pub mod health;
pub mod recommendations;
pub mod shelters;
pub mod users;

use actix_web::web;
use std::sync::Arc;

use crate::config::RecommendationSettings;
use crate::core::Matcher;
use crate::services::{RecommendationCache, Repository};

pub use auth::AuthenticatedUser;
pub use error::ApiError;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn Repository>,
    pub matcher: Matcher,
    pub cache: RecommendationCache,
    pub recommendations: RecommendationSettings,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::handle_json_payload_error))
        .app_data(web::QueryConfig::default().error_handler(error::handle_query_payload_error))
        .app_data(web::PathConfig::default().error_handler(error::handle_path_error))
        .service(
            web::scope("/api")
                .configure(health::configure)
                .configure(users::configure)
                .configure(dogs::configure)
                .configure(shelters::configure)
                .configure(favorites::configure)
                .configure(recommendations::configure),
        );
}
