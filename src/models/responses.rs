use serde::{Deserialize, Serialize};

use crate::models::domain::User;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub cached_recommendations: u64,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: User,
}

/// Favorite membership check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteStatusResponse {
    #[serde(rename = "isFavorite")]
    pub is_favorite: bool,
}
