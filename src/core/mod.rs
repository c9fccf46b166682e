// Core algorithm exports
pub mod age;
pub mod distance;
pub mod filters;
pub mod matcher;
pub mod scoring;

pub use age::{age_category, format_age};
pub use distance::{haversine_distance, nearby_shelters, BoundingBox};
pub use filters::{apply_filter, matches_filter};
pub use matcher::{MatchError, Matcher};
pub use scoring::calculate_match_score;
