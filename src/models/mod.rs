// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    ActivityLevel, AdoptionStatus, AgeCategory, Dog, DogSize, ExperienceLevel, Favorite, Gender,
    HealthStatus, HomeType, NearbyShelter, NewDog, NewPreferences, NewShelter, NewUser, ScoredDog,
    ScoringWeights, Shelter, SizePreference, TrainingLevel, User, UserPreferences,
};
pub use requests::{
    AddFavoriteRequest, DogFilter, DogPatch, LoginRequest, NearbySheltersQuery,
    RecommendationsQuery, ShelterPatch,
};
pub use responses::{ErrorResponse, FavoriteStatusResponse, HealthResponse, LoginResponse};
