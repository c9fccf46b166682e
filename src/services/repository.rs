use async_trait::async_trait;
use thiserror::Error;

use crate::models::{
    Dog, DogPatch, Favorite, NewDog, NewPreferences, NewShelter, NewUser, Shelter, ShelterPatch,
    User, UserPreferences,
};

/// Errors that can occur in repository operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Whether an upsert created a new record or replaced an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Created,
    Updated,
}

/// Storage capabilities consumed by the HTTP layer
///
/// Listing operations return records in creation order.
#[async_trait]
pub trait Repository: Send + Sync {
    // Users
    async fn get_user(&self, id: u64) -> StoreResult<Option<User>>;
    /// Case-insensitive lookup
    async fn get_user_by_username(&self, username: &str) -> StoreResult<Option<User>>;
    /// Case-insensitive lookup
    async fn get_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;
    /// Fails with `Conflict` when the username or email is taken
    async fn create_user(&self, user: NewUser) -> StoreResult<User>;

    // Dogs
    async fn get_dog(&self, id: u64) -> StoreResult<Option<Dog>>;
    async fn list_dogs(&self) -> StoreResult<Vec<Dog>>;
    async fn list_dogs_by_shelter(&self, shelter_id: u64) -> StoreResult<Vec<Dog>>;
    async fn list_available_dogs(&self) -> StoreResult<Vec<Dog>>;
    /// Fails with `NotFound` when the shelter does not exist
    async fn create_dog(&self, shelter_id: u64, dog: NewDog) -> StoreResult<Dog>;
    async fn update_dog(&self, id: u64, patch: DogPatch) -> StoreResult<Dog>;
    /// Also drops the dog from every favorites list
    async fn delete_dog(&self, id: u64) -> StoreResult<()>;

    // Shelters
    async fn get_shelter(&self, id: u64) -> StoreResult<Option<Shelter>>;
    async fn list_shelters(&self) -> StoreResult<Vec<Shelter>>;
    async fn create_shelter(&self, shelter: NewShelter) -> StoreResult<Shelter>;
    async fn update_shelter(&self, id: u64, patch: ShelterPatch) -> StoreResult<Shelter>;

    // Preferences, at most one profile per user
    async fn get_preferences(&self, user_id: u64) -> StoreResult<Option<UserPreferences>>;
    async fn upsert_preferences(
        &self,
        user_id: u64,
        preferences: NewPreferences,
    ) -> StoreResult<(UserPreferences, Upsert)>;

    // Favorites
    async fn list_favorites(&self, user_id: u64) -> StoreResult<Vec<Dog>>;
    /// Fails with `NotFound` for an unknown dog and `Conflict` for a duplicate
    async fn add_favorite(&self, user_id: u64, dog_id: u64) -> StoreResult<Favorite>;
    async fn remove_favorite(&self, user_id: u64, dog_id: u64) -> StoreResult<()>;
    async fn is_favorite(&self, user_id: u64, dog_id: u64) -> StoreResult<bool>;
}
