use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::models::{
    Dog, DogPatch, Favorite, NewDog, NewPreferences, NewShelter, NewUser, Shelter, ShelterPatch,
    User, UserPreferences,
};
use crate::services::repository::{Repository, StoreError, StoreResult, Upsert};

/// Auto-increment id generator, starting at 1
#[derive(Debug)]
struct Sequence(u64);

impl Default for Sequence {
    fn default() -> Self {
        Self(1)
    }
}

impl Sequence {
    fn next(&mut self) -> u64 {
        let id = self.0;
        self.0 += 1;
        id
    }
}

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<u64, User>,
    dogs: BTreeMap<u64, Dog>,
    shelters: BTreeMap<u64, Shelter>,
    // Keyed by user id
    preferences: BTreeMap<u64, UserPreferences>,
    favorites: BTreeMap<u64, Favorite>,

    user_ids: Sequence,
    dog_ids: Sequence,
    shelter_ids: Sequence,
    preference_ids: Sequence,
    favorite_ids: Sequence,
}

/// In-process repository backed by ordered maps
///
/// Ordered maps keyed by auto-increment ids keep listings in creation order.
/// A single `RwLock` guards all tables so cross-entity checks (dog exists
/// before favoriting, shelter exists before listing a dog) are atomic.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository for MemoryStore {
    async fn get_user(&self, id: u64) -> StoreResult<Option<User>> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .values()
            .find(|u| u.username.eq_ignore_ascii_case(username))
            .cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn create_user(&self, user: NewUser) -> StoreResult<User> {
        let mut tables = self.tables.write().await;

        if tables
            .users
            .values()
            .any(|u| u.username.eq_ignore_ascii_case(&user.username))
        {
            return Err(StoreError::Conflict("Username already exists".to_string()));
        }
        if tables
            .users
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(&user.email))
        {
            return Err(StoreError::Conflict("Email already registered".to_string()));
        }

        let id = tables.user_ids.next();
        let created = User {
            id,
            username: user.username,
            password: user.password,
            email: user.email,
            name: user.name,
            is_admin: user.is_admin,
            is_shelter_admin: user.is_shelter_admin,
            shelter_id: user.shelter_id,
            created_at: Utc::now(),
        };
        tables.users.insert(id, created.clone());

        tracing::debug!("Created user {} ({})", id, created.username);
        Ok(created)
    }

    async fn get_dog(&self, id: u64) -> StoreResult<Option<Dog>> {
        Ok(self.tables.read().await.dogs.get(&id).cloned())
    }

    async fn list_dogs(&self) -> StoreResult<Vec<Dog>> {
        Ok(self.tables.read().await.dogs.values().cloned().collect())
    }

    async fn list_dogs_by_shelter(&self, shelter_id: u64) -> StoreResult<Vec<Dog>> {
        let tables = self.tables.read().await;
        Ok(tables
            .dogs
            .values()
            .filter(|d| d.shelter_id == shelter_id)
            .cloned()
            .collect())
    }

    async fn list_available_dogs(&self) -> StoreResult<Vec<Dog>> {
        let tables = self.tables.read().await;
        Ok(tables
            .dogs
            .values()
            .filter(|d| d.is_available())
            .cloned()
            .collect())
    }

    async fn create_dog(&self, shelter_id: u64, dog: NewDog) -> StoreResult<Dog> {
        let mut tables = self.tables.write().await;

        if !tables.shelters.contains_key(&shelter_id) {
            return Err(StoreError::NotFound(format!("shelter {}", shelter_id)));
        }

        let id = tables.dog_ids.next();
        let created = Dog {
            id,
            name: dog.name,
            breed: dog.breed,
            age: dog.age,
            size: dog.size,
            gender: dog.gender,
            description: dog.description,
            image_url: dog.image_url,
            good_with_kids: dog.good_with_kids,
            good_with_dogs: dog.good_with_dogs,
            good_with_cats: dog.good_with_cats,
            activity_level: dog.activity_level,
            training_level: dog.training_level,
            health_status: dog.health_status,
            shelter_id,
            adoption_status: dog.adoption_status,
            created_at: Utc::now(),
        };
        tables.dogs.insert(id, created.clone());

        Ok(created)
    }

    async fn update_dog(&self, id: u64, patch: DogPatch) -> StoreResult<Dog> {
        let mut tables = self.tables.write().await;
        let dog = tables
            .dogs
            .get_mut(&id)
            .ok_or_else(|| StoreError::NotFound(format!("dog {}", id)))?;

        patch.apply(dog);
        Ok(dog.clone())
    }

    async fn delete_dog(&self, id: u64) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        if tables.dogs.remove(&id).is_none() {
            return Err(StoreError::NotFound(format!("dog {}", id)));
        }

        tables.favorites.retain(|_, fav| fav.dog_id != id);
        Ok(())
    }

    async fn get_shelter(&self, id: u64) -> StoreResult<Option<Shelter>> {
        Ok(self.tables.read().await.shelters.get(&id).cloned())
    }

    async fn list_shelters(&self) -> StoreResult<Vec<Shelter>> {
        Ok(self.tables.read().await.shelters.values().cloned().collect())
    }

    async fn create_shelter(&self, shelter: NewShelter) -> StoreResult<Shelter> {
        let mut tables = self.tables.write().await;

        let id = tables.shelter_ids.next();
        let created = Shelter {
            id,
            name: shelter.name,
            address: shelter.address,
            city: shelter.city,
            state: shelter.state,
            zip_code: shelter.zip_code,
            phone: shelter.phone,
            email: shelter.email,
            website: shelter.website,
            latitude: shelter.latitude,
            longitude: shelter.longitude,
            description: shelter.description,
            created_at: Utc::now(),
        };
        tables.shelters.insert(id, created.clone());

        Ok(created)
    }

    async fn update_shelter(&self, id: u64, patch: ShelterPatch) -> StoreResult<Shelter> {
        let mut tables = self.tables.write().await;
        let shelter = tables
            .shelters
            .get_mut(&id)
            .ok_or_else(|| StoreError::NotFound(format!("shelter {}", id)))?;

        patch.apply(shelter);
        Ok(shelter.clone())
    }

    async fn get_preferences(&self, user_id: u64) -> StoreResult<Option<UserPreferences>> {
        Ok(self.tables.read().await.preferences.get(&user_id).cloned())
    }

    async fn upsert_preferences(
        &self,
        user_id: u64,
        preferences: NewPreferences,
    ) -> StoreResult<(UserPreferences, Upsert)> {
        let mut tables = self.tables.write().await;

        let existing = tables
            .preferences
            .get(&user_id)
            .map(|p| (p.id, p.created_at));
        let (id, created_at, outcome) = match existing {
            Some((id, created_at)) => (id, created_at, Upsert::Updated),
            None => (tables.preference_ids.next(), Utc::now(), Upsert::Created),
        };

        let stored = UserPreferences {
            id,
            user_id,
            activity_level: preferences.activity_level,
            home_type: preferences.home_type,
            has_yard: preferences.has_yard,
            has_kids: preferences.has_kids,
            has_other_pets: preferences.has_other_pets,
            experience_level: preferences.experience_level,
            preferred_age: preferences.preferred_age,
            preferred_size: preferences.preferred_size,
            hours_alone: preferences.hours_alone,
            created_at,
        };
        tables.preferences.insert(user_id, stored.clone());

        Ok((stored, outcome))
    }

    async fn list_favorites(&self, user_id: u64) -> StoreResult<Vec<Dog>> {
        let tables = self.tables.read().await;
        Ok(tables
            .favorites
            .values()
            .filter(|fav| fav.user_id == user_id)
            .filter_map(|fav| tables.dogs.get(&fav.dog_id).cloned())
            .collect())
    }

    async fn add_favorite(&self, user_id: u64, dog_id: u64) -> StoreResult<Favorite> {
        let mut tables = self.tables.write().await;

        if !tables.dogs.contains_key(&dog_id) {
            return Err(StoreError::NotFound(format!("dog {}", dog_id)));
        }
        if tables
            .favorites
            .values()
            .any(|fav| fav.user_id == user_id && fav.dog_id == dog_id)
        {
            return Err(StoreError::Conflict("Dog already in favorites".to_string()));
        }

        let id = tables.favorite_ids.next();
        let favorite = Favorite {
            id,
            user_id,
            dog_id,
            created_at: Utc::now(),
        };
        tables.favorites.insert(id, favorite.clone());

        Ok(favorite)
    }

    async fn remove_favorite(&self, user_id: u64, dog_id: u64) -> StoreResult<()> {
        let mut tables = self.tables.write().await;

        let id = tables
            .favorites
            .values()
            .find(|fav| fav.user_id == user_id && fav.dog_id == dog_id)
            .map(|fav| fav.id)
            .ok_or_else(|| StoreError::NotFound(format!("favorite dog {}", dog_id)))?;

        tables.favorites.remove(&id);
        Ok(())
    }

    async fn is_favorite(&self, user_id: u64, dog_id: u64) -> StoreResult<bool> {
        let tables = self.tables.read().await;
        Ok(tables
            .favorites
            .values()
            .any(|fav| fav.user_id == user_id && fav.dog_id == dog_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ActivityLevel, AdoptionStatus, AgeCategory, DogSize, ExperienceLevel, Gender,
        HealthStatus, HomeType, SizePreference, TrainingLevel,
    };

    fn new_shelter(name: &str) -> NewShelter {
        NewShelter {
            name: name.to_string(),
            address: "123 Main St".to_string(),
            city: "Anytown".to_string(),
            state: "CA".to_string(),
            zip_code: "12345".to_string(),
            phone: "(555) 123-4567".to_string(),
            email: "info@example.org".to_string(),
            website: None,
            latitude: 34.05,
            longitude: -118.24,
            description: None,
        }
    }

    fn new_dog(name: &str, adoption_status: AdoptionStatus) -> NewDog {
        NewDog {
            name: name.to_string(),
            breed: "Beagle".to_string(),
            age: 24,
            size: DogSize::Small,
            gender: Gender::Male,
            description: "A good dog".to_string(),
            image_url: "https://example.org/dog.jpg".to_string(),
            good_with_kids: true,
            good_with_dogs: true,
            good_with_cats: false,
            activity_level: ActivityLevel::Low,
            training_level: TrainingLevel::Basic,
            health_status: HealthStatus::Healthy,
            adoption_status,
        }
    }

    fn new_user(username: &str, email: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            password: "password123".to_string(),
            email: email.to_string(),
            name: "Test User".to_string(),
            is_admin: false,
            is_shelter_admin: false,
            shelter_id: None,
        }
    }

    fn new_preferences(hours_alone: u32) -> NewPreferences {
        NewPreferences {
            activity_level: ActivityLevel::Medium,
            home_type: HomeType::Apartment,
            has_yard: false,
            has_kids: false,
            has_other_pets: true,
            experience_level: ExperienceLevel::FirstTime,
            preferred_age: AgeCategory::Adult,
            preferred_size: SizePreference::Any,
            hours_alone,
        }
    }

    #[tokio::test]
    async fn test_ids_auto_increment() {
        let store = MemoryStore::new();
        let a = store.create_shelter(new_shelter("A")).await.unwrap();
        let b = store.create_shelter(new_shelter("B")).await.unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);

        let dog = store
            .create_dog(b.id, new_dog("Rex", AdoptionStatus::Available))
            .await
            .unwrap();
        assert_eq!(dog.id, 1);
        assert_eq!(dog.shelter_id, 2);
    }

    #[tokio::test]
    async fn test_create_dog_requires_shelter() {
        let store = MemoryStore::new();
        let err = store
            .create_dog(99, new_dog("Rex", AdoptionStatus::Available))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_available_dogs_filtered() {
        let store = MemoryStore::new();
        let shelter = store.create_shelter(new_shelter("A")).await.unwrap();
        store
            .create_dog(shelter.id, new_dog("Rex", AdoptionStatus::Available))
            .await
            .unwrap();
        store
            .create_dog(shelter.id, new_dog("Fido", AdoptionStatus::Adopted))
            .await
            .unwrap();
        store
            .create_dog(shelter.id, new_dog("Spot", AdoptionStatus::Pending))
            .await
            .unwrap();

        let available = store.list_available_dogs().await.unwrap();
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].name, "Rex");
        assert_eq!(store.list_dogs().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_update_and_delete_dog() {
        let store = MemoryStore::new();
        let shelter = store.create_shelter(new_shelter("A")).await.unwrap();
        let dog = store
            .create_dog(shelter.id, new_dog("Rex", AdoptionStatus::Available))
            .await
            .unwrap();

        let patch = DogPatch {
            adoption_status: Some(AdoptionStatus::Pending),
            ..Default::default()
        };
        let updated = store.update_dog(dog.id, patch).await.unwrap();
        assert_eq!(updated.adoption_status, AdoptionStatus::Pending);
        assert_eq!(updated.name, "Rex");

        store.delete_dog(dog.id).await.unwrap();
        assert!(store.get_dog(dog.id).await.unwrap().is_none());
        assert!(matches!(
            store.delete_dog(dog.id).await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_user_uniqueness_is_case_insensitive() {
        let store = MemoryStore::new();
        store
            .create_user(new_user("JohnDoe", "john@example.com"))
            .await
            .unwrap();

        let err = store
            .create_user(new_user("johndoe", "other@example.com"))
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::Conflict("Username already exists".to_string()));

        let err = store
            .create_user(new_user("jane", "JOHN@example.com"))
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::Conflict("Email already registered".to_string()));

        let found = store.get_user_by_username("JOHNDOE").await.unwrap();
        assert!(found.is_some());
    }

    #[tokio::test]
    async fn test_preferences_upsert_keeps_one_per_user() {
        let store = MemoryStore::new();

        let (first, outcome) = store.upsert_preferences(5, new_preferences(4)).await.unwrap();
        assert_eq!(outcome, Upsert::Created);

        let (second, outcome) = store.upsert_preferences(5, new_preferences(9)).await.unwrap();
        assert_eq!(outcome, Upsert::Updated);
        assert_eq!(second.id, first.id);
        assert_eq!(second.hours_alone, 9);

        let stored = store.get_preferences(5).await.unwrap().unwrap();
        assert_eq!(stored.hours_alone, 9);
        assert!(store.get_preferences(6).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_favorites_lifecycle() {
        let store = MemoryStore::new();
        let shelter = store.create_shelter(new_shelter("A")).await.unwrap();
        let dog = store
            .create_dog(shelter.id, new_dog("Rex", AdoptionStatus::Available))
            .await
            .unwrap();

        store.add_favorite(1, dog.id).await.unwrap();
        assert!(store.is_favorite(1, dog.id).await.unwrap());
        assert!(!store.is_favorite(2, dog.id).await.unwrap());

        assert!(matches!(
            store.add_favorite(1, dog.id).await,
            Err(StoreError::Conflict(_))
        ));
        assert!(matches!(
            store.add_favorite(1, 42).await,
            Err(StoreError::NotFound(_))
        ));

        let favorites = store.list_favorites(1).await.unwrap();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].id, dog.id);

        store.remove_favorite(1, dog.id).await.unwrap();
        assert!(!store.is_favorite(1, dog.id).await.unwrap());
        assert!(matches!(
            store.remove_favorite(1, dog.id).await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_deleting_dog_drops_favorites() {
        tokio_test::block_on(async {
            let store = MemoryStore::new();
            let shelter = store.create_shelter(new_shelter("A")).await.unwrap();
            let dog = store
                .create_dog(shelter.id, new_dog("Rex", AdoptionStatus::Available))
                .await
                .unwrap();

            store.add_favorite(1, dog.id).await.unwrap();
            store.delete_dog(dog.id).await.unwrap();

            assert!(!store.is_favorite(1, dog.id).await.unwrap());
            assert!(store.list_favorites(1).await.unwrap().is_empty());
        });
    }
}
