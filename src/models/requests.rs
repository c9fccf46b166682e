use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{
    ActivityLevel, AdoptionStatus, Dog, DogSize, Gender, HealthStatus, Shelter, TrainingLevel,
};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Request to add a dog to the caller's favorites
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddFavoriteRequest {
    #[serde(rename = "dogId")]
    pub dog_id: u64,
}

/// Partial update of a dog listing; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct DogPatch {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub breed: Option<String>,
    pub age: Option<u32>,
    pub size: Option<DogSize>,
    pub gender: Option<Gender>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub good_with_kids: Option<bool>,
    pub good_with_dogs: Option<bool>,
    pub good_with_cats: Option<bool>,
    pub activity_level: Option<ActivityLevel>,
    pub training_level: Option<TrainingLevel>,
    pub health_status: Option<HealthStatus>,
    pub adoption_status: Option<AdoptionStatus>,
}

impl DogPatch {
    pub fn apply(self, dog: &mut Dog) {
        if let Some(name) = self.name {
            dog.name = name;
        }
        if let Some(breed) = self.breed {
            dog.breed = breed;
        }
        if let Some(age) = self.age {
            dog.age = age;
        }
        if let Some(size) = self.size {
            dog.size = size;
        }
        if let Some(gender) = self.gender {
            dog.gender = gender;
        }
        if let Some(description) = self.description {
            dog.description = description;
        }
        if let Some(image_url) = self.image_url {
            dog.image_url = image_url;
        }
        if let Some(good_with_kids) = self.good_with_kids {
            dog.good_with_kids = good_with_kids;
        }
        if let Some(good_with_dogs) = self.good_with_dogs {
            dog.good_with_dogs = good_with_dogs;
        }
        if let Some(good_with_cats) = self.good_with_cats {
            dog.good_with_cats = good_with_cats;
        }
        if let Some(activity_level) = self.activity_level {
            dog.activity_level = activity_level;
        }
        if let Some(training_level) = self.training_level {
            dog.training_level = training_level;
        }
        if let Some(health_status) = self.health_status {
            dog.health_status = health_status;
        }
        if let Some(adoption_status) = self.adoption_status {
            dog.adoption_status = adoption_status;
        }
    }
}

/// Partial update of a shelter
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ShelterPatch {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub phone: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub website: Option<String>,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,
    pub description: Option<String>,
}

impl ShelterPatch {
    pub fn apply(self, shelter: &mut Shelter) {
        if let Some(name) = self.name {
            shelter.name = name;
        }
        if let Some(address) = self.address {
            shelter.address = address;
        }
        if let Some(city) = self.city {
            shelter.city = city;
        }
        if let Some(state) = self.state {
            shelter.state = state;
        }
        if let Some(zip_code) = self.zip_code {
            shelter.zip_code = zip_code;
        }
        if let Some(phone) = self.phone {
            shelter.phone = phone;
        }
        if let Some(email) = self.email {
            shelter.email = email;
        }
        if self.website.is_some() {
            shelter.website = self.website;
        }
        if let Some(latitude) = self.latitude {
            shelter.latitude = latitude;
        }
        if let Some(longitude) = self.longitude {
            shelter.longitude = longitude;
        }
        if self.description.is_some() {
            shelter.description = self.description;
        }
    }
}

/// Catalog search filters (`GET /api/dogs?...`)
///
/// Unset fields do not constrain the result. The `goodWith*` flags only
/// filter when set to `true`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DogFilter {
    pub breed: Option<String>,
    pub size: Option<DogSize>,
    pub gender: Option<Gender>,
    pub activity_level: Option<ActivityLevel>,
    pub good_with_kids: Option<bool>,
    pub good_with_dogs: Option<bool>,
    pub good_with_cats: Option<bool>,
}

/// Query for `GET /api/recommendations`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationsQuery {
    pub limit: Option<usize>,
}

/// Query for `GET /api/shelters/nearby`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NearbySheltersQuery {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lon: f64,
    #[serde(rename = "radiusKm", default = "default_radius_km")]
    #[validate(range(min = 0.0, max = 20000.0))]
    pub radius_km: f64,
}

fn default_radius_km() -> f64 {
    25.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dog_patch_deserializes_partial() {
        let patch: DogPatch =
            serde_json::from_str(r#"{"adoptionStatus": "adopted", "age": 30}"#).unwrap();

        assert_eq!(patch.adoption_status, Some(AdoptionStatus::Adopted));
        assert_eq!(patch.age, Some(30));
        assert!(patch.name.is_none());
    }

    #[test]
    fn test_nearby_query_default_radius() {
        let query: NearbySheltersQuery =
            serde_json::from_str(r#"{"lat": 34.05, "lon": -118.24}"#).unwrap();
        assert_eq!(query.radius_km, 25.0);
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_nearby_query_rejects_bad_latitude() {
        let query = NearbySheltersQuery {
            lat: 120.0,
            lon: 0.0,
            radius_km: 5.0,
        };
        assert!(query.validate().is_err());
    }
}
