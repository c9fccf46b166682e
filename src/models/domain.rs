use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Dog size as listed by the shelter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DogSize {
    Small,
    Medium,
    Large,
    #[serde(other)]
    Unknown,
}

/// Energy level, shared by dog listings and adopter preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityLevel {
    Low,
    Medium,
    High,
    #[serde(other)]
    Unknown,
}

impl ActivityLevel {
    /// Position on the ordered scale Low < Medium < High
    pub fn ordinal(self) -> Option<u8> {
        match self {
            ActivityLevel::Low => Some(0),
            ActivityLevel::Medium => Some(1),
            ActivityLevel::High => Some(2),
            ActivityLevel::Unknown => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainingLevel {
    None,
    Basic,
    Advanced,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthStatus {
    Healthy,
    #[serde(rename = "Special Needs")]
    SpecialNeeds,
    #[serde(rename = "Requires Medication")]
    RequiresMedication,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdoptionStatus {
    #[default]
    Available,
    Pending,
    Adopted,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HomeType {
    Apartment,
    House,
    Other,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[serde(rename = "First-time")]
    FirstTime,
    #[serde(rename = "Some experience")]
    SomeExperience,
    Experienced,
    #[serde(other)]
    Unknown,
}

/// Life stage bucket derived from a dog's age in months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeCategory {
    Puppy,
    Young,
    Adult,
    Senior,
    #[serde(other)]
    Unknown,
}

/// Size wish on a preference profile; `Any` accepts every listed size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizePreference {
    Small,
    Medium,
    Large,
    Any,
    #[serde(other)]
    Unknown,
}

impl SizePreference {
    pub fn accepts(self, size: DogSize) -> bool {
        matches!(
            (self, size),
            (SizePreference::Any, _)
                | (SizePreference::Small, DogSize::Small)
                | (SizePreference::Medium, DogSize::Medium)
                | (SizePreference::Large, DogSize::Large)
        )
    }
}

/// A dog listed by a shelter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dog {
    pub id: u64,
    pub name: String,
    pub breed: String,
    /// Age in months
    pub age: u32,
    pub size: DogSize,
    pub gender: Gender,
    pub description: String,
    pub image_url: String,
    pub good_with_kids: bool,
    pub good_with_dogs: bool,
    pub good_with_cats: bool,
    pub activity_level: ActivityLevel,
    pub training_level: TrainingLevel,
    pub health_status: HealthStatus,
    pub shelter_id: u64,
    pub adoption_status: AdoptionStatus,
    pub created_at: DateTime<Utc>,
}

impl Dog {
    pub fn is_available(&self) -> bool {
        self.adoption_status == AdoptionStatus::Available
    }
}

/// Fields a shelter supplies when listing a dog
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewDog {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub breed: String,
    pub age: u32,
    pub size: DogSize,
    pub gender: Gender,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub image_url: String,
    #[serde(default)]
    pub good_with_kids: bool,
    #[serde(default)]
    pub good_with_dogs: bool,
    #[serde(default)]
    pub good_with_cats: bool,
    pub activity_level: ActivityLevel,
    pub training_level: TrainingLevel,
    pub health_status: HealthStatus,
    #[serde(default)]
    pub adoption_status: AdoptionStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shelter {
    pub id: u64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone: String,
    pub email: String,
    pub website: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewShelter {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub address: String,
    #[validate(length(min = 1))]
    pub city: String,
    #[validate(length(min = 1))]
    pub state: String,
    #[validate(length(min = 1))]
    pub zip_code: String,
    #[validate(length(min = 1))]
    pub phone: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub website: Option<String>,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[serde(default)]
    pub description: Option<String>,
}

/// Registered account. The password never leaves the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub email: String,
    pub name: String,
    pub is_admin: bool,
    pub is_shelter_admin: bool,
    pub shelter_id: Option<u64>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Whether this account may manage dogs listed by `shelter_id`
    pub fn manages_shelter(&self, shelter_id: u64) -> bool {
        self.is_admin || (self.is_shelter_admin && self.shelter_id == Some(shelter_id))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub is_shelter_admin: bool,
    #[serde(default)]
    pub shelter_id: Option<u64>,
}

/// Adopter lifestyle answers from the match quiz
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub id: u64,
    pub user_id: u64,
    pub activity_level: ActivityLevel,
    pub home_type: HomeType,
    pub has_yard: bool,
    pub has_kids: bool,
    pub has_other_pets: bool,
    pub experience_level: ExperienceLevel,
    pub preferred_age: AgeCategory,
    pub preferred_size: SizePreference,
    /// Hours per day the dog would be left alone
    pub hours_alone: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewPreferences {
    pub activity_level: ActivityLevel,
    pub home_type: HomeType,
    pub has_yard: bool,
    pub has_kids: bool,
    pub has_other_pets: bool,
    pub experience_level: ExperienceLevel,
    pub preferred_age: AgeCategory,
    pub preferred_size: SizePreference,
    #[validate(range(max = 24))]
    pub hours_alone: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: u64,
    pub user_id: u64,
    pub dog_id: u64,
    pub created_at: DateTime<Utc>,
}

/// Dog paired with its compatibility against one preference profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredDog {
    #[serde(flatten)]
    pub dog: Dog,
    pub match_percentage: u8,
}

/// Shelter annotated with its distance from a search origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyShelter {
    #[serde(flatten)]
    pub shelter: Shelter,
    pub distance_km: f64,
}

/// Per-factor weights of the compatibility score
///
/// Positive fields are bonuses, `*_penalty` fields are subtracted. Every
/// weight lies in `0..=100`, which keeps the factor sum far from
/// `i32` overflow and stops a penalty from turning into a bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ScoringWeights {
    #[validate(range(min = 0, max = 100))]
    pub activity_exact: i32,
    #[validate(range(min = 0, max = 100))]
    pub activity_adjacent: i32,
    #[validate(range(min = 0, max = 100))]
    pub kids_compatible: i32,
    #[validate(range(min = 0, max = 100))]
    pub kids_penalty: i32,
    #[validate(range(min = 0, max = 100))]
    pub no_kids: i32,
    #[validate(range(min = 0, max = 100))]
    pub pets_compatible: i32,
    #[validate(range(min = 0, max = 100))]
    pub pets_penalty: i32,
    #[validate(range(min = 0, max = 100))]
    pub no_pets: i32,
    #[validate(range(min = 0, max = 100))]
    pub size_match: i32,
    #[validate(range(min = 0, max = 100))]
    pub age_match: i32,
    #[validate(range(min = 0, max = 100))]
    pub yard_active_dog: i32,
    #[validate(range(min = 0, max = 100))]
    pub yard_other_dog: i32,
    #[validate(range(min = 0, max = 100))]
    pub no_yard_compact_dog: i32,
    #[validate(range(min = 0, max = 100))]
    pub no_yard_penalty: i32,
    #[validate(range(min = 0, max = 100))]
    pub short_absence: i32,
    #[validate(range(min = 0, max = 100))]
    pub workday_absence_penalty: i32,
    #[validate(range(min = 0, max = 100))]
    pub long_absence_high_penalty: i32,
    #[validate(range(min = 0, max = 100))]
    pub long_absence_medium_penalty: i32,
}

impl ScoringWeights {
    pub const CANONICAL: Self = Self {
        activity_exact: 25,
        activity_adjacent: 15,
        kids_compatible: 20,
        kids_penalty: 15,
        no_kids: 5,
        pets_compatible: 15,
        pets_penalty: 10,
        no_pets: 5,
        size_match: 15,
        age_match: 15,
        yard_active_dog: 10,
        yard_other_dog: 5,
        no_yard_compact_dog: 5,
        no_yard_penalty: 5,
        short_absence: 5,
        workday_absence_penalty: 5,
        long_absence_high_penalty: 10,
        long_absence_medium_penalty: 5,
    };
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::CANONICAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_enum_values_degrade() {
        let size: DogSize = serde_json::from_str("\"Gigantic\"").unwrap();
        assert_eq!(size, DogSize::Unknown);

        let level: ActivityLevel = serde_json::from_str("\"Extreme\"").unwrap();
        assert_eq!(level, ActivityLevel::Unknown);
        assert_eq!(level.ordinal(), None);
    }

    #[test]
    fn test_multi_word_variants() {
        let status: HealthStatus = serde_json::from_str("\"Special Needs\"").unwrap();
        assert_eq!(status, HealthStatus::SpecialNeeds);

        let experience: ExperienceLevel = serde_json::from_str("\"First-time\"").unwrap();
        assert_eq!(experience, ExperienceLevel::FirstTime);
        assert_eq!(
            serde_json::to_string(&ExperienceLevel::SomeExperience).unwrap(),
            "\"Some experience\""
        );
    }

    #[test]
    fn test_adoption_status_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&AdoptionStatus::Available).unwrap(),
            "\"available\""
        );
        let pending: AdoptionStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(pending, AdoptionStatus::Pending);
    }

    #[test]
    fn test_size_preference_accepts() {
        assert!(SizePreference::Any.accepts(DogSize::Large));
        assert!(SizePreference::Small.accepts(DogSize::Small));
        assert!(!SizePreference::Small.accepts(DogSize::Medium));
        assert!(!SizePreference::Unknown.accepts(DogSize::Small));
        assert!(!SizePreference::Large.accepts(DogSize::Unknown));
    }

    #[test]
    fn test_user_password_not_serialized() {
        let user = User {
            id: 1,
            username: "johndoe".to_string(),
            password: "secret".to_string(),
            email: "john@example.com".to_string(),
            name: "John Doe".to_string(),
            is_admin: false,
            is_shelter_admin: false,
            shelter_id: None,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["username"], "johndoe");
    }

    #[test]
    fn test_manages_shelter() {
        let mut user = User {
            id: 2,
            username: "admin".to_string(),
            password: "pw".to_string(),
            email: "admin@example.org".to_string(),
            name: "Admin".to_string(),
            is_admin: false,
            is_shelter_admin: true,
            shelter_id: Some(1),
            created_at: Utc::now(),
        };

        assert!(user.manages_shelter(1));
        assert!(!user.manages_shelter(2));

        user.is_shelter_admin = false;
        assert!(!user.manages_shelter(1));

        user.is_admin = true;
        assert!(user.manages_shelter(2));
    }
}
