use crate::models::{
    ActivityLevel, AdoptionStatus, DogSize, Gender, HealthStatus, NewDog, NewShelter, NewUser,
    TrainingLevel,
};
use crate::services::repository::{Repository, StoreResult};

struct DogSeed {
    name: &'static str,
    breed: &'static str,
    age: u32,
    size: DogSize,
    gender: Gender,
    description: &'static str,
    image_url: &'static str,
    kids: bool,
    dogs: bool,
    cats: bool,
    activity: ActivityLevel,
    training: TrainingLevel,
    /// Index into the shelters created by `seed_sample_data`
    shelter: usize,
}

impl DogSeed {
    fn into_new_dog(self) -> NewDog {
        NewDog {
            name: self.name.to_string(),
            breed: self.breed.to_string(),
            age: self.age,
            size: self.size,
            gender: self.gender,
            description: self.description.to_string(),
            image_url: self.image_url.to_string(),
            good_with_kids: self.kids,
            good_with_dogs: self.dogs,
            good_with_cats: self.cats,
            activity_level: self.activity,
            training_level: self.training,
            health_status: HealthStatus::Healthy,
            adoption_status: AdoptionStatus::Available,
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn shelter(
    name: &str,
    address: &str,
    city: &str,
    zip_code: &str,
    phone: &str,
    domain: &str,
    (latitude, longitude): (f64, f64),
    description: &str,
) -> NewShelter {
    NewShelter {
        name: name.to_string(),
        address: address.to_string(),
        city: city.to_string(),
        state: "CA".to_string(),
        zip_code: zip_code.to_string(),
        phone: phone.to_string(),
        email: format!("info@{}", domain),
        website: Some(format!("https://www.{}", domain)),
        latitude,
        longitude,
        description: Some(description.to_string()),
    }
}

fn sample_shelters() -> Vec<NewShelter> {
    vec![
        shelter(
            "Sunshine Animal Shelter",
            "123 Main St",
            "Anytown",
            "12345",
            "(555) 123-4567",
            "sunshine.org",
            (34.052235, -118.243683),
            "A loving shelter dedicated to finding homes for all animals.",
        ),
        shelter(
            "Happy Tails Rescue",
            "456 Oak St",
            "Anytown",
            "12345",
            "(555) 987-6543",
            "happytails.org",
            (34.053235, -118.253683),
            "Rescue organization focused on rehabilitating and rehoming dogs.",
        ),
        shelter(
            "Second Chance Shelter",
            "789 Pine St",
            "Othertown",
            "67890",
            "(555) 246-8101",
            "secondchance.org",
            (34.062235, -118.263683),
            "Giving animals a second chance at finding forever homes.",
        ),
        shelter(
            "Paws & Hearts",
            "101 Maple St",
            "Newcity",
            "54321",
            "(555) 135-7911",
            "pawsandhearts.org",
            (34.051235, -118.233683),
            "Finding loving homes for all types of dogs.",
        ),
    ]
}

fn sample_dogs() -> Vec<DogSeed> {
    vec![
        DogSeed {
            name: "Buddy",
            breed: "Golden Retriever",
            age: 24,
            size: DogSize::Large,
            gender: Gender::Male,
            description: "Buddy is playful, affectionate, and great with children and other pets.",
            image_url: "https://images.unsplash.com/photo-1543466835-00a7907e9de1",
            kids: true,
            dogs: true,
            cats: true,
            activity: ActivityLevel::High,
            training: TrainingLevel::Basic,
            shelter: 0,
        },
        DogSeed {
            name: "Max",
            breed: "Beagle",
            age: 96,
            size: DogSize::Small,
            gender: Gender::Male,
            description: "Max is a calm, gentle companion who loves leisurely walks and cuddles.",
            image_url: "https://images.unsplash.com/photo-1575859431774-2e57ed632664",
            kids: true,
            dogs: true,
            cats: false,
            activity: ActivityLevel::Low,
            training: TrainingLevel::Advanced,
            shelter: 0,
        },
        DogSeed {
            name: "Luna",
            breed: "Husky Mix",
            age: 12,
            size: DogSize::Medium,
            gender: Gender::Female,
            description: "Luna is energetic and intelligent, perfect for an active household.",
            image_url: "https://images.unsplash.com/photo-1592754862816-1a21a4ea2281",
            kids: true,
            dogs: true,
            cats: false,
            activity: ActivityLevel::High,
            training: TrainingLevel::Basic,
            shelter: 1,
        },
        DogSeed {
            name: "Charlie",
            breed: "Labrador Retriever",
            age: 36,
            size: DogSize::Large,
            gender: Gender::Male,
            description: "Charlie is well-trained and loves to play fetch in the park.",
            image_url: "https://images.unsplash.com/photo-1579213838058-81010bd14c71",
            kids: true,
            dogs: true,
            cats: true,
            activity: ActivityLevel::High,
            training: TrainingLevel::Advanced,
            shelter: 1,
        },
        DogSeed {
            name: "Daisy",
            breed: "Dachshund",
            age: 48,
            size: DogSize::Small,
            gender: Gender::Female,
            description: "Daisy is sweet and cuddly, perfect for apartment living.",
            image_url: "https://images.unsplash.com/photo-1583512603805-3cc6b41f3edb",
            kids: true,
            dogs: false,
            cats: false,
            activity: ActivityLevel::Medium,
            training: TrainingLevel::Basic,
            shelter: 2,
        },
        DogSeed {
            name: "Rocky",
            breed: "Boxer",
            age: 60,
            size: DogSize::Large,
            gender: Gender::Male,
            description: "Rocky is energetic and loves outdoor activities and exercise.",
            image_url: "https://images.unsplash.com/photo-1536809188428-e8ecf663d0be",
            kids: true,
            dogs: true,
            cats: false,
            activity: ActivityLevel::High,
            training: TrainingLevel::Basic,
            shelter: 2,
        },
        DogSeed {
            name: "Bella",
            breed: "Mixed Breed",
            age: 36,
            size: DogSize::Medium,
            gender: Gender::Female,
            description: "Bella is well-trained, loyal, and adapts easily to new environments.",
            image_url: "https://images.unsplash.com/photo-1534361960057-19889db9621e",
            kids: true,
            dogs: true,
            cats: true,
            activity: ActivityLevel::Medium,
            training: TrainingLevel::Advanced,
            shelter: 3,
        },
        DogSeed {
            name: "Cooper",
            breed: "Australian Shepherd",
            age: 24,
            size: DogSize::Medium,
            gender: Gender::Male,
            description: "Cooper is highly intelligent and excels at agility training.",
            image_url: "https://images.unsplash.com/photo-1589941013453-ec89f98c8d65",
            kids: true,
            dogs: true,
            cats: false,
            activity: ActivityLevel::High,
            training: TrainingLevel::Advanced,
            shelter: 3,
        },
    ]
}

/// Populate a repository with the demo catalog: four shelters, eight dogs,
/// one adopter (`johndoe`) and one shelter admin for the first shelter
pub async fn seed_sample_data(repo: &dyn Repository) -> StoreResult<()> {
    let mut shelter_ids = Vec::new();
    for new_shelter in sample_shelters() {
        shelter_ids.push(repo.create_shelter(new_shelter).await?.id);
    }

    for seed in sample_dogs() {
        let shelter_id = shelter_ids[seed.shelter];
        repo.create_dog(shelter_id, seed.into_new_dog()).await?;
    }

    repo.create_user(NewUser {
        username: "johndoe".to_string(),
        password: "password123".to_string(),
        email: "john@example.com".to_string(),
        name: "John Doe".to_string(),
        is_admin: false,
        is_shelter_admin: false,
        shelter_id: None,
    })
    .await?;

    repo.create_user(NewUser {
        username: "shelter1admin".to_string(),
        password: "admin123".to_string(),
        email: "admin@sunshine.org".to_string(),
        name: "Sunshine Admin".to_string(),
        is_admin: false,
        is_shelter_admin: true,
        shelter_id: shelter_ids.first().copied(),
    })
    .await?;

    tracing::info!(
        "Seeded sample data: {} shelters, {} dogs, 2 users",
        shelter_ids.len(),
        repo.list_dogs().await?.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MemoryStore;

    #[tokio::test]
    async fn test_seed_sample_data() {
        let store = MemoryStore::new();
        seed_sample_data(&store).await.unwrap();

        assert_eq!(store.list_shelters().await.unwrap().len(), 4);
        assert_eq!(store.list_available_dogs().await.unwrap().len(), 8);
        assert_eq!(store.list_dogs_by_shelter(1).await.unwrap().len(), 2);

        let admin = store.get_user_by_username("shelter1admin").await.unwrap().unwrap();
        assert!(admin.is_shelter_admin);
        assert_eq!(admin.shelter_id, Some(1));
    }
}
