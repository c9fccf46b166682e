use crate::models::{Dog, DogFilter};

/// Check if a dog satisfies the catalog search filters
///
/// Breed matches case-insensitively on substring; the categorical filters
/// require equality; compatibility flags only constrain when set to `true`.
#[inline]
pub fn matches_filter(dog: &Dog, filter: &DogFilter) -> bool {
    if let Some(breed) = filter.breed.as_deref().filter(|b| !b.is_empty()) {
        if !dog.breed.to_lowercase().contains(&breed.to_lowercase()) {
            return false;
        }
    }

    if filter.size.is_some_and(|size| dog.size != size) {
        return false;
    }

    if filter.gender.is_some_and(|gender| dog.gender != gender) {
        return false;
    }

    if filter
        .activity_level
        .is_some_and(|level| dog.activity_level != level)
    {
        return false;
    }

    if filter.good_with_kids == Some(true) && !dog.good_with_kids {
        return false;
    }

    if filter.good_with_dogs == Some(true) && !dog.good_with_dogs {
        return false;
    }

    if filter.good_with_cats == Some(true) && !dog.good_with_cats {
        return false;
    }

    true
}

/// Keep only dogs matching `filter`, preserving order
pub fn apply_filter(dogs: Vec<Dog>, filter: &DogFilter) -> Vec<Dog> {
    dogs.into_iter()
        .filter(|dog| matches_filter(dog, filter))
        .collect()
}
