use crate::core::age::age_category;
use crate::models::{ActivityLevel, Dog, DogSize, ScoringWeights, UserPreferences};

/// Lowest and highest attainable match percentage
pub const MIN_SCORE: i32 = 0;
pub const MAX_SCORE: i32 = 100;

/// Hours-alone thresholds (inclusive upper bounds)
const SHORT_ABSENCE_HOURS: u32 = 4;
const WORKDAY_ABSENCE_HOURS: u32 = 8;

/// Calculate a match percentage (0-100) for a dog against adopter preferences
///
/// The score is the sum of independent factors, clamped to [0, 100]:
///
/// | factor      | outcome                                              |
/// |-------------|------------------------------------------------------|
/// | activity    | exact +25, one level apart +15, two apart 0          |
/// | kids        | good with kids +20, not -15, no kids at home +5      |
/// | other pets  | good with dogs or cats +15, neither -10, no pets +5  |
/// | size        | preferred (or `Any`) +15                             |
/// | age         | preferred life stage +15                             |
/// | yard        | see [`yard_score`]                                   |
/// | hours alone | see [`hours_alone_score`]                            |
///
/// Unknown categorical values fail every comparison for their factor.
pub fn calculate_match_score(
    dog: &Dog,
    preferences: &UserPreferences,
    weights: &ScoringWeights,
) -> u8 {
    let total = activity_score(dog.activity_level, preferences.activity_level, weights)
        + kids_score(dog, preferences.has_kids, weights)
        + pets_score(dog, preferences.has_other_pets, weights)
        + size_score(dog, preferences, weights)
        + age_score(dog, preferences, weights)
        + yard_score(dog, preferences.has_yard, weights)
        + hours_alone_score(dog.activity_level, preferences.hours_alone, weights);

    clamp_score(total)
}

/// Clamp a raw factor sum into the percentage range
#[inline]
pub fn clamp_score(raw: i32) -> u8 {
    // Bounded by MIN_SCORE..=MAX_SCORE, so the cast is lossless
    raw.clamp(MIN_SCORE, MAX_SCORE) as u8
}

#[inline]
fn activity_score(dog: ActivityLevel, wanted: ActivityLevel, weights: &ScoringWeights) -> i32 {
    match (dog.ordinal(), wanted.ordinal()) {
        (Some(a), Some(b)) if a == b => weights.activity_exact,
        (Some(a), Some(b)) if a.abs_diff(b) == 1 => weights.activity_adjacent,
        _ => 0,
    }
}

#[inline]
fn kids_score(dog: &Dog, has_kids: bool, weights: &ScoringWeights) -> i32 {
    match (has_kids, dog.good_with_kids) {
        (true, true) => weights.kids_compatible,
        (true, false) => -weights.kids_penalty,
        (false, _) => weights.no_kids,
    }
}

#[inline]
fn pets_score(dog: &Dog, has_other_pets: bool, weights: &ScoringWeights) -> i32 {
    if !has_other_pets {
        return weights.no_pets;
    }

    if dog.good_with_dogs || dog.good_with_cats {
        weights.pets_compatible
    } else {
        -weights.pets_penalty
    }
}

#[inline]
fn size_score(dog: &Dog, preferences: &UserPreferences, weights: &ScoringWeights) -> i32 {
    if preferences.preferred_size.accepts(dog.size) {
        weights.size_match
    } else {
        0
    }
}

#[inline]
fn age_score(dog: &Dog, preferences: &UserPreferences, weights: &ScoringWeights) -> i32 {
    if age_category(dog.age) == preferences.preferred_age {
        weights.age_match
    } else {
        0
    }
}

/// Space suitability
///
/// With a yard, large or high-energy dogs earn the full bonus and every other
/// dog a smaller one. Without a yard, small or low-energy dogs earn a bonus and
/// a dog that is both large and high-energy is penalised.
#[inline]
fn yard_score(dog: &Dog, has_yard: bool, weights: &ScoringWeights) -> i32 {
    let large = dog.size == DogSize::Large;
    let high = dog.activity_level == ActivityLevel::High;

    if has_yard {
        if large || high {
            weights.yard_active_dog
        } else {
            weights.yard_other_dog
        }
    } else if dog.size == DogSize::Small || dog.activity_level == ActivityLevel::Low {
        weights.no_yard_compact_dog
    } else if large && high {
        -weights.no_yard_penalty
    } else {
        0
    }
}

/// Tolerance for time spent alone
///
/// Up to four hours suits any dog. Up to eight hours penalises high-energy
/// dogs; beyond that medium-energy dogs are penalised too.
#[inline]
fn hours_alone_score(activity: ActivityLevel, hours_alone: u32, weights: &ScoringWeights) -> i32 {
    if hours_alone <= SHORT_ABSENCE_HOURS {
        return weights.short_absence;
    }

    match activity {
        ActivityLevel::High if hours_alone <= WORKDAY_ABSENCE_HOURS => {
            -weights.workday_absence_penalty
        }
        ActivityLevel::High => -weights.long_absence_high_penalty,
        ActivityLevel::Medium if hours_alone > WORKDAY_ABSENCE_HOURS => {
            -weights.long_absence_medium_penalty
        }
        _ => 0,
    }
}
