// Criterion benchmarks for the PawMatch matching engine

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pawmatch::core::{apply_filter, haversine_distance, Matcher};
use pawmatch::models::{
    ActivityLevel, AdoptionStatus, AgeCategory, Dog, DogFilter, DogSize, ExperienceLevel, Gender,
    HealthStatus, HomeType, SizePreference, TrainingLevel, UserPreferences,
};

const SIZES: [DogSize; 3] = [DogSize::Small, DogSize::Medium, DogSize::Large];
const LEVELS: [ActivityLevel; 3] = [ActivityLevel::Low, ActivityLevel::Medium, ActivityLevel::High];

fn create_dog(id: usize) -> Dog {
    Dog {
        id: id as u64,
        name: format!("Dog {}", id),
        breed: "Mixed".to_string(),
        age: (id % 150) as u32,
        size: SIZES[id % 3],
        gender: if id % 2 == 0 { Gender::Female } else { Gender::Male },
        description: String::new(),
        image_url: String::new(),
        good_with_kids: id % 4 != 0,
        good_with_dogs: id % 3 != 0,
        good_with_cats: id % 5 == 0,
        activity_level: LEVELS[(id / 3) % 3],
        training_level: TrainingLevel::Basic,
        health_status: HealthStatus::Healthy,
        shelter_id: 1,
        adoption_status: AdoptionStatus::Available,
        created_at: Utc::now(),
    }
}

fn create_preferences() -> UserPreferences {
    UserPreferences {
        id: 1,
        user_id: 1,
        activity_level: ActivityLevel::Medium,
        home_type: HomeType::House,
        has_yard: true,
        has_kids: true,
        has_other_pets: false,
        experience_level: ExperienceLevel::SomeExperience,
        preferred_age: AgeCategory::Young,
        preferred_size: SizePreference::Medium,
        hours_alone: 6,
        created_at: Utc::now(),
    }
}

fn bench_score(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let preferences = create_preferences();
    let dog = create_dog(7);

    c.bench_function("score_single_dog", |b| {
        b.iter(|| matcher.score(black_box(&dog), black_box(&preferences)));
    });
}

fn bench_rank(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let preferences = create_preferences();

    let mut group = c.benchmark_group("ranking");

    for candidate_count in [10, 100, 1000, 10000].iter() {
        let candidates: Vec<Dog> = (0..*candidate_count).map(create_dog).collect();

        group.bench_with_input(
            BenchmarkId::new("rank", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| matcher.rank(black_box(&candidates), black_box(Some(&preferences))));
            },
        );
    }

    group.finish();
}

fn bench_catalog_filter(c: &mut Criterion) {
    let dogs: Vec<Dog> = (0..1000).map(create_dog).collect();
    let filter = DogFilter {
        size: Some(DogSize::Medium),
        good_with_kids: Some(true),
        ..DogFilter::default()
    };

    c.bench_function("filter_1000_dogs", |b| {
        b.iter(|| apply_filter(black_box(dogs.clone()), black_box(&filter)));
    });
}

fn bench_haversine_distance(c: &mut Criterion) {
    c.bench_function("haversine_distance", |b| {
        b.iter(|| {
            haversine_distance(
                black_box(34.052235),
                black_box(-118.243683),
                black_box(34.062235),
                black_box(-118.263683),
            )
        });
    });
}

criterion_group!(
    benches,
    bench_score,
    bench_rank,
    bench_catalog_filter,
    bench_haversine_distance
);

criterion_main!(benches);
