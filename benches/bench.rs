// Criterion benchmarks for Calma Algo

use calma_algo::core::scoring::weighted_distance;
use calma_algo::core::vector::{professional_vector, user_vector, ScoringParams};
use calma_algo::core::{Matcher, MoodQuadrant, MoodResolver};
use calma_algo::models::{
    HistoricalAverages, MatchPreferences, ProfessionalRecord, ScreeningValue, SelfAssessment,
    SpecializationLevel, UserAssessment,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::collections::HashMap;

fn create_candidate(id: usize) -> ProfessionalRecord {
    ProfessionalRecord {
        id: id.to_string(),
        first_name: "Prof".to_string(),
        middle_name: String::new(),
        last_name: format!("Number {}", id),
        age: Some(25 + (id % 40) as u8),
        gender: Some(if id % 2 == 0 { "female" } else { "male" }.to_string()),
        availability: HashMap::from([
            ("morning".to_string(), id % 2 == 0),
            ("evening".to_string(), id % 3 == 0),
        ]),
        specialization: HashMap::from([
            ("anxiety".to_string(), SpecializationLevel::Flag(id % 2 == 0)),
            ("stress".to_string(), SpecializationLevel::Score((id % 25) as f64)),
        ]),
        rating: 3.0 + (id % 3) as f64 / 2.0,
        profile_image: None,
    }
}

fn create_assessment() -> UserAssessment {
    UserAssessment {
        user_id: Some("bench-user".to_string()),
        preferences: MatchPreferences {
            preferred_age: 30,
            preferred_gender: "female".to_string(),
            preferred_slot: "morning".to_string(),
        },
        scores: SelfAssessment {
            gad7: ScreeningValue::Total(14.0),
            phq9: ScreeningValue::Total(9.0),
            pss: ScreeningValue::Total(21.0),
        },
    }
}

fn create_label_assessment() -> UserAssessment {
    UserAssessment {
        scores: SelfAssessment {
            gad7: ScreeningValue::Interpretation("Moderate anxiety".to_string()),
            phq9: ScreeningValue::Interpretation("Minimal or no depression".to_string()),
            pss: ScreeningValue::Interpretation("High perceived stress".to_string()),
        },
        ..create_assessment()
    }
}

fn bench_vector_build(c: &mut Criterion) {
    let assessment = create_assessment();
    let candidate = create_candidate(0);
    let params = ScoringParams::default();
    let history = HistoricalAverages::default();

    c.bench_function("user_vector", |b| {
        b.iter(|| user_vector(black_box(&assessment), black_box(&history), &params));
    });

    c.bench_function("professional_vector", |b| {
        b.iter(|| {
            professional_vector(
                black_box(&candidate),
                black_box(&assessment.preferences),
                &params,
            )
        });
    });
}

fn bench_distance(c: &mut Criterion) {
    let assessment = create_assessment();
    let params = ScoringParams::default();
    let history = HistoricalAverages::default();
    let user = user_vector(&assessment, &history, &params).unwrap();
    let candidate =
        professional_vector(&create_candidate(1), &assessment.preferences, &params).unwrap();

    c.bench_function("weighted_distance", |b| {
        b.iter(|| weighted_distance(black_box(&user), black_box(&candidate), &params.weights));
    });
}

fn bench_matching(c: &mut Criterion) {
    let additive = Matcher::additive();
    let nearest = Matcher::nearest(5);
    let label_assessment = create_label_assessment();
    let score_assessment = create_assessment();

    let mut group = c.benchmark_group("matching");

    for candidate_count in [10usize, 50, 100, 500, 1000].iter() {
        let candidates: Vec<ProfessionalRecord> =
            (0..*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::new("additive", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    additive.match_professionals(
                        black_box(&label_assessment),
                        black_box(&candidates),
                        None,
                    )
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("nearest", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    nearest.match_professionals(
                        black_box(&score_assessment),
                        black_box(&candidates),
                        None,
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_mood_resolution(c: &mut Criterion) {
    let quadrants = vec![MoodQuadrant {
        name: "lowEnergyHighPleasant".to_string(),
        suggestions: HashMap::from([(
            "Calm".to_string(),
            vec!["Take a slow walk".to_string(), "Stretch".to_string()],
        )]),
        categories: HashMap::from([(
            "restful".to_string(),
            vec!["Sleepy".to_string(), "Dozy".to_string()],
        )]),
        category_suggestions: HashMap::from([(
            "restful".to_string(),
            vec!["Wind down early".to_string()],
        )]),
    }];
    let resolver = MoodResolver::new(quadrants);

    c.bench_function("mood_resolution", |b| {
        b.iter(|| resolver.resolve(black_box("Sleepy")));
    });
}

criterion_group!(
    benches,
    bench_vector_build,
    bench_distance,
    bench_matching,
    bench_mood_resolution
);

criterion_main!(benches);
