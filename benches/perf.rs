use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use reqwest::StatusCode;
use serde_json::{Value, json};

use puck_terminal::api_client::{Payload, decode_response};
use puck_terminal::models::Stat;
use puck_terminal::normalize::map_keys_to_camel_case;

fn sample_payload(rows: usize) -> Value {
    let data: Vec<Value> = (0..rows)
        .map(|idx| {
            json!({
                "id": idx,
                "season": 2024,
                "player_name": format!("Player {idx}"),
                "team": "WSH",
                "team_full_name": "Washington Capitals",
                "gp": 80,
                "toi": 1400.0,
                "toi_per_game": 17.5,
                "shots": 250,
                "shots_per_game": 3.1,
                "shooting_percentage": 11.2,
                "goals": 28,
                "goals_per_game": 0.35,
                "assists": 40,
                "assists_per_game": 0.5,
                "points": 68,
                "points_per_game": 0.85,
                "scouting_grade": 82
            })
        })
        .collect();
    json!({ "data": data })
}

fn bench_normalize(c: &mut Criterion) {
    let payload = sample_payload(200);
    c.bench_function("normalize_payload", |b| {
        b.iter(|| {
            let out = map_keys_to_camel_case(black_box(payload.clone()));
            black_box(out);
        })
    });
}

fn bench_decode_stats(c: &mut Criterion) {
    let body = serde_json::to_string(&sample_payload(200)).unwrap();
    c.bench_function("decode_stats", |b| {
        b.iter(|| {
            let envelope = decode_response::<Payload<Vec<Stat>>>(StatusCode::OK, black_box(&body));
            black_box(envelope.data.map(|p| p.data.len()));
        })
    });
}

criterion_group!(perf, bench_normalize, bench_decode_stats);
criterion_main!(perf);
