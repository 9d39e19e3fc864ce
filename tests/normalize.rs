use serde_json::json;

use puck_terminal::normalize::{map_keys_to_camel_case, to_camel_case};

#[test]
fn rewrites_snake_case_keys() {
    assert_eq!(to_camel_case("player_name"), "playerName");
    assert_eq!(to_camel_case("toi_per_game"), "toiPerGame");
    assert_eq!(to_camel_case("team"), "team");
}

#[test]
fn only_single_underscore_then_letter_is_rewritten() {
    // Doubled and trailing underscores keep their literal form.
    assert_eq!(to_camel_case("double__underscore"), "double_Underscore");
    assert_eq!(to_camel_case("trailing_"), "trailing_");
    assert_eq!(to_camel_case("shots_2"), "shots_2");
}

#[test]
fn normalizes_nested_objects() {
    let input = json!({
        "player_name": "A. Ovechkin",
        "career": {
            "total_points": 42,
            "by_season": [
                {"season": 2023, "goals_per_game": 0.51},
                {"season": 2024, "goals_per_game": 0.47}
            ]
        }
    });
    let expected = json!({
        "playerName": "A. Ovechkin",
        "career": {
            "totalPoints": 42,
            "bySeason": [
                {"season": 2023, "goalsPerGame": 0.51},
                {"season": 2024, "goalsPerGame": 0.47}
            ]
        }
    });
    assert_eq!(map_keys_to_camel_case(input), expected);
}

#[test]
fn is_idempotent() {
    let input = json!({
        "player_name": "B. Orr",
        "stats": [{"shots_per_game": 3.4, "team_full_name": "Boston Bruins"}]
    });
    let once = map_keys_to_camel_case(input);
    let twice = map_keys_to_camel_case(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn camel_case_input_is_a_no_op() {
    let input = json!({
        "playerName": "S. Crosby",
        "pointsPerGame": 1.27,
        "nested": {"teamFullName": "Pittsburgh Penguins"}
    });
    assert_eq!(map_keys_to_camel_case(input.clone()), input);
}

#[test]
fn arrays_keep_length_and_order() {
    let input = json!([
        {"player_name": "one"},
        {"player_name": "two"},
        {"player_name": "three"},
        7,
        "plain"
    ]);
    let out = map_keys_to_camel_case(input);
    let arr = out.as_array().expect("array in, array out");
    assert_eq!(arr.len(), 5);
    assert_eq!(arr[0]["playerName"], "one");
    assert_eq!(arr[1]["playerName"], "two");
    assert_eq!(arr[2]["playerName"], "three");
    assert_eq!(arr[3], 7);
    assert_eq!(arr[4], "plain");
}

#[test]
fn primitives_pass_through() {
    assert_eq!(map_keys_to_camel_case(json!(null)), json!(null));
    assert_eq!(map_keys_to_camel_case(json!(1.5)), json!(1.5));
    assert_eq!(map_keys_to_camel_case(json!("a_b")), json!("a_b"));
    assert_eq!(map_keys_to_camel_case(json!(true)), json!(true));
}
