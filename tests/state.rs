use puck_terminal::api_client::Envelope;
use puck_terminal::filter_store::ChartKind;
use puck_terminal::models::{SEASONS, Stat, TotalPointsRow};
use puck_terminal::state::{DashboardState, Delta, apply_delta};

fn stat(player: &str, points: u32) -> Stat {
    Stat {
        id: Some(1),
        season: Some(2024),
        player_name: player.to_string(),
        team: "WSH".to_string(),
        team_full_name: "Washington Capitals".to_string(),
        gp: Some(80),
        toi: None,
        toi_per_game: None,
        shots: None,
        shots_per_game: None,
        shooting_percentage: None,
        goals: None,
        goals_per_game: None,
        assists: None,
        assists_per_game: None,
        points: Some(points),
        points_per_game: None,
        scouting_grade: None,
    }
}

#[test]
fn stats_delta_fills_the_grid_and_clamps_selection() {
    let mut state = DashboardState::new();
    state.selected = 10;
    state.stats_loading = true;

    apply_delta(
        &mut state,
        Delta::Stats(Envelope::ok(vec![stat("a", 10), stat("b", 20)])),
    );

    assert_eq!(state.stats.len(), 2);
    assert!(!state.stats_loading);
    assert_eq!(state.selected, 1);
}

#[test]
fn error_delta_logs_and_clears_data() {
    let mut state = DashboardState::new();
    state.stats = vec![stat("a", 10)];
    state.stats_loading = true;

    apply_delta(&mut state, Delta::Stats(Envelope::err("backend down")));

    assert!(state.stats.is_empty());
    assert!(!state.stats_loading);
    assert!(
        state
            .logs
            .back()
            .is_some_and(|line| line.contains("backend down"))
    );
}

#[test]
fn chart_delta_settles_its_loading_flag() {
    let mut state = DashboardState::new();
    state.total_points_loading = true;

    apply_delta(
        &mut state,
        Delta::TotalPoints(Envelope::ok(vec![TotalPointsRow {
            player_name: "a".to_string(),
            team: "WSH".to_string(),
            season: Some(2024),
            goals: Some(4),
            assists: Some(6),
            points: Some(10),
        }])),
    );

    assert!(!state.total_points_loading);
    assert_eq!(state.total_points.len(), 1);
    assert!(state.last_refresh.is_some());
}

#[test]
fn season_cycle_walks_the_known_seasons_then_all() {
    let mut state = DashboardState::new();
    // Start from the first season and walk the whole list.
    state.filters.set_filters(
        ChartKind::Production,
        puck_terminal::filter_store::FilterParams {
            season: Some(SEASONS[0]),
            players: None,
        },
    );

    for expected in SEASONS.iter().skip(1) {
        let params = state.cycle_chart_season(ChartKind::Production);
        assert_eq!(params.season, Some(*expected));
    }

    // After the last season the filter opens up to all seasons, then wraps.
    assert_eq!(state.cycle_chart_season(ChartKind::Production).season, None);
    assert_eq!(
        state.cycle_chart_season(ChartKind::Production).season,
        Some(SEASONS[0])
    );
}

#[test]
fn head_to_head_pairs_walk_the_player_list() {
    let mut state = DashboardState::new();
    assert_eq!(state.head_to_head_players(), None);

    state.players = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    assert_eq!(state.head_to_head_players(), Some("a,b".to_string()));

    state.next_head_to_head_pair();
    assert_eq!(state.head_to_head_players(), Some("b,c".to_string()));

    state.next_head_to_head_pair();
    assert_eq!(state.head_to_head_players(), Some("c,a".to_string()));
}

#[test]
fn players_delta_replaces_the_list() {
    let mut state = DashboardState::new();
    apply_delta(&mut state, Delta::Players(vec!["a".to_string()]));
    assert_eq!(state.players, ["a".to_string()]);

    // An empty list is worth a console note but still applied.
    apply_delta(&mut state, Delta::Players(Vec::new()));
    assert!(state.players.is_empty());
    assert!(!state.logs.is_empty());
}
