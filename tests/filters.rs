use puck_terminal::filter_store::{ChartKind, FilterParams, FilterStore};
use puck_terminal::models::latest_season;

#[test]
fn default_filters_select_the_latest_season() {
    let store = FilterStore::new();
    let params = store.get_filters(ChartKind::TotalPoints);
    assert_eq!(params.season, Some(latest_season()));
    assert_eq!(params.players, None);
}

#[test]
fn set_then_get_returns_exactly_what_was_stored() {
    let mut store = FilterStore::new();
    store.set_filters(
        ChartKind::Production,
        FilterParams {
            season: Some(2023),
            players: None,
        },
    );

    let params = store.get_filters(ChartKind::Production);
    assert_eq!(params.season, Some(2023));
    assert_eq!(params.players, None);
}

#[test]
fn chart_entries_are_independent() {
    let mut store = FilterStore::new();
    store.set_filters(
        ChartKind::Production,
        FilterParams {
            season: Some(2023),
            players: None,
        },
    );

    // Other charts keep their defaults.
    let untouched = store.get_filters(ChartKind::TotalPoints);
    assert_eq!(untouched, FilterParams::default());
}

#[test]
fn set_replaces_wholesale() {
    let mut store = FilterStore::new();
    store.set_filters(
        ChartKind::ShootingEfficiency,
        FilterParams {
            season: Some(2021),
            players: Some("Crosby, Sidney".to_string()),
        },
    );
    store.set_filters(
        ChartKind::ShootingEfficiency,
        FilterParams {
            season: Some(2022),
            players: None,
        },
    );

    let params = store.get_filters(ChartKind::ShootingEfficiency);
    assert_eq!(params.season, Some(2022));
    // The player selection from the first set does not survive the second.
    assert_eq!(params.players, None);
}

#[test]
fn clear_resets_every_chart_at_once() {
    let mut store = FilterStore::new();
    for chart in ChartKind::ALL {
        store.set_filters(
            chart,
            FilterParams {
                season: Some(2019),
                players: Some("x".to_string()),
            },
        );
    }

    store.clear_filters();
    for chart in ChartKind::ALL {
        assert_eq!(store.get_filters(chart), FilterParams::default());
    }
}
