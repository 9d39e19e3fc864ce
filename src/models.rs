use chrono::Datelike;
use serde::Deserialize;

/// Seasons the backend has data for.
pub const SEASONS: [i32; 7] = [2019, 2020, 2021, 2022, 2023, 2024, 2025];

/// Most recent known season not in the future; the default chart filter.
pub fn latest_season() -> i32 {
    let year = chrono::Local::now().year();
    SEASONS
        .iter()
        .copied()
        .filter(|s| *s <= year)
        .max()
        .unwrap_or(SEASONS[SEASONS.len() - 1])
}

/// One player-season statistical record, as projected by `/stats`.
///
/// Reports may project subsets of the numeric fields, so all of them are
/// optional on the wire; identity fields are required for display.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stat {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub season: Option<i32>,
    pub player_name: String,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub team_full_name: String,
    #[serde(default)]
    pub gp: Option<u32>,
    #[serde(default)]
    pub toi: Option<f64>,
    #[serde(default)]
    pub toi_per_game: Option<f64>,
    #[serde(default)]
    pub shots: Option<u32>,
    #[serde(default)]
    pub shots_per_game: Option<f64>,
    #[serde(default)]
    pub shooting_percentage: Option<f64>,
    #[serde(default)]
    pub goals: Option<u32>,
    #[serde(default)]
    pub goals_per_game: Option<f64>,
    #[serde(default)]
    pub assists: Option<u32>,
    #[serde(default)]
    pub assists_per_game: Option<f64>,
    #[serde(default)]
    pub points: Option<u32>,
    #[serde(default)]
    pub points_per_game: Option<f64>,
    #[serde(default)]
    pub scouting_grade: Option<u32>,
}

/// Row of `/charts/total-points`: points broken down into goals and assists.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalPointsRow {
    pub player_name: String,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub season: Option<i32>,
    #[serde(default)]
    pub goals: Option<u32>,
    #[serde(default)]
    pub assists: Option<u32>,
    #[serde(default)]
    pub points: Option<u32>,
}

/// Row of `/charts/production`: points per game against ice time per game.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionRow {
    pub player_name: String,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub season: Option<i32>,
    #[serde(default)]
    pub toi_per_game: Option<f64>,
    #[serde(default)]
    pub points_per_game: Option<f64>,
}

/// Row of `/charts/shooting-efficiency`: goals as a fraction of shots taken.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShootingEfficiencyRow {
    pub player_name: String,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub season: Option<i32>,
    #[serde(default)]
    pub goals: Option<u32>,
    #[serde(default)]
    pub shots: Option<u32>,
    #[serde(default)]
    pub shooting_efficiency: Option<f64>,
}

/// Row of `/charts/per-game-consistency`: the per-game rate metrics.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerGameConsistencyRow {
    pub player_name: String,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub season: Option<i32>,
    #[serde(default)]
    pub goals_per_game: Option<f64>,
    #[serde(default)]
    pub assists_per_game: Option<f64>,
    #[serde(default)]
    pub shots_per_game: Option<f64>,
    #[serde(default)]
    pub toi_per_game: Option<f64>,
}

/// Row of `/charts/scouting-heatmap`: scouting grade against production,
/// across all seasons.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoutingHeatmapRow {
    pub player_name: String,
    #[serde(default)]
    pub season: Option<i32>,
    #[serde(default)]
    pub scouting_grade: Option<u32>,
    #[serde(default)]
    pub points_per_game: Option<f64>,
}

/// Row of `/charts/head-to-head`: the full projection for a compared player.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadToHeadRow {
    pub player_name: String,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub season: Option<i32>,
    #[serde(default)]
    pub gp: Option<u32>,
    #[serde(default)]
    pub goals: Option<u32>,
    #[serde(default)]
    pub assists: Option<u32>,
    #[serde(default)]
    pub points: Option<u32>,
    #[serde(default)]
    pub shots: Option<u32>,
    #[serde(default)]
    pub shooting_percentage: Option<f64>,
    #[serde(default)]
    pub toi_per_game: Option<f64>,
    #[serde(default)]
    pub points_per_game: Option<f64>,
    #[serde(default)]
    pub scouting_grade: Option<u32>,
}
