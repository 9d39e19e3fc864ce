use std::collections::VecDeque;

use chrono::{DateTime, Local};

use crate::api_client::Envelope;
use crate::filter_store::{ChartKind, FilterParams, FilterStore};
use crate::models::{
    HeadToHeadRow, PerGameConsistencyRow, ProductionRow, SEASONS, ScoutingHeatmapRow,
    ShootingEfficiencyRow, Stat, TotalPointsRow,
};

const MAX_LOGS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    DataGrid,
    TotalPoints,
    Production,
    ShootingEfficiency,
    PerGameConsistency,
    ScoutingHeatmap,
    HeadToHead,
    Profile,
}

impl Screen {
    /// Charts with remembered season/player filters.
    pub fn chart_kind(self) -> Option<ChartKind> {
        match self {
            Screen::TotalPoints => Some(ChartKind::TotalPoints),
            Screen::Production => Some(ChartKind::Production),
            Screen::ShootingEfficiency => Some(ChartKind::ShootingEfficiency),
            Screen::PerGameConsistency => Some(ChartKind::PerGameConsistency),
            _ => None,
        }
    }
}

/// Fetch requests sent to the provider thread.
#[derive(Debug, Clone)]
pub enum ProviderCommand {
    FetchStats { player: Option<String> },
    FetchPlayers { force: bool },
    FetchChart { chart: ChartKind, params: FilterParams },
    FetchScoutingHeatmap,
    FetchHeadToHead { params: FilterParams },
}

/// Results streamed back from the provider thread.
#[derive(Debug)]
pub enum Delta {
    Stats(Envelope<Vec<Stat>>),
    Players(Vec<String>),
    TotalPoints(Envelope<Vec<TotalPointsRow>>),
    Production(Envelope<Vec<ProductionRow>>),
    ShootingEfficiency(Envelope<Vec<ShootingEfficiencyRow>>),
    PerGameConsistency(Envelope<Vec<PerGameConsistencyRow>>),
    ScoutingHeatmap(Envelope<Vec<ScoutingHeatmapRow>>),
    HeadToHead(Envelope<Vec<HeadToHeadRow>>),
}

#[derive(Debug)]
pub struct DashboardState {
    pub screen: Screen,
    pub filters: FilterStore,

    pub players: Vec<String>,
    pub stats: Vec<Stat>,
    pub stats_loading: bool,
    /// When set, the grid shows `/stats/{player}` instead of `/stats`.
    pub stats_player: Option<String>,
    pub selected: usize,

    pub total_points: Vec<TotalPointsRow>,
    pub total_points_loading: bool,
    pub production: Vec<ProductionRow>,
    pub production_loading: bool,
    pub shooting_efficiency: Vec<ShootingEfficiencyRow>,
    pub shooting_efficiency_loading: bool,
    pub per_game_consistency: Vec<PerGameConsistencyRow>,
    pub per_game_consistency_loading: bool,
    pub scouting_heatmap: Vec<ScoutingHeatmapRow>,
    pub scouting_heatmap_loading: bool,

    pub head_to_head: Vec<HeadToHeadRow>,
    pub head_to_head_loading: bool,
    // Head-to-head is keyed by an explicit player pair, not the filter store.
    pub head_to_head_pair: usize,
    pub head_to_head_season: Option<i32>,

    pub logs: VecDeque<String>,
    pub help_overlay: bool,
    pub last_refresh: Option<DateTime<Local>>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            screen: Screen::DataGrid,
            filters: FilterStore::new(),
            players: Vec::new(),
            stats: Vec::new(),
            stats_loading: false,
            stats_player: None,
            selected: 0,
            total_points: Vec::new(),
            total_points_loading: false,
            production: Vec::new(),
            production_loading: false,
            shooting_efficiency: Vec::new(),
            shooting_efficiency_loading: false,
            per_game_consistency: Vec::new(),
            per_game_consistency_loading: false,
            scouting_heatmap: Vec::new(),
            scouting_heatmap_loading: false,
            head_to_head: Vec::new(),
            head_to_head_loading: false,
            head_to_head_pair: 0,
            head_to_head_season: Some(crate::models::latest_season()),
            logs: VecDeque::new(),
            help_overlay: false,
            last_refresh: None,
        }
    }

    pub fn push_log(&mut self, line: impl Into<String>) {
        self.logs.push_back(line.into());
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }

    pub fn select_next(&mut self) {
        if !self.stats.is_empty() && self.selected + 1 < self.stats.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_player(&self) -> Option<&str> {
        self.stats
            .get(self.selected)
            .map(|stat| stat.player_name.as_str())
    }

    /// Advance the remembered season for the given chart: each known season
    /// in turn, then "all seasons" (no filter). The stored params are
    /// replaced wholesale.
    pub fn cycle_chart_season(&mut self, chart: ChartKind) -> FilterParams {
        let current = self.filters.get_filters(chart);
        let params = FilterParams {
            season: next_season(current.season),
            players: current.players,
        };
        self.filters.set_filters(chart, params.clone());
        params
    }

    pub fn cycle_head_to_head_season(&mut self) -> Option<i32> {
        self.head_to_head_season = next_season(self.head_to_head_season);
        self.head_to_head_season
    }

    /// The current head-to-head matchup: two adjacent names from the player
    /// list, advanced with `next_head_to_head_pair`.
    pub fn head_to_head_players(&self) -> Option<String> {
        if self.players.len() < 2 {
            return None;
        }
        let first = self.head_to_head_pair % self.players.len();
        let second = (first + 1) % self.players.len();
        Some(format!("{},{}", self.players[first], self.players[second]))
    }

    pub fn next_head_to_head_pair(&mut self) {
        if !self.players.is_empty() {
            self.head_to_head_pair = (self.head_to_head_pair + 1) % self.players.len();
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

fn next_season(current: Option<i32>) -> Option<i32> {
    match current {
        None => Some(SEASONS[0]),
        Some(season) => SEASONS
            .iter()
            .position(|s| *s == season)
            .and_then(|idx| SEASONS.get(idx + 1))
            .copied(),
    }
}

pub fn apply_delta(state: &mut DashboardState, delta: Delta) {
    match delta {
        Delta::Stats(envelope) => {
            state.stats_loading = false;
            match unwrap_envelope(state, "stats", envelope) {
                Some(rows) => {
                    state.stats = rows;
                    state.selected = state.selected.min(state.stats.len().saturating_sub(1));
                }
                None => state.stats.clear(),
            }
        }
        Delta::Players(players) => {
            if players.is_empty() {
                state.push_log("[WARN] Player list unavailable");
            }
            state.players = players;
        }
        Delta::TotalPoints(envelope) => {
            state.total_points_loading = false;
            state.total_points =
                unwrap_envelope(state, "total-points", envelope).unwrap_or_default();
        }
        Delta::Production(envelope) => {
            state.production_loading = false;
            state.production = unwrap_envelope(state, "production", envelope).unwrap_or_default();
        }
        Delta::ShootingEfficiency(envelope) => {
            state.shooting_efficiency_loading = false;
            state.shooting_efficiency =
                unwrap_envelope(state, "shooting-efficiency", envelope).unwrap_or_default();
        }
        Delta::PerGameConsistency(envelope) => {
            state.per_game_consistency_loading = false;
            state.per_game_consistency =
                unwrap_envelope(state, "per-game-consistency", envelope).unwrap_or_default();
        }
        Delta::ScoutingHeatmap(envelope) => {
            state.scouting_heatmap_loading = false;
            state.scouting_heatmap =
                unwrap_envelope(state, "scouting-heatmap", envelope).unwrap_or_default();
        }
        Delta::HeadToHead(envelope) => {
            state.head_to_head_loading = false;
            state.head_to_head =
                unwrap_envelope(state, "head-to-head", envelope).unwrap_or_default();
        }
    }
}

fn unwrap_envelope<T>(
    state: &mut DashboardState,
    report: &str,
    envelope: Envelope<T>,
) -> Option<T> {
    if let Some(error) = envelope.error {
        state.push_log(format!("[WARN] {report}: {error}"));
        return None;
    }
    state.last_refresh = Some(Local::now());
    envelope.data
}
