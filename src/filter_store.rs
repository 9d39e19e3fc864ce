use std::collections::HashMap;

use crate::models::latest_season;

/// The report categories that carry remembered filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    TotalPoints,
    Production,
    ShootingEfficiency,
    PerGameConsistency,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [
        ChartKind::TotalPoints,
        ChartKind::Production,
        ChartKind::ShootingEfficiency,
        ChartKind::PerGameConsistency,
    ];
}

/// Season and player selection for one chart, replaced wholesale on change.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterParams {
    pub season: Option<i32>,
    pub players: Option<String>,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            season: Some(latest_season()),
            players: None,
        }
    }
}

/// Per-chart filter memory. Session-only, never persisted.
#[derive(Debug, Default)]
pub struct FilterStore {
    filters: HashMap<ChartKind, FilterParams>,
}

impl FilterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_filters(&self, chart: ChartKind) -> FilterParams {
        self.filters.get(&chart).cloned().unwrap_or_default()
    }

    /// Fully replaces the chart's stored params; no field-level merge.
    pub fn set_filters(&mut self, chart: ChartKind, params: FilterParams) {
        self.filters.insert(chart, params);
    }

    /// Resets every chart back to the default selection at once.
    pub fn clear_filters(&mut self) {
        for chart in ChartKind::ALL {
            self.filters.insert(chart, FilterParams::default());
        }
    }
}
