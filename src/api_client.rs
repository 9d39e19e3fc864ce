use std::time::Duration;

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::models::{
    HeadToHeadRow, PerGameConsistencyRow, ProductionRow, ScoutingHeatmapRow,
    ShootingEfficiencyRow, Stat, TotalPointsRow,
};
use crate::normalize::map_keys_to_camel_case;

const BASE_URL_ENV: &str = "STATS_API_URL";
const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const REQUEST_TIMEOUT_SECS: u64 = 10;
const GENERIC_ERROR: &str = "An error occurred with the API request";

static CLIENT: OnceCell<Client> = OnceCell::new();

fn shared_client() -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("failed to build http client")
    })
}

/// Uniform result wrapper for every report fetch.
///
/// Exactly one of `data` and `error` is set once a call returns. `is_loading`
/// is kept for symmetry with a reactive consumer; a settled envelope always
/// carries `false`.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<T> {
    pub data: Option<T>,
    pub error: Option<String>,
    pub is_loading: bool,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            is_loading: false,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(message.into()),
            is_loading: false,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        Envelope {
            data: self.data.map(f),
            error: self.error,
            is_loading: self.is_loading,
        }
    }
}

/// The backend wraps every report body in `{"data": ...}`.
#[derive(Debug, Deserialize)]
pub struct Payload<T> {
    pub data: T,
}

/// Blocking client for the stats backend.
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Base URL comes from `STATS_API_URL`, defaulting to the local dev
    /// server when unset or blank.
    pub fn from_env() -> Self {
        let base_url = std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    pub fn get_stats(&self) -> Envelope<Vec<Stat>> {
        self.get_rows("/stats", Vec::new())
    }

    pub fn get_stats_by_player_name(&self, player_name: &str) -> Envelope<Vec<Stat>> {
        self.get_rows(&format!("/stats/{player_name}"), Vec::new())
    }

    pub fn get_players(&self) -> Envelope<Vec<String>> {
        self.get_rows("/players", Vec::new())
    }

    pub fn get_total_points(&self, season: Option<i32>) -> Envelope<Vec<TotalPointsRow>> {
        self.get_rows("/charts/total-points", season_query(season))
    }

    pub fn get_production(&self, season: Option<i32>) -> Envelope<Vec<ProductionRow>> {
        self.get_rows("/charts/production", season_query(season))
    }

    pub fn get_shooting_efficiency(
        &self,
        season: Option<i32>,
    ) -> Envelope<Vec<ShootingEfficiencyRow>> {
        self.get_rows("/charts/shooting-efficiency", season_query(season))
    }

    pub fn get_per_game_consistency(
        &self,
        season: Option<i32>,
    ) -> Envelope<Vec<PerGameConsistencyRow>> {
        self.get_rows("/charts/per-game-consistency", season_query(season))
    }

    pub fn get_scouting_heatmap(&self) -> Envelope<Vec<ScoutingHeatmapRow>> {
        self.get_rows("/charts/scouting-heatmap", Vec::new())
    }

    pub fn get_head_to_head(
        &self,
        season: Option<i32>,
        players: Option<&str>,
    ) -> Envelope<Vec<HeadToHeadRow>> {
        let mut query = season_query(season);
        if let Some(players) = players.map(str::trim).filter(|p| !p.is_empty()) {
            query.push(("players", players.to_string()));
        }
        self.get_rows("/charts/head-to-head", query)
    }

    fn get_rows<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(&str, String)>,
    ) -> Envelope<Vec<T>> {
        self.get::<Payload<Vec<T>>>(path, query)
            .map(|payload| payload.data)
    }

    fn get<T: DeserializeOwned>(&self, path: &str, query: Vec<(&str, String)>) -> Envelope<T> {
        let client = match shared_client() {
            Ok(client) => client,
            Err(err) => return Envelope::err(err.to_string()),
        };
        let mut request = client.get(format!("{}{}", self.base_url, path));
        // Skip the query string entirely when no filter is set.
        if !query.is_empty() {
            request = request.query(&query);
        }
        let response = match request.send() {
            Ok(response) => response,
            Err(err) => return Envelope::err(transport_message(&err)),
        };
        let status = response.status();
        let body = match response.text() {
            Ok(body) => body,
            Err(err) => return Envelope::err(transport_message(&err)),
        };
        decode_response(status, &body)
    }
}

fn season_query(season: Option<i32>) -> Vec<(&'static str, String)> {
    match season {
        Some(season) => vec![("season", season.to_string())],
        None => Vec::new(),
    }
}

/// Turn a settled HTTP exchange into an envelope.
///
/// Success bodies are key-normalized before typed decoding; failure bodies
/// contribute their `message` field when they have one.
pub fn decode_response<T: DeserializeOwned>(status: StatusCode, body: &str) -> Envelope<T> {
    if !status.is_success() {
        return Envelope::err(error_message(status, body));
    }
    let value = match serde_json::from_str::<Value>(body) {
        Ok(value) => value,
        Err(_) => return Envelope::err(GENERIC_ERROR),
    };
    match serde_json::from_value(map_keys_to_camel_case(value)) {
        Ok(data) => Envelope::ok(data),
        Err(_) => Envelope::err(GENERIC_ERROR),
    }
}

fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(message) = value.get("message").and_then(Value::as_str) {
            let message = message.trim();
            if !message.is_empty() {
                return message.to_string();
            }
        }
    }
    format!("http {status}")
}

fn transport_message(err: &reqwest::Error) -> String {
    let text = err.to_string();
    if text.trim().is_empty() {
        GENERIC_ERROR.to_string()
    } else {
        text
    }
}
