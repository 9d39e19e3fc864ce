use std::sync::mpsc::{Receiver, Sender};
use std::thread;

use crate::api_client::ApiClient;
use crate::filter_store::{ChartKind, FilterParams};
use crate::player_cache::PlayerNameCache;
use crate::state::{Delta, ProviderCommand};

/// Spawn the fetch worker. It owns the API client and the player-name
/// cache; all blocking I/O happens here, never on the UI thread.
pub fn spawn_provider(delta_tx: Sender<Delta>, cmd_rx: Receiver<ProviderCommand>) {
    thread::spawn(move || {
        let api = ApiClient::from_env();
        let mut players = PlayerNameCache::new();
        provider_loop(&api, &mut players, &delta_tx, &cmd_rx);
    });
}

fn provider_loop(
    api: &ApiClient,
    players: &mut PlayerNameCache,
    delta_tx: &Sender<Delta>,
    cmd_rx: &Receiver<ProviderCommand>,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        let delta = match cmd {
            ProviderCommand::FetchStats { player } => match player {
                Some(name) => Delta::Stats(api.get_stats_by_player_name(&name)),
                None => Delta::Stats(api.get_stats()),
            },
            ProviderCommand::FetchPlayers { force } => {
                if force {
                    players.clear_cache();
                }
                Delta::Players(players.fetch_from(api))
            }
            ProviderCommand::FetchChart { chart, params } => fetch_chart(api, chart, &params),
            ProviderCommand::FetchScoutingHeatmap => {
                Delta::ScoutingHeatmap(api.get_scouting_heatmap())
            }
            ProviderCommand::FetchHeadToHead { params } => Delta::HeadToHead(
                api.get_head_to_head(params.season, params.players.as_deref()),
            ),
        };
        if delta_tx.send(delta).is_err() {
            return;
        }
    }
}

fn fetch_chart(api: &ApiClient, chart: ChartKind, params: &FilterParams) -> Delta {
    match chart {
        ChartKind::TotalPoints => Delta::TotalPoints(api.get_total_points(params.season)),
        ChartKind::Production => Delta::Production(api.get_production(params.season)),
        ChartKind::ShootingEfficiency => {
            Delta::ShootingEfficiency(api.get_shooting_efficiency(params.season))
        }
        ChartKind::PerGameConsistency => {
            Delta::PerGameConsistency(api.get_per_game_consistency(params.season))
        }
    }
}
