use crate::api_client::{ApiClient, Envelope};

/// One-shot in-memory cache of the distinct player names.
///
/// Once a fetch has succeeded the list is served from memory until
/// `clear_cache` forces the next call back to the network. Requiring
/// `&mut self` means a second fetch cannot start while one is in flight.
#[derive(Debug, Default)]
pub struct PlayerNameCache {
    players: Vec<String>,
    loaded: bool,
}

impl PlayerNameCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    /// Returns the player list, invoking `fetch` only when nothing is
    /// cached yet. A failed fetch leaves the cache unloaded and yields an
    /// empty list; there is no error channel on this store.
    pub fn fetch_players<F>(&mut self, fetch: F) -> Vec<String>
    where
        F: FnOnce() -> Envelope<Vec<String>>,
    {
        if self.loaded {
            return self.players.clone();
        }
        let envelope = fetch();
        match envelope.data {
            Some(players) if envelope.error.is_none() => {
                self.players = players;
                self.loaded = true;
                self.players.clone()
            }
            _ => Vec::new(),
        }
    }

    pub fn fetch_from(&mut self, api: &ApiClient) -> Vec<String> {
        self.fetch_players(|| api.get_players())
    }

    pub fn clear_cache(&mut self) {
        self.players.clear();
        self.loaded = false;
    }
}
