pub mod api_client;
pub mod filter_store;
pub mod models;
pub mod nav;
pub mod normalize;
pub mod player_cache;
pub mod provider;
pub mod settings_store;
pub mod state;
pub mod storage;
