pub mod analytics;
pub mod api;
pub mod auth;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod report;
pub mod schema;
pub mod store;
pub mod table;

pub use analytics::StatsService;
pub use api::FootballApi;
pub use cli::{Cli, Commands};
pub use config::AppConfig;
pub use error::{Error, Result};
pub use store::LeagueStore;
