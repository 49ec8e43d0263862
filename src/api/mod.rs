//! football-data.org accessor with silent fallback.
//!
//! Every operation returns data: a failed request, a non-2xx status or a
//! payload without the expected top-level array is logged and replaced by
//! a fixed dataset of the same shape.

pub mod fallback;
pub mod form;
pub mod models;
pub mod transport;

pub use form::{form_string, lookup_form, Form, FormResult, UNKNOWN_FORM};
pub use models::{ApiScorerRow, FixtureRow, ResultRow, StandingRow};
pub use transport::{ApiError, HttpTransport, OfflineTransport, Transport};

use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::cache::TtlCache;
use crate::config::AppConfig;
use models::{MatchesResponse, ScorersResponse, StandingsResponse};

/// Competition code for the Spanish first division
pub const COMPETITION: &str = "PD";

const FIXTURE_LIMIT: usize = 10;
const SCORER_LIMIT: u32 = 10;

pub struct FootballApi {
    transport: Box<dyn Transport>,
    standings_cache: TtlCache<(), Vec<StandingRow>>,
    fixtures_cache: TtlCache<(), Vec<FixtureRow>>,
    results_cache: TtlCache<(), Vec<ResultRow>>,
    scorers_cache: TtlCache<(), Vec<ApiScorerRow>>,
    form_cache: TtlCache<String, Form>,
}

impl FootballApi {
    /// Client against the configured API over HTTP
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        Ok(Self::with_transport(config, Box::new(HttpTransport::new(config)?)))
    }

    /// Client that never touches the network
    pub fn offline(config: &AppConfig) -> Self {
        Self::with_transport(config, Box::new(OfflineTransport))
    }

    pub fn with_transport(config: &AppConfig, transport: Box<dyn Transport>) -> Self {
        Self::with_ttls(transport, config.cache_ttl, config.short_cache_ttl())
    }

    /// `long_ttl` covers standings, scorers and form; `short_ttl` fixtures and results.
    pub fn with_ttls(transport: Box<dyn Transport>, long_ttl: Duration, short_ttl: Duration) -> Self {
        Self {
            transport,
            standings_cache: TtlCache::new(long_ttl),
            fixtures_cache: TtlCache::new(short_ttl),
            results_cache: TtlCache::new(short_ttl),
            scorers_cache: TtlCache::new(long_ttl),
            form_cache: TtlCache::new(long_ttl),
        }
    }

    /// Current league table
    pub fn standings(&self) -> Vec<StandingRow> {
        self.standings_cache.get_or_insert_with((), || {
            let path = format!("competitions/{}/standings", COMPETITION);
            self.fetch::<StandingsResponse>(&path, &[])
                .map(|resp| {
                    let group = resp
                        .standings
                        .iter()
                        .find(|g| g.kind == "TOTAL")
                        .or_else(|| resp.standings.first());
                    group
                        .map(|g| g.table.iter().map(StandingRow::from).collect::<Vec<_>>())
                        .unwrap_or_default()
                })
                .unwrap_or_else(|e| degrade("standings", e, fallback::standings))
        })
    }

    /// Next scheduled matches, soonest first
    pub fn upcoming_fixtures(&self) -> Vec<FixtureRow> {
        self.fixtures_cache.get_or_insert_with((), || {
            self.fetch_matches("SCHEDULED")
                .map(|resp| {
                    resp.matches
                        .iter()
                        .take(FIXTURE_LIMIT)
                        .map(FixtureRow::from)
                        .collect::<Vec<_>>()
                })
                .unwrap_or_else(|e| degrade("fixtures", e, fallback::upcoming_fixtures))
        })
    }

    /// Latest finished matches, most recent first
    pub fn recent_results(&self) -> Vec<ResultRow> {
        self.results_cache.get_or_insert_with((), || {
            self.fetch_matches("FINISHED")
                .map(|resp| {
                    resp.matches
                        .iter()
                        .rev()
                        .take(FIXTURE_LIMIT)
                        .map(ResultRow::from)
                        .collect::<Vec<_>>()
                })
                .unwrap_or_else(|e| degrade("results", e, fallback::recent_results))
        })
    }

    /// League top scorers
    pub fn top_scorers(&self) -> Vec<ApiScorerRow> {
        self.scorers_cache.get_or_insert_with((), || {
            let path = format!("competitions/{}/scorers", COMPETITION);
            self.fetch::<ScorersResponse>(&path, &[("limit", SCORER_LIMIT.to_string())])
                .map(|resp| resp.scorers.iter().map(ApiScorerRow::from).collect::<Vec<_>>())
                .unwrap_or_else(|e| degrade("scorers", e, fallback::top_scorers))
        })
    }

    /// Recent form for a team name, five unknown markers if the team is not known
    pub fn team_form(&self, team_name: &str) -> Form {
        self.form_cache
            .get_or_insert_with(team_name.to_string(), || lookup_form(team_name))
    }

    fn fetch_matches(&self, status: &str) -> Result<MatchesResponse, ApiError> {
        let path = format!("competitions/{}/matches", COMPETITION);
        self.fetch::<MatchesResponse>(&path, &[("status", status.to_string())])
    }

    fn fetch<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T, ApiError> {
        let value = self.transport.get_json(path, query)?;
        Ok(serde_json::from_value(value)?)
    }
}

fn degrade<T>(operation: &str, error: ApiError, fallback: fn() -> Vec<T>) -> Vec<T> {
    match error {
        ApiError::Offline => tracing::debug!(operation, "Offline, serving fallback data"),
        other => tracing::warn!(operation, error = %other, "API unavailable, serving fallback data"),
    }
    fallback()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Serves one canned payload for every path and counts requests.
    struct Canned {
        payload: Option<Value>,
        calls: Arc<AtomicUsize>,
    }

    impl Transport for Canned {
        fn get_json(&self, _path: &str, _query: &[(&str, String)]) -> Result<Value, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.payload.clone().ok_or(ApiError::Status(503))
        }
    }

    fn api_with(payload: Option<Value>) -> (FootballApi, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let transport = Canned {
            payload,
            calls: Arc::clone(&calls),
        };
        let api = FootballApi::with_ttls(
            Box::new(transport),
            Duration::from_secs(60),
            Duration::from_secs(30),
        );
        (api, calls)
    }

    #[test]
    fn test_standings_mapping_prefers_total_table() {
        let payload = json!({
            "standings": [
                {"type": "HOME", "table": [{"position": 1, "team": {"name": "Home Side"}}]},
                {"type": "TOTAL", "table": [{
                    "position": 1, "team": {"name": "Girona FC"}, "playedGames": 30,
                    "won": 21, "draw": 5, "lost": 4, "points": 68,
                    "goalsFor": 65, "goalsAgainst": 35, "goalDifference": 30
                }]}
            ]
        });
        let (api, _) = api_with(Some(payload));
        let rows = api.standings();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].equipo, "Girona FC");
        assert_eq!(rows[0].pts, 68);
        assert_eq!(rows[0].dg, 30);
    }

    #[test]
    fn test_failure_serves_fallback() {
        let (api, _) = api_with(None);
        assert_eq!(api.standings(), fallback::standings());
        assert_eq!(api.top_scorers(), fallback::top_scorers());
        assert_eq!(api.upcoming_fixtures().len(), 7);
        assert_eq!(api.recent_results().len(), 7);
    }

    #[test]
    fn test_malformed_payload_serves_fallback() {
        let (api, _) = api_with(Some(json!({"message": "rate limited"})));
        assert_eq!(api.standings(), fallback::standings());
        assert_eq!(api.top_scorers(), fallback::top_scorers());
    }

    #[test]
    fn test_empty_table_is_not_a_failure() {
        let (api, _) = api_with(Some(json!({"standings": []})));
        assert!(api.standings().is_empty());
    }

    #[test]
    fn test_second_call_hits_cache() {
        let (api, calls) = api_with(None);
        let first = api.standings();
        let second = api.standings();
        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        api.top_scorers();
        api.top_scorers();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_results_most_recent_first() {
        let payload = json!({"matches": [
            {"utcDate": "2025-03-01T20:00:00Z", "homeTeam": {"name": "A"}, "awayTeam": {"name": "B"},
             "score": {"fullTime": {"home": 1, "away": 0}}},
            {"utcDate": "2025-03-08T20:00:00Z", "homeTeam": {"name": "C"}, "awayTeam": {"name": "D"},
             "score": {"fullTime": {"home": 2, "away": 2}}}
        ]});
        let (api, _) = api_with(Some(payload));
        let results = api.recent_results();
        assert_eq!(results[0].local, "C");
        assert_eq!(results[0].resultado, "2 - 2");
        assert_eq!(results[1].fecha, "2025-03-01");
    }

    #[test]
    fn test_team_form_never_requests() {
        let (api, calls) = api_with(None);
        assert_eq!(api.team_form("Real Madrid"), lookup_form("Real Madrid"));
        assert_eq!(api.team_form("Unknown FC"), UNKNOWN_FORM);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
