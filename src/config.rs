//! Startup configuration from environment variables.
//!
//! | Variable           | Default                                     |
//! |--------------------|---------------------------------------------|
//! | `PAIRS_SEED`       | derived from the wall clock                 |
//! | `PAIRS_SCORE_PATH` | `<data_local_dir>/tui-pairs/scores.json`    |
//! | `PAIRS_LOG_PATH`   | `<data_local_dir>/tui-pairs/tui-pairs.log`  |
//!
//! `RUST_LOG` is read by the log filter, not here.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

const APP_DIR: &str = "tui-pairs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: u32,
    pub score_path: PathBuf,
    pub log_path: PathBuf,
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = var("PAIRS_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);
        let score_path = var("PAIRS_SCORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir().join("scores.json"));
        let log_path = var("PAIRS_LOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir().join("tui-pairs.log"));

        Self {
            seed,
            score_path,
            log_path,
        }
    }
}

/// Per-user data directory, or `./tui-pairs` when the platform has none.
pub fn data_dir() -> PathBuf {
    match dirs::data_local_dir() {
        Some(path) => path.join(APP_DIR),
        None => PathBuf::from(".").join(APP_DIR),
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_explicit_values() {
        let cfg = GameConfig::from_lookup(lookup(&[
            ("PAIRS_SEED", "42"),
            ("PAIRS_SCORE_PATH", "/tmp/s.json"),
            ("PAIRS_LOG_PATH", " /tmp/p.log "),
        ]));
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.score_path, PathBuf::from("/tmp/s.json"));
        assert_eq!(cfg.log_path, PathBuf::from("/tmp/p.log"));
    }

    #[test]
    fn test_defaults_live_in_data_dir() {
        let cfg = GameConfig::from_lookup(lookup(&[("PAIRS_SCORE_PATH", "  ")]));
        assert_eq!(cfg.score_path, data_dir().join("scores.json"));
        assert_eq!(cfg.log_path, data_dir().join("tui-pairs.log"));
        assert!(data_dir().ends_with(APP_DIR));
    }
}
