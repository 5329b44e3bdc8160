//! Config - サーバー設定（環境変数）

use std::net::SocketAddr;

pub const DEFAULT_BIND: &str = "0.0.0.0:5000";
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid bind addr {value}: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// `TASKBOARD_BIND`
    pub bind_addr: SocketAddr,
    /// `TASKBOARD_SEED_DEMO`: 空の board ではなくデモ board から始める
    pub seed_demo: bool,
    /// `TASKBOARD_MAX_BODY_BYTES`
    pub max_body_bytes: usize,
    /// `TASKBOARD_LOG_JSON`
    pub log_json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            seed_demo: true,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            log_json: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 任意のキー検索関数から組み立てる
    ///
    /// 未設定・解析できない数値 / bool はデフォルトに戻す。
    /// bind アドレスが解析できない場合だけはエラー。
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let bind = lookup("TASKBOARD_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr = bind
            .trim()
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: bind.clone(),
                source,
            })?;

        Ok(Self {
            bind_addr,
            seed_demo: env_bool(&lookup, "TASKBOARD_SEED_DEMO", defaults.seed_demo),
            max_body_bytes: env_usize(&lookup, "TASKBOARD_MAX_BODY_BYTES", defaults.max_body_bytes),
            log_json: env_bool(&lookup, "TASKBOARD_LOG_JSON", defaults.log_json),
        })
    }
}

fn env_bool<F: Fn(&str) -> Option<String>>(lookup: &F, name: &str, default: bool) -> bool {
    lookup(name)
        .and_then(|v| match v.trim() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn env_usize<F: Fn(&str) -> Option<String>>(lookup: &F, name: &str, default: usize) -> usize {
    lookup(name)
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let cfg = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg, ServerConfig::default());
        assert_eq!(cfg.bind_addr.to_string(), DEFAULT_BIND);
    }

    #[test]
    fn values_are_read_from_the_lookup() {
        let cfg = ServerConfig::from_lookup(lookup_from(&[
            ("TASKBOARD_BIND", "127.0.0.1:8088"),
            ("TASKBOARD_SEED_DEMO", "false"),
            ("TASKBOARD_MAX_BODY_BYTES", "1024"),
            ("TASKBOARD_LOG_JSON", "1"),
        ]))
        .unwrap();

        assert_eq!(cfg.bind_addr, "127.0.0.1:8088".parse().unwrap());
        assert!(!cfg.seed_demo);
        assert_eq!(cfg.max_body_bytes, 1024);
        assert!(cfg.log_json);
    }

    #[rstest]
    #[case::yes("yes", true)]
    #[case::upper_true("TRUE", true)]
    #[case::zero("0", false)]
    #[case::no("no", false)]
    #[case::garbage("maybe", true)]
    fn seed_flag_parsing(#[case] raw: &str, #[case] expected: bool) {
        let cfg = ServerConfig::from_lookup(lookup_from(&[("TASKBOARD_SEED_DEMO", raw)])).unwrap();
        assert_eq!(cfg.seed_demo, expected);
    }

    #[test]
    fn unparsable_body_limit_falls_back_to_default() {
        let cfg =
            ServerConfig::from_lookup(lookup_from(&[("TASKBOARD_MAX_BODY_BYTES", "lots")])).unwrap();
        assert_eq!(cfg.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
    }

    #[test]
    fn invalid_bind_addr_is_an_error() {
        let err = ServerConfig::from_lookup(lookup_from(&[("TASKBOARD_BIND", "localhost")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr { ref value, .. } if value == "localhost"));
        assert!(err.to_string().starts_with("invalid bind addr localhost"));
    }
}
