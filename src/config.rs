use std::env;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

use crate::recommender::DanglingChapterPolicy;

/// Maximum request body size: 2 MiB.
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    pub enable_file_logs: bool,
    pub log_dir: String,
    pub cors_origin: String,
    pub max_body_bytes: usize,
    pub dangling_chapter_policy: DanglingChapterPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)),
            port: 5001,
            log_level: "info".to_string(),
            enable_file_logs: false,
            log_dir: "./logs".to_string(),
            cors_origin: "*".to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            dangling_chapter_policy: DanglingChapterPolicy::Skip,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env_or_parse("HOST", defaults.host),
            port: env_or_parse("PORT", defaults.port),
            log_level: env_or("RUST_LOG", &defaults.log_level),
            enable_file_logs: env_or_bool("ENABLE_FILE_LOGS", defaults.enable_file_logs),
            log_dir: env_or("LOG_DIR", &defaults.log_dir),
            cors_origin: env_or("CORS_ORIGIN", &defaults.cors_origin),
            max_body_bytes: env_or_parse("MAX_BODY_BYTES", defaults.max_body_bytes),
            dangling_chapter_policy: env_or_parse(
                "DANGLING_CHAPTER_POLICY",
                defaults.dangling_chapter_policy,
            ),
        }
    }
}

pub fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

pub fn env_or_parse<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy,
{
    match env::var(key) {
        Ok(raw) => match raw.parse::<T>() {
            Ok(v) => v,
            Err(_) => {
                tracing::warn!(
                    key,
                    value = %raw,
                    "Failed to parse env var, using default"
                );
                default
            }
        },
        Err(_) => default,
    }
}

pub fn env_or_bool(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        Err(_) => default,
    }
}
