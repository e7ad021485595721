use std::time::Duration;

use serde::Serialize;

pub const DEFAULT_API_URL: &str = "https://api.lanyard.rest/v1";
pub const DEFAULT_USER_ID: &str = "1025214794766221384";
pub const DEFAULT_HANDLE: &str = "loneweeb";
const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5000;
const DEFAULT_ABOUT_ME: &[&str] = &[
    "ϡ 17 years old",
    "ϡ straight male",
    "ϡ looking for my soulmate",
    "ϡ indian",
];

/// Static content of the profile card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardProfile {
    /// Shown in the card titles as `@{handle} > ...`.
    pub handle: String,
    pub about_me: Vec<String>,
}

pub struct Config {
    pub port: u16,
    pub api_url: String,
    pub user_id: String,
    pub poll_interval: Duration,
    pub request_timeout: Duration,
    pub card: CardProfile,
}

fn millis_from_env(key: &str, default: u64) -> Duration {
    let ms = std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(default);
    Duration::from_millis(ms)
}

impl Config {
    pub fn from_env() -> Self {
        let about_me = match std::env::var("LANYARD_ABOUT_ME") {
            Ok(raw) => raw
                .split('|')
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
            Err(_) => DEFAULT_ABOUT_ME.iter().map(|s| s.to_string()).collect(),
        };

        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(39100),
            api_url: std::env::var("LANYARD_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            user_id: std::env::var("LANYARD_USER_ID")
                .unwrap_or_else(|_| DEFAULT_USER_ID.to_string()),
            poll_interval: millis_from_env("LANYARD_POLL_INTERVAL_MS", DEFAULT_POLL_INTERVAL_MS),
            request_timeout: millis_from_env(
                "LANYARD_REQUEST_TIMEOUT_MS",
                DEFAULT_REQUEST_TIMEOUT_MS,
            ),
            card: CardProfile {
                handle: std::env::var("LANYARD_HANDLE")
                    .unwrap_or_else(|_| DEFAULT_HANDLE.to_string()),
                about_me,
            },
        }
    }
}
