use std::{env, fs, path::Path, time::Duration};

use crate::{domain::ChatId, errors::Error, Result};

/// Practicum homework-statuses endpoint.
pub const DEFAULT_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// How long to sleep between polling cycles.
pub const DEFAULT_RETRY_PERIOD: Duration = Duration::from_secs(600);

/// Timeout for a single HTTP request to the review API.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Typed configuration for the bot.
///
/// Loaded once at startup and passed explicitly into the watcher and the
/// adapters; immutable for the process lifetime.
#[derive(Clone, Debug)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: ChatId,

    pub endpoint: String,
    pub retry_period: Duration,
    pub http_timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));

        let mut cfg = Self::from_credentials(
            env_str("PRACTICUM_TOKEN"),
            env_str("TELEGRAM_TOKEN"),
            env_str("TELEGRAM_CHAT_ID"),
        )?;

        if let Some(url) = env_str("HOMEWORK_ENDPOINT").and_then(non_empty) {
            cfg.endpoint = url;
        }
        if let Some(secs) = env_u64("RETRY_PERIOD") {
            cfg.retry_period = Duration::from_secs(secs);
        }
        if let Some(secs) = env_u64("HTTP_TIMEOUT") {
            cfg.http_timeout = Duration::from_secs(secs);
        }

        Ok(cfg)
    }

    /// Preflight check: all three credentials must be present and non-empty.
    ///
    /// Runs exactly once, before the watcher starts. A failure is fatal to
    /// the whole process; the message enumerates exactly the missing
    /// variable names.
    pub fn from_credentials(
        practicum_token: Option<String>,
        telegram_token: Option<String>,
        telegram_chat_id: Option<String>,
    ) -> Result<Self> {
        let practicum_token = practicum_token.and_then(non_empty);
        let telegram_token = telegram_token.and_then(non_empty);
        let telegram_chat_id = telegram_chat_id.and_then(non_empty);

        let mut missing = Vec::new();
        if practicum_token.is_none() {
            missing.push("PRACTICUM_TOKEN");
        }
        if telegram_token.is_none() {
            missing.push("TELEGRAM_TOKEN");
        }
        if telegram_chat_id.is_none() {
            missing.push("TELEGRAM_CHAT_ID");
        }

        if !missing.is_empty() {
            let message = if missing.len() == 1 {
                format!(
                    "Отсутствует обязательная переменная окружения: {}",
                    missing[0]
                )
            } else {
                format!(
                    "Отсутствуют обязательные переменные окружения: {}",
                    missing.join(", ")
                )
            };
            tracing::error!("{message} Программа принудительно остановлена.");
            return Err(Error::Config(message));
        }

        let telegram_chat_id = telegram_chat_id.unwrap_or_default();
        let chat_id = telegram_chat_id.trim().parse::<i64>().map_err(|_| {
            Error::Config(format!(
                "TELEGRAM_CHAT_ID must be a numeric chat id, got: {telegram_chat_id}"
            ))
        })?;

        Ok(Self {
            practicum_token: practicum_token.unwrap_or_default(),
            telegram_token: telegram_token.unwrap_or_default(),
            telegram_chat_id: ChatId(chat_id),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            retry_period: DEFAULT_RETRY_PERIOD,
            http_timeout: DEFAULT_HTTP_TIMEOUT,
        })
    }
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        env::set_var(key, val);
    }
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn env_u64(key: &str) -> Option<u64> {
    env_str(key).and_then(|s| s.trim().parse::<u64>().ok())
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
