use async_trait::async_trait;
use serde_json::Value;

use crate::{domain::ChatId, Result};

/// Hexagonal port for the homework-review API.
///
/// The Practicum HTTP client is the first implementation; tests drive the
/// watcher with scripted fakes behind the same interface.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetch the status payload for homeworks updated since `from_date`.
    ///
    /// Returns the parsed JSON body as-is; shape enforcement happens later
    /// in `homework::check_response`.
    async fn homework_statuses(&self, from_date: i64) -> Result<Value>;
}

/// Hexagonal port for the notification sink.
///
/// Telegram is the first implementation. Delivery failures surface as
/// `Error::Delivery`; the watcher decides whether to swallow them.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<()>;
}
