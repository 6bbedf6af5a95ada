//! Core error type for the homework status watcher.
//!
//! Adapter crates map their specific failures into this type so the watcher
//! can classify every polling-cycle error at the loop boundary. Display text
//! for the kinds that reach the chat is user-facing and stays in Russian;
//! log lines are English.

/// Shape violations in the API response body.
///
/// Nested under [`Error::Validation`]: the watcher treats them as one kind,
/// but callers (and tests) can still tell a missing key from a mis-typed one.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Результат запроса не является словарем.")]
    NotAMapping,

    #[error("Отсутствует ключ \"{0}\" в ответе API.")]
    MissingKey(&'static str),

    #[error("Ключ \"{0}\" должен быть списком.")]
    NotAList(&'static str),

    #[error("Ответ API не является корректным JSON: {0}")]
    InvalidJson(String),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Missing or malformed startup configuration. The only fatal kind.
    #[error("{0}")]
    Config(String),

    /// Transport-level failure reaching the review API (DNS, timeout,
    /// connection refused).
    #[error("Ошибка запроса к API: {0}")]
    Connectivity(String),

    /// The review API answered with a non-success HTTP status.
    #[error("Эндпоинт {url} недоступен. Код ответа API: {status}")]
    Endpoint { url: String, status: u16 },

    /// The response body does not have the expected shape.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A homework record carries a status outside the recognized set.
    #[error("Неожиданный статус домашней работы: {0}")]
    Status(String),

    /// Notification delivery failure. Logged and swallowed by the watcher,
    /// never propagated to the polling cycle.
    #[error("Ошибка при отправке сообщения в Telegram: {0}")]
    Delivery(String),
}

pub type Result<T> = std::result::Result<T, Error>;
