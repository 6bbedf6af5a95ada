//! The poll-validate-notify loop.
//!
//! One cycle: fetch the status payload with the current cursor, validate its
//! shape, send one notification per new homework record, advance the cursor,
//! sleep. Every cycle error is caught at the loop boundary, reported to the
//! chat best-effort, and the loop keeps running; only the startup preflight
//! is fatal to the process.

use std::sync::Arc;

use chrono::Utc;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, warn};

use crate::{
    config::Config,
    homework::{check_response, current_date, parse_status},
    ports::{Notifier, StatusSource},
    Error,
};

pub struct HomeworkWatcher {
    cfg: Arc<Config>,
    source: Arc<dyn StatusSource>,
    notifier: Arc<dyn Notifier>,

    /// Unix timestamp marking the start of the window for the next poll.
    cursor: i64,
    /// Error report sent on the previous failed cycle, for dedup. Cleared by
    /// any successful cycle.
    last_error_report: Option<String>,
}

impl HomeworkWatcher {
    pub fn new(cfg: Arc<Config>, source: Arc<dyn StatusSource>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            cfg,
            source,
            notifier,
            cursor: Utc::now().timestamp(),
            last_error_report: None,
        }
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Run polling cycles until the token is cancelled.
    ///
    /// The sleep happens after every cycle, error or not; cancellation is
    /// only observed between cycles.
    pub async fn run(&mut self, cancel: CancellationToken) {
        loop {
            self.poll_once().await;

            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = sleep(self.cfg.retry_period) => {}
            }
        }
    }

    /// One polling cycle, with the loop-boundary error handling applied.
    pub async fn poll_once(&mut self) {
        match self.poll_cycle().await {
            Ok(()) => {
                self.last_error_report = None;
            }
            Err(err) => self.report_cycle_error(&err).await,
        }
    }

    async fn poll_cycle(&mut self) -> crate::Result<()> {
        let response = self.source.homework_statuses(self.cursor).await?;
        let homeworks = check_response(&response)?;

        if homeworks.is_empty() {
            debug!("no new homework statuses");
        } else {
            for homework in homeworks {
                let message = parse_status(homework)?;
                self.deliver(&message).await;
            }
        }

        // Advance to the server clock when echoed; otherwise keep the
        // previous cursor so records arriving in between are not skipped.
        if let Some(ts) = current_date(&response) {
            self.cursor = ts;
        }

        Ok(())
    }

    /// Loop-boundary handling: every kind gets its own log line, the chat
    /// gets a single report template, and identical reports are not repeated
    /// across consecutive failed cycles.
    async fn report_cycle_error(&mut self, err: &Error) {
        match err {
            Error::Connectivity(_) => warn!("review API unreachable: {err}"),
            Error::Endpoint { url, status } => {
                error!("review API endpoint {url} returned HTTP {status}")
            }
            Error::Validation(_) => error!("malformed review API response: {err}"),
            Error::Status(_) => error!("unrecognized homework status: {err}"),
            // Config failures are fatal before the loop starts and Delivery
            // failures are swallowed at the delivery site; neither is
            // produced by a polling cycle.
            Error::Config(_) | Error::Delivery(_) => error!("{err}"),
        }

        let report = format!("Сбой в работе программы: {err}");
        if self.last_error_report.as_deref() == Some(report.as_str()) {
            debug!("suppressing duplicate error report");
            return;
        }

        self.deliver(&report).await;
        self.last_error_report = Some(report);
    }

    /// Best-effort delivery: failures are logged and swallowed, never
    /// retried and never propagated to the cycle.
    async fn deliver(&self, text: &str) {
        match self
            .notifier
            .send_text(self.cfg.telegram_chat_id, text)
            .await
        {
            Ok(()) => debug!("bot sent message: {text}"),
            Err(err) => error!("failed to deliver notification: {err}"),
        }
    }
}
