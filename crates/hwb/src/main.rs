use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use hwb_core::{config::Config, watcher::HomeworkWatcher};
use hwb_practicum::PracticumClient;
use hwb_telegram::TelegramNotifier;

#[tokio::main]
async fn main() -> Result<(), hwb_core::Error> {
    hwb_core::logging::init("hwb")?;

    // Preflight: missing credentials are the only fatal failure.
    let cfg = Arc::new(Config::load()?);

    let source = Arc::new(PracticumClient::new(
        cfg.practicum_token.clone(),
        cfg.endpoint.clone(),
        cfg.http_timeout,
    ));
    let notifier = Arc::new(TelegramNotifier::from_token(&cfg.telegram_token));

    let mut watcher = HomeworkWatcher::new(cfg, source, notifier);

    // Runs until the process is killed; the token exists for tests and is
    // never cancelled here.
    watcher.run(CancellationToken::new()).await;

    Ok(())
}
