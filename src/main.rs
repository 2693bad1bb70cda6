use std::sync::Arc;

use anyhow::Context;
use tokio::io::{BufReader, stdin, stdout};
use tracing::info;
use tracing_appender::rolling;

use employee_desk::api::HttpTransport;
use employee_desk::app::App;
use employee_desk::config::Config;
use employee_desk::ui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("invalid configuration")?;

    // Rolling daily log; the console belongs to the UI
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!(api = %config.api_base_url, page_size = config.page_size, "Employee desk starting...");

    let transport = HttpTransport::new(&config.api_base_url, config.request_timeout)
        .context("failed to build the HTTP client")?;

    let mut app = App::new(Arc::new(transport), config.page_size);
    app.start().await;

    ui::run(&mut app, BufReader::new(stdin()), stdout())
        .await
        .context("console I/O failed")?;

    info!("Employee desk stopped");
    Ok(())
}
