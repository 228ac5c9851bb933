#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use signup_dispatcher::config::{timeout_from_secs, DEFAULT_ENDPOINT};
use signup_dispatcher::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI arguments for a signup run.
#[derive(Debug, Clone, Parser)]
#[command(name = "signup-dispatch")]
#[command(version, about, long_about = None)]
struct Args {
    /// email address submitted in every request
    #[arg(long, short = 'e', env = "SIGNUP_EMAIL")]
    email: String,

    /// number of requests to send (positive integer)
    #[arg(long, short = 'n', env = "SIGNUP_COUNT", default_value = "")]
    count: String,

    /// endpoint the signup requests are posted to
    #[arg(long, env = "SIGNUP_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// pause between two requests
    #[arg(long, value_name = "MILLIS", default_value_t = 10)]
    delay_ms: u64,

    /// per-request timeout (<= 0 = no timeout)
    #[arg(long, value_name = "SECONDS", default_value_t = 0.)]
    timeout_secs: f64,

    /// debug logging as default instead of info; use RUST_LOG env for more options
    #[arg(long, short = 'v', default_value_t = false)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "signup_dispatcher=debug,signup_dispatch=debug"
    } else {
        "signup_dispatcher=info,signup_dispatch=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(args).await {
        Ok(RunStatus::Completed) => {}
        Ok(RunStatus::Stopped) => std::process::exit(130),
        Err(err) => {
            eprintln!("🚩 {err}");
            std::process::exit(1);
        }
    }
}

async fn run(args: Args) -> Result<RunStatus, DispatchError> {
    let mut client_settings = ClientSettings::new(args.endpoint);
    if let Some(timeout) = timeout_from_secs(args.timeout_secs)? {
        client_settings = client_settings.with_timeout(timeout);
    }
    let executor = ReqwestExecutor::new(&client_settings)?;
    tracing::info!(endpoint = %executor.endpoint(), "using endpoint");

    let dispatcher = Arc::new(Dispatcher::with_settings(
        executor,
        DispatcherSettings::new().with_delay(Duration::from_millis(args.delay_ms)),
    ));

    let stopper = tokio::spawn({
        let dispatcher = dispatcher.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                dispatcher.on_stop();
            }
        }
    });

    let result = dispatcher.on_start(&args.email, &args.count).await;
    stopper.abort();

    let status = result?;
    tracing::info!(sent = dispatcher.sent_count(), %status, "run ended");
    Ok(status)
}
