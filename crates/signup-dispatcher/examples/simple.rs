//! Simple example demonstrating basic usage of signup-dispatcher
//!
//! This example shows how to:
//! - Serve a throwaway signup endpoint locally
//! - Run a dispatcher against it and stop the run half way
//! - Print the outcome log once the run has ended

use axum::{http::StatusCode, routing::post, Json, Router};
use signup_dispatcher::prelude::*;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), DispatchError> {
    // Every third signup is rejected
    let counter = Arc::new(AtomicU32::new(0));
    let router = Router::new().route(
        "/signup",
        post(move |Json(body): Json<SignupRequest>| {
            let counter = counter.clone();
            async move {
                let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
                if n % 3 == 0 {
                    (StatusCode::CONFLICT, format!("{} already registered", body.email))
                } else {
                    (StatusCode::OK, "{}".to_string())
                }
            }
        }),
    );

    let addr: SocketAddr = "127.0.0.1:3000".parse().expect("valid address");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| DispatchError::ConfigurationError(e.to_string()))?;
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server failed");
    });

    let executor = ReqwestExecutor::new(&ClientSettings::new(format!("http://{addr}/signup")))?;
    let dispatcher = Arc::new(Dispatcher::with_settings(
        executor,
        DispatcherSettings::new().with_delay(Duration::from_millis(50)),
    ));

    // Stop the run after a short while
    let stopper = dispatcher.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(400)).await;
        println!("Stopping after {} requests...", stopper.sent_count());
        stopper.on_stop();
    });

    let status = dispatcher.on_start("john@example.com", "100").await?;

    println!("=== Log (oldest first) ===");
    for entry in dispatcher.entries().iter().rev() {
        println!("{entry}");
    }
    println!("\nRun {status} after {} requests", dispatcher.sent_count());

    Ok(())
}
