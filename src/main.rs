use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use axum::{error_handling::HandleErrorLayer, http::StatusCode};
use tower::{BoxError, ServiceBuilder};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use form_webhook_forwarder::{
    create_router, register_forwarder, AppState, ForwarderConfig, HookRegistry,
    SubmissionForwarder, WebhookClient,
};

// Error handler
async fn handle_error(error: BoxError) -> (StatusCode, String) {
    if error.is::<tower::timeout::error::Elapsed>() {
        (
            StatusCode::REQUEST_TIMEOUT,
            "Request took too long".to_string(),
        )
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Unhandled internal error: {}", error),
        )
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received interrupt signal, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received terminate signal, starting graceful shutdown");
        },
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match ForwarderConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    #[cfg(feature = "sentry-monitoring")]
    let _sentry = std::env::var("SENTRY_DSN").ok().map(|dsn| {
        info!("Sentry error tracking enabled");
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });

    let client = match WebhookClient::new(config.webhook_timeout) {
        Ok(client) => client,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    info!(
        "Forwarding submissions of form {} to {} (timeout {:?})",
        config.target_form_id, config.webhook_url, config.webhook_timeout
    );

    let forwarder = SubmissionForwarder::new(
        config.target_form_id.clone(),
        config.webhook_url.clone(),
        Arc::new(client),
    );
    let mut registry = HookRegistry::new();
    register_forwarder(&mut registry, forwarder);

    if config.inbound_auth_token.is_some() {
        info!("Webhook authentication enabled with provided token");
    } else {
        info!("No webhook authentication token provided - authentication disabled");
    }

    // Create shared application state
    let app_state = Arc::new(AppState::new(registry, config.inbound_auth_token.clone()));

    let app = create_router(Arc::clone(&app_state)).layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(handle_error))
            .load_shed()
            .concurrency_limit(64)
            .timeout(Duration::from_secs(10))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::new().allow_origin(Any)),
    );

    let listener = match tokio::net::TcpListener::bind(&config.server_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", config.server_addr, e);
            return ExitCode::FAILURE;
        }
    };
    info!("Server listening on {}", config.server_addr);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    // Let in-flight deliveries finish and log before exiting
    app_state.tracker.close();
    if !app_state.tracker.is_empty() {
        info!(
            "Waiting for {} in-flight webhook deliveries",
            app_state.tracker.len()
        );
    }
    app_state.tracker.wait().await;

    info!("Server has been gracefully shut down");
    ExitCode::SUCCESS
}
