//! Lanchonete JSON API Server

use std::{process, sync::Arc};

use salvo::{
    affix_state::inject,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use lanchonete_app::{
    context::AppContext,
    domain::notifications::{NoopNotifier, Notifier, WhatsAppConfig, WhatsAppNotifier},
};

use crate::{
    config::{ServerConfig, logging::LogFormat},
    state::State,
};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod carts;
mod config;
mod extensions;
mod healthcheck;
mod menu;
mod orders;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Lanchonete JSON API Server entry point
///
/// # Panics
///
/// Panics if the server fails to bind or serve requests
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.log_level));

    match config.logging.log_format {
        LogFormat::Compact => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt().json().with_env_filter(filter).init(),
    }

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let notifier: Arc<dyn Notifier> = match config.notifier.credentials() {
        Some((addr, token)) => Arc::new(WhatsAppNotifier::new(WhatsAppConfig { addr, token })),
        None => {
            info!("notification gateway not configured, customer notifications disabled");

            Arc::new(NoopNotifier)
        }
    };

    let app = match &config.database.database_url {
        Some(url) => match AppContext::from_database_url(url, notifier).await {
            Ok(app) => app,
            Err(init_error) => {
                error!("failed to initialize app context: {init_error}");

                process::exit(1);
            }
        },
        None => {
            warn!("DATABASE_URL not set, keeping all state in memory");

            AppContext::in_memory(notifier)
        }
    };

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(State::from_app_context(app)))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("api")
                .push(Router::with_path("cardapio").get(menu::index::handler))
                .push(
                    Router::with_path("carrinho")
                        .post(carts::save::handler)
                        .push(Router::with_path("{session_id}").get(carts::get::handler)),
                )
                .push(
                    Router::with_path("pedidos")
                        .get(orders::index::handler)
                        .post(orders::create::handler)
                        // "relatorio" must route before the {order} segment
                        .push(Router::with_path("relatorio").get(orders::report::handler))
                        .push(
                            Router::with_path("{order}")
                                .put(orders::update_status::handler)
                                .delete(orders::complete::handler),
                        ),
                ),
        );

    let doc = OpenApi::new("Lanchonete API", "0.1.0").merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(router).await;
}
