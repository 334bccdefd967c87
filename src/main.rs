use axum::{ServiceExt, extract::Request};
use holocron::service::seed_loader;
use holocron::{Config, HolocronState, SqliteStore, holocron_app};
use mimalloc::MiMalloc;
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        loglevel = %cfg.loglevel,
        listen_addr = %cfg.listen_addr,
        port = cfg.port,
        seed_path = %cfg.seed_path.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "<none>".to_string())
    );

    let store = SqliteStore::connect(&cfg.database_url).await?;

    if let Some(seed_path) = cfg.seed_path.as_ref() {
        match seed_loader::load_from_dir(seed_path) {
            Ok(bundle) if !bundle.is_empty() => {
                seed_loader::apply(&store, bundle).await?;
            }
            Ok(_) => {
                info!(path = %seed_path.display(), "no seed records discovered");
            }
            Err(e) => {
                warn!(
                    path = %seed_path.display(),
                    error = %e,
                    "failed to load seed data from directory"
                );
            }
        }
    }

    let app = holocron_app(HolocronState::new(store));

    let addr = cfg.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server has shut down gracefully.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
