use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;

use lanyardcard::config::Config;
use lanyardcard::fetcher::LanyardClient;
use lanyardcard::poller;
use lanyardcard::render::Renderer;
use lanyardcard::state::AppState;
use lanyardcard::store::ViewStore;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lanyardcard=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env();
    print_banner(&config);

    let store = Arc::new(ViewStore::new());
    let client = LanyardClient::new(
        config.api_url.clone(),
        config.user_id.clone(),
        config.request_timeout,
    );
    tracing::info!("polling {} every {:?}", client.presence_url(), config.poll_interval);
    let poll_handle = poller::spawn(client, Arc::clone(&store), config.poll_interval);

    let renderer = Renderer::new().expect("failed to load widget templates");
    let state = AppState {
        store,
        renderer: Arc::new(renderer),
        card: Arc::new(config.card),
        poll_interval: config.poll_interval,
    };
    let app = lanyardcard::routes::router(state);

    let listener = TcpListener::bind(("0.0.0.0", config.port))
        .await
        .expect("failed to bind");
    let actual_port = listener
        .local_addr()
        .expect("failed to get local address")
        .port();
    eprintln!("  \x1b[32m→ listening on 0.0.0.0:{actual_port}\x1b[0m");
    eprintln!();

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");

    poll_handle.shutdown().await;
    tracing::info!("shut down");
}

fn print_banner(config: &Config) {
    let version = env!("CARGO_PKG_VERSION");

    eprintln!();
    eprintln!("  \x1b[1;36mlanyardcard\x1b[0m \x1b[2mv{version}\x1b[0m");
    eprintln!();
    eprintln!("  \x1b[2mport\x1b[0m         {}", config.port);
    eprintln!("  \x1b[2mapi\x1b[0m          {}", config.api_url);
    eprintln!("  \x1b[2muser\x1b[0m         {}", config.user_id);
    eprintln!("  \x1b[2minterval\x1b[0m     {:?}", config.poll_interval);
    eprintln!("  \x1b[2mhandle\x1b[0m       @{}", config.card.handle);
    eprintln!();
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler");
        tokio::select! {
            res = signal::ctrl_c() => {
                res.expect("failed to listen for Ctrl+C");
                tracing::info!("received Ctrl+C, stopping");
            }
            _ = sigterm.recv() => tracing::info!("received SIGTERM, stopping"),
        }
    }

    #[cfg(not(unix))]
    {
        signal::ctrl_c()
            .await
            .expect("failed to listen for Ctrl+C");
        tracing::info!("received Ctrl+C, stopping");
    }
}
