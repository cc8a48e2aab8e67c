use std::io;
use std::path::Path;
use std::process::ExitCode;

use baggage_router::config::{ADDR_ENV, RouterConfig, ServerConfig};
use baggage_router::input::{read_input, read_input_file};
use baggage_router::web::{AppState, create_router};
use baggage_router::{RouterError, compute_all_paths_with};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so the report on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    match std::env::args().nth(1) {
        Some(path) => match route_file(&path) {
            Ok(report) => {
                print!("{report}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        },
        None => serve().await,
    }
}

/// Route the bags in `path` (or stdin for `-`) and return the report.
fn route_file(path: &str) -> Result<String, RouterError> {
    let input = if path == "-" {
        read_input(io::stdin().lock())?
    } else {
        read_input_file(Path::new(path))?
    };
    Ok(compute_all_paths_with(&input, &RouterConfig::default())?)
}

async fn serve() -> ExitCode {
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid {ADDR_ENV}");
            return ExitCode::FAILURE;
        }
    };

    let app = create_router(AppState::new(RouterConfig::default()));

    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.addr, error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!(addr = %config.addr, "baggage router listening");
    info!("GET  /health       - health check");
    info!("POST /routes       - route bags, text report");
    info!("POST /routes/json  - route bags, JSON report");

    match axum::serve(listener, app).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "server stopped");
            ExitCode::FAILURE
        }
    }
}
