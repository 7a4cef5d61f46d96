use dotenvy::dotenv;

mod api {
    pub mod error;
    pub mod tags;
    pub mod dates {
        pub mod dto;
        pub mod routes;
    }
    pub mod health {
        pub mod routes;
    }
    pub mod images {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod items {
        pub mod dto;
        pub mod routes;
    }
    pub mod products {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod settings {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod shared {
        pub mod dto;
    }
}
mod config {
    pub mod app_config;
    pub mod calendar_config;
    pub mod cors_config;
    pub mod openai_config;
    pub mod provider_config;
    pub mod server_config;
    pub mod settings_config;
}
mod setup {
    pub mod dependency_injection;
    pub mod server;
}

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Initializes the application, wires dependencies, and starts the HTTP server.
///
/// - config/: Application configuration (server, CORS, OpenAI, product databases, calendar, settings)
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers and DTOs
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Wire dependencies
    let container = DependencyContainer::new()?;
    let settings = container.settings.clone();

    // 5. Run server
    let result = Server::run(config, container).await;

    // 6. Close the settings session
    match settings.end() {
        Ok(Some(last)) => tracing::info!(theme = %last.theme, "Settings session closed"),
        Ok(None) => tracing::debug!("Settings session was already closed"),
        Err(err) => tracing::warn!(error = %err, "Failed to close settings session"),
    }

    result
}
