use poem::{EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let public_url = config.server.public_url();
        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.date_api,
                container.item_api,
                container.product_api,
                container.image_api,
                container.settings_api,
            ),
            "Fridge Keeper API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(public_url.clone());
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        let app = Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with(config.cors)
            .with(Tracing);
        tracing::info!("Server running at {}", public_url);
        tracing::info!("Swagger UI at {}/docs", public_url);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
