use std::any::Any;

use poem::http::StatusCode;
use poem::middleware::{CatchPanic, Cors, Tracing};
use poem::web::Json;
use poem::{Endpoint, EndpointExt, Route, Server as PoemServer, listener::TcpListener};
use poem_openapi::OpenApiService;
use serde_json::json;

use crate::{
    config::app_config::AppConfig,
    setup::{body_limit::limit_body, dependency_injection::DependencyContainer},
};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::build_app(
            container,
            config.cors,
            config.body_limit,
            format!("http://{}", addr),
        );
        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        tracing::info!("OpenAPI JSON at http://{}/openapi.json", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }

    pub fn build_app(
        container: DependencyContainer,
        cors: Cors,
        body_limit: usize,
        server_url: String,
    ) -> impl Endpoint {
        let api_service = OpenApiService::new(
            (container.health_api, container.face_match_api),
            "Face Match API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("{}/api", server_url));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        Route::new()
            .nest("/api", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .before(move |req| limit_body(req, body_limit))
            .with(CatchPanic::new().with_handler(panic_response))
            .with(cors)
            .with(Tracing)
    }
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> (StatusCode, Json<serde_json::Value>) {
    let description = err
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| err.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "Unexpected server error".to_string());

    tracing::error!("Request handler panicked: {}", description);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "matchFound": false,
            "error": description,
        })),
    )
}
