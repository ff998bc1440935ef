use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use voxcheck::application::ports::AudioInspector;
use voxcheck::application::services::{DetectionOptions, DetectionService};
use voxcheck::infrastructure::audio::SymphoniaInspector;
use voxcheck::infrastructure::classifier::ClassifierFactory;
use voxcheck::infrastructure::observability::{TracingConfig, init_tracing};
use voxcheck::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(environment, &settings.logging));

    let classifier = ClassifierFactory::create(
        settings.detection.classifier,
        settings.detection.entropy_threshold,
    )
    .context("Failed to create classifier")?;

    let inspector: Option<Arc<dyn AudioInspector>> = if settings.detection.verify_audio {
        Some(Arc::new(SymphoniaInspector))
    } else {
        tracing::warn!("Audio verification disabled, payloads are classified unchecked");
        None
    };

    let detection_service = Arc::new(DetectionService::new(
        classifier,
        inspector,
        DetectionOptions {
            min_audio_bytes: settings.detection.min_audio_bytes,
        },
    ));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;

    let state = AppState {
        detection_service,
        settings,
    };

    let router = create_router(state);

    tracing::info!(
        address = %addr,
        environment = %environment,
        "Listening"
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
