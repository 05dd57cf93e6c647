use anyhow::Context;
use tokio::signal;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use taskboard::config::Config;
use taskboard::handlers::{self, MessageResponse};
use taskboard::models::{Project, ProjectPayload, Task, TaskPayload};
use taskboard::state::AppState;
use taskboard::build_router;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::project::list_projects,
        handlers::project::get_project,
        handlers::project::create_project,
        handlers::project::update_project,
        handlers::project::delete_project,
        handlers::task::list_tasks,
        handlers::task::list_tasks_by_project,
        handlers::task::get_task,
        handlers::task::create_task,
        handlers::task::update_task,
        handlers::task::delete_task,
    ),
    components(schemas(Project, ProjectPayload, Task, TaskPayload, MessageResponse)),
    tags(
        (name = "Projects", description = "Project management endpoints"),
        (name = "Tasks", description = "Task management endpoints")
    )
)]
struct ApiDoc;

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=debug"));

    if config.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "Failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    init_tracing(&config);
    let addr = config.server_addr();

    tracing::info!("Connecting to database...");
    let state = AppState::new(&config)
        .await
        .context("Failed to initialize application state")?;
    tracing::info!("Database connection established");

    let app = build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("Server started on http://{}", addr);
    tracing::info!("Swagger UI: http://{}/swagger-ui/", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}
