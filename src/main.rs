use dotenvy::dotenv;
use parishdesk::config::ServerConfig;
use parishdesk::logging::init_tracing;
use parishdesk::metrics::init_metrics;
use parishdesk::router::init_router;
use parishdesk::state::init_app_state;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let metrics = init_metrics();
    let state = init_app_state(metrics)?;
    let app = init_router(state);

    let server = ServerConfig::from_env();
    let listener = tokio::net::TcpListener::bind(server.bind_address()).await?;
    info!(address = %server.bind_address(), "Server listening");
    println!("🚀 Server running on http://{}", server.bind_address());
    println!("📚 Swagger UI available at http://{}/swagger-ui", server.bind_address());
    println!("📖 Scalar UI available at http://{}/scalar", server.bind_address());

    axum::serve(listener, app).await?;
    Ok(())
}
