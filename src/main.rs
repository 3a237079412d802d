use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::{routing::post, Router};
use std::net::SocketAddr;
use std::time::Instant;
use word_rank::ranking::handlers::handle_top_ten_words;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "0.0.0.0:9000".parse()?;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    let app = Router::new()
        .route("/top-ten-words", post(handle_top_ten_words))
        .layer(middleware::from_fn(log_requests));

    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Logs one line per request: method, URI, status, latency.
async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = Instant::now();

    let response = next.run(req).await;

    tracing::info!(
        "method={} uri={} status={} latency={:?}",
        method,
        uri,
        response.status().as_u16(),
        start.elapsed()
    );
    response
}
