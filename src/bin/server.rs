use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use cutfit::grid::StockGrid;
use cutfit::policy;
use cutfit::types::{Action, Demand};
use serde::{Deserialize, Serialize};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

#[derive(Deserialize, Serialize)]
struct SelectRequest {
    /// Stock grids in the environment's integer-matrix encoding: `>= 0`
    /// occupied product id, `-1` free, `<= -2` outside the usable region.
    stocks: Vec<Vec<Vec<i32>>>,
    products: Vec<Demand>,
}

#[derive(Serialize)]
struct SelectResponse {
    action: Option<Action>,
}

async fn select(
    Json(req): Json<SelectRequest>,
) -> Result<Json<SelectResponse>, (StatusCode, String)> {
    tracing::info!(
        body = serde_json::to_string(&req).unwrap_or_default(),
        "POST /select"
    );

    if req
        .products
        .iter()
        .any(|p| p.size.h == 0 || p.size.w == 0)
    {
        return Err((
            StatusCode::BAD_REQUEST,
            "product dimensions must be non-zero".to_string(),
        ));
    }

    let stocks: Vec<StockGrid> = req
        .stocks
        .iter()
        .map(|rows| StockGrid::from_rows(rows))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| (StatusCode::BAD_REQUEST, e))?;

    let action = policy::select_action(&stocks, &req.products);
    Ok(Json(SelectResponse { action }))
}

#[tokio::main]
async fn main() {
    let _sentry = sentry::init(sentry::ClientOptions {
        dsn: std::env::var("SENTRY_DSN")
            .ok()
            .and_then(|d| d.parse().ok()),
        release: sentry::release_name!(),
        ..Default::default()
    });

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("development.log")
        .expect("failed to open development.log");

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_max_level(Level::INFO)
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3001".to_string());
    let addr = format!("0.0.0.0:{port}");

    let app = Router::new()
        .route("/up", get(|| async { "ok" }))
        .route("/select", post(select))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        );

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    eprintln!("Listening on {addr}");
    axum::serve(listener, app).await.unwrap();
}
