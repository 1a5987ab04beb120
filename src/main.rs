//! Post Categorizer — Binary Entrypoint
//! Boots the Axum HTTP server around the categorization engine.

use shuttle_axum::ShuttleAxum;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use post_categorizer::{api, rules};

/// Compact tracing to stdout. Filter from RUST_LOG, default `categorizer=info,warn`.
/// A subscriber installed by the runtime wins; ours is then skipped.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("categorizer=info,warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .try_init();
}

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();

    init_tracing();

    let state = api::AppState::from_env()?;

    // Compile the Rule Table up front instead of on the first request.
    info!(
        target: "categorizer",
        categories = rules::rule_table().len(),
        "rule table ready"
    );

    let router = api::create_router(state);
    Ok(router.into())
}
