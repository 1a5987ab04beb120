use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use crate::category::{map_tab_to_category, Category, TAB_LABELS};
use crate::classifier::{
    belongs_to_category, categorize_content, get_post_categories, get_primary_category,
    CategoryScore, DEFAULT_BELONGS_MIN_CONFIDENCE, DEFAULT_POST_CATEGORIES_MIN_CONFIDENCE,
    DEFAULT_PRIMARY_MIN_CONFIDENCE,
};
use crate::config::ServiceConfig;
use crate::error::ApiError;
use crate::feed::{
    filter_posts_by_category, filter_posts_by_tab, Post, DEFAULT_FILTER_MIN_CONFIDENCE,
};
use crate::metrics::{self as m, Metrics};

#[derive(Clone)]
pub struct AppState {
    cfg: Arc<ServiceConfig>,
}

impl AppState {
    pub fn new(cfg: ServiceConfig) -> Self {
        Self { cfg: Arc::new(cfg) }
    }

    /// Settings from the usual config file / env resolution.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::new(ServiceConfig::load()?))
    }
}

pub fn create_router(state: AppState) -> Router {
    let cfg = state.cfg.clone();

    let mut router = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/categorize", post(categorize))
        .route("/categorize/batch", post(categorize_batch))
        .route("/primary", post(primary))
        .route("/belongs", post(belongs))
        .route("/post-categories", post(post_categories))
        .route("/filter", post(filter))
        .route("/tabs", get(list_tabs))
        .route("/tabs/{label}", get(tab_lookup))
        .with_state(state);

    if cfg.debug_routes {
        router = router.merge(crate::debug::router());
    }
    if cfg.metrics {
        if let Some(metrics) = Metrics::init() {
            router = router.merge(metrics.router());
        }
    }
    if cfg.cors_permissive {
        router = router.layer(CorsLayer::very_permissive());
    }
    router
}

#[derive(Deserialize)]
struct TextReq {
    text: String,
}

#[derive(Deserialize)]
struct ThresholdReq {
    text: String,
    #[serde(default)]
    min_confidence: Option<u8>,
}

#[derive(Deserialize)]
struct BelongsReq {
    text: String,
    category: String,
    #[serde(default)]
    min_confidence: Option<u8>,
}

#[derive(Deserialize)]
struct FilterReq {
    posts: Vec<Post>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    tab: Option<String>,
    #[serde(default)]
    min_confidence: Option<u8>,
}

#[derive(Serialize)]
struct PrimaryResp {
    category: Category,
}

#[derive(Serialize)]
struct BelongsResp {
    belongs: bool,
}

#[derive(Serialize)]
struct CategoriesResp {
    categories: Vec<Category>,
}

#[derive(Serialize)]
struct FilterResp {
    posts: Vec<Post>,
}

#[derive(Serialize)]
struct TabOut {
    tab: String,
    category: Option<Category>,
}

async fn categorize(Json(body): Json<TextReq>) -> Json<Vec<CategoryScore>> {
    m::record_request("categorize");
    Json(timed(|| categorize_content(&body.text)))
}

async fn categorize_batch(
    State(state): State<AppState>,
    Json(items): Json<Vec<TextReq>>,
) -> Result<Json<Vec<Vec<CategoryScore>>>, ApiError> {
    m::record_request("categorize_batch");
    check_batch(items.len(), state.cfg.max_batch)?;
    let out = items
        .iter()
        .map(|it| timed(|| categorize_content(&it.text)))
        .collect();
    Ok(Json(out))
}

async fn primary(Json(body): Json<ThresholdReq>) -> Json<PrimaryResp> {
    m::record_request("primary");
    let min = body.min_confidence.unwrap_or(DEFAULT_PRIMARY_MIN_CONFIDENCE);
    Json(PrimaryResp {
        category: get_primary_category(&body.text, min),
    })
}

async fn belongs(Json(body): Json<BelongsReq>) -> Result<Json<BelongsResp>, ApiError> {
    m::record_request("belongs");
    let category: Category = body.category.parse()?;
    let min = body.min_confidence.unwrap_or(DEFAULT_BELONGS_MIN_CONFIDENCE);
    Ok(Json(BelongsResp {
        belongs: belongs_to_category(&body.text, category, min),
    }))
}

async fn post_categories(Json(body): Json<ThresholdReq>) -> Json<CategoriesResp> {
    m::record_request("post_categories");
    let min = body
        .min_confidence
        .unwrap_or(DEFAULT_POST_CATEGORIES_MIN_CONFIDENCE);
    Json(CategoriesResp {
        categories: get_post_categories(&body.text, min),
    })
}

/// Explicit category wins over tab; neither means no filter.
async fn filter(
    State(state): State<AppState>,
    Json(body): Json<FilterReq>,
) -> Result<Json<FilterResp>, ApiError> {
    m::record_request("filter");
    check_batch(body.posts.len(), state.cfg.max_batch)?;
    let min = body.min_confidence.unwrap_or(DEFAULT_FILTER_MIN_CONFIDENCE);

    let kept: Vec<&Post> = match (&body.category, &body.tab) {
        (Some(c), _) => filter_posts_by_category(&body.posts, c.parse()?, min),
        (None, Some(tab)) => filter_posts_by_tab(&body.posts, tab, min),
        (None, None) => body.posts.iter().collect(),
    };

    Ok(Json(FilterResp {
        posts: kept.into_iter().cloned().collect(),
    }))
}

async fn list_tabs() -> Json<Vec<TabOut>> {
    Json(
        TAB_LABELS
            .iter()
            .map(|(label, c)| TabOut {
                tab: label.to_string(),
                category: Some(*c),
            })
            .collect(),
    )
}

async fn tab_lookup(Path(label): Path<String>) -> Json<TabOut> {
    let category = map_tab_to_category(&label);
    Json(TabOut {
        tab: label,
        category,
    })
}

fn check_batch(got: usize, max: usize) -> Result<(), ApiError> {
    if got > max {
        return Err(ApiError::BatchTooLarge { got, max });
    }
    Ok(())
}

fn timed(f: impl FnOnce() -> Vec<CategoryScore>) -> Vec<CategoryScore> {
    let started = Instant::now();
    let out = f();
    m::record_duration_ms(started.elapsed().as_secs_f64() * 1000.0);
    m::record_result(&out);
    out
}
