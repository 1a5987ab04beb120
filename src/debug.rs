//! Debug endpoints: inspect the Rule Table and see which signals fired.
//! Mounted by `api::create_router` only when `debug_routes` is on.

use axum::{extract::Query, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::classifier::{categorize_content, explain_content, CategoryScore};
use crate::rules::{summaries, RuleSummary};
use crate::scorer::ScoreBreakdown;

#[derive(Deserialize)]
pub struct ExplainQuery {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ExplainOut {
    pub result: Vec<CategoryScore>,
    pub breakdown: Vec<ScoreBreakdown>,
}

pub fn router() -> Router {
    Router::new()
        .route("/debug/rules", get(get_rules))
        .route("/debug/explain", get(get_explain))
}

async fn get_rules() -> Json<Vec<RuleSummary>> {
    Json(summaries())
}

/// GET /debug/explain?text=...
async fn get_explain(Query(q): Query<ExplainQuery>) -> Json<ExplainOut> {
    Json(ExplainOut {
        result: categorize_content(&q.text),
        breakdown: explain_content(&q.text),
    })
}
