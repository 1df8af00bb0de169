pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::company_table::handlers as table;
use crate::guidance::handlers as guidance;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalogue and stateless calculations
        .route("/api/v1/catalog", get(guidance::handle_catalog))
        .route("/api/v1/engineer-level", post(guidance::handle_engineer_level))
        .route("/api/v1/competency/grade", post(guidance::handle_grade))
        .route("/api/v1/salary/adjust", post(guidance::handle_adjust))
        // LLM-backed
        .route("/api/v1/salary/guidance", post(guidance::handle_guidance))
        .route("/api/v1/proposals", post(guidance::handle_proposal))
        // Company salary table
        .route(
            "/api/v1/company-table",
            get(table::handle_get_table)
                .put(table::handle_replace_table)
                .delete(table::handle_reset_table),
        )
        .route("/api/v1/company-table/cells", patch(table::handle_update_cell))
        .route("/api/v1/company-table/bulk", post(table::handle_bulk_edit))
        .route(
            "/api/v1/company-table/:education/increases",
            get(table::handle_increases),
        )
        .route("/api/v1/platforms", get(table::handle_platforms))
        .with_state(state)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
