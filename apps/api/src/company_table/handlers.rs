use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::company_table::bulk::{bulk_generate, BulkEditParams};
use crate::company_table::platforms::{platform_references, PlatformReference};
use crate::company_table::table::{
    BandField, CompanySalaryTable, TableError, YearIncrease, YearlySalaryTable,
};
use crate::errors::AppError;
use crate::models::profile::EducationLevel;
use crate::models::salary::SalaryBand;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CellUpdateRequest {
    pub education: EducationLevel,
    pub year: u32,
    pub field: BandField,
    /// `null` clears the cell field.
    pub value: Option<i64>,
}

#[derive(Serialize)]
pub struct CellUpdateResponse {
    pub education: EducationLevel,
    pub year: u32,
    pub band: SalaryBand,
    /// Increase column for the edited year and the one after it, which
    /// both depend on this cell.
    pub increases: Vec<YearIncrease>,
}

#[derive(Deserialize)]
pub struct BulkEditRequest {
    pub education: EducationLevel,
    #[serde(flatten)]
    pub params: BulkEditParams,
}

#[derive(Serialize)]
pub struct BulkEditResponse {
    pub education: EducationLevel,
    pub table: YearlySalaryTable,
}

/// GET /api/v1/company-table
pub async fn handle_get_table(
    State(state): State<AppState>,
) -> Result<Json<CompanySalaryTable>, AppError> {
    Ok(Json(state.table_store.load().await?))
}

/// PUT /api/v1/company-table
pub async fn handle_replace_table(
    State(state): State<AppState>,
    Json(table): Json<CompanySalaryTable>,
) -> Result<Json<CompanySalaryTable>, AppError> {
    table.validate()?;
    let _guard = state.table_lock.lock().await;
    state.table_store.save(&table).await?;
    info!("Company salary table replaced");
    Ok(Json(table))
}

/// DELETE /api/v1/company-table
pub async fn handle_reset_table(
    State(state): State<AppState>,
) -> Result<Json<CompanySalaryTable>, AppError> {
    let _guard = state.table_lock.lock().await;
    Ok(Json(state.table_store.reset().await?))
}

/// PATCH /api/v1/company-table/cells
pub async fn handle_update_cell(
    State(state): State<AppState>,
    Json(req): Json<CellUpdateRequest>,
) -> Result<Json<CellUpdateResponse>, AppError> {
    let _guard = state.table_lock.lock().await;
    let mut table = state.table_store.load().await?;
    let band = table.update_cell(req.education, req.year, req.field, req.value)?;
    state.table_store.save(&table).await?;

    let increases = [req.year, req.year + 1]
        .into_iter()
        .filter_map(|year| table.increase_over_previous(req.education, year))
        .collect();

    Ok(Json(CellUpdateResponse {
        education: req.education,
        year: req.year,
        band,
        increases,
    }))
}

/// POST /api/v1/company-table/bulk
pub async fn handle_bulk_edit(
    State(state): State<AppState>,
    Json(req): Json<BulkEditRequest>,
) -> Result<Json<BulkEditResponse>, AppError> {
    let rows = bulk_generate(&req.params)?;

    let _guard = state.table_lock.lock().await;
    let mut table = state.table_store.load().await?;
    table.replace_tier(req.education, rows.clone())?;
    state.table_store.save(&table).await?;
    info!(
        "Bulk-generated {} tier from base {} at {}%",
        req.education, req.params.base_salary, req.params.increase_rate
    );

    Ok(Json(BulkEditResponse {
        education: req.education,
        table: rows,
    }))
}

/// GET /api/v1/company-table/:education/increases
pub async fn handle_increases(
    State(state): State<AppState>,
    Path(education): Path<String>,
) -> Result<Json<Vec<YearIncrease>>, AppError> {
    let education: EducationLevel = education
        .parse()
        .map_err(|_| TableError::UnknownEducation(education.clone()))?;
    let table = state.table_store.load().await?;
    Ok(Json(table.increases(education)))
}

/// GET /api/v1/platforms
pub async fn handle_platforms() -> Json<Vec<PlatformReference>> {
    Json(platform_references())
}
