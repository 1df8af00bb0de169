use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::guidance::advisor::{HiringProposalContent, ProposalBrief, ScoredCriterion};
use crate::guidance::service::{
    fetch_salary_guidance, generate_hiring_proposal, CareerMode, GuidanceInput, SalaryGuidance,
};
use crate::models::profile::{
    agency_size_options, education_options, engineer_level_options, location_options,
    AgencySize, EducationLevel, EngineerLevel, Location, SelectOption,
};
use crate::models::rubric::{find_role, Role, ROLES};
use crate::models::salary::SalaryRange;
use crate::state::AppState;
use crate::valuation::engineer_level::{calculate_engineer_level, level_year_range, YearSpan};
use crate::valuation::grade::{classify_scores, negotiation_weight, CompetencySummary};
use crate::valuation::pipeline::{
    adjust_salary, AdjustmentInput, AdjustmentOutcome, CompetencyAdjustment, NegotiationInputs,
};

// ────────────────────────────────────────────────────────────────────────────
// Request / response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct CatalogResponse {
    pub roles: &'static [Role],
    pub education_levels: Vec<SelectOption>,
    pub engineer_levels: Vec<SelectOption>,
    pub agency_sizes: Vec<SelectOption>,
    pub locations: Vec<SelectOption>,
}

#[derive(Deserialize)]
pub struct EngineerLevelRequest {
    pub experience_years: u32,
    pub education: Option<EducationLevel>,
}

#[derive(Serialize)]
pub struct EngineerLevelResponse {
    pub level: EngineerLevel,
    pub level_name: &'static str,
    /// Absent without an education tier.
    pub year_span: Option<YearSpan>,
}

#[derive(Deserialize)]
pub struct GradeRequest {
    pub role_id: String,
    /// Criterion id → 1–4 score.
    pub scores: BTreeMap<String, u8>,
}

#[derive(Serialize)]
pub struct GradeResponse {
    #[serde(flatten)]
    pub summary: CompetencySummary,
    pub weight: f64,
    pub weight_rationale: &'static str,
}

#[derive(Deserialize)]
pub struct AdjustRequest {
    pub baseline: SalaryRange,
    pub competency: Option<CompetencyAdjustment>,
    #[serde(default)]
    pub negotiation: NegotiationInputs,
}

#[derive(Deserialize)]
pub struct GuidanceRequest {
    pub role_id: String,
    pub education: EducationLevel,
    pub experience_years: u32,
    #[serde(default)]
    pub career_mode: CareerMode,
    #[serde(default)]
    pub agency_size: AgencySize,
    #[serde(default)]
    pub location: Location,
    /// Criterion id → 1–4 score. Either empty or covering every criterion.
    #[serde(default)]
    pub scores: BTreeMap<String, u8>,
    pub previous_salary: Option<i64>,
    pub desired_salary: Option<i64>,
}

// ────────────────────────────────────────────────────────────────────────────
// Validation
// ────────────────────────────────────────────────────────────────────────────

fn lookup_role(role_id: &str) -> Result<&'static Role, AppError> {
    find_role(role_id).ok_or_else(|| AppError::NotFound(format!("role '{role_id}'")))
}

/// Turns raw scores into rubric lines in criterion order.
///
/// Empty input is allowed (no evaluation). Otherwise every criterion of the
/// role must be scored 1–4 and nothing else may be.
pub fn score_rubric(
    role: &Role,
    scores: &BTreeMap<String, u8>,
) -> Result<Vec<ScoredCriterion>, AppError> {
    if let Some(unknown) = scores.keys().find(|id| role.criterion(id).is_none()) {
        return Err(AppError::Validation(format!(
            "criterion '{unknown}' does not belong to role '{}'",
            role.id
        )));
    }
    if scores.is_empty() {
        return Ok(Vec::new());
    }

    role.criteria
        .iter()
        .map(|criterion| {
            let score = *scores.get(criterion.id).ok_or_else(|| {
                AppError::Validation(format!("criterion '{}' is not scored", criterion.id))
            })?;
            let description = criterion.level_description(score).ok_or_else(|| {
                AppError::Validation(format!(
                    "score for '{}' must be between 1 and 4, got {score}",
                    criterion.id
                ))
            })?;
            Ok(ScoredCriterion {
                id: criterion.id.to_string(),
                name: criterion.name.to_string(),
                score,
                description: description.to_string(),
            })
        })
        .collect()
}

fn non_negative(field: &str, value: Option<i64>) -> Result<(), AppError> {
    match value {
        Some(v) if v < 0 => Err(AppError::Validation(format!("{field} cannot be negative"))),
        _ => Ok(()),
    }
}

impl GuidanceRequest {
    pub fn into_input(self) -> Result<GuidanceInput, AppError> {
        let role = lookup_role(&self.role_id)?;
        let evaluation = score_rubric(role, &self.scores)?;
        non_negative("previous_salary", self.previous_salary)?;
        non_negative("desired_salary", self.desired_salary)?;

        Ok(GuidanceInput {
            role,
            education: self.education,
            experience_years: self.experience_years,
            career_mode: self.career_mode,
            agency_size: self.agency_size,
            location: self.location,
            evaluation,
            previous_salary: self.previous_salary,
            desired_salary: self.desired_salary,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/catalog
pub async fn handle_catalog() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        roles: ROLES,
        education_levels: education_options(),
        engineer_levels: engineer_level_options(),
        agency_sizes: agency_size_options(),
        locations: location_options(),
    })
}

/// POST /api/v1/engineer-level
pub async fn handle_engineer_level(
    Json(req): Json<EngineerLevelRequest>,
) -> Json<EngineerLevelResponse> {
    let level = calculate_engineer_level(req.experience_years, req.education);
    Json(EngineerLevelResponse {
        level,
        level_name: level.display_name(),
        year_span: req.education.map(|e| level_year_range(e, level)),
    })
}

/// POST /api/v1/competency/grade
pub async fn handle_grade(Json(req): Json<GradeRequest>) -> Result<Json<GradeResponse>, AppError> {
    let role = lookup_role(&req.role_id)?;
    let evaluation = score_rubric(role, &req.scores)?;
    let scores: Vec<u8> = evaluation.iter().map(|c| c.score).collect();
    let summary = classify_scores(&scores)
        .ok_or_else(|| AppError::Validation("no scores submitted".to_string()))?;
    let weight = negotiation_weight(Some(summary.grade));

    Ok(Json(GradeResponse {
        summary,
        weight: weight.weight,
        weight_rationale: weight.rationale,
    }))
}

/// POST /api/v1/salary/adjust
///
/// Runs the adjustment pipeline on a caller-supplied baseline, no LLM involved.
pub async fn handle_adjust(
    State(state): State<AppState>,
    Json(req): Json<AdjustRequest>,
) -> Result<Json<AdjustmentOutcome>, AppError> {
    if !req.baseline.is_ordered() {
        return Err(AppError::Validation(
            "baseline must satisfy min <= avg <= max".to_string(),
        ));
    }
    non_negative("baseline.min", Some(req.baseline.min))?;
    non_negative("previous_salary", req.negotiation.previous_salary)?;
    non_negative("desired_salary", req.negotiation.desired_salary)?;

    let outcome = adjust_salary(
        &AdjustmentInput {
            baseline: req.baseline,
            competency: req.competency,
            negotiation: req.negotiation,
        },
        &state.policy,
    );
    Ok(Json(outcome))
}

/// POST /api/v1/salary/guidance
pub async fn handle_guidance(
    State(state): State<AppState>,
    Json(req): Json<GuidanceRequest>,
) -> Result<Json<SalaryGuidance>, AppError> {
    let input = req.into_input()?;
    let table = state.table_store.load().await?;
    let guidance =
        fetch_salary_guidance(state.advisor.as_ref(), &input, &table, &state.policy).await?;
    Ok(Json(guidance))
}

/// POST /api/v1/proposals
pub async fn handle_proposal(
    State(state): State<AppState>,
    Json(brief): Json<ProposalBrief>,
) -> Result<Json<HiringProposalContent>, AppError> {
    if brief.competency_analysis.trim().is_empty() {
        return Err(AppError::Validation(
            "competency_analysis is required".to_string(),
        ));
    }
    non_negative("avg_salary", Some(brief.avg_salary))?;
    let content = generate_hiring_proposal(state.advisor.as_ref(), &brief).await?;
    Ok(Json(content))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
