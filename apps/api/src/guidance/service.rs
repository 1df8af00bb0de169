//! Salary guidance orchestration.
//!
//! Call order: baseline market value → competency premium → adjustment
//! pipeline → previous-salary review → desired-salary guide → executive
//! summary. Only the baseline call is required; later calls degrade to a
//! fallback text unless the failure is one every later call would hit too.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::company_table::table::CompanySalaryTable;
use crate::errors::AppError;
use crate::guidance::advisor::{
    CompetencyBrief, DesiredSalaryBrief, HiringProposalContent, MarketValueBrief,
    PreviousSalaryBrief, ProposalBrief, SalaryAdvisor, ScoredCriterion, SummaryBrief,
};
use crate::llm_client::LlmError;
use crate::models::profile::{AgencySize, EducationLevel, EngineerLevel, Location};
use crate::models::rubric::Role;
use crate::models::salary::{
    CompanyStandard, FinalRecommendation, SalaryBand, SalaryReasoning, SalaryValuation,
};
use crate::valuation::engineer_level::calculate_engineer_level;
use crate::valuation::grade::{classify_scores, CompetencyGrade, CompetencySummary};
use crate::valuation::pipeline::{
    adjust_salary, AdjustmentInput, AdjustmentPolicy, CompetencyAdjustment, NegotiationInputs,
    NegotiationWalkthrough,
};

const COMPETENCY_FALLBACK: &str =
    "역량 프리미엄 분석 중 오류가 발생하여, 기초 시장 가치만 표시됩니다.";
const PREVIOUS_SALARY_FALLBACK: &str = "이전 연봉 및 희망 연봉 분석 중 오류가 발생했습니다.";
const DESIRED_SALARY_FALLBACK: &str = "희망 연봉 분석 중 오류가 발생했습니다.";

/// How the applicant's engineer level (and so the company standard) is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", content = "level", rename_all = "snake_case")]
pub enum CareerMode {
    /// Level derived from tenure; company standard is the tenure year's band.
    #[default]
    Auto,
    /// Level picked by the interviewer; company standard is a span description.
    Manual(EngineerLevel),
}

/// A validated guidance request.
#[derive(Debug, Clone)]
pub struct GuidanceInput {
    pub role: &'static Role,
    pub education: EducationLevel,
    pub experience_years: u32,
    pub career_mode: CareerMode,
    pub agency_size: AgencySize,
    pub location: Location,
    /// Empty, or one entry per criterion of `role`.
    pub evaluation: Vec<ScoredCriterion>,
    pub previous_salary: Option<i64>,
    pub desired_salary: Option<i64>,
}

impl GuidanceInput {
    pub fn engineer_level(&self) -> EngineerLevel {
        match self.career_mode {
            CareerMode::Auto => calculate_engineer_level(self.experience_years, Some(self.education)),
            CareerMode::Manual(level) => level,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SalaryGuidance {
    pub request_id: Uuid,
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub recommendation: FinalRecommendation,
    pub reasoning: SalaryReasoning,
    pub walkthrough: NegotiationWalkthrough,
    pub engineer_level: EngineerLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competency: Option<CompetencySummary>,
    /// Band form only; a manual-mode description is not plottable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_standard: Option<SalaryBand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_salary: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_salary: Option<i64>,
}

/// Company standard for the applicant: a band in auto mode, a sentence in
/// manual mode. `None` when the table has no data for it.
pub fn resolve_company_standard(
    table: &CompanySalaryTable,
    input: &GuidanceInput,
) -> Option<CompanyStandard> {
    match input.career_mode {
        CareerMode::Auto => table
            .lookup(input.education, input.experience_years)
            .map(CompanyStandard::Band),
        CareerMode::Manual(level) => table
            .describe_level(input.education, level)
            .map(CompanyStandard::Description),
    }
}

/// Fatal failures become the request's error; everything else is logged and
/// handed back for the caller to degrade.
fn degrade(stage: &'static str, err: LlmError) -> Result<(), AppError> {
    let kind = err.kind();
    if kind.is_fatal() {
        return Err(AppError::Upstream { kind, stage });
    }
    warn!("Guidance stage '{stage}' failed ({kind:?}), continuing: {err}");
    Ok(())
}

pub async fn fetch_salary_guidance(
    advisor: &dyn SalaryAdvisor,
    input: &GuidanceInput,
    table: &CompanySalaryTable,
    policy: &AdjustmentPolicy,
) -> Result<SalaryGuidance, AppError> {
    let request_id = Uuid::new_v4();
    let level = input.engineer_level();
    let company_standard = resolve_company_standard(table, input);

    // 1. Baseline market value
    info!("[{request_id}] Requesting baseline market value for {}", input.role.id);
    let valuation = advisor
        .market_value(&MarketValueBrief {
            role: input.role.name.to_string(),
            level: level.display_name().to_string(),
            experience_years: Some(input.experience_years),
            education: Some(input.education.display_name().to_string()),
            location: input.location.display_name().to_string(),
            agency_size: input.agency_size.display_name().to_string(),
            company_standard: company_standard.clone(),
        })
        .await
        .map_err(|e| AppError::Upstream {
            kind: e.kind(),
            stage: "market_value",
        })?;
    let valuation = ordered_valuation(valuation);
    let baseline = valuation.range();
    let mut reasoning = SalaryReasoning::from(valuation.reasoning);

    // 2. Grade from rubric
    let scores: Vec<u8> = input.evaluation.iter().map(|c| c.score).collect();
    let competency = classify_scores(&scores);

    // 3. Competency premium
    let mut adjustment = None;
    if let Some(summary) = competency {
        info!(
            "[{request_id}] Requesting competency premium (grade: {})",
            summary.grade.label()
        );
        let result = advisor
            .competency_premium(&CompetencyBrief {
                role: input.role.name.to_string(),
                baseline_avg: baseline.avg,
                evaluation: input.evaluation.clone(),
                grade: summary.grade,
            })
            .await;
        match result {
            Ok(result) => {
                adjustment = Some(CompetencyAdjustment {
                    premium: result.competency_premium,
                    grade: CompetencyGrade::from_label(&result.competency_grade)
                        .or(Some(summary.grade)),
                });
                reasoning.competency_analysis = Some(result.competency_analysis_text);
            }
            Err(e) => {
                degrade("competency_premium", e)?;
                reasoning.competency_analysis = Some(COMPETENCY_FALLBACK.to_string());
            }
        }
    }

    // 4. Adjustment pipeline
    let outcome = adjust_salary(
        &AdjustmentInput {
            baseline,
            competency: adjustment,
            negotiation: NegotiationInputs {
                previous_salary: input.previous_salary,
                desired_salary: input.desired_salary,
                company_standard: company_standard.clone(),
            },
        },
        policy,
    );
    let recommendation = outcome.recommendation;
    let market_value = outcome.walkthrough.market_value;
    let desired = input.desired_salary.filter(|d| *d > 0);
    let previous = input.previous_salary.filter(|p| *p > 0);

    // 5. Previous salary review
    if let (Some(previous_salary), Some(desired_salary)) = (previous, desired) {
        info!("[{request_id}] Requesting previous salary analysis");
        let result = advisor
            .previous_salary_analysis(&PreviousSalaryBrief {
                baseline_avg: baseline.avg,
                previous_salary,
                desired_salary,
                grade: recommendation.competency_grade,
            })
            .await;
        reasoning.previous_salary_analysis = Some(match result {
            Ok(text) => text,
            Err(e) => {
                degrade("previous_salary_analysis", e)?;
                PREVIOUS_SALARY_FALLBACK.to_string()
            }
        });
    }

    // 6. Desired salary guide
    if let Some(desired_salary) = desired {
        info!("[{request_id}] Requesting desired salary analysis");
        let result = advisor
            .desired_salary_analysis(&DesiredSalaryBrief {
                market_value,
                recommended_avg: recommendation.avg_salary,
                potential_value_gap: recommendation.potential_value_gap,
                desired_salary,
            })
            .await;
        reasoning.desired_salary_analysis = Some(match result {
            Ok(text) => text,
            Err(e) => {
                degrade("desired_salary_analysis", e)?;
                DESIRED_SALARY_FALLBACK.to_string()
            }
        });
    }

    // 7. Executive summary replaces the baseline one
    info!("[{request_id}] Requesting final summary");
    let result = advisor
        .final_summary(&SummaryBrief {
            baseline_avg: baseline.avg,
            competency_premium: recommendation.competency_premium,
            market_value,
            recommended_avg: recommendation.avg_salary,
            potential_value_gap: recommendation.potential_value_gap,
            company_middle: company_standard.as_ref().and_then(|s| s.middle()),
            desired_salary: desired,
            average_score: competency.map(|c| c.average_score),
            grade: recommendation.competency_grade,
        })
        .await;
    match result {
        Ok(summary) => reasoning.summary = summary,
        Err(e) => degrade("final_summary", e)?,
    }

    info!(
        "[{request_id}] Guidance complete: {}~{} (avg {})",
        recommendation.min_salary, recommendation.max_salary, recommendation.avg_salary
    );

    Ok(SalaryGuidance {
        request_id,
        generated_at: Utc::now(),
        recommendation,
        reasoning,
        walkthrough: outcome.walkthrough,
        engineer_level: level,
        competency,
        company_standard: company_standard.and_then(|s| s.band().copied()),
        previous_salary: previous,
        desired_salary: desired,
    })
}

/// The collaborator occasionally returns min/avg/max out of order.
fn ordered_valuation(mut valuation: SalaryValuation) -> SalaryValuation {
    let range = valuation.range();
    if !range.is_ordered() {
        warn!(
            "Baseline valuation out of order ({}/{}/{}), sorting",
            range.min, range.avg, range.max
        );
        let sorted = range.sorted();
        valuation.min_salary = sorted.min;
        valuation.avg_salary = sorted.avg;
        valuation.max_salary = sorted.max;
    }
    valuation
}

pub async fn generate_hiring_proposal(
    advisor: &dyn SalaryAdvisor,
    brief: &ProposalBrief,
) -> Result<HiringProposalContent, AppError> {
    info!("Generating hiring proposal for role {}", brief.role_name);
    advisor
        .hiring_proposal(brief)
        .await
        .map_err(|e| AppError::Upstream {
            kind: e.kind(),
            stage: "hiring_proposal",
        })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
