//! Salary advisor: the seam between the guidance flow and the language model.
//!
//! `AppState` carries an `Arc<dyn SalaryAdvisor>`. `LlmSalaryAdvisor` renders
//! the prompts in `prompts.rs` and calls Claude; tests swap in a scripted fake.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::guidance::prompts::*;
use crate::llm_client::{LlmClient, LlmError, ANALYSIS_TEMPERATURE, WRITING_TEMPERATURE};
use crate::models::salary::{format_amount, CompanyStandard, CompetencyResult, SalaryValuation};
use crate::valuation::grade::CompetencyGrade;

// ────────────────────────────────────────────────────────────────────────────
// Briefs: everything one collaborator call needs
// ────────────────────────────────────────────────────────────────────────────

/// Objective profile only. Rubric scores and salaries are deliberately absent.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketValueBrief {
    pub role: String,
    pub level: String,
    pub experience_years: Option<u32>,
    pub education: Option<String>,
    pub location: String,
    pub agency_size: String,
    pub company_standard: Option<CompanyStandard>,
}

/// One rubric line as shown to the interviewer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCriterion {
    pub id: String,
    pub name: String,
    pub score: u8,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompetencyBrief {
    pub role: String,
    pub baseline_avg: i64,
    pub evaluation: Vec<ScoredCriterion>,
    pub grade: CompetencyGrade,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreviousSalaryBrief {
    pub baseline_avg: i64,
    pub previous_salary: i64,
    pub desired_salary: i64,
    pub grade: Option<CompetencyGrade>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DesiredSalaryBrief {
    pub market_value: i64,
    pub recommended_avg: i64,
    pub potential_value_gap: Option<i64>,
    pub desired_salary: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryBrief {
    pub baseline_avg: i64,
    pub competency_premium: Option<i64>,
    pub market_value: i64,
    pub recommended_avg: i64,
    pub potential_value_gap: Option<i64>,
    pub company_middle: Option<i64>,
    pub desired_salary: Option<i64>,
    pub average_score: Option<f64>,
    pub grade: Option<CompetencyGrade>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProposalBrief {
    pub competency_analysis: String,
    pub applicant_name: Option<String>,
    pub role_name: String,
    pub education_name: Option<String>,
    pub experience_years: u32,
    pub engineer_level_name: String,
    pub avg_salary: i64,
}

/// Interview section of the hiring proposal document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HiringProposalContent {
    pub summary: String,
    pub strengths: String,
    pub improvements: String,
    pub rationale: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait SalaryAdvisor: Send + Sync {
    async fn market_value(&self, brief: &MarketValueBrief) -> Result<SalaryValuation, LlmError>;

    async fn competency_premium(&self, brief: &CompetencyBrief)
        -> Result<CompetencyResult, LlmError>;

    async fn previous_salary_analysis(&self, brief: &PreviousSalaryBrief)
        -> Result<String, LlmError>;

    async fn desired_salary_analysis(&self, brief: &DesiredSalaryBrief)
        -> Result<String, LlmError>;

    async fn final_summary(&self, brief: &SummaryBrief) -> Result<String, LlmError>;

    async fn hiring_proposal(&self, brief: &ProposalBrief)
        -> Result<HiringProposalContent, LlmError>;
}

// ────────────────────────────────────────────────────────────────────────────
// LlmSalaryAdvisor
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmSalaryAdvisor(pub LlmClient);

#[async_trait]
impl SalaryAdvisor for LlmSalaryAdvisor {
    async fn market_value(&self, brief: &MarketValueBrief) -> Result<SalaryValuation, LlmError> {
        self.0
            .call_json(&market_value_prompt(brief), JSON_SYSTEM, ANALYSIS_TEMPERATURE)
            .await
    }

    async fn competency_premium(
        &self,
        brief: &CompetencyBrief,
    ) -> Result<CompetencyResult, LlmError> {
        self.0
            .call_json(&competency_prompt(brief), JSON_SYSTEM, ANALYSIS_TEMPERATURE)
            .await
    }

    async fn previous_salary_analysis(
        &self,
        brief: &PreviousSalaryBrief,
    ) -> Result<String, LlmError> {
        self.0
            .call_text(&previous_salary_prompt(brief), TEXT_SYSTEM, ANALYSIS_TEMPERATURE)
            .await
    }

    async fn desired_salary_analysis(
        &self,
        brief: &DesiredSalaryBrief,
    ) -> Result<String, LlmError> {
        self.0
            .call_text(&desired_salary_prompt(brief), TEXT_SYSTEM, ANALYSIS_TEMPERATURE)
            .await
    }

    async fn final_summary(&self, brief: &SummaryBrief) -> Result<String, LlmError> {
        self.0
            .call_text(&summary_prompt(brief), TEXT_SYSTEM, ANALYSIS_TEMPERATURE)
            .await
    }

    async fn hiring_proposal(
        &self,
        brief: &ProposalBrief,
    ) -> Result<HiringProposalContent, LlmError> {
        self.0
            .call_json(&hiring_proposal_prompt(brief), JSON_SYSTEM, WRITING_TEMPERATURE)
            .await
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Prompt builders
// ────────────────────────────────────────────────────────────────────────────

fn amount_or_unset(value: Option<i64>) -> String {
    value
        .map(|v| format!("{}만원", format_amount(v)))
        .unwrap_or_else(|| "미설정".to_string())
}

fn grade_line(grade: Option<CompetencyGrade>) -> String {
    grade
        .map(|g| format!("- 역량 종합 평가: '{}'", g.label()))
        .unwrap_or_default()
}

fn company_standard_block(standard: Option<&CompanyStandard>) -> String {
    match standard {
        Some(CompanyStandard::Description(description)) => {
            STANDARD_DESCRIPTION_BLOCK.replace("{description}", description)
        }
        Some(CompanyStandard::Band(band)) if !band.is_empty() => STANDARD_BAND_BLOCK
            .replace("{low}", &amount_or_unset(band.low))
            .replace("{middle}", &amount_or_unset(band.middle))
            .replace("{high}", &amount_or_unset(band.high)),
        _ => String::new(),
    }
}

pub fn market_value_prompt(brief: &MarketValueBrief) -> String {
    let experience_line = brief
        .experience_years
        .map(|y| format!("- 경력: {y}년"))
        .unwrap_or_default();
    let education_line = brief
        .education
        .as_deref()
        .map(|e| format!("- 학력: {e}"))
        .unwrap_or_default();

    MARKET_VALUE_PROMPT_TEMPLATE
        .replace("{role}", &brief.role)
        .replace("{level}", &brief.level)
        .replace("{experience_line}", &experience_line)
        .replace("{education_line}", &education_line)
        .replace("{location}", &brief.location)
        .replace("{agency_size}", &brief.agency_size)
        .replace(
            "{company_standard_block}",
            &company_standard_block(brief.company_standard.as_ref()),
        )
}

pub fn competency_prompt(brief: &CompetencyBrief) -> String {
    let evaluation_lines = brief
        .evaluation
        .iter()
        .map(|c| format!("- {}: {}점 ({})", c.name, c.score, c.description))
        .collect::<Vec<_>>()
        .join("\n");

    COMPETENCY_PROMPT_TEMPLATE
        .replace("{baseline_avg}", &format_amount(brief.baseline_avg))
        .replace("{role}", &brief.role)
        .replace("{evaluation_lines}", &evaluation_lines)
        .replace("{grade}", brief.grade.label())
}

pub fn previous_salary_prompt(brief: &PreviousSalaryBrief) -> String {
    PREVIOUS_SALARY_PROMPT_TEMPLATE
        .replace("{baseline_avg}", &format_amount(brief.baseline_avg))
        .replace("{previous}", &format_amount(brief.previous_salary))
        .replace("{desired}", &format_amount(brief.desired_salary))
        .replace("{grade_line}", &grade_line(brief.grade))
        .replace("{grade}", brief.grade.map(|g| g.label()).unwrap_or("미평가"))
}

/// The gap variant frames the held-back value as a retention argument.
pub fn desired_salary_prompt(brief: &DesiredSalaryBrief) -> String {
    match brief.potential_value_gap {
        Some(gap) => DESIRED_SALARY_GAP_PROMPT_TEMPLATE
            .replace("{market_value}", &format_amount(brief.market_value))
            .replace("{recommended_avg}", &format_amount(brief.recommended_avg))
            .replace("{gap}", &format_amount(gap))
            .replace("{desired}", &format_amount(brief.desired_salary)),
        None => DESIRED_SALARY_PROMPT_TEMPLATE
            .replace("{recommended_avg}", &format_amount(brief.recommended_avg))
            .replace("{desired}", &format_amount(brief.desired_salary)),
    }
}

pub fn summary_prompt(brief: &SummaryBrief) -> String {
    let desired = amount_or_unset(brief.desired_salary);
    match brief.potential_value_gap {
        Some(gap) => SUMMARY_GAP_PROMPT_TEMPLATE
            .replace("{market_value}", &format_amount(brief.market_value))
            .replace("{recommended_avg}", &format_amount(brief.recommended_avg))
            .replace("{gap}", &format_amount(gap))
            .replace("{desired}", &desired)
            .replace("{grade_line}", &grade_line(brief.grade)),
        None => {
            let score_line = brief
                .average_score
                .map(|s| format!("- 평균 역량 점수: {s:.2}점"))
                .unwrap_or_default();
            SUMMARY_PROMPT_TEMPLATE
                .replace("{baseline_avg}", &format_amount(brief.baseline_avg))
                .replace(
                    "{premium}",
                    &format_amount(brief.competency_premium.unwrap_or(0)),
                )
                .replace("{recommended_avg}", &format_amount(brief.recommended_avg))
                .replace("{company_middle}", &amount_or_unset(brief.company_middle))
                .replace("{desired}", &desired)
                .replace("{score_line}", &score_line)
                .replace("{grade_line}", &grade_line(brief.grade))
        }
    }
}

pub fn hiring_proposal_prompt(brief: &ProposalBrief) -> String {
    HIRING_PROPOSAL_PROMPT_TEMPLATE
        .replace("{competency_analysis}", &brief.competency_analysis)
        .replace(
            "{applicant}",
            brief.applicant_name.as_deref().unwrap_or("해당 지원자"),
        )
        .replace("{role}", &brief.role_name)
        .replace("{education}", brief.education_name.as_deref().unwrap_or("미입력"))
        .replace("{experience}", &brief.experience_years.to_string())
        .replace("{level}", &brief.engineer_level_name)
        .replace("{avg_salary}", &format_amount(brief.avg_salary))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
