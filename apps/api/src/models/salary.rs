//! Salary records exchanged between the collaborator, the adjustment
//! pipeline and the presentation layer. All amounts are in 만원.

use serde::{Deserialize, Serialize};

use crate::valuation::grade::CompetencyGrade;

/// A `{min, avg, max}` triple. Callers keep `min <= avg <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: i64,
    pub avg: i64,
    pub max: i64,
}

impl SalaryRange {
    pub fn new(min: i64, avg: i64, max: i64) -> Self {
        Self { min, avg, max }
    }

    pub fn is_ordered(&self) -> bool {
        self.min <= self.avg && self.avg <= self.max
    }

    /// Returns the same three figures reordered ascending.
    pub fn sorted(&self) -> Self {
        let mut v = [self.min, self.avg, self.max];
        v.sort_unstable();
        Self::new(v[0], v[1], v[2])
    }

    /// Moves all three figures by the same signed amount.
    pub fn shifted(&self, delta: i64) -> Self {
        Self::new(self.min + delta, self.avg + delta, self.max + delta)
    }
}

/// One cell of a company salary table: the pay for low/middle/high
/// performers at a given tenure. Any of the three may be unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SalaryBand {
    pub low: Option<i64>,
    pub middle: Option<i64>,
    pub high: Option<i64>,
}

impl SalaryBand {
    pub fn new(low: i64, middle: i64, high: i64) -> Self {
        Self {
            low: Some(low),
            middle: Some(middle),
            high: Some(high),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.low.is_none() && self.middle.is_none() && self.high.is_none()
    }
}

/// The company's internal reference for the applicant's tier.
///
/// Manual-mode lookups produce a descriptive sentence for the prompt only;
/// auto-mode lookups produce the numeric band the pipeline can bound against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompanyStandard {
    Description(String),
    Band(SalaryBand),
}

impl CompanyStandard {
    pub fn band(&self) -> Option<&SalaryBand> {
        match self {
            CompanyStandard::Band(band) => Some(band),
            CompanyStandard::Description(_) => None,
        }
    }

    /// Band middle, treating zero as unset.
    pub fn middle(&self) -> Option<i64> {
        self.band().and_then(|b| b.middle).filter(|v| *v > 0)
    }

    /// Band high, treating zero as unset.
    pub fn high(&self) -> Option<i64> {
        self.band().and_then(|b| b.high).filter(|v| *v > 0)
    }
}

/// Narrative returned with the baseline valuation. Opaque to the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaselineReasoning {
    pub summary: String,
    pub market_analysis: String,
    pub comparison: String,
    pub data_source: String,
}

/// Baseline market value as returned by the collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryValuation {
    pub min_salary: i64,
    pub avg_salary: i64,
    pub max_salary: i64,
    pub reasoning: BaselineReasoning,
}

impl SalaryValuation {
    pub fn range(&self) -> SalaryRange {
        SalaryRange::new(self.min_salary, self.avg_salary, self.max_salary)
    }
}

/// Competency premium as returned by the collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetencyResult {
    pub competency_premium: i64,
    pub competency_analysis_text: String,
    pub competency_grade: String,
}

/// Full narrative attached to a guidance result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalaryReasoning {
    pub summary: String,
    pub market_analysis: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competency_analysis: Option<String>,
    pub comparison: String,
    pub data_source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_salary_analysis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_salary_analysis: Option<String>,
}

impl From<BaselineReasoning> for SalaryReasoning {
    fn from(b: BaselineReasoning) -> Self {
        Self {
            summary: b.summary,
            market_analysis: b.market_analysis,
            comparison: b.comparison,
            data_source: b.data_source,
            ..Default::default()
        }
    }
}

/// Output of the adjustment pipeline.
///
/// `potential_value_gap` is only ever present with a strictly positive value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalRecommendation {
    pub min_salary: i64,
    pub avg_salary: i64,
    pub max_salary: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub potential_value_gap: Option<i64>,
    pub baseline_min_salary: i64,
    pub baseline_avg_salary: i64,
    pub baseline_max_salary: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competency_premium: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competency_grade: Option<CompetencyGrade>,
}

impl FinalRecommendation {
    pub fn range(&self) -> SalaryRange {
        SalaryRange::new(self.min_salary, self.avg_salary, self.max_salary)
    }

    /// Baseline plus premium: what the applicant is worth before policy caps.
    pub fn market_value(&self) -> i64 {
        self.baseline_avg_salary + self.competency_premium.unwrap_or(0)
    }
}

/// Formats a 만원 amount with thousands separators, e.g. `4500` → `"4,500"`.
pub fn format_amount(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_standard_untagged_band() {
        let json = r#"{"low": 4000, "middle": 4500, "high": null}"#;
        let standard: CompanyStandard = serde_json::from_str(json).unwrap();
        assert_eq!(standard.middle(), Some(4500));
        assert_eq!(standard.high(), None);
    }

    #[test]
    fn test_company_standard_untagged_description() {
        let json = r#""해당 등급은 7년차에서 9년차까지의 범위를 가집니다.""#;
        let standard: CompanyStandard = serde_json::from_str(json).unwrap();
        assert!(standard.band().is_none());
        assert_eq!(standard.middle(), None);
    }

    #[test]
    fn test_zero_middle_reads_as_unset() {
        let standard = CompanyStandard::Band(SalaryBand::new(0, 0, 0));
        assert_eq!(standard.middle(), None);
        assert_eq!(standard.high(), None);
    }

    #[test]
    fn test_sorted_range_is_ordered() {
        let range = SalaryRange::new(5000, 4000, 4500).sorted();
        assert_eq!(range, SalaryRange::new(4000, 4500, 5000));
        assert!(range.is_ordered());
    }

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(0), "0");
        assert_eq!(format_amount(950), "950");
        assert_eq!(format_amount(4500), "4,500");
        assert_eq!(format_amount(1234567), "1,234,567");
        assert_eq!(format_amount(-1200), "-1,200");
    }

    #[test]
    fn test_recommendation_skips_absent_gap() {
        let rec = FinalRecommendation {
            min_salary: 4000,
            avg_salary: 4500,
            max_salary: 5000,
            potential_value_gap: None,
            baseline_min_salary: 4000,
            baseline_avg_salary: 4500,
            baseline_max_salary: 5000,
            competency_premium: None,
            competency_grade: None,
        };
        let json = serde_json::to_value(&rec).unwrap();
        assert!(json.get("potential_value_gap").is_none());
    }
}
