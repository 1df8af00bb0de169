//! Competency grade: rubric mean → one of four grades, and grade → the
//! interpolation weight used when positioning an offer between the
//! negotiation floor and the desired salary.

use serde::{Deserialize, Serialize};

/// Overall competency grade. Serialized as its Korean label, which is also
/// the form the collaborator echoes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompetencyGrade {
    #[serde(rename = "핵심 인재")]
    KeyTalent,
    #[serde(rename = "우수 역량 보유")]
    Strong,
    #[serde(rename = "기본 역량 보유")]
    Baseline,
    #[serde(rename = "추가 검토 필요")]
    NeedsReview,
}

impl CompetencyGrade {
    pub const ALL: [CompetencyGrade; 4] = [
        CompetencyGrade::KeyTalent,
        CompetencyGrade::Strong,
        CompetencyGrade::Baseline,
        CompetencyGrade::NeedsReview,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CompetencyGrade::KeyTalent => "핵심 인재",
            CompetencyGrade::Strong => "우수 역량 보유",
            CompetencyGrade::Baseline => "기본 역량 보유",
            CompetencyGrade::NeedsReview => "추가 검토 필요",
        }
    }

    /// Parses a label. Surrounding whitespace and quotes are tolerated since
    /// the label usually comes back from the collaborator.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim().trim_matches(|c| c == '\'' || c == '"').trim();
        Self::ALL.into_iter().find(|g| g.label() == label)
    }

    /// Grade for a rubric mean.
    pub fn for_average(average: f64) -> Self {
        if average < 2.0 {
            CompetencyGrade::NeedsReview
        } else if average <= 2.7 {
            CompetencyGrade::Baseline
        } else if average <= 3.5 {
            CompetencyGrade::Strong
        } else {
            CompetencyGrade::KeyTalent
        }
    }
}

/// Mean rubric score plus the grade it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompetencySummary {
    pub average_score: f64,
    pub grade: CompetencyGrade,
}

/// Classifies a set of 1–4 rubric scores. Returns `None` when there are no
/// scores; the pipeline then falls back to the default weight.
pub fn classify_scores(scores: &[u8]) -> Option<CompetencySummary> {
    if scores.is_empty() {
        return None;
    }
    let total: u32 = scores.iter().map(|&s| u32::from(s)).sum();
    let average_score = f64::from(total) / scores.len() as f64;
    Some(CompetencySummary {
        average_score,
        grade: CompetencyGrade::for_average(average_score),
    })
}

/// Interpolation weight and the explanation shown in the negotiation walkthrough.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NegotiationWeight {
    pub weight: f64,
    pub rationale: &'static str,
}

const GRADE_WEIGHTS: [(CompetencyGrade, NegotiationWeight); 4] = [
    (
        CompetencyGrade::KeyTalent,
        NegotiationWeight {
            weight: 0.8,
            rationale: "최고 수준의 역량을 고려하여 희망 연봉에 가깝게 책정",
        },
    ),
    (
        CompetencyGrade::Strong,
        NegotiationWeight {
            weight: 0.6,
            rationale: "우수한 역량을 고려하여 합리적인 수준으로 책정",
        },
    ),
    (
        CompetencyGrade::Baseline,
        NegotiationWeight {
            weight: 0.25,
            rationale: "기본 역량 보유로 판단, 보수적인 수준으로 책정",
        },
    ),
    (
        CompetencyGrade::NeedsReview,
        NegotiationWeight {
            weight: 0.1,
            rationale: "역량 보완이 필요하므로, 시작점에 가깝게 책정",
        },
    ),
];

/// Used when no grade is available. Same weight as `Strong`.
const DEFAULT_WEIGHT: NegotiationWeight = NegotiationWeight {
    weight: 0.6,
    rationale: "역량 등급 미입력으로, '우수' 등급 기준으로 책정",
};

pub fn negotiation_weight(grade: Option<CompetencyGrade>) -> NegotiationWeight {
    grade
        .and_then(|g| GRADE_WEIGHTS.iter().find(|(k, _)| *k == g).map(|(_, w)| *w))
        .unwrap_or(DEFAULT_WEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(CompetencyGrade::for_average(1.0), CompetencyGrade::NeedsReview);
        assert_eq!(CompetencyGrade::for_average(1.99), CompetencyGrade::NeedsReview);
        assert_eq!(CompetencyGrade::for_average(2.0), CompetencyGrade::Baseline);
        assert_eq!(CompetencyGrade::for_average(2.7), CompetencyGrade::Baseline);
        assert_eq!(CompetencyGrade::for_average(2.8), CompetencyGrade::Strong);
        assert_eq!(CompetencyGrade::for_average(3.5), CompetencyGrade::Strong);
        assert_eq!(CompetencyGrade::for_average(3.6), CompetencyGrade::KeyTalent);
        assert_eq!(CompetencyGrade::for_average(4.0), CompetencyGrade::KeyTalent);
    }

    #[test]
    fn test_classify_five_scores() {
        // 3+3+3+2+3 = 14 / 5 = 2.8
        let summary = classify_scores(&[3, 3, 3, 2, 3]).unwrap();
        assert!((summary.average_score - 2.8).abs() < 1e-9);
        assert_eq!(summary.grade, CompetencyGrade::Strong);
    }

    #[test]
    fn test_classify_exact_three_point_five_is_strong() {
        let summary = classify_scores(&[4, 4, 3, 3]).unwrap();
        assert_eq!(summary.grade, CompetencyGrade::Strong);
    }

    #[test]
    fn test_classify_empty_is_none() {
        assert!(classify_scores(&[]).is_none());
    }

    #[test]
    fn test_weights_table() {
        assert_eq!(negotiation_weight(Some(CompetencyGrade::KeyTalent)).weight, 0.8);
        assert_eq!(negotiation_weight(Some(CompetencyGrade::Strong)).weight, 0.6);
        assert_eq!(negotiation_weight(Some(CompetencyGrade::Baseline)).weight, 0.25);
        assert_eq!(negotiation_weight(Some(CompetencyGrade::NeedsReview)).weight, 0.1);
        assert_eq!(negotiation_weight(None).weight, 0.6);
    }

    #[test]
    fn test_absent_grade_has_distinct_rationale() {
        assert_ne!(
            negotiation_weight(None).rationale,
            negotiation_weight(Some(CompetencyGrade::Strong)).rationale
        );
    }

    #[test]
    fn test_from_label_tolerates_quotes() {
        assert_eq!(
            CompetencyGrade::from_label(" '핵심 인재' "),
            Some(CompetencyGrade::KeyTalent)
        );
        assert_eq!(CompetencyGrade::from_label("전설"), None);
    }

    #[test]
    fn test_serde_uses_korean_label() {
        let json = serde_json::to_string(&CompetencyGrade::Baseline).unwrap();
        assert_eq!(json, r#""기본 역량 보유""#);
        let back: CompetencyGrade = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CompetencyGrade::Baseline);
    }
}
