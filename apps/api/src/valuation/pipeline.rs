//! Salary adjustment pipeline: baseline valuation + competency premium +
//! negotiation signals → final bounded recommendation.
//!
//! Stages, in order:
//! 1. competency premium shifts the whole range (full market value)
//! 2. negotiation floor/ceiling from previous salary, company middle, desired salary
//! 3. conservative offer interpolated between floor and desired salary by grade weight
//! 4. fallback cap against the company band when step 3 did not run
//! 5. hard cap at the desired salary
//! 6. normalization: ordered, rounded to the nearest 10, non-negative
//!
//! Every stage takes a `Stage` snapshot by value and returns a new one.

use serde::{Deserialize, Serialize};

use crate::models::salary::{CompanyStandard, FinalRecommendation, SalaryRange};
use crate::valuation::grade::{negotiation_weight, CompetencyGrade};

/// Multiplier applied to the company middle when the band has no `high`.
pub const DEFAULT_FALLBACK_CEILING_MULTIPLIER: f64 = 1.15;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustmentPolicy {
    pub fallback_ceiling_multiplier: f64,
}

impl Default for AdjustmentPolicy {
    fn default() -> Self {
        Self {
            fallback_ceiling_multiplier: DEFAULT_FALLBACK_CEILING_MULTIPLIER,
        }
    }
}

/// Premium and grade from the competency assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetencyAdjustment {
    pub premium: i64,
    pub grade: Option<CompetencyGrade>,
}

/// User-supplied negotiation signals. Zero amounts count as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NegotiationInputs {
    pub previous_salary: Option<i64>,
    pub desired_salary: Option<i64>,
    pub company_standard: Option<CompanyStandard>,
}

impl NegotiationInputs {
    fn previous(&self) -> Option<i64> {
        self.previous_salary.filter(|v| *v > 0)
    }

    fn desired(&self) -> Option<i64> {
        self.desired_salary.filter(|v| *v > 0)
    }

    fn company_middle(&self) -> Option<i64> {
        self.company_standard.as_ref().and_then(|s| s.middle())
    }

    fn company_high(&self) -> Option<i64> {
        self.company_standard.as_ref().and_then(|s| s.high())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdjustmentInput {
    pub baseline: SalaryRange,
    pub competency: Option<CompetencyAdjustment>,
    pub negotiation: NegotiationInputs,
}

/// Immutable snapshot handed from one stage to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stage {
    pub range: SalaryRange,
    pub potential_value_gap: Option<i64>,
}

impl Stage {
    fn new(range: SalaryRange) -> Self {
        Self {
            range,
            potential_value_gap: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NegotiationBounds {
    pub floor: Option<i64>,
    pub ceiling: Option<i64>,
}

/// Everything needed to explain how the final figure was reached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NegotiationWalkthrough {
    pub baseline_avg: i64,
    pub competency_premium: i64,
    pub market_value: i64,
    pub negotiation_floor: Option<i64>,
    pub negotiation_ceiling: Option<i64>,
    pub weight: f64,
    pub weight_rationale: &'static str,
    pub strategic_offer: Option<i64>,
    pub offer_before_cap: i64,
    pub fallback_cap_applied: bool,
    pub desired_cap_applied: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjustmentOutcome {
    pub recommendation: FinalRecommendation,
    pub walkthrough: NegotiationWalkthrough,
}

/// Runs every stage and assembles the recommendation.
pub fn adjust_salary(input: &AdjustmentInput, policy: &AdjustmentPolicy) -> AdjustmentOutcome {
    let premium = input.competency.map(|c| c.premium);
    let grade = input.competency.and_then(|c| c.grade);
    let negotiation = &input.negotiation;

    let adjusted = apply_competency_premium(input.baseline, premium);
    let market_value = adjusted.avg;
    let stage = Stage::new(adjusted);

    let bounds = negotiation_bounds(
        negotiation.previous(),
        negotiation.company_middle(),
        negotiation.desired(),
    );
    let weight = negotiation_weight(grade);

    let offered = conservative_offer(
        stage,
        bounds,
        weight.weight,
        market_value,
        input.baseline.min,
    );
    let strategic_offer = offered.map(|(_, offer)| offer);

    let fallback = match offered {
        Some(_) => None,
        None => fallback_cap(
            stage,
            negotiation.company_middle(),
            negotiation.company_high(),
            market_value,
            policy.fallback_ceiling_multiplier,
        ),
    };
    let fallback_cap_applied = fallback.is_some();

    let stage = offered.map(|(next, _)| next).or(fallback).unwrap_or(stage);

    let capped = desired_cap(stage, negotiation.desired(), market_value);
    let desired_cap_applied = capped.range != stage.range;

    let range = normalize(capped.range);

    let recommendation = FinalRecommendation {
        min_salary: range.min,
        avg_salary: range.avg,
        max_salary: range.max,
        potential_value_gap: capped.potential_value_gap,
        baseline_min_salary: input.baseline.min,
        baseline_avg_salary: input.baseline.avg,
        baseline_max_salary: input.baseline.max,
        competency_premium: premium,
        competency_grade: grade,
    };

    let walkthrough = NegotiationWalkthrough {
        baseline_avg: input.baseline.avg,
        competency_premium: premium.unwrap_or(0),
        market_value,
        negotiation_floor: bounds.floor,
        negotiation_ceiling: bounds.ceiling,
        weight: weight.weight,
        weight_rationale: weight.rationale,
        strategic_offer,
        offer_before_cap: strategic_offer
            .map(|offer| offer.min(market_value))
            .unwrap_or(market_value),
        fallback_cap_applied,
        desired_cap_applied,
    };

    AdjustmentOutcome {
        recommendation,
        walkthrough,
    }
}

/// Adds the premium to all three figures. No clamping.
pub fn apply_competency_premium(baseline: SalaryRange, premium: Option<i64>) -> SalaryRange {
    match premium {
        Some(p) => baseline.shifted(p),
        None => baseline,
    }
}

/// Floor is the higher of previous salary and company middle; ceiling is
/// the desired salary.
pub fn negotiation_bounds(
    previous_salary: Option<i64>,
    company_middle: Option<i64>,
    desired_salary: Option<i64>,
) -> NegotiationBounds {
    let floor = match (previous_salary, company_middle) {
        (Some(p), Some(m)) => Some(p.max(m)),
        (p, m) => p.or(m),
    };
    NegotiationBounds {
        floor,
        ceiling: desired_salary,
    }
}

/// Positions the offer between floor and desired salary. Returns `None`
/// unless both bounds exist and the desired salary is above the floor.
///
/// The offer never exceeds `market_value`; the min is held at or above the
/// baseline min.
pub fn conservative_offer(
    stage: Stage,
    bounds: NegotiationBounds,
    weight: f64,
    market_value: i64,
    baseline_min: i64,
) -> Option<(Stage, i64)> {
    let (floor, desired) = match (bounds.floor, bounds.ceiling) {
        (Some(f), Some(d)) if d > f => (f, d),
        _ => return None,
    };

    let calculated = round_half_up(floor as f64 + (desired - floor) as f64 * weight);
    let final_offer = calculated.min(market_value);

    let adjustment = stage.range.avg - final_offer;
    let range = SalaryRange::new(
        baseline_min.max(stage.range.min - adjustment),
        final_offer,
        stage.range.max - adjustment,
    );

    Some((
        Stage {
            range,
            potential_value_gap: value_gap(market_value, final_offer),
        },
        calculated,
    ))
}

/// Caps the average at the company band's upper edge (`high`, or
/// `middle × multiplier`). Applies only when a middle exists and the
/// average is above it; returns `None` when nothing moved.
pub fn fallback_cap(
    stage: Stage,
    company_middle: Option<i64>,
    company_high: Option<i64>,
    market_value: i64,
    multiplier: f64,
) -> Option<Stage> {
    let middle = company_middle?;
    if stage.range.avg <= middle {
        return None;
    }
    let ceiling = company_high.unwrap_or_else(|| round_half_up(middle as f64 * multiplier));
    if stage.range.avg <= ceiling {
        return None;
    }

    let range = stage.range.shifted(ceiling - stage.range.avg);
    let potential_value_gap = value_gap(market_value, range.avg).or(stage.potential_value_gap);
    Some(Stage {
        range,
        potential_value_gap,
    })
}

/// The recommendation never exceeds what the applicant asked for.
pub fn desired_cap(stage: Stage, desired_salary: Option<i64>, market_value: i64) -> Stage {
    let Some(desired) = desired_salary else {
        return stage;
    };
    if stage.range.avg <= desired {
        return stage;
    }

    let adjustment = stage.range.avg - desired;
    let range = SalaryRange::new(
        (stage.range.min - adjustment).max(0),
        desired,
        stage.range.max - adjustment,
    );
    Stage {
        range,
        potential_value_gap: value_gap(market_value, desired),
    }
}

/// Orders the range around the average, rounds to the nearest 10 and keeps
/// everything non-negative.
pub fn normalize(range: SalaryRange) -> SalaryRange {
    let min = round_to_ten(range.min.min(range.avg)).max(0);
    let avg = round_to_ten(range.avg).max(min);
    let max = round_to_ten(range.max.max(range.avg)).max(avg);
    SalaryRange::new(min, avg, max)
}

/// Gap between full market value and the offer, only when positive.
fn value_gap(market_value: i64, offer: i64) -> Option<i64> {
    (market_value > offer).then(|| market_value - offer)
}

/// Half rounds toward positive infinity.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

fn round_to_ten(value: i64) -> i64 {
    (value + 5).div_euclid(10) * 10
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::salary::SalaryBand;

    fn input(baseline: (i64, i64, i64)) -> AdjustmentInput {
        AdjustmentInput {
            baseline: SalaryRange::new(baseline.0, baseline.1, baseline.2),
            competency: None,
            negotiation: NegotiationInputs::default(),
        }
    }

    fn band(low: i64, middle: i64, high: Option<i64>) -> CompanyStandard {
        CompanyStandard::Band(SalaryBand {
            low: Some(low),
            middle: Some(middle),
            high,
        })
    }

    fn run(input: &AdjustmentInput) -> AdjustmentOutcome {
        adjust_salary(input, &AdjustmentPolicy::default())
    }

    #[test]
    fn test_baseline_passes_through_unchanged() {
        let outcome = run(&input((4000, 4500, 5000)));
        let rec = outcome.recommendation;
        assert_eq!(rec.range(), SalaryRange::new(4000, 4500, 5000));
        assert_eq!(rec.potential_value_gap, None);
        assert_eq!(rec.competency_premium, None);
    }

    #[test]
    fn test_premium_shifts_whole_range() {
        let mut i = input((4000, 4500, 5000));
        i.competency = Some(CompetencyAdjustment {
            premium: 500,
            grade: None,
        });
        let outcome = run(&i);
        assert_eq!(outcome.recommendation.range(), SalaryRange::new(4500, 5000, 5500));
        assert_eq!(outcome.recommendation.potential_value_gap, None);
        assert_eq!(outcome.walkthrough.market_value, 5000);
        assert!(!outcome.walkthrough.fallback_cap_applied);
        assert!(!outcome.walkthrough.desired_cap_applied);
    }

    fn negotiation_case(grade: CompetencyGrade) -> AdjustmentInput {
        AdjustmentInput {
            baseline: SalaryRange::new(5000, 5500, 6000),
            competency: Some(CompetencyAdjustment {
                premium: 500,
                grade: Some(grade),
            }),
            negotiation: NegotiationInputs {
                previous_salary: Some(4000),
                desired_salary: Some(7000),
                company_standard: Some(band(4000, 4500, Some(5000))),
            },
        }
    }

    #[test]
    fn test_strong_grade_offer_meets_market_value() {
        let outcome = run(&negotiation_case(CompetencyGrade::Strong));
        let w = &outcome.walkthrough;
        assert_eq!(w.negotiation_floor, Some(4500));
        assert_eq!(w.strategic_offer, Some(6000));
        assert_eq!(w.offer_before_cap, 6000);
        assert_eq!(outcome.recommendation.avg_salary, 6000);
        assert_eq!(outcome.recommendation.potential_value_gap, None);
    }

    #[test]
    fn test_baseline_grade_offer_leaves_value_gap() {
        let outcome = run(&negotiation_case(CompetencyGrade::Baseline));
        assert_eq!(outcome.walkthrough.strategic_offer, Some(5125));
        assert_eq!(outcome.recommendation.potential_value_gap, Some(875));
        // 5125 rounds half up to 5130 for display
        assert_eq!(outcome.recommendation.avg_salary, 5130);
        // min held at the baseline min, max shifted by the same 875
        assert_eq!(outcome.recommendation.min_salary, 5000);
        assert_eq!(outcome.recommendation.max_salary, 5630);
    }

    #[test]
    fn test_conservative_offer_stage_sets_exact_avg() {
        let stage = Stage::new(SalaryRange::new(5500, 6000, 6500));
        let bounds = negotiation_bounds(Some(4000), Some(4500), Some(7000));
        let (next, offer) = conservative_offer(stage, bounds, 0.25, 6000, 5000).unwrap();
        assert_eq!(offer, 5125);
        assert_eq!(next.range.avg, 5125);
        assert_eq!(next.potential_value_gap, Some(875));
    }

    #[test]
    fn test_desired_cap_recomputes_gap() {
        let stage = Stage {
            range: SalaryRange::new(5000, 5125, 5625),
            potential_value_gap: Some(875),
        };
        let next = desired_cap(stage, Some(5000), 6000);
        assert_eq!(next.range, SalaryRange::new(4875, 5000, 5500));
        assert_eq!(next.potential_value_gap, Some(1000));
    }

    #[test]
    fn test_desired_cap_clears_gap_when_market_not_above() {
        let stage = Stage {
            range: SalaryRange::new(4500, 5000, 5500),
            potential_value_gap: Some(300),
        };
        let next = desired_cap(stage, Some(4800), 4800);
        assert_eq!(next.range.avg, 4800);
        assert_eq!(next.potential_value_gap, None);
    }

    #[test]
    fn test_desired_cap_floors_min_at_zero() {
        let stage = Stage::new(SalaryRange::new(100, 2000, 2500));
        let next = desired_cap(stage, Some(1000), 2000);
        assert_eq!(next.range.min, 0);
    }

    #[test]
    fn test_desired_cap_is_fixed_point_at_avg() {
        let stage = Stage {
            range: SalaryRange::new(4000, 4500, 5000),
            potential_value_gap: Some(200),
        };
        assert_eq!(desired_cap(stage, Some(4500), 4700), stage);
    }

    #[test]
    fn test_fallback_cap_uses_multiplier_without_high() {
        let mut i = input((5000, 6000, 7000));
        i.negotiation.company_standard = Some(band(4500, 5000, None));
        let outcome = run(&i);
        // ceiling = 5000 × 1.15 = 5750
        assert!(outcome.walkthrough.fallback_cap_applied);
        assert_eq!(outcome.recommendation.range(), SalaryRange::new(4750, 5750, 6750));
        assert_eq!(outcome.recommendation.potential_value_gap, Some(250));
    }

    #[test]
    fn test_fallback_cap_prefers_company_high() {
        let mut i = input((5000, 6000, 7000));
        i.negotiation.company_standard = Some(band(4500, 5000, Some(5500)));
        let outcome = run(&i);
        assert_eq!(outcome.recommendation.avg_salary, 5500);
        assert_eq!(outcome.recommendation.potential_value_gap, Some(500));
    }

    #[test]
    fn test_fallback_cap_multiplier_is_overridable() {
        let mut i = input((5000, 6000, 7000));
        i.negotiation.company_standard = Some(band(4500, 5000, None));
        let policy = AdjustmentPolicy {
            fallback_ceiling_multiplier: 1.1,
        };
        let outcome = adjust_salary(&i, &policy);
        assert_eq!(outcome.recommendation.avg_salary, 5500);
    }

    #[test]
    fn test_fallback_cap_skipped_inside_band() {
        let mut i = input((5000, 5600, 6000));
        i.negotiation.company_standard = Some(band(4500, 5000, None));
        let outcome = run(&i);
        assert!(!outcome.walkthrough.fallback_cap_applied);
        assert_eq!(outcome.recommendation.avg_salary, 5600);
    }

    #[test]
    fn test_description_standard_has_no_middle() {
        let mut i = input((5000, 6000, 7000));
        i.negotiation.company_standard = Some(CompanyStandard::Description(
            "해당 등급은 7년차에서 9년차까지의 범위를 가집니다.".to_string(),
        ));
        let outcome = run(&i);
        assert!(!outcome.walkthrough.fallback_cap_applied);
        assert_eq!(outcome.recommendation.avg_salary, 6000);
    }

    #[test]
    fn test_desired_below_floor_skips_interpolation() {
        let mut i = input((5000, 6000, 7000));
        i.negotiation.previous_salary = Some(5000);
        i.negotiation.desired_salary = Some(4800);
        let outcome = run(&i);
        assert_eq!(outcome.walkthrough.strategic_offer, None);
        assert!(outcome.walkthrough.desired_cap_applied);
        assert_eq!(outcome.recommendation.avg_salary, 4800);
        assert_eq!(outcome.recommendation.potential_value_gap, Some(1200));
    }

    #[test]
    fn test_zero_amounts_are_absent() {
        let mut i = input((4000, 4500, 5000));
        i.negotiation.previous_salary = Some(0);
        i.negotiation.desired_salary = Some(0);
        let outcome = run(&i);
        assert_eq!(outcome.walkthrough.negotiation_floor, None);
        assert_eq!(outcome.walkthrough.negotiation_ceiling, None);
        assert_eq!(outcome.recommendation.avg_salary, 4500);
    }

    #[test]
    fn test_baseline_min_clamp_is_reordered_by_normalize() {
        // floor far below the baseline: the clamped min lands above the offer
        // and normalization pulls it back to the average
        let i = AdjustmentInput {
            baseline: SalaryRange::new(5000, 6000, 7000),
            competency: Some(CompetencyAdjustment {
                premium: 0,
                grade: Some(CompetencyGrade::NeedsReview),
            }),
            negotiation: NegotiationInputs {
                previous_salary: Some(3000),
                desired_salary: Some(4000),
                company_standard: None,
            },
        };
        let rec = run(&i).recommendation;
        assert_eq!(rec.avg_salary, 3100);
        assert_eq!(rec.min_salary, 3100);
        assert!(rec.range().is_ordered());
    }

    #[test]
    fn test_normalize_rounds_half_up() {
        assert_eq!(normalize(SalaryRange::new(4994, 5125, 5625)), SalaryRange::new(4990, 5130, 5630));
        assert_eq!(normalize(SalaryRange::new(-15, 5, 14)), SalaryRange::new(0, 10, 10));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for min in (-50..3000).step_by(37) {
            for spread in [0, 3, 55, 499] {
                let avg = min + spread;
                let range = SalaryRange::new(min, avg, avg + spread);
                let once = normalize(range);
                assert_eq!(normalize(once), once);
            }
        }
    }

    #[test]
    fn test_normalize_orders_unordered_input() {
        let range = normalize(SalaryRange::new(6000, 5000, 4000));
        assert_eq!(range, SalaryRange::new(5000, 5000, 5000));
    }

    const GRADES: [Option<CompetencyGrade>; 5] = [
        None,
        Some(CompetencyGrade::KeyTalent),
        Some(CompetencyGrade::Strong),
        Some(CompetencyGrade::Baseline),
        Some(CompetencyGrade::NeedsReview),
    ];

    fn standards() -> Vec<Option<CompanyStandard>> {
        vec![
            None,
            Some(band(3800, 4200, None)),
            Some(band(4500, 5000, Some(5600))),
            Some(CompanyStandard::Description("설명".to_string())),
        ]
    }

    /// Property: ordered, non-negative output and strictly positive gap for
    /// every combination of present/absent inputs.
    #[test]
    fn prop_output_invariants_hold() {
        let amounts = [None, Some(0), Some(3500), Some(4800), Some(6500)];
        for premium in [None, Some(-6000), Some(-400), Some(0), Some(350), Some(1500)] {
            for grade in GRADES {
                for previous in amounts {
                    for desired in amounts {
                        for standard in standards() {
                            let i = AdjustmentInput {
                                baseline: SalaryRange::new(4000, 4600, 5300),
                                competency: premium.map(|p| CompetencyAdjustment {
                                    premium: p,
                                    grade,
                                }),
                                negotiation: NegotiationInputs {
                                    previous_salary: previous,
                                    desired_salary: desired,
                                    company_standard: standard,
                                },
                            };
                            let rec = run(&i).recommendation;
                            assert!(rec.range().is_ordered(), "{i:?} → {rec:?}");
                            assert!(rec.min_salary >= 0, "{i:?} → {rec:?}");
                            if let Some(gap) = rec.potential_value_gap {
                                assert!(gap > 0, "{i:?} → {rec:?}");
                            }
                            if let Some(d) = desired.filter(|d| *d > 0) {
                                assert!(rec.avg_salary <= round_to_ten(d), "{i:?} → {rec:?}");
                            }
                        }
                    }
                }
            }
        }
    }

    /// Property: raising the premium never lowers the final average, and the
    /// desired-salary cap always dominates.
    #[test]
    fn prop_premium_is_monotonic_under_desired_cap() {
        for grade in GRADES {
            for standard in standards() {
                let mut previous_avg = i64::MIN;
                for premium in (-1000..=3000).step_by(50) {
                    let i = AdjustmentInput {
                        baseline: SalaryRange::new(4000, 4500, 5000),
                        competency: Some(CompetencyAdjustment { premium, grade }),
                        negotiation: NegotiationInputs {
                            previous_salary: Some(4200),
                            desired_salary: Some(5500),
                            company_standard: standard.clone(),
                        },
                    };
                    let avg = run(&i).recommendation.avg_salary;
                    assert!(avg >= previous_avg, "premium {premium}: {avg} < {previous_avg}");
                    assert!(avg <= 5500);
                    previous_avg = avg;
                }
            }
        }
    }

    /// Feeding the recommendation back as the desired salary changes nothing
    /// when no negotiation floor exists.
    #[test]
    fn prop_recommendation_is_fixed_point_as_desired_salary() {
        for premium in [-300, 0, 250, 900] {
            for desired in [None, Some(4100), Some(4700), Some(9000)] {
                let mut i = input((4000, 4500, 5000));
                i.competency = Some(CompetencyAdjustment {
                    premium,
                    grade: None,
                });
                i.negotiation.desired_salary = desired;
                let first = run(&i).recommendation;

                i.negotiation.desired_salary = Some(first.avg_salary);
                let second = run(&i).recommendation;
                assert!(second.avg_salary >= first.avg_salary);
            }
        }
    }
}
