//! Company salary table: one 20-year band table per education tier.
//!
//! The table is the company's internal pay standard: it feeds the
//! negotiation floor (middle) and the fallback cap (high) in the
//! adjustment pipeline.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::profile::{EducationLevel, EngineerLevel};
use crate::models::salary::{format_amount, SalaryBand};
use crate::valuation::engineer_level::level_year_range;

/// Last tenure year covered by the table. Years run 1..=MAX_YEAR.
pub const MAX_YEAR: u32 = 20;
pub const YEARS: usize = MAX_YEAR as usize;

/// Year → band for a single education tier.
pub type YearlySalaryTable = BTreeMap<u32, SalaryBand>;

#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    #[error("unknown education tier: {0}")]
    UnknownEducation(String),

    #[error("year {0} is outside 1..=20")]
    YearOutOfRange(u32),

    #[error("negative amount at {education} year {year}")]
    NegativeAmount { education: EducationLevel, year: u32 },

    #[error("invalid bulk parameters: {0}")]
    InvalidBulkParameters(String),
}

/// Which field of a band an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BandField {
    Low,
    Middle,
    High,
}

/// The raise a year's `high` represents over the previous year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearIncrease {
    pub year: u32,
    pub amount: i64,
    /// Percent over the previous year's base; absent when the base is zero.
    pub rate_percent: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanySalaryTable {
    tiers: BTreeMap<EducationLevel, YearlySalaryTable>,
}

impl CompanySalaryTable {
    pub fn from_tiers(tiers: BTreeMap<EducationLevel, YearlySalaryTable>) -> Self {
        Self { tiers }
    }

    /// Band for a year, all-null when the cell was never set.
    pub fn band(&self, education: EducationLevel, year: u32) -> SalaryBand {
        self.tiers
            .get(&education)
            .and_then(|t| t.get(&year))
            .copied()
            .unwrap_or_default()
    }

    /// All 20 years for a tier, filling unset cells with empty bands.
    pub fn tier(&self, education: EducationLevel) -> YearlySalaryTable {
        (1..=MAX_YEAR)
            .map(|year| (year, self.band(education, year)))
            .collect()
    }

    /// Auto-mode company standard: tenure clamped into the table's range.
    pub fn lookup(&self, education: EducationLevel, years: u32) -> Option<SalaryBand> {
        let year = years.clamp(1, MAX_YEAR);
        Some(self.band(education, year)).filter(|b| !b.is_empty())
    }

    pub fn set_band(
        &mut self,
        education: EducationLevel,
        year: u32,
        band: SalaryBand,
    ) -> Result<(), TableError> {
        check_year(year)?;
        check_band(education, year, &band)?;
        self.tiers.entry(education).or_default().insert(year, band);
        Ok(())
    }

    /// Replaces an entire tier. Every cell is validated before anything changes.
    pub fn replace_tier(
        &mut self,
        education: EducationLevel,
        rows: YearlySalaryTable,
    ) -> Result<(), TableError> {
        for (year, band) in &rows {
            check_year(*year)?;
            check_band(education, *year, band)?;
        }
        self.tiers.insert(education, rows);
        Ok(())
    }

    /// Checks every cell of the whole table.
    pub fn validate(&self) -> Result<(), TableError> {
        for (education, rows) in &self.tiers {
            for (year, band) in rows {
                check_year(*year)?;
                check_band(*education, *year, band)?;
            }
        }
        Ok(())
    }

    /// Edits one field of one cell and returns the resulting band.
    ///
    /// Moving `high` drags `middle` and `low` by the same delta (floored at
    /// zero) so the band keeps its shape. Only applies when both the old and
    /// the new `high` are set.
    pub fn update_cell(
        &mut self,
        education: EducationLevel,
        year: u32,
        field: BandField,
        value: Option<i64>,
    ) -> Result<SalaryBand, TableError> {
        check_year(year)?;
        if value.is_some_and(|v| v < 0) {
            return Err(TableError::NegativeAmount { education, year });
        }

        let mut band = self.band(education, year);
        match field {
            BandField::Low => band.low = value,
            BandField::Middle => band.middle = value,
            BandField::High => {
                if let (Some(new_high), Some(old_high)) = (value, band.high) {
                    let delta = new_high - old_high;
                    band.middle = band.middle.map(|m| (m + delta).max(0));
                    band.low = band.low.map(|l| (l + delta).max(0));
                }
                band.high = value;
            }
        }

        self.tiers.entry(education).or_default().insert(year, band);
        Ok(band)
    }

    /// Manual-mode company standard: a sentence describing the level's pay
    /// span, from its first year to its last. `None` when either end is unset.
    ///
    /// The start figure is year 1's `middle` (year 1 is a single-point band)
    /// or otherwise the start year's `high`.
    pub fn describe_level(&self, education: EducationLevel, level: EngineerLevel) -> Option<String> {
        let span = level_year_range(education, level);
        let start_band = self.band(education, span.start);
        let start_value = if span.start == 1 {
            start_band.middle
        } else {
            start_band.high
        }?;
        let end_value = self.band(education, span.end).high?;

        Some(format!(
            "해당 등급({})은 {}년차(약 {}만원)에서 {}년차(약 {}만원)까지의 범위를 가집니다.",
            level.display_name(),
            span.start,
            format_amount(start_value),
            span.end,
            format_amount(end_value),
        ))
    }

    /// Raise of `year`'s `high` over the previous year's base: year 1's
    /// `middle` for year 2, the previous `high` from year 3 on.
    pub fn increase_over_previous(&self, education: EducationLevel, year: u32) -> Option<YearIncrease> {
        if !(2..=MAX_YEAR).contains(&year) {
            return None;
        }
        let current = self.band(education, year).high?;
        let previous = self.band(education, year - 1);
        let base = if year == 2 {
            previous.middle
        } else {
            previous.high
        }?;

        let amount = current - base;
        let rate_percent = (base > 0).then(|| amount as f64 / base as f64 * 100.0);
        Some(YearIncrease {
            year,
            amount,
            rate_percent,
        })
    }

    pub fn increases(&self, education: EducationLevel) -> Vec<YearIncrease> {
        (2..=MAX_YEAR)
            .filter_map(|year| self.increase_over_previous(education, year))
            .collect()
    }

    /// Iterates every set cell, for persistence.
    pub fn cells(&self) -> impl Iterator<Item = (EducationLevel, u32, SalaryBand)> + '_ {
        self.tiers
            .iter()
            .flat_map(|(edu, rows)| rows.iter().map(move |(year, band)| (*edu, *year, *band)))
    }
}

fn check_year(year: u32) -> Result<(), TableError> {
    if (1..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(TableError::YearOutOfRange(year))
    }
}

fn check_band(education: EducationLevel, year: u32, band: &SalaryBand) -> Result<(), TableError> {
    let negative = [band.low, band.middle, band.high]
        .iter()
        .flatten()
        .any(|v| *v < 0);
    if negative {
        Err(TableError::NegativeAmount { education, year })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CompanySalaryTable {
        let mut table = CompanySalaryTable::default();
        let b = EducationLevel::Bachelor;
        table.set_band(b, 1, SalaryBand::new(3150, 3150, 3150)).unwrap();
        table.set_band(b, 2, SalaryBand::new(3150, 3250, 3350)).unwrap();
        table.set_band(b, 3, SalaryBand::new(3350, 3450, 3550)).unwrap();
        table.set_band(b, 6, SalaryBand::new(4150, 4250, 4350)).unwrap();
        table.set_band(b, 7, SalaryBand::new(4350, 4500, 4650)).unwrap();
        table.set_band(b, 9, SalaryBand::new(5000, 5150, 5300)).unwrap();
        table
    }

    #[test]
    fn test_lookup_clamps_years() {
        let table = sample();
        let b = EducationLevel::Bachelor;
        assert_eq!(table.lookup(b, 0), Some(SalaryBand::new(3150, 3150, 3150)));
        assert_eq!(table.lookup(b, 3).unwrap().middle, Some(3450));
        // year 25 clamps to 20, which is unset
        assert_eq!(table.lookup(b, 25), None);
    }

    #[test]
    fn test_tier_fills_all_years() {
        let tier = sample().tier(EducationLevel::Bachelor);
        assert_eq!(tier.len(), YEARS);
        assert!(tier[&20].is_empty());
    }

    #[test]
    fn test_update_high_drags_band() {
        let mut table = sample();
        let band = table
            .update_cell(EducationLevel::Bachelor, 2, BandField::High, Some(3450))
            .unwrap();
        assert_eq!(band, SalaryBand::new(3250, 3350, 3450));
    }

    #[test]
    fn test_update_high_floors_at_zero() {
        let mut table = sample();
        let band = table
            .update_cell(EducationLevel::Bachelor, 2, BandField::High, Some(100))
            .unwrap();
        assert_eq!(band.high, Some(100));
        assert_eq!(band.middle, Some(0));
        assert_eq!(band.low, Some(0));
    }

    #[test]
    fn test_update_high_on_empty_cell_sets_only_high() {
        let mut table = sample();
        let band = table
            .update_cell(EducationLevel::Master, 5, BandField::High, Some(4000))
            .unwrap();
        assert_eq!(band.high, Some(4000));
        assert_eq!(band.middle, None);
    }

    #[test]
    fn test_clearing_high_leaves_rest() {
        let mut table = sample();
        let band = table
            .update_cell(EducationLevel::Bachelor, 2, BandField::High, None)
            .unwrap();
        assert_eq!(band.high, None);
        assert_eq!(band.middle, Some(3250));
    }

    #[test]
    fn test_update_middle_is_independent() {
        let mut table = sample();
        let band = table
            .update_cell(EducationLevel::Bachelor, 2, BandField::Middle, Some(3300))
            .unwrap();
        assert_eq!(band, SalaryBand::new(3150, 3300, 3350));
    }

    #[test]
    fn test_update_rejects_bad_input() {
        let mut table = sample();
        assert_eq!(
            table.update_cell(EducationLevel::Bachelor, 21, BandField::Low, Some(1)),
            Err(TableError::YearOutOfRange(21))
        );
        assert!(matches!(
            table.update_cell(EducationLevel::Bachelor, 2, BandField::Low, Some(-1)),
            Err(TableError::NegativeAmount { .. })
        ));
    }

    #[test]
    fn test_describe_beginner_uses_year_one_middle() {
        let table = sample();
        let text = table
            .describe_level(EducationLevel::Bachelor, EngineerLevel::Beginner)
            .unwrap();
        assert_eq!(
            text,
            "해당 등급(초급 기술자)은 1년차(약 3,150만원)에서 6년차(약 4,350만원)까지의 범위를 가집니다."
        );
    }

    #[test]
    fn test_describe_intermediate_uses_start_high() {
        let table = sample();
        let text = table
            .describe_level(EducationLevel::Bachelor, EngineerLevel::Intermediate)
            .unwrap();
        assert!(text.contains("7년차(약 4,650만원)"));
        assert!(text.contains("9년차(약 5,300만원)"));
    }

    #[test]
    fn test_describe_missing_end_is_none() {
        let table = sample();
        assert!(table
            .describe_level(EducationLevel::Bachelor, EngineerLevel::Expert)
            .is_none());
    }

    #[test]
    fn test_increase_year_two_uses_middle_base() {
        let table = sample();
        let inc = table.increase_over_previous(EducationLevel::Bachelor, 2).unwrap();
        assert_eq!(inc.amount, 200);
        let rate = inc.rate_percent.unwrap();
        assert!((rate - 200.0 / 3150.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_increase_year_three_uses_high_base() {
        let table = sample();
        let inc = table.increase_over_previous(EducationLevel::Bachelor, 3).unwrap();
        assert_eq!(inc.amount, 3550 - 3350);
    }

    #[test]
    fn test_increase_absent_for_year_one_and_gaps() {
        let table = sample();
        assert!(table.increase_over_previous(EducationLevel::Bachelor, 1).is_none());
        // year 4 has no data
        assert!(table.increase_over_previous(EducationLevel::Bachelor, 4).is_none());
        assert!(table.increase_over_previous(EducationLevel::Bachelor, 5).is_none());
    }

    #[test]
    fn test_increase_rate_absent_for_zero_base() {
        let mut table = CompanySalaryTable::default();
        let h = EducationLevel::Highschool;
        table.set_band(h, 2, SalaryBand::new(0, 0, 0)).unwrap();
        table.set_band(h, 3, SalaryBand::new(100, 100, 100)).unwrap();
        let inc = table.increase_over_previous(h, 3).unwrap();
        assert_eq!(inc.amount, 100);
        assert_eq!(inc.rate_percent, None);
    }

    #[test]
    fn test_json_shape_is_education_then_year() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["bachelor"]["2"]["middle"], 3250);
        let back: CompanySalaryTable = serde_json::from_value(json).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn test_validate_rejects_out_of_range_year() {
        let json = serde_json::json!({ "master": { "0": { "low": 1, "middle": 2, "high": 3 } } });
        let table: CompanySalaryTable = serde_json::from_value(json).unwrap();
        assert_eq!(table.validate(), Err(TableError::YearOutOfRange(0)));
    }
}
