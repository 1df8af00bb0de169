//! Rule-based generation of a full 20-year tier from a starting salary and
//! an annual raise.

use serde::{Deserialize, Serialize};

use crate::company_table::table::{TableError, YearlySalaryTable, MAX_YEAR};
use crate::models::salary::SalaryBand;

/// Percentages are whole numbers, e.g. `increase_rate: 5.0` is 5%.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulkEditParams {
    /// Year-1 middle, in 만원.
    pub base_salary: f64,
    pub increase_rate: f64,
    pub low_spread: f64,
    pub high_spread: f64,
}

impl Default for BulkEditParams {
    fn default() -> Self {
        Self {
            base_salary: 3000.0,
            increase_rate: 5.0,
            low_spread: 10.0,
            high_spread: 10.0,
        }
    }
}

impl BulkEditParams {
    pub fn validate(&self) -> Result<(), TableError> {
        let fields = [
            ("base_salary", self.base_salary),
            ("increase_rate", self.increase_rate),
            ("low_spread", self.low_spread),
            ("high_spread", self.high_spread),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(TableError::InvalidBulkParameters(format!(
                    "{name} must be a non-negative number"
                )));
            }
        }
        if self.low_spread > 100.0 {
            return Err(TableError::InvalidBulkParameters(
                "low_spread cannot exceed 100".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builds years 1..=20 with `middle` compounding by `increase_rate` and
/// low/high spread around it. Every figure is rounded to the nearest 10.
pub fn bulk_generate(params: &BulkEditParams) -> Result<YearlySalaryTable, TableError> {
    params.validate()?;

    let growth = 1.0 + params.increase_rate / 100.0;
    let low_factor = 1.0 - params.low_spread / 100.0;
    let high_factor = 1.0 + params.high_spread / 100.0;

    let table = (1..=MAX_YEAR)
        .map(|year| {
            let middle = params.base_salary * growth.powi(year as i32 - 1);
            let band = SalaryBand::new(
                round_ten(middle * low_factor),
                round_ten(middle),
                round_ten(middle * high_factor),
            );
            (year, band)
        })
        .collect();
    Ok(table)
}

fn round_ten(value: f64) -> i64 {
    ((value / 10.0).round() * 10.0) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_first_years() {
        let table = bulk_generate(&BulkEditParams::default()).unwrap();
        assert_eq!(table.len(), 20);
        assert_eq!(table[&1], SalaryBand::new(2700, 3000, 3300));
        // 3000 * 1.05 = 3150
        assert_eq!(table[&2], SalaryBand::new(2840, 3150, 3470));
    }

    #[test]
    fn test_zero_rate_is_flat() {
        let params = BulkEditParams {
            base_salary: 4000.0,
            increase_rate: 0.0,
            low_spread: 0.0,
            high_spread: 0.0,
        };
        let table = bulk_generate(&params).unwrap();
        assert!(table.values().all(|b| *b == SalaryBand::new(4000, 4000, 4000)));
    }

    #[test]
    fn test_middle_never_decreases() {
        let table = bulk_generate(&BulkEditParams::default()).unwrap();
        let middles: Vec<_> = table.values().map(|b| b.middle.unwrap()).collect();
        assert!(middles.windows(2).all(|w| w[0] <= w[1]));
        assert!(table.values().all(|b| b.low <= b.middle && b.middle <= b.high));
    }

    #[test]
    fn test_rejects_negative_and_oversized_spread() {
        let negative = BulkEditParams {
            increase_rate: -1.0,
            ..Default::default()
        };
        assert!(bulk_generate(&negative).is_err());

        let oversized = BulkEditParams {
            low_spread: 120.0,
            ..Default::default()
        };
        assert!(bulk_generate(&oversized).is_err());
    }

    #[test]
    fn test_full_low_spread_floors_low_at_zero() {
        let params = BulkEditParams {
            low_spread: 100.0,
            ..Default::default()
        };
        let table = bulk_generate(&params).unwrap();
        assert_eq!(table[&1].low, Some(0));
    }
}
