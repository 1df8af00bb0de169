//! 2025 market reference tables from the three major Korean job platforms.
//!
//! Saramin is the general market, Wanted skews toward venture-backed tech
//! companies, JobKorea toward traditional established employers.
//! Rows are `(low, middle, high)` in 만원 for years 1 through 20.

use serde::Serialize;

use crate::company_table::table::{CompanySalaryTable, YEARS};
use crate::models::profile::EducationLevel;
use crate::models::salary::SalaryBand;

type YearRow = (i64, i64, i64);

const SARAMIN_MASTER: [YearRow; YEARS] = [
    (3350, 3400, 3450), (3400, 3500, 3600), (3600, 3700, 3800), (3800, 3900, 4000),
    (4100, 4250, 4300), (4300, 4400, 4500), (4600, 4700, 4900), (5000, 5200, 5400),
    (5500, 5650, 5800), (5900, 6050, 6250), (6350, 6500, 6650), (6750, 6900, 7050),
    (7100, 7250, 7400), (7300, 7450, 7600), (7450, 7600, 7750), (7600, 7750, 7900),
    (7750, 7900, 8050), (7900, 8050, 8200), (8000, 8150, 8300), (8100, 8250, 8400),
];

const SARAMIN_BACHELOR: [YearRow; YEARS] = [
    (3150, 3150, 3150), (3150, 3250, 3350), (3350, 3450, 3550), (3550, 3650, 3750),
    (3850, 4000, 4100), (4150, 4250, 4350), (4350, 4500, 4650), (4700, 4850, 5000),
    (5000, 5150, 5300), (5300, 5450, 5600), (5600, 5750, 5900), (5900, 6050, 6200),
    (6200, 6350, 6500), (6400, 6550, 6700), (6600, 6750, 6900), (6800, 6950, 7100),
    (6950, 7100, 7250), (7100, 7250, 7400), (7200, 7350, 7500), (7300, 7450, 7600),
];

const SARAMIN_ASSOCIATE: [YearRow; YEARS] = [
    (2950, 2950, 2950), (2950, 3050, 3150), (3150, 3250, 3350), (3350, 3450, 3550),
    (3600, 3700, 3800), (3850, 3950, 4050), (3850, 4150, 4450), (4200, 4500, 4800),
    (4550, 4850, 5150), (4950, 5250, 5550), (5300, 5600, 5900), (5650, 5950, 6250),
    (6050, 6350, 6650), (6350, 6650, 6950), (6550, 6850, 7150), (6650, 6950, 7250),
    (6750, 7050, 7350), (6850, 7150, 7450), (6950, 7250, 7550), (7050, 7350, 7650),
];

const SARAMIN_HIGHSCHOOL: [YearRow; YEARS] = [
    (2750, 2750, 2750), (2750, 2850, 2950), (2950, 3050, 3150), (3150, 3250, 3350),
    (3350, 3450, 3550), (3550, 3650, 3750), (3750, 3900, 4050), (4050, 4200, 4350),
    (4350, 4500, 4650), (4650, 4800, 4950), (4950, 5100, 5250), (5250, 5400, 5550),
    (5600, 5750, 5900), (5850, 6000, 6150), (6050, 6200, 6350), (6350, 6500, 6650),
    (6550, 6700, 6850), (6650, 6800, 6950), (6750, 6900, 7050), (6850, 7000, 7150),
];

const WANTED_MASTER: [YearRow; YEARS] = [
    (3500, 3600, 3700), (3650, 3750, 3850), (3850, 3950, 4050), (4100, 4200, 4300),
    (4400, 4550, 4700), (4650, 4800, 4950), (4950, 5100, 5300), (5400, 5600, 5800),
    (5900, 6100, 6300), (6350, 6550, 6750), (6800, 7000, 7200), (7200, 7400, 7600),
    (7550, 7750, 7950), (7800, 8000, 8200), (8000, 8200, 8400), (8150, 8350, 8550),
    (8300, 8500, 8700), (8450, 8650, 8850), (8550, 8750, 8950), (8650, 8850, 9050),
];

const WANTED_BACHELOR: [YearRow; YEARS] = [
    (3300, 3300, 3300), (3350, 3450, 3550), (3550, 3650, 3750), (3800, 3900, 4000),
    (4050, 4200, 4350), (4400, 4550, 4700), (4650, 4800, 5000), (5000, 5200, 5400),
    (5350, 5550, 5750), (5700, 5900, 6100), (6000, 6200, 6400), (6300, 6500, 6700),
    (6600, 6800, 7000), (6850, 7050, 7250), (7100, 7300, 7500), (7300, 7500, 7700),
    (7450, 7650, 7850), (7600, 7800, 8000), (7700, 7900, 8100), (7800, 8000, 8200),
];

const WANTED_ASSOCIATE: [YearRow; YEARS] = [
    (3100, 3100, 3100), (3100, 3200, 3300), (3300, 3400, 3500), (3500, 3600, 3700),
    (3750, 3850, 3950), (4050, 4150, 4250), (4100, 4350, 4650), (4450, 4750, 5050),
    (4800, 5100, 5400), (5200, 5500, 5800), (5550, 5850, 6150), (5900, 6200, 6500),
    (6300, 6600, 6900), (6600, 6900, 7200), (6800, 7100, 7400), (6900, 7200, 7500),
    (7000, 7300, 7600), (7100, 7400, 7700), (7200, 7500, 7800), (7300, 7600, 7900),
];

const WANTED_HIGHSCHOOL: [YearRow; YEARS] = [
    (2900, 2900, 2900), (2900, 3000, 3100), (3100, 3200, 3300), (3300, 3400, 3500),
    (3500, 3600, 3700), (3700, 3800, 3900), (3900, 4050, 4200), (4200, 4350, 4500),
    (4500, 4650, 4800), (4800, 4950, 5100), (5100, 5250, 5400), (5400, 5550, 5700),
    (5750, 5900, 6050), (6000, 6150, 6300), (6200, 6350, 6500), (6500, 6650, 6800),
    (6700, 6850, 7000), (6800, 6950, 7100), (6900, 7050, 7200), (7000, 7150, 7300),
];

const JOBKOREA_MASTER: [YearRow; YEARS] = [
    (3250, 3300, 3350), (3300, 3400, 3500), (3500, 3600, 3700), (3700, 3800, 3900),
    (4000, 4150, 4200), (4200, 4300, 4400), (4500, 4600, 4800), (4900, 5100, 5300),
    (5400, 5550, 5700), (5800, 5950, 6150), (6250, 6400, 6550), (6650, 6800, 6950),
    (7000, 7150, 7300), (7200, 7350, 7500), (7350, 7500, 7650), (7500, 7650, 7800),
    (7650, 7800, 7950), (7800, 7950, 8100), (7900, 8050, 8200), (8000, 8150, 8300),
];

const JOBKOREA_BACHELOR: [YearRow; YEARS] = [
    (3050, 3050, 3050), (3050, 3150, 3250), (3250, 3350, 3450), (3450, 3550, 3650),
    (3750, 3900, 4000), (4050, 4150, 4250), (4250, 4400, 4550), (4600, 4750, 4900),
    (4900, 5050, 5200), (5200, 5350, 5500), (5500, 5650, 5800), (5800, 5950, 6100),
    (6100, 6250, 6400), (6300, 6450, 6600), (6500, 6650, 6800), (6700, 6850, 7000),
    (6850, 7000, 7150), (7000, 7150, 7300), (7100, 7250, 7400), (7200, 7350, 7500),
];

const JOBKOREA_ASSOCIATE: [YearRow; YEARS] = [
    (2850, 2850, 2850), (2850, 2950, 3050), (3050, 3150, 3250), (3250, 3350, 3450),
    (3500, 3600, 3700), (3750, 3850, 3950), (3750, 4050, 4350), (4100, 4400, 4700),
    (4450, 4750, 5050), (4850, 5150, 5450), (5200, 5500, 5800), (5550, 5850, 6150),
    (5950, 6250, 6550), (6250, 6550, 6850), (6450, 6750, 7050), (6550, 6850, 7150),
    (6650, 6950, 7250), (6750, 7050, 7350), (6850, 7150, 7450), (6950, 7250, 7550),
];

const JOBKOREA_HIGHSCHOOL: [YearRow; YEARS] = [
    (2650, 2650, 2650), (2650, 2750, 2850), (2850, 2950, 3050), (3050, 3150, 3250),
    (3250, 3350, 3450), (3450, 3550, 3650), (3650, 3800, 3950), (3950, 4100, 4250),
    (4250, 4400, 4550), (4550, 4700, 4850), (4850, 5000, 5150), (5150, 5300, 5450),
    (5500, 5650, 5800), (5750, 5900, 6050), (5950, 6100, 6250), (6250, 6400, 6550),
    (6450, 6600, 6750), (6550, 6700, 6850), (6650, 6800, 6950), (6750, 6900, 7050),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Saramin,
    Wanted,
    JobKorea,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Saramin, Platform::Wanted, Platform::JobKorea];

    pub fn id(&self) -> &'static str {
        match self {
            Platform::Saramin => "saramin",
            Platform::Wanted => "wanted",
            Platform::JobKorea => "jobkorea",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Saramin => "사람인",
            Platform::Wanted => "원티드",
            Platform::JobKorea => "잡코리아",
        }
    }

    fn rows(&self, education: EducationLevel) -> &'static [YearRow; YEARS] {
        use EducationLevel::*;
        match (self, education) {
            (Platform::Saramin, Master) => &SARAMIN_MASTER,
            (Platform::Saramin, Bachelor) => &SARAMIN_BACHELOR,
            (Platform::Saramin, Associate) => &SARAMIN_ASSOCIATE,
            (Platform::Saramin, Highschool) => &SARAMIN_HIGHSCHOOL,
            (Platform::Wanted, Master) => &WANTED_MASTER,
            (Platform::Wanted, Bachelor) => &WANTED_BACHELOR,
            (Platform::Wanted, Associate) => &WANTED_ASSOCIATE,
            (Platform::Wanted, Highschool) => &WANTED_HIGHSCHOOL,
            (Platform::JobKorea, Master) => &JOBKOREA_MASTER,
            (Platform::JobKorea, Bachelor) => &JOBKOREA_BACHELOR,
            (Platform::JobKorea, Associate) => &JOBKOREA_ASSOCIATE,
            (Platform::JobKorea, Highschool) => &JOBKOREA_HIGHSCHOOL,
        }
    }

    /// The platform's reference data as a full company table.
    pub fn table(&self) -> CompanySalaryTable {
        let tiers = EducationLevel::ALL
            .into_iter()
            .map(|education| {
                let rows = self
                    .rows(education)
                    .iter()
                    .zip(1u32..)
                    .map(|(&(low, middle, high), year)| (year, SalaryBand::new(low, middle, high)))
                    .collect();
                (education, rows)
            })
            .collect();
        CompanySalaryTable::from_tiers(tiers)
    }
}

/// A platform's table as exposed on `GET /platforms`.
#[derive(Debug, Clone, Serialize)]
pub struct PlatformReference {
    pub id: &'static str,
    pub name: &'static str,
    pub table: CompanySalaryTable,
}

pub fn platform_references() -> Vec<PlatformReference> {
    Platform::ALL
        .into_iter()
        .map(|p| PlatformReference {
            id: p.id(),
            name: p.display_name(),
            table: p.table(),
        })
        .collect()
}

/// Table used until the company saves its own: the Saramin reference.
pub fn default_company_table() -> CompanySalaryTable {
    Platform::Saramin.table()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::company_table::table::MAX_YEAR;

    #[test]
    fn test_every_platform_table_is_complete_and_valid() {
        for platform in Platform::ALL {
            let table = platform.table();
            table.validate().unwrap();
            for education in EducationLevel::ALL {
                for year in 1..=MAX_YEAR {
                    let band = table.band(education, year);
                    let (low, mid, high) = (band.low.unwrap(), band.middle.unwrap(), band.high.unwrap());
                    assert!(low <= mid && mid <= high, "{:?} {education} {year}", platform);
                }
            }
        }
    }

    #[test]
    fn test_default_is_saramin() {
        let table = default_company_table();
        assert_eq!(
            table.band(EducationLevel::Master, 1),
            SalaryBand::new(3350, 3400, 3450)
        );
        assert_eq!(table, Platform::Saramin.table());
    }

    #[test]
    fn test_references_cover_all_platforms() {
        let refs = platform_references();
        let ids: Vec<_> = refs.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["saramin", "wanted", "jobkorea"]);
    }
}
