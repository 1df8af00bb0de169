//! Engineer level: years of experience × education tier → SW기술자 등급.
//!
//! Simplified from the national SW engineer grading table: certification
//! status is ignored, only education and tenure count.

use serde::Serialize;

use crate::company_table::table::MAX_YEAR;
use crate::models::profile::{EducationLevel, EngineerLevel};

/// First year at which each tier reaches intermediate, advanced and expert.
#[derive(Debug, Clone, Copy)]
struct LevelThresholds {
    intermediate: u32,
    advanced: u32,
    expert: u32,
}

const fn thresholds_for(education: EducationLevel) -> LevelThresholds {
    match education {
        EducationLevel::Master => LevelThresholds {
            intermediate: 4,
            advanced: 7,
            expert: 10,
        },
        EducationLevel::Bachelor => LevelThresholds {
            intermediate: 7,
            advanced: 10,
            expert: 13,
        },
        EducationLevel::Associate => LevelThresholds {
            intermediate: 10,
            advanced: 13,
            expert: 16,
        },
        EducationLevel::Highschool => LevelThresholds {
            intermediate: 13,
            advanced: 16,
            expert: 19,
        },
    }
}

/// Maps tenure and education to an engineer level. No education → beginner.
pub fn calculate_engineer_level(years: u32, education: Option<EducationLevel>) -> EngineerLevel {
    let Some(education) = education else {
        return EngineerLevel::Beginner;
    };
    let t = thresholds_for(education);
    if years >= t.expert {
        EngineerLevel::Expert
    } else if years >= t.advanced {
        EngineerLevel::Advanced
    } else if years >= t.intermediate {
        EngineerLevel::Intermediate
    } else {
        EngineerLevel::Beginner
    }
}

/// Inclusive year span of a level within the 1–20 year table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearSpan {
    pub start: u32,
    pub end: u32,
}

pub fn level_year_range(education: EducationLevel, level: EngineerLevel) -> YearSpan {
    let t = thresholds_for(education);
    let (start, end) = match level {
        EngineerLevel::Beginner => (1, t.intermediate - 1),
        EngineerLevel::Intermediate => (t.intermediate, t.advanced - 1),
        EngineerLevel::Advanced => (t.advanced, t.expert - 1),
        EngineerLevel::Expert => (t.expert, MAX_YEAR),
    };
    YearSpan { start, end }
}
