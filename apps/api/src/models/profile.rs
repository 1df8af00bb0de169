use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Highest completed education tier. Drives both the engineer-level
/// thresholds and which company salary table applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    Highschool,
    Associate,
    Bachelor,
    Master,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 4] = [
        EducationLevel::Highschool,
        EducationLevel::Associate,
        EducationLevel::Bachelor,
        EducationLevel::Master,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EducationLevel::Highschool => "highschool",
            EducationLevel::Associate => "associate",
            EducationLevel::Bachelor => "bachelor",
            EducationLevel::Master => "master",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EducationLevel::Highschool => "고졸",
            EducationLevel::Associate => "전문학사",
            EducationLevel::Bachelor => "학사",
            EducationLevel::Master => "석사",
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EducationLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EducationLevel::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| format!("unknown education level '{s}'"))
    }
}

/// Korean SW engineer grade (SW기술자 등급).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineerLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl EngineerLevel {
    pub const ALL: [EngineerLevel; 4] = [
        EngineerLevel::Beginner,
        EngineerLevel::Intermediate,
        EngineerLevel::Advanced,
        EngineerLevel::Expert,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            EngineerLevel::Beginner => "초급 기술자",
            EngineerLevel::Intermediate => "중급 기술자",
            EngineerLevel::Advanced => "고급 기술자",
            EngineerLevel::Expert => "특급 기술자",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgencySize {
    Small,
    Medium,
    #[default]
    Large,
}

impl AgencySize {
    pub const ALL: [AgencySize; 3] = [AgencySize::Small, AgencySize::Medium, AgencySize::Large];

    pub fn display_name(&self) -> &'static str {
        match self {
            AgencySize::Small => "소규모",
            AgencySize::Medium => "중규모",
            AgencySize::Large => "대규모",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AgencySize::Small => "1-20명",
            AgencySize::Medium => "21-100명",
            AgencySize::Large => "101명 이상",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    #[default]
    Seoul,
    Other,
}

impl Location {
    pub const ALL: [Location; 2] = [Location::Seoul, Location::Other];

    pub fn display_name(&self) -> &'static str {
        match self {
            Location::Seoul => "수도권",
            Location::Other => "기타",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Location::Seoul => "서울/경기/인천",
            Location::Other => "수도권 외 지역",
        }
    }
}

/// A selectable option as presented to the form.
#[derive(Debug, Clone, Serialize)]
pub struct SelectOption {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

pub fn education_options() -> Vec<SelectOption> {
    EducationLevel::ALL
        .iter()
        .map(|e| SelectOption {
            id: e.as_str(),
            name: e.display_name(),
            description: None,
        })
        .collect()
}

pub fn engineer_level_options() -> Vec<SelectOption> {
    let ids = ["beginner", "intermediate", "advanced", "expert"];
    EngineerLevel::ALL
        .iter()
        .zip(ids)
        .map(|(level, id)| SelectOption {
            id,
            name: level.display_name(),
            description: None,
        })
        .collect()
}

pub fn agency_size_options() -> Vec<SelectOption> {
    let ids = ["small", "medium", "large"];
    AgencySize::ALL
        .iter()
        .zip(ids)
        .map(|(size, id)| SelectOption {
            id,
            name: size.display_name(),
            description: Some(size.description()),
        })
        .collect()
}

pub fn location_options() -> Vec<SelectOption> {
    let ids = ["seoul", "other"];
    Location::ALL
        .iter()
        .zip(ids)
        .map(|(location, id)| SelectOption {
            id,
            name: location.display_name(),
            description: Some(location.description()),
        })
        .collect()
}
