//! Salary valuation core: deterministic arithmetic only, no I/O.
//!
//! `pipeline` turns a collaborator's baseline valuation into the final
//! recommendation, `grade` classifies rubric scores, `engineer_level` maps
//! tenure and education to the SW engineer grade.

pub mod engineer_level;
pub mod grade;
pub mod pipeline;
