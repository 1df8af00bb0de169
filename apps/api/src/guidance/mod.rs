//! Salary guidance: LLM-backed valuation flow, hiring proposals and the
//! stateless calculation endpoints around them.

pub mod advisor;
pub mod handlers;
pub mod prompts;
pub mod service;
