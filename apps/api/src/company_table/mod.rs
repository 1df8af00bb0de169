//! Company salary table: model, editing rules, bulk generation, platform
//! reference data and persistence.

pub mod bulk;
pub mod handlers;
pub mod platforms;
pub mod store;
pub mod table;
